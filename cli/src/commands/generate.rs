//! Password generation and display.

use std::io::Write;

use anyhow::Context;
use qrpass_core::{password, png, qr, Config, QrCodeEncoder, QrEncoder};

use crate::ui::{show_qr_code, TerminalStyler};

/// Generate a password, show it as a QR code and optionally save a PNG.
///
/// The QR code is drawn first because the animation clears the screen;
/// the password and status lines follow below it.
pub fn generate(config: &Config, styler: &dyn TerminalStyler) -> anyhow::Result<()> {
    // Fail before drawing anything if a codec was compiled out
    qr::probe()?;
    if config.output.is_some() {
        png::probe()?;
    }

    let password = password::generate(config.password_length)?;
    let matrix = QrCodeEncoder::new()
        .encode(password.as_str())
        .context("could not encode password as a QR code")?;

    show_qr_code(&matrix, config.animate, config.step_delay)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "\n{} {}", styler.heading("Password:"), password)
        .context("could not write password")?;
    out.flush()?;

    if let Some(path) = &config.output {
        png::export_png(password.as_str(), path, config.png_size).context("PNG export failed")?;
        writeln!(out, "{} QR code saved to {}", styler.success("✓"), path.display())
            .context("could not write status")?;
        out.flush()?;
    }

    Ok(())
}
