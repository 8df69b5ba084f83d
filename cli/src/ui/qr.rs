//! QR code display.

use std::io::Write;
use std::time::Duration;

use qrpass_core::render::render;
use qrpass_core::QrMatrix;

/// Draw a QR matrix on stdout.
///
/// Each module is two character cells wide. With `animate` set the
/// modules are painted from the centre outwards, pausing `delay` after
/// each dark module; the screen is cleared first.
pub fn show_qr_code(matrix: &QrMatrix, animate: bool, delay: Duration) -> qrpass_core::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    tracing::debug!(width = matrix.width(), animate, "drawing QR code");
    render(matrix, animate, &mut out, delay)?;
    out.flush()?;
    Ok(())
}
