//! qrpass - generate a random password and show it as a QR code.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use qrpass_core::constants::{ANIMATION_STEP_DELAY, DEFAULT_PASSWORD_LENGTH, DEFAULT_PNG_SIZE};
use qrpass_core::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrpass")]
#[command(about = "Generate a random password and display it as a QR code", long_about = None)]
struct Cli {
    /// Password length
    #[arg(long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
    length: usize,

    /// Print the QR code at once instead of animating it
    #[arg(long)]
    no_animation: bool,

    /// Also write the QR code as a PNG to this path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// PNG width and height in pixels
    #[arg(long, default_value_t = DEFAULT_PNG_SIZE)]
    size: u32,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            password_length: self.length,
            animate: !self.no_animation,
            output: self.output,
            png_size: self.size,
            step_delay: ANIMATION_STEP_DELAY,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("qrpass=warn,qrpass_core=warn")),
        )
        .init();

    let config = Cli::parse().into_config();
    let styler = ui::detect_styler();

    commands::generate(&config, styler.as_ref())
}
