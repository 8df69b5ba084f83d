//! qrpass core - password generation and QR rendering
//!
//! This library draws a random password from the operating system's
//! CSPRNG, encodes it as a QR matrix, and renders the matrix either as
//! static terminal text, as a centre-out spiral animation, or as a PNG.

pub mod constants;
pub mod password;
pub mod png;
pub mod qr;
pub mod render;
pub mod spiral;

mod error;

pub use error::{Error, Result};

use std::path::PathBuf;
use std::time::Duration;

/// Options for a single qrpass run
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of characters in the generated password
    pub password_length: usize,
    /// Draw the QR code with the spiral animation instead of all at once
    pub animate: bool,
    /// Where to write a PNG copy of the QR code, if anywhere
    pub output: Option<PathBuf>,
    /// Side length of the PNG in pixels
    pub png_size: u32,
    /// Pause after each painted module during animation
    pub step_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password_length: constants::DEFAULT_PASSWORD_LENGTH,
            animate: true,
            output: None,
            png_size: constants::DEFAULT_PNG_SIZE,
            step_delay: constants::ANIMATION_STEP_DELAY,
        }
    }
}

// Re-export key types for convenience
pub use password::Password;
pub use qr::{QrCodeEncoder, QrEncoder, QrMatrix};
