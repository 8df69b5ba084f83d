//! Centralized constants
//!
//! Defaults for the CLI flags and the fixed parameters of the password
//! alphabet, the terminal renderer and the PNG rasterizer.

use std::time::Duration;

/// Password length used when `--length` is not given
pub const DEFAULT_PASSWORD_LENGTH: usize = 32;

/// Punctuation symbols mixed into the password alphabet
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Full password alphabet: ASCII letters, digits and [`PASSWORD_SYMBOLS`]
pub const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

/// PNG side length used when `--size` is not given
pub const DEFAULT_PNG_SIZE: u32 = 768;

/// Largest accepted PNG side length in pixels
pub const MAX_PNG_SIZE: u32 = 16384;

/// Pixels per module when re-encoding for PNG export
pub const PNG_BOX_SIZE: u32 = 10;

/// Quiet zone width, in modules, around the PNG export
pub const PNG_BORDER: u32 = 4;

/// Pause after each painted module of the spiral animation
pub const ANIMATION_STEP_DELAY: Duration = Duration::from_millis(2);

/// Glyph for a dark module (two cells wide to keep modules square)
pub const FILLED_GLYPH: &str = "██";

/// Glyph for a light module
pub const EMPTY_GLYPH: &str = "  ";
