//! UI utilities for terminal output.

mod qr;
mod style;

pub use qr::show_qr_code;
pub use style::{detect_styler, TerminalStyler};
