//! Terminal styling for headings and status lines.
//!
//! The styler is picked once at startup. QR glyphs are never styled.

use std::io::IsTerminal;

/// Formatting for human-facing text
pub trait TerminalStyler {
    fn heading(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
}

/// ANSI SGR styling for interactive terminals
pub struct ColoredStyler;

impl TerminalStyler for ColoredStyler {
    fn heading(&self, text: &str) -> String {
        format!("\x1b[1;33m{}\x1b[0m", text)
    }

    fn success(&self, text: &str) -> String {
        format!("\x1b[1;32m{}\x1b[0m", text)
    }
}

/// Unstyled output for pipes and files
pub struct PlainStyler;

impl TerminalStyler for PlainStyler {
    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Color is used only on a terminal, and never with `NO_COLOR` set or
/// `TERM=dumb`.
fn wants_color(is_tty: bool, no_color_env: bool, term: Option<&str>) -> bool {
    let term_is_dumb = term == Some("dumb");
    is_tty && !no_color_env && !term_is_dumb
}

/// Pick a styler from the terminal and environment.
pub fn detect_styler() -> Box<dyn TerminalStyler> {
    let is_tty = std::io::stdout().is_terminal();
    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    let term = std::env::var("TERM").ok();

    if wants_color(is_tty, no_color_env, term.as_deref()) {
        Box::new(ColoredStyler)
    } else {
        Box::new(PlainStyler)
    }
}
