//! Terminal rendering of QR matrices
//!
//! Each module is drawn two character cells wide so it comes out roughly
//! square. The static form is plain text; the animated form paints dark
//! modules in [`spiral_order`] using ANSI cursor positioning.

use std::io::Write;
use std::time::Duration;

use crate::constants::{EMPTY_GLYPH, FILLED_GLYPH};
use crate::qr::QrMatrix;
use crate::spiral::spiral_order;
use crate::Result;

/// Erase the display and home the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render the whole matrix as text: one line per row, `2 * width`
/// characters per line, each line terminated by `\n`.
pub fn render_static(matrix: &QrMatrix) -> String {
    let width = matrix.width();
    let mut out = String::with_capacity(width * (width * FILLED_GLYPH.len() + 1));

    for row in matrix.rows() {
        for &dark in row {
            out.push_str(if dark { FILLED_GLYPH } else { EMPTY_GLYPH });
        }
        out.push('\n');
    }

    out
}

/// ANSI cursor position for module `(row, col)`. Terminal coordinates are
/// 1-based and each module spans two columns.
fn cursor_to(row: usize, col: usize) -> String {
    format!("\x1b[{};{}H", row + 1, col * 2 + 1)
}

/// Paint the matrix module by module in spiral order.
///
/// Clears the screen first, then for every dark module in
/// [`spiral_order`] moves the cursor there, draws the filled glyph,
/// flushes and sleeps `delay`. Light modules are skipped without a
/// pause. Leaves the cursor on the line below the matrix.
///
/// Blocks the calling thread for the whole animation.
pub fn animate<W: Write>(matrix: &QrMatrix, out: &mut W, delay: Duration) -> Result<()> {
    let width = matrix.width();
    out.write_all(CLEAR_SCREEN.as_bytes())?;

    for (row, col) in spiral_order(width) {
        if !matrix.is_dark(row, col) {
            continue;
        }
        write!(out, "{}{}", cursor_to(row, col), FILLED_GLYPH)?;
        out.flush()?;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    write!(out, "{}", cursor_to(width, 0))?;
    out.flush()?;
    Ok(())
}

/// Render `matrix` to `out`, animated or all at once.
pub fn render<W: Write>(
    matrix: &QrMatrix,
    animated: bool,
    out: &mut W,
    delay: Duration,
) -> Result<()> {
    if animated {
        animate(matrix, out, delay)
    } else {
        out.write_all(render_static(matrix).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
