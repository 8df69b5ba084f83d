//! QR matrix encoding
//!
//! The codec sits behind the [`QrEncoder`] trait so renderers only ever
//! see a [`QrMatrix`]. The bundled implementation wraps the `qrcode`
//! crate and is compiled in by the `qr` feature.

use crate::{Error, Result};

/// Square grid of QR modules, row-major, `true` meaning dark.
///
/// The quiet zone is not part of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Build a matrix from row-major modules.
    ///
    /// Fails when `modules` does not hold exactly `width * width` cells.
    pub fn new(width: usize, modules: Vec<bool>) -> Result<Self> {
        if modules.len() != width * width {
            return Err(Error::InvalidArgument(format!(
                "expected {} modules for width {}, got {}",
                width * width,
                width,
                modules.len()
            )));
        }
        Ok(Self { width, modules })
    }

    /// Modules per side
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at `(row, col)` is dark. Out of range is light.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        row < self.width && col < self.width && self.modules[row * self.width + col]
    }

    /// Iterate over rows of modules
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on a zero chunk size
        self.modules.chunks(self.width.max(1))
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| **m).count()
    }
}

/// A QR codec capable of turning text into a module matrix
pub trait QrEncoder {
    /// Encode `data` using the smallest QR version that fits.
    fn encode(&self, data: &str) -> Result<QrMatrix>;
}

/// Encoder backed by the `qrcode` crate, error correction level M
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeEncoder;

impl QrCodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "qr")]
impl QrEncoder for QrCodeEncoder {
    fn encode(&self, data: &str) -> Result<QrMatrix> {
        use qrcode::{Color, EcLevel, QrCode};

        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
            .map_err(|e| Error::Encoding(e.to_string()))?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        tracing::debug!(width, version = ?code.version(), "encoded QR matrix");
        QrMatrix::new(width, modules)
    }
}

#[cfg(not(feature = "qr"))]
impl QrEncoder for QrCodeEncoder {
    fn encode(&self, _data: &str) -> Result<QrMatrix> {
        Err(missing_codec())
    }
}

#[cfg(not(feature = "qr"))]
fn missing_codec() -> Error {
    Error::MissingDependency {
        what: "QR codec",
        hint: "rebuild qrpass-core with `--features qr`",
    }
}

/// Check that a QR codec was compiled in.
///
/// Call this at startup so a missing codec is reported before any
/// password is generated.
pub fn probe() -> Result<()> {
    #[cfg(feature = "qr")]
    {
        Ok(())
    }

    #[cfg(not(feature = "qr"))]
    {
        Err(missing_codec())
    }
}

/// Encode `data` with the default codec.
pub fn encode(data: &str) -> Result<QrMatrix> {
    QrCodeEncoder::new().encode(data)
}


#[cfg(all(test, not(feature = "qr")))]
mod missing_codec_tests {
    use super::*;

    #[test]
    fn test_probe_reports_missing_codec() {
        match probe() {
            Err(Error::MissingDependency { what, hint }) => {
                assert_eq!(what, "QR codec");
                assert!(hint.contains("--features qr"));
            }
            other => panic!("expected MissingDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_reports_missing_codec() {
        let err = encode("hunter2").unwrap_err();
        assert!(matches!(err, Error::MissingDependency { what: "QR codec", .. }));
        assert_eq!(
            err.to_string(),
            "QR codec is not available: rebuild qrpass-core with `--features qr`"
        );
    }
}
