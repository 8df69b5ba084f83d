//! PNG export of QR codes
//!
//! The data is encoded again and rasterized at [`PNG_BOX_SIZE`] pixels
//! per module with a [`PNG_BORDER`] module quiet zone, then scaled with
//! nearest-neighbour filtering to fit the requested square so module
//! edges stay sharp. Requires the `png` feature.

use std::path::Path;

use crate::{Error, Result};

#[cfg(feature = "png")]
use crate::constants::{MAX_PNG_SIZE, PNG_BORDER, PNG_BOX_SIZE};
#[cfg(feature = "png")]
use crate::qr::{QrEncoder, QrMatrix};

#[cfg(not(feature = "png"))]
fn missing_image_codec() -> Error {
    Error::MissingDependency {
        what: "PNG export",
        hint: "rebuild qrpass-core with `--features png`",
    }
}

/// Check that PNG export was compiled in.
pub fn probe() -> Result<()> {
    #[cfg(feature = "png")]
    {
        Ok(())
    }

    #[cfg(not(feature = "png"))]
    {
        Err(missing_image_codec())
    }
}

/// Rasterize a matrix: dark modules black, light modules and the quiet
/// zone white.
#[cfg(feature = "png")]
fn rasterize(matrix: &QrMatrix, box_size: u32, border: u32) -> image::GrayImage {
    use image::{GrayImage, Luma};

    let modules = matrix.width() as u32;
    let side = (modules + 2 * border) * box_size;
    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));

    for row in 0..modules {
        for col in 0..modules {
            if !matrix.is_dark(row as usize, col as usize) {
                continue;
            }
            let x0 = (col + border) * box_size;
            let y0 = (row + border) * box_size;
            for dy in 0..box_size {
                for dx in 0..box_size {
                    img.put_pixel(x0 + dx, y0 + dy, Luma([0u8]));
                }
            }
        }
    }

    img
}

/// Encode `data` with `encoder` and write it as a `size_px`×`size_px` PNG
/// at `path`.
///
/// PNG encoding and filesystem failures both come back as [`Error::Io`]
/// carrying `path`. Data the QR codec rejects is [`Error::Encoding`], and
/// a size outside `1..=MAX_PNG_SIZE` is [`Error::InvalidArgument`]. The
/// write is not atomic.
#[cfg(feature = "png")]
pub fn export_png_with<E: QrEncoder + ?Sized>(
    encoder: &E,
    data: &str,
    path: &Path,
    size_px: u32,
) -> Result<()> {
    use image::imageops::FilterType;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    if size_px == 0 {
        return Err(Error::InvalidArgument(
            "PNG size must be at least 1 pixel".to_string(),
        ));
    }
    if size_px > MAX_PNG_SIZE {
        return Err(Error::InvalidArgument(format!(
            "PNG size must be at most {} pixels, got {}",
            MAX_PNG_SIZE, size_px
        )));
    }

    let matrix = encoder.encode(data)?;
    let raster = rasterize(&matrix, PNG_BOX_SIZE, PNG_BORDER);
    tracing::debug!(
        modules = matrix.width(),
        raster = raster.width(),
        target = size_px,
        "rasterized QR code"
    );

    let scaled = DynamicImage::ImageLuma8(raster).resize(size_px, size_px, FilterType::Nearest);

    let io_error = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    scaled
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| io_error(std::io::Error::other(e)))?;
    std::fs::write(path, &bytes).map_err(io_error)?;

    tracing::info!(path = %path.display(), size = size_px, "wrote QR code PNG");
    Ok(())
}

/// Write `data` as a QR code PNG using the default codec.
pub fn export_png(data: &str, path: &Path, size_px: u32) -> Result<()> {
    #[cfg(feature = "png")]
    {
        export_png_with(&crate::qr::QrCodeEncoder::new(), data, path, size_px)
    }

    #[cfg(not(feature = "png"))]
    {
        let _ = (data, path, size_px);
        Err(missing_image_codec())
    }
}


#[cfg(all(test, not(feature = "png")))]
mod missing_codec_tests {
    use super::*;

    #[test]
    fn test_probe_reports_missing_png_support() {
        match probe() {
            Err(Error::MissingDependency { what, hint }) => {
                assert_eq!(what, "PNG export");
                assert!(hint.contains("--features png"));
            }
            other => panic!("expected MissingDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_export_reports_missing_png_support() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.png");

        let err = export_png("hunter2", &path, 100).unwrap_err();
        assert!(matches!(err, Error::MissingDependency { what: "PNG export", .. }));
        assert!(err.to_string().contains("--features png"));
        assert!(!path.exists());
    }
}
