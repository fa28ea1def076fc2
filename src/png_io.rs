//! Loading images and writing lossless PNGs.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};

use crate::error::{AssetError, Result};

/// Opens any supported image without converting it.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(AssetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    image::open(path).map_err(|source| match source {
        ImageError::Unsupported(_) => AssetError::UnsupportedFormat {
            path: path.to_path_buf(),
            source,
        },
        ImageError::IoError(source) => AssetError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => AssetError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Opens an image as 8-bit RGBA, whatever its stored color type.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = open_image(path)?;
    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.into_rgba8())
}

/// Encodes to PNG in memory.
pub fn encode_png(img: &RgbaImage, path: &Path) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|source| AssetError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(buf.into_inner())
}

/// Writes already-encoded bytes, creating parent directories as needed.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AssetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, bytes).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Encodes fully before touching the destination, so a failed encode
/// leaves any existing file intact. Overwrites otherwise.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(img, path)?;
    write_file(path, &bytes)?;
    log::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_missing_file() {
        let err = load_rgba(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, AssetError::FileNotFound { .. }));
    }

    #[test]
    fn test_garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(
            err,
            AssetError::Decode { .. } | AssetError::UnsupportedFormat { .. }
        ));
    }

    #[test]
    fn test_save_preserves_alpha_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(1, 1, Rgba([10, 20, 30, 40]));

        save_png(&img, &path).unwrap();
        let loaded = load_rgba(&path).unwrap();

        assert_eq!(loaded, img);
    }

    #[test]
    fn test_converts_rgb_to_opaque_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert!(loaded.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }
}
