//! Restores transparency in launcher icons that were flattened onto black.
//!
//! Only exact opaque black `(0, 0, 0, 255)` is cleared. Dark logo colors and
//! pixels that already carry some transparency are kept as they are.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::config::RepairConfig;
use crate::error::{AssetError, Result};
use crate::png_io;

const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Source of the files a batch operates on.
pub trait FileEnumerator {
    fn enumerate(&self) -> Result<Vec<PathBuf>>;
}

/// A fixed list, used as-is.
impl FileEnumerator for [PathBuf] {
    fn enumerate(&self) -> Result<Vec<PathBuf>> {
        Ok(self.to_vec())
    }
}

impl FileEnumerator for Vec<PathBuf> {
    fn enumerate(&self) -> Result<Vec<PathBuf>> {
        FileEnumerator::enumerate(self.as_slice())
    }
}

/// Expands glob patterns against the filesystem, in pattern order.
pub struct GlobEnumerator {
    patterns: Vec<String>,
}

impl GlobEnumerator {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }
}

impl From<&RepairConfig> for GlobEnumerator {
    fn from(config: &RepairConfig) -> Self {
        Self::new(config.patterns.clone())
    }
}

impl FileEnumerator for GlobEnumerator {
    fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for pattern in &self.patterns {
            let entries = glob::glob(pattern).map_err(|source| AssetError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in entries {
                match entry {
                    Ok(path) => files.push(path),
                    Err(e) => log::warn!("Skipping unreadable match for {pattern}: {e}"),
                }
            }
        }
        Ok(files)
    }
}

/// Clears every opaque black pixel in place. Returns how many changed.
pub fn clear_opaque_black(img: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        if *pixel == OPAQUE_BLACK {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }
    cleared
}

/// Loads, clears and rewrites one icon.
pub fn repair_file(path: &Path) -> Result<usize> {
    let mut img = png_io::load_rgba(path)?;
    let cleared = clear_opaque_black(&mut img);
    png_io::save_png(&img, path)?;
    Ok(cleared)
}

#[derive(Debug)]
pub enum FileOutcome {
    Fixed { path: PathBuf, pixels_cleared: usize },
    Failed { path: PathBuf, error: AssetError },
}

#[derive(Debug, Default)]
pub struct RepairReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RepairReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn fixed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Fixed { .. }))
            .count()
    }
}

/// Repairs every enumerated file. A file that fails is recorded and the
/// batch moves on; only a failure to enumerate aborts.
pub fn repair_all<E: FileEnumerator + ?Sized>(files: &E) -> Result<RepairReport> {
    let mut report = RepairReport::default();

    for path in files.enumerate()? {
        let outcome = match repair_file(&path) {
            Ok(pixels_cleared) => FileOutcome::Fixed {
                path,
                pixels_cleared,
            },
            Err(error) => {
                log::warn!("Failed to repair {}: {error}", path.display());
                FileOutcome::Failed { path, error }
            }
        };
        report.outcomes.push(outcome);
    }

    Ok(report)
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "Fixing launcher icon transparency...")?;
        writeln!(f, "{rule}")?;
        for outcome in &self.outcomes {
            match outcome {
                FileOutcome::Fixed {
                    path,
                    pixels_cleared,
                } => writeln!(
                    f,
                    "  Fixed: {} ({pixels_cleared} pixels cleared)",
                    path.display()
                )?,
                FileOutcome::Failed { path, error } => {
                    writeln!(f, "  Error processing {}: {error}", path.display())?
                }
            }
        }
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "Fixed {} out of {} icon files",
            self.fixed(),
            self.total()
        )?;
        writeln!(f)?;
        if self.fixed() > 0 {
            writeln!(f, "[OK] Icon transparency fixed!")?;
            write!(f, "Rebuild the app to see the changes.")
        } else {
            write!(f, "No icon files found or fixed.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_icon() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(4, 2, OPAQUE_BLACK);
        img.put_pixel(0, 0, Rgba([1, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 254]));
        img.put_pixel(2, 0, Rgba([90, 40, 10, 128]));
        img.put_pixel(3, 0, Rgba([255, 255, 255, 255]));
        img
    }

    #[test]
    fn test_clears_only_exact_opaque_black() {
        let original = sample_icon();
        let mut img = original.clone();

        assert_eq!(clear_opaque_black(&mut img), 4);

        for (before, after) in original.pixels().zip(img.pixels()) {
            if *before == OPAQUE_BLACK {
                assert_eq!(*after, TRANSPARENT);
            } else {
                assert_eq!(before, after);
            }
        }
        assert!(img.pixels().all(|p| *p != OPAQUE_BLACK));
    }

    #[test]
    fn test_clearing_is_idempotent() {
        let mut img = sample_icon();
        clear_opaque_black(&mut img);
        let once = img.clone();

        assert_eq!(clear_opaque_black(&mut img), 0);
        assert_eq!(img, once);
    }

    #[test]
    fn test_repair_all_continues_past_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("mipmap-hdpi/ic_launcher.png");
        let broken = dir.path().join("drawable/ic_launcher_foreground.png");
        let missing = dir.path().join("mipmap-xhdpi/ic_launcher.png");
        png_io::save_png(&sample_icon(), &good).unwrap();
        fs::create_dir_all(broken.parent().unwrap()).unwrap();
        fs::write(&broken, b"not an image").unwrap();

        let files = vec![broken.clone(), good.clone(), missing];
        let report = repair_all(&files).unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.fixed(), 1);
        assert!(matches!(
            &report.outcomes[1],
            FileOutcome::Fixed { pixels_cleared: 4, .. }
        ));
        assert!(matches!(
            &report.outcomes[2],
            FileOutcome::Failed {
                error: AssetError::FileNotFound { .. },
                ..
            }
        ));

        let repaired = png_io::load_rgba(&good).unwrap();
        assert_eq!(*repaired.get_pixel(0, 1), TRANSPARENT);
        assert_eq!(*repaired.get_pixel(2, 0), Rgba([90, 40, 10, 128]));
        assert_eq!(fs::read(&broken).unwrap(), b"not an image");
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let icon = dir.path().join("ic_launcher.png");
        png_io::save_png(&sample_icon(), &icon).unwrap();
        let files = vec![icon.clone()];

        repair_all(&files).unwrap();
        let after_first = png_io::load_rgba(&icon).unwrap();
        let report = repair_all(&files).unwrap();

        assert!(matches!(
            &report.outcomes[0],
            FileOutcome::Fixed { pixels_cleared: 0, .. }
        ));
        assert_eq!(png_io::load_rgba(&icon).unwrap(), after_first);
    }

    #[test]
    fn test_glob_enumerator_follows_pattern_order() {
        let dir = tempfile::tempdir().unwrap();
        let res = dir.path().to_string_lossy().to_string();
        for rel in [
            "drawable-hdpi/ic_launcher_foreground.png",
            "drawable/ic_launcher_foreground.png",
            "mipmap-mdpi/ic_launcher.png",
            "mipmap-mdpi/other.png",
        ] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"").unwrap();
        }

        let enumerator = GlobEnumerator::new(vec![
            format!("{res}/mipmap-*/ic_launcher.png"),
            format!("{res}/drawable-*/ic_launcher_foreground.png"),
        ]);
        let files = enumerator.enumerate().unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("mipmap-mdpi/ic_launcher.png"),
                dir.path().join("drawable-hdpi/ic_launcher_foreground.png"),
            ]
        );
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let enumerator = GlobEnumerator::new(vec!["res/[".to_string()]);
        assert!(matches!(
            enumerator.enumerate(),
            Err(AssetError::Pattern { .. })
        ));
    }

    #[test]
    fn test_report_summary() {
        let empty = RepairReport::default();
        assert!(empty.to_string().ends_with("No icon files found or fixed."));

        let report = RepairReport {
            outcomes: vec![FileOutcome::Fixed {
                path: PathBuf::from("a.png"),
                pixels_cleared: 2,
            }],
        };
        let text = report.to_string();
        assert!(text.contains("Fixed 1 out of 1 icon files"));
        assert!(text.contains("[OK] Icon transparency fixed!"));

        let report = RepairReport {
            outcomes: vec![
                FileOutcome::Fixed {
                    path: PathBuf::from("a.png"),
                    pixels_cleared: 2,
                },
                FileOutcome::Failed {
                    path: PathBuf::from("b.png"),
                    error: AssetError::FileNotFound {
                        path: PathBuf::from("b.png"),
                    },
                },
            ],
        };
        let text = report.to_string();
        assert!(text.contains("  Error processing b.png: b.png not found!"));
        assert!(text.contains("Fixed 1 out of 2 icon files"));
    }
}
