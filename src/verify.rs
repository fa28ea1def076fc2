//! Read-only transparency check over a list of expected logo files.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage};

use crate::error::{AssetError, Result};
use crate::png_io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaStats {
    /// Pixels with alpha below full opacity.
    pub transparent: u64,
    pub total: u64,
}

impl AlphaStats {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.transparent as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Alpha channel with at least one non-opaque pixel.
    Transparent,
    /// Alpha channel, but every pixel is fully opaque.
    Opaque,
    NoAlphaChannel,
}

#[derive(Debug, Clone)]
pub struct TransparencyCheck {
    pub path: PathBuf,
    pub color: ColorType,
    pub size: (u32, u32),
    pub alpha: Option<AlphaStats>,
}

impl TransparencyCheck {
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    pub fn verdict(&self) -> Verdict {
        match self.alpha {
            None => Verdict::NoAlphaChannel,
            Some(stats) if stats.transparent > 0 => Verdict::Transparent,
            Some(_) => Verdict::Opaque,
        }
    }
}

/// Inspects an already decoded image.
pub fn inspect(path: &Path, img: &DynamicImage) -> TransparencyCheck {
    let color = img.color();
    // Widening to 16 bits is exact, so "below max" means the same at any depth.
    let alpha = color.has_alpha().then(|| {
        let rgba = img.to_rgba16();
        let transparent = rgba.pixels().filter(|p| p[3] < u16::MAX).count() as u64;
        AlphaStats {
            transparent,
            total: u64::from(img.width()) * u64::from(img.height()),
        }
    });

    TransparencyCheck {
        path: path.to_path_buf(),
        color,
        size: (img.width(), img.height()),
        alpha,
    }
}

pub fn check_file(path: &Path) -> Result<TransparencyCheck> {
    let img = png_io::open_image(path)?;
    Ok(inspect(path, &img))
}

#[derive(Debug)]
pub enum FileCheck {
    Checked(TransparencyCheck),
    Missing(PathBuf),
    Failed { path: PathBuf, error: AssetError },
}

impl FileCheck {
    /// Missing files are only a warning and count as ok.
    pub fn is_ok(&self) -> bool {
        match self {
            FileCheck::Checked(check) => check.verdict() == Verdict::Transparent,
            FileCheck::Missing(_) => true,
            FileCheck::Failed { .. } => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub checks: Vec<FileCheck>,
}

impl VerifyReport {
    pub fn all_ok(&self) -> bool {
        self.checks.iter().all(FileCheck::is_ok)
    }
}

pub fn verify_all(files: &[PathBuf]) -> VerifyReport {
    let checks = files
        .iter()
        .map(|path| match check_file(path) {
            Ok(check) => FileCheck::Checked(check),
            Err(AssetError::FileNotFound { path }) => FileCheck::Missing(path),
            Err(error) => {
                log::warn!("Could not inspect {}: {error}", path.display());
                FileCheck::Failed {
                    path: path.clone(),
                    error,
                }
            }
        })
        .collect();

    VerifyReport { checks }
}

impl fmt::Display for TransparencyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checking: {}", self.path.display())?;
        writeln!(f, "  Mode: {:?}", self.color)?;
        writeln!(f, "  Size: {}x{}px", self.size.0, self.size.1)?;
        writeln!(f, "  Has alpha channel: {}", self.has_alpha())?;
        if let Some(stats) = self.alpha {
            writeln!(
                f,
                "  Transparent pixels: {}/{} ({:.1}%)",
                stats.transparent,
                stats.total,
                stats.percent()
            )?;
        }
        match self.verdict() {
            Verdict::Transparent => write!(f, "  [OK] Image has transparent areas"),
            Verdict::Opaque => write!(
                f,
                "  [WARNING] Image has alpha channel but no transparent pixels"
            ),
            Verdict::NoAlphaChannel => write!(
                f,
                "  [ERROR] Image does not have alpha channel (no transparency)"
            ),
        }
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "Verifying logo transparency...")?;
        writeln!(f, "{rule}")?;
        for check in &self.checks {
            writeln!(f)?;
            match check {
                FileCheck::Checked(check) => writeln!(f, "{check}")?,
                FileCheck::Missing(path) => {
                    writeln!(f, "[WARNING] File not found: {}", path.display())?
                }
                FileCheck::Failed { path, error } => {
                    writeln!(f, "Checking: {}", path.display())?;
                    writeln!(f, "  ✗ Error: {error}")?;
                }
            }
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        if self.all_ok() {
            writeln!(f, "[OK] All logo files have proper transparency!")?;
        } else {
            writeln!(f, "[WARNING] Some logo files may not have transparency")?;
        }
        writeln!(f)?;
        write!(
            f,
            "Note: The splash screen will display the logo with its transparent background"
        )
    }
}
