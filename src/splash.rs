//! Splash logo for the iOS LaunchImage asset catalog.
//!
//! The logo is resized once so its longer side matches `base_size`, and the
//! same PNG bytes are written for every density variant; iOS scales down.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ScaleVariant, SplashConfig};
use crate::error::{AssetError, Result};
use crate::geometry::{fit_within, resize_rgba};
use crate::png_io;

pub const MANIFEST_FILE: &str = "Contents.json";

/// Xcode asset catalog `Contents.json` for an imageset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSetManifest {
    pub images: Vec<ImageSetEntry>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSetEntry {
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl ImageSetManifest {
    pub fn for_variants(variants: &[ScaleVariant]) -> Self {
        Self {
            images: variants
                .iter()
                .map(|v| ImageSetEntry {
                    idiom: "universal".to_string(),
                    filename: v.filename.clone(),
                    scale: format!("{}x", v.multiplier),
                })
                .collect(),
            info: ManifestInfo {
                version: 1,
                author: "xcode".to_string(),
            },
        }
    }

    fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| AssetError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        png_io::write_file(path, json.as_bytes())
    }
}

#[derive(Debug, Clone)]
pub struct SplashReport {
    pub output_dir: PathBuf,
    pub original_size: (u32, u32),
    pub resized_size: (u32, u32),
    pub written: Vec<ScaleVariant>,
}

/// Resizes the logo and writes every variant plus the imageset manifest.
pub fn generate(config: &SplashConfig) -> Result<SplashReport> {
    let logo = png_io::load_rgba(&config.input)?;
    let original_size = logo.dimensions();

    let (new_width, new_height) = fit_within(logo.width(), logo.height(), config.base_size);
    let resized = resize_rgba(&logo, new_width, new_height);
    log::debug!(
        "Resized splash logo {}x{} -> {new_width}x{new_height}",
        original_size.0,
        original_size.1
    );

    // Encoded once; every density shares the same bytes.
    let primary = config
        .variants
        .first()
        .map(|v| config.output_dir.join(&v.filename))
        .unwrap_or_else(|| config.output_dir.clone());
    let bytes = png_io::encode_png(&resized, &primary)?;

    let mut written = Vec::with_capacity(config.variants.len());
    for variant in &config.variants {
        let path = config.output_dir.join(&variant.filename);
        png_io::write_file(&path, &bytes)?;
        log::debug!("Wrote {}x variant to {}", variant.multiplier, path.display());
        written.push(variant.clone());
    }

    ImageSetManifest::for_variants(&config.variants)
        .write(&config.output_dir.join(MANIFEST_FILE))?;

    Ok(SplashReport {
        output_dir: config.output_dir.clone(),
        original_size,
        resized_size: (new_width, new_height),
        written,
    })
}

impl fmt::Display for SplashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.resized_size;
        writeln!(f, "Creating iOS splash screen images...")?;
        writeln!(
            f,
            "Original logo: {}x{}px",
            self.original_size.0, self.original_size.1
        )?;
        writeln!(f, "Resized logo: {w}x{h}px")?;
        for variant in &self.written {
            writeln!(f, "  Created: {} ({w}x{h}px)", variant.filename)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "[OK] Splash screen images created in {}",
            self.output_dir.display()
        )?;
        write!(f, "Images have transparent backgrounds preserved.")
    }
}
