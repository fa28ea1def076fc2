//! Presets for each asset script.
//!
//! Every script runs with `Default::default()`; tests build smaller presets
//! pointing at temporary directories.

use std::path::PathBuf;

/// Source logo shared by the icon and splash scripts.
pub const LOGO_PATH: &str = "images/logo.png";
pub const SQUARE_ICON_PATH: &str = "images/logo_square.png";

/// Standard launcher icon size.
pub const CANVAS_SIZE: u32 = 1024;
/// Share of the canvas the logo may occupy along its longer side.
pub const CONTENT_FRACTION: f32 = 0.5;

/// Longer side of the resized splash logo.
pub const SPLASH_BASE_SIZE: u32 = 1024;
pub const LAUNCH_IMAGESET_DIR: &str = "ios/Runner/Assets.xcassets/LaunchImage.imageset";

const ANDROID_RES_DIR: &str = "android/app/src/main/res";

/// One density copy of the splash image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleVariant {
    pub filename: String,
    pub multiplier: u32,
}

impl ScaleVariant {
    pub fn new(filename: impl Into<String>, multiplier: u32) -> Self {
        Self {
            filename: filename.into(),
            multiplier,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SquareIconConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub canvas_size: u32,
    pub content_fraction: f32,
}

impl SquareIconConfig {
    /// Upper bound for the scaled logo's longer side.
    pub fn max_content_size(&self) -> u32 {
        ((self.canvas_size as f32 * self.content_fraction) as u32).clamp(1, self.canvas_size.max(1))
    }
}

impl Default for SquareIconConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(LOGO_PATH),
            output: PathBuf::from(SQUARE_ICON_PATH),
            canvas_size: CANVAS_SIZE,
            content_fraction: CONTENT_FRACTION,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SplashConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub base_size: u32,
    pub variants: Vec<ScaleVariant>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(LOGO_PATH),
            output_dir: PathBuf::from(LAUNCH_IMAGESET_DIR),
            base_size: SPLASH_BASE_SIZE,
            variants: vec![
                ScaleVariant::new("LaunchImage.png", 1),
                ScaleVariant::new("LaunchImage@2x.png", 2),
                ScaleVariant::new("LaunchImage@3x.png", 3),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepairConfig {
    /// Glob patterns of generated launcher icons.
    pub patterns: Vec<String>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                format!("{ANDROID_RES_DIR}/drawable-*/ic_launcher_foreground.png"),
                format!("{ANDROID_RES_DIR}/drawable/ic_launcher_foreground.png"),
                format!("{ANDROID_RES_DIR}/mipmap-*/ic_launcher.png"),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub files: Vec<PathBuf>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            files: vec![
                PathBuf::from(LOGO_PATH),
                PathBuf::from(SQUARE_ICON_PATH),
                PathBuf::from(format!("{ANDROID_RES_DIR}/drawable/splash_logo.png")),
                PathBuf::from(LAUNCH_IMAGESET_DIR).join("LaunchImage.png"),
            ],
        }
    }
}
