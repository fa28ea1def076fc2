//! Centers the logo's visible content on a transparent square canvas.

use std::fmt;
use std::path::PathBuf;

use image::imageops;
use image::RgbaImage;

use crate::config::SquareIconConfig;
use crate::error::Result;
use crate::geometry::{center_offset, fit_within, resize_rgba, ContentBoundingBox};
use crate::png_io;

/// Where the content landed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareLayout {
    pub canvas_size: u32,
    pub source_size: (u32, u32),
    pub bounds: ContentBoundingBox,
    /// False when the source had no visible pixels and the full image was used.
    pub bounds_from_alpha: bool,
    pub content_size: (u32, u32),
    pub offset: (u32, u32),
}

impl SquareLayout {
    /// Transparent margin as (left, right, top, bottom).
    pub fn padding(&self) -> (u32, u32, u32, u32) {
        let (w, h) = self.content_size;
        let (x, y) = self.offset;
        let right = self.canvas_size.saturating_sub(x + w);
        let bottom = self.canvas_size.saturating_sub(y + h);
        (x, right, y, bottom)
    }

    /// Extra pixels on the right/bottom left over by floor centering.
    pub fn asymmetry(&self) -> (u32, u32) {
        let (left, right, top, bottom) = self.padding();
        (right.abs_diff(left), bottom.abs_diff(top))
    }
}

#[derive(Debug, Clone)]
pub struct SquareIconReport {
    pub output: PathBuf,
    pub layout: SquareLayout,
}

/// Crops `source` to its visible content, scales it into
/// `config.max_content_size()` and alpha-composites it centered on a
/// transparent `canvas_size` square.
pub fn pad_to_square(source: &RgbaImage, config: &SquareIconConfig) -> (RgbaImage, SquareLayout) {
    let (width, height) = source.dimensions();
    let found = ContentBoundingBox::find(source);
    let bounds_from_alpha = found.is_some();
    let bounds = found.unwrap_or_else(|| ContentBoundingBox::full(width, height));

    let cropped = imageops::crop_imm(
        source,
        bounds.x_min,
        bounds.y_min,
        bounds.width(),
        bounds.height(),
    )
    .to_image();

    let canvas_size = config.canvas_size;
    let (content_w, content_h) =
        fit_within(cropped.width(), cropped.height(), config.max_content_size());
    let scaled = resize_rgba(&cropped, content_w, content_h);

    let offset = (
        center_offset(canvas_size, content_w),
        center_offset(canvas_size, content_h),
    );

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    imageops::overlay(&mut canvas, &scaled, offset.0 as i64, offset.1 as i64);

    let layout = SquareLayout {
        canvas_size,
        source_size: (width, height),
        bounds,
        bounds_from_alpha,
        content_size: (content_w, content_h),
        offset,
    };
    log::debug!("Square icon layout: {layout:?}");

    (canvas, layout)
}

/// Loads the logo, pads it to a square and saves it over `config.output`.
pub fn generate(config: &SquareIconConfig) -> Result<SquareIconReport> {
    let source = png_io::load_rgba(&config.input)?;
    let (canvas, layout) = pad_to_square(&source, config);
    png_io::save_png(&canvas, &config.output)?;

    Ok(SquareIconReport {
        output: config.output.clone(),
        layout,
    })
}

impl fmt::Display for SquareIconReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = &self.layout;
        let b = layout.bounds;
        let (left, right, top, bottom) = layout.padding();
        let (asym_x, asym_y) = layout.asymmetry();

        writeln!(f, "✓ Created square icon: {}", self.output.display())?;
        writeln!(f, "  Size: {0}x{0}px", layout.canvas_size)?;
        writeln!(
            f,
            "  Source: {}x{}px",
            layout.source_size.0, layout.source_size.1
        )?;
        if layout.bounds_from_alpha {
            writeln!(
                f,
                "  Content bounds: ({}, {}) - ({}, {}) = {}x{}px",
                b.x_min,
                b.y_min,
                b.x_max,
                b.y_max,
                b.width(),
                b.height()
            )?;
        } else {
            writeln!(f, "  Content bounds: no visible pixels, using full image")?;
        }
        writeln!(
            f,
            "  Logo: {}x{}px at offset ({}, {})",
            layout.content_size.0, layout.content_size.1, layout.offset.0, layout.offset.1
        )?;
        writeln!(
            f,
            "  Padding: left {left}, right {right}, top {top}, bottom {bottom}"
        )?;
        if asym_x > 0 || asym_y > 0 {
            writeln!(
                f,
                "  Asymmetry: {asym_x}px horizontal, {asym_y}px vertical (integer centering)"
            )?;
        } else {
            writeln!(f, "  Logo centered with transparent padding")?;
        }
        writeln!(f)?;
        writeln!(f, "Next steps:")?;
        writeln!(
            f,
            "1. Update pubspec.yaml to use '{}' for adaptive_icon_foreground",
            self.output.display()
        )?;
        write!(f, "2. Run: flutter pub run flutter_launcher_icons")
    }
}
