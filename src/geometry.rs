//! Bounding boxes, aspect-preserving fits and alpha-aware resampling.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Smallest rectangle holding every pixel with alpha > 0. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBoundingBox {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl ContentBoundingBox {
    /// Scans the alpha channel. `None` when every pixel is transparent.
    pub fn find(img: &RgbaImage) -> Option<Self> {
        let mut bounds: Option<Self> = None;

        for (x, y, pixel) in img.enumerate_pixels() {
            if pixel[3] == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => Self {
                    x_min: x,
                    y_min: y,
                    x_max: x,
                    y_max: y,
                },
                Some(b) => Self {
                    x_min: b.x_min.min(x),
                    y_min: b.y_min.min(y),
                    x_max: b.x_max.max(x),
                    y_max: b.y_max.max(y),
                },
            });
        }

        bounds
    }

    /// Covers the whole image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x_min: 0,
            y_min: 0,
            x_max: width.saturating_sub(1),
            y_max: height.saturating_sub(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.x_max - self.x_min + 1
    }

    pub fn height(&self) -> u32 {
        self.y_max - self.y_min + 1
    }
}

/// Scales `(width, height)` so the longer side becomes `max_size` and the
/// other side follows the aspect ratio, rounded to the nearest pixel.
///
/// If rounding pushes the shorter side past `max_size`, the fit is redone
/// with that side as the limit so both stay in bounds.
pub fn fit_within(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width.min(max_size), height.min(max_size));
    }

    let scale_other = |other: u32, limiting: u32| -> u32 {
        let scaled = (other as f64 * max_size as f64 / limiting as f64).round() as u32;
        scaled.max(1)
    };

    if width >= height {
        let new_height = scale_other(height, width);
        if new_height > max_size {
            (scale_other(width, height), max_size)
        } else {
            (max_size, new_height)
        }
    } else {
        let new_width = scale_other(width, height);
        if new_width > max_size {
            (max_size, scale_other(height, width))
        } else {
            (new_width, max_size)
        }
    }
}

/// Floor-centered offset of `content` inside `canvas`. An odd remainder
/// leaves one extra pixel on the right/bottom.
pub fn center_offset(canvas: u32, content: u32) -> u32 {
    canvas.saturating_sub(content) / 2
}

/// Lanczos3 resize on premultiplied alpha.
///
/// Filtering straight RGBA lets the color of fully transparent neighbours
/// (usually black) bleed into anti-aliased edges. Pixels whose alpha rounds
/// to zero come out as `(0, 0, 0, 0)`.
pub fn resize_rgba(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut premultiplied = Rgba32FImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(premultiplied.pixels_mut()) {
        let alpha = f32::from(src[3]) / 255.0;
        let channel = |v: u8| f32::from(v) / 255.0 * alpha;
        *dst = Rgba([channel(src[0]), channel(src[1]), channel(src[2]), alpha]);
    }

    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    let mut out = RgbaImage::new(width, height);
    for (src, dst) in resized.pixels().zip(out.pixels_mut()) {
        let alpha = src[3].clamp(0.0, 1.0);
        let alpha_u8 = (alpha * 255.0).round() as u8;
        if alpha_u8 == 0 {
            continue;
        }
        let channel = |v: f32| ((v / alpha).clamp(0.0, 1.0) * 255.0).round() as u8;
        *dst = Rgba([channel(src[0]), channel(src[1]), channel(src[2]), alpha_u8]);
    }
    out
}
