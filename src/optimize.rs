//! Page image decoding, downscaling and placeholders.
//!
//! | Step | `image` crate call |
//! |------|--------------------|
//! | Decode | `image::load_from_memory` |
//! | Downscale | `DynamicImage::resize_exact` with `Triangle` filter |
//! | Placeholder | `RgbaImage::from_pixel` |

use crate::error::Result;
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};

/// Fill color used for pages whose image failed to load.
pub const PLACEHOLDER_COLOR: [u8; 4] = [224, 224, 224, 255];

/// Calculate downscaled dimensions that fit within `max_width` x `max_height`.
///
/// Width is checked first, then height after width scaling. Aspect ratio is
/// preserved and images are never upscaled. A non-zero input never shrinks
/// to a zero dimension, unless a limit is zero: then the result is `(0, 0)`.
///
/// ## Example
///
/// ```rust
/// use flipbook_core_view::optimize::fit_within;
///
/// assert_eq!(fit_within(2400, 3200, 1200, 1200), (900, 1200));
/// assert_eq!(fit_within(800, 600, 1200, 1200), (800, 600));
/// ```
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if max_width == 0 || max_height == 0 {
        return (0, 0);
    }
    let mut w = width as f64;
    let mut h = height as f64;

    if w > max_width as f64 {
        h *= max_width as f64 / w;
        w = max_width as f64;
    }
    if h > max_height as f64 {
        w *= max_height as f64 / h;
        h = max_height as f64;
    }

    let round = |v: f64, original: u32| -> u32 {
        if original == 0 {
            0
        } else {
            (v.round() as u32).max(1)
        }
    };
    (round(w, width), round(h, height))
}

/// Downscale an image to fit within the given bounds.
///
/// Returns an unchanged copy when the image already fits.
pub fn optimize(image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let (target_w, target_h) = fit_within(width, height, max_width, max_height);

    if (target_w, target_h) == (width, height) || target_w == 0 || target_h == 0 {
        return image.clone();
    }
    image.resize_exact(target_w, target_h, FilterType::Triangle)
}

/// Decode raw bytes (JPEG, PNG or WebP) into an image.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Flat placeholder image substituted for pages that fail to load.
pub fn placeholder(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width.max(1),
        height.max(1),
        Rgba(PLACEHOLDER_COLOR),
    ))
}

/// Maximum dimensions for preloaded page images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageLimits {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 1600,
        }
    }
}

impl ImageLimits {
    /// Apply [`optimize`] with these limits.
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        optimize(image, self.max_width, self.max_height)
    }

    /// Placeholder sized to the limits.
    pub fn placeholder(&self) -> DynamicImage {
        placeholder(self.max_width, self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat};
    use std::io::Cursor;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        }))
    }

    #[test]
    fn test_fit_within_width_first() {
        // 2000x1000 -> width 1000 -> 1000x500 fits height 800
        assert_eq!(fit_within(2000, 1000, 1000, 800), (1000, 500));
    }

    #[test]
    fn test_fit_within_height_after_width() {
        // 2000x3000 -> 1000x1500 -> height 800 -> 533x800
        assert_eq!(fit_within(2000, 3000, 1000, 800), (533, 800));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(100, 50, 1000, 1000), (100, 50));
    }

    #[test]
    fn test_fit_within_extreme_aspect_keeps_one_pixel() {
        assert_eq!(fit_within(10_000, 1, 100, 100), (100, 1));
        assert_eq!(fit_within(0, 0, 100, 100), (0, 0));
    }

    #[test]
    fn test_zero_limit_yields_empty_size() {
        assert_eq!(fit_within(400, 300, 0, 100), (0, 0));
        assert_eq!(fit_within(400, 300, 100, 0), (0, 0));

        // optimize leaves the image alone rather than producing a 0x0 image
        let img = gradient(40, 30);
        assert_eq!(optimize(&img, 0, 0).dimensions(), (40, 30));
    }

    #[test]
    fn test_optimize_downscales() {
        let img = gradient(400, 300);
        let out = optimize(&img, 200, 200);
        assert_eq!(out.dimensions(), (200, 150));
    }

    #[test]
    fn test_optimize_is_deterministic() {
        let img = gradient(320, 240);
        let a = optimize(&img, 100, 100);
        let b = optimize(&img, 100, 100);
        assert_eq!(a.to_rgba8().as_raw(), b.to_rgba8().as_raw());
    }

    #[test]
    fn test_optimize_small_image_unchanged() {
        let img = gradient(50, 40);
        let out = optimize(&img, 200, 200);
        assert_eq!(out.to_rgba8().as_raw(), img.to_rgba8().as_raw());
    }

    #[test]
    fn test_decode_png() {
        let mut bytes = Cursor::new(Vec::new());
        gradient(8, 4).write_to(&mut bytes, ImageFormat::Png).unwrap();

        let decoded = decode(bytes.get_ref()).unwrap();
        assert_eq!(decoded.dimensions(), (8, 4));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode(b"definitely not an image").is_err());
    }

    #[test]
    fn test_placeholder() {
        let img = ImageLimits::default().placeholder();
        assert_eq!(img.dimensions(), (1200, 1600));
        assert_eq!(img.get_pixel(0, 0), Rgba(PLACEHOLDER_COLOR));
        assert_eq!(placeholder(0, 0).dimensions(), (1, 1));
    }
}
