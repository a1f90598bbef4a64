//! Width-capped downscaling.

use image::DynamicImage;
use image::imageops::FilterType;
use crate::core::Dimensions;

/// Target size for an image of `width`x`height` under a `max_width` cap.
///
/// Returns `None` when no resize is needed: no cap, or the image already fits.
/// Height follows the aspect ratio and never drops below one pixel.
pub fn target_dimensions(width: u32, height: u32, max_width: Option<u32>) -> Option<Dimensions> {
    let max_width = max_width?;
    if width <= max_width || width == 0 {
        return None;
    }

    let scaled = (height as f64 * max_width as f64 / width as f64).round() as u32;
    Some(Dimensions { width: max_width, height: scaled.max(1) })
}

/// Downscales `image` to fit `max_width`, never enlarging it.
pub fn apply_resize(image: DynamicImage, max_width: Option<u32>) -> DynamicImage {
    match target_dimensions(image.width(), image.height(), max_width) {
        Some(target) => image.resize_exact(target.width, target.height, FilterType::Lanczos3),
        None => image,
    }
}
