//! Maps a [`Profile`] to format-specific encoder settings.
//!
//! Every encoder renders into memory; the caller decides where the bytes land.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;
use crate::core::Profile;
use crate::utils::{ImageFormat, OptimizerError};
use jpeg_encoder::{ColorType, Encoder as JpegEncoder, SamplingFactor};

type Result<T> = std::result::Result<T, OptimizerError>;

/// Highest oxipng preset; compression level 9 maps onto it.
const OXIPNG_MAX_PRESET: u8 = 6;

/// Encodes `image` as JPEG with optimized Huffman tables and progressive scans.
///
/// Chroma is always subsampled 4:2:0 and no metadata segments are written.
/// JPEG carries no alpha, so the image is flattened to RGB first.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();
    let (width, height) = match (u16::try_from(rgb.width()), u16::try_from(rgb.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(OptimizerError::encode(format!(
                "JPEG save failed: {}x{} exceeds the 65535px JPEG limit",
                rgb.width(),
                rgb.height()
            )));
        }
    };

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new(&mut buf, quality.clamp(1, 100));
    encoder.set_optimized_huffman_tables(true);
    encoder.set_progressive(true);
    encoder.set_sampling_factor(SamplingFactor::F_2_2);

    encoder.encode(rgb.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| OptimizerError::encode(format!("JPEG save failed: {e}")))?;
    Ok(buf)
}

/// Encodes `image` as PNG, then recompresses with oxipng at `compression_level` (0-9).
///
/// PNG output is always lossless.
pub fn encode_png(image: &DynamicImage, compression_level: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);

    image.write_with_encoder(encoder)
        .map_err(|e| OptimizerError::encode(format!("PNG save failed: {e}")))?;

    let options = oxipng::Options::from_preset(oxipng_preset(compression_level));
    oxipng::optimize_from_memory(&buf, &options)
        .map_err(|e| OptimizerError::encode(format!("PNG compression failed: {e}")))
}

/// Encodes `image` as WebP. Quality 100 switches to lossless mode.
pub fn encode_webp(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    // libwebp only accepts 8-bit RGB(A)
    let image = if image.color().has_alpha() {
        DynamicImage::ImageRgba8(image.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    };

    let encoder = webp::Encoder::from_image(&image)
        .map_err(|e| OptimizerError::encode(format!("WebP save failed: {e}")))?;

    let memory = if quality >= 100 {
        encoder.encode_lossless()
    } else {
        encoder.encode(f32::from(quality))
    };
    Ok(memory.to_vec())
}

/// Dispatches to the encoder for `profile.output_format`.
pub fn encode_image(image: &DynamicImage, profile: &Profile) -> Result<Vec<u8>> {
    match profile.output_format {
        ImageFormat::JPEG => encode_jpeg(image, profile.quality),
        ImageFormat::PNG => encode_png(image, profile.effective_compression_level()),
        ImageFormat::WebP => encode_webp(image, profile.quality),
    }
}

fn oxipng_preset(compression_level: u8) -> u8 {
    let level = u16::from(compression_level.min(9));
    ((level * u16::from(OXIPNG_MAX_PRESET) + 4) / 9) as u8
}
