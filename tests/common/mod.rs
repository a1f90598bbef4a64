#![allow(dead_code)]

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbImage};

/// Deterministic high-entropy image; compresses poorly, like a photo.
pub fn noisy_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let h = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77);
        let h = h ^ (h >> 15);
        image::Rgb([(h & 0xFF) as u8, ((h >> 8) & 0xFF) as u8, ((h >> 16) & 0xFF) as u8])
    })
}

/// Smooth gradient; compresses well and survives re-encoding cleanly.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
}

pub fn write_jpeg(path: &Path, image: &RgbImage, quality: u8) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let writer = BufWriter::new(File::create(path).unwrap());
    JpegEncoder::new_with_quality(writer, quality)
        .write_image(image.as_raw(), image.width(), image.height(), image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// PNG written with the cheapest settings, leaving room for recompression.
pub fn write_loose_png(path: &Path, image: &RgbImage) {
    let writer = BufWriter::new(File::create(path).unwrap());
    PngEncoder::new_with_quality(writer, CompressionType::Fast, FilterType::NoFilter)
        .write_image(image.as_raw(), image.width(), image.height(), image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// JPEG as a web pipeline would ship it: optimized Huffman tables, no metadata.
pub fn write_web_jpeg(path: &Path, image: &RgbImage, quality: u8) {
    let mut encoder = jpeg_encoder::Encoder::new_file(path, quality).unwrap();
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(image.as_raw(), image.width() as u16, image.height() as u16, jpeg_encoder::ColorType::Rgb)
        .unwrap();
}
