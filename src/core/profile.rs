//! Optimization profiles and the batch → profile table.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::utils::ImageFormat;

/// PNG compression level used when a png profile does not name one.
pub const DEFAULT_PNG_COMPRESSION: u8 = 9;

/// Resize, quality and output format applied to one batch of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Images wider than this are scaled down to it; narrower ones are left alone
    pub max_width: Option<u32>,
    /// Encoder quality, 0-100
    pub quality: u8,
    /// Format written back over the original file
    pub output_format: ImageFormat,
    /// zlib-style level 0-9, png only
    pub png_compression_level: Option<u8>,
}

impl Profile {
    /// Compression level the png encoder should use.
    pub fn effective_compression_level(&self) -> u8 {
        self.png_compression_level.unwrap_or(DEFAULT_PNG_COMPRESSION)
    }
}

/// Named group of manifest entries sharing one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Batch {
    /// Slideshow backgrounds on the landing page
    Hero,
    /// Large header images on inner pages
    PageHero,
    /// Card thumbnails
    Cards,
    /// Logos and other png assets
    Png,
}

impl Batch {
    /// Processing order of the batches.
    pub const ORDER: [Batch; 4] = [Self::Hero, Self::PageHero, Self::Cards, Self::Png];

    pub fn profile(self) -> Profile {
        match self {
            Self::Hero => Profile {
                max_width: Some(1920),
                quality: 95,
                output_format: ImageFormat::JPEG,
                png_compression_level: None,
            },
            Self::PageHero => Profile {
                max_width: Some(1920),
                quality: 90,
                output_format: ImageFormat::JPEG,
                png_compression_level: None,
            },
            Self::Cards => Profile {
                max_width: Some(800),
                quality: 100,
                output_format: ImageFormat::JPEG,
                png_compression_level: None,
            },
            Self::Png => Profile {
                max_width: None,
                quality: 100,
                output_format: ImageFormat::PNG,
                png_compression_level: Some(DEFAULT_PNG_COMPRESSION),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::PageHero => "page-hero",
            Self::Cards => "cards",
            Self::Png => "png",
        }
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
