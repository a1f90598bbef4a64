use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Image formats the optimizer can write and the backup mirror recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    JPEG,
    PNG,
    WebP,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 3] = [Self::JPEG, Self::PNG, Self::WebP];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Format matching the path's extension, case-insensitively.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::ALL.into_iter().find(|f| f.matches_extension(ext))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::JPEG => "jpeg",
            Self::PNG => "png",
            Self::WebP => "webp",
        };
        f.write_str(name)
    }
}

/// Whether the backup mirror should copy this file.
pub fn is_image_path(path: impl AsRef<Path>) -> bool {
    ImageFormat::from_path(path).is_some()
}
