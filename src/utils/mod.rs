pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult, PathError, ValidationError};
pub use validation::{validate_manifest, validate_profile, validate_public_dir};
pub use formats::{ImageFormat, is_image_path};
pub use fs::{
    BackupOutcome,
    ensure_backup,
    file_exists,
    get_file_size,
    replace_atomically,
    temp_path,
};

/// Returns the final path component for log lines, or the whole path.
pub fn extract_filename(path: &std::path::Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}
