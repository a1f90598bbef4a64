use std::path::Path;
use crate::core::{Manifest, Profile};
use crate::utils::{ImageFormat, OptimizerResult, ValidationError};

/// Validates every profile referenced by the manifest
pub fn validate_manifest(manifest: &Manifest) -> OptimizerResult<()> {
    for group in manifest.groups() {
        validate_profile(&group.batch.profile())
            .map_err(|e| ValidationError::profile(format!("batch '{}': {}", group.batch, e)))?;
    }
    Ok(())
}

/// Validates optimization profile parameters
pub fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
    if profile.quality > 100 {
        return Err(ValidationError::profile(
            format!("Invalid quality value: {}. Must be between 0 and 100", profile.quality)
        ));
    }

    if profile.max_width == Some(0) {
        return Err(ValidationError::profile("Max width cannot be 0"));
    }

    if let Some(level) = profile.png_compression_level {
        if profile.output_format != ImageFormat::PNG {
            return Err(ValidationError::profile(
                format!("Compression level only applies to png, not {}", profile.output_format)
            ));
        }
        if level > 9 {
            return Err(ValidationError::profile(
                format!("Invalid compression level: {}. Must be between 0 and 9", level)
            ));
        }
    }

    Ok(())
}

/// Validates the directory holding the assets
pub fn validate_public_dir(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path));
    }

    if !path.is_dir() {
        return Err(ValidationError::not_a_directory(path));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Batch;

    #[test]
    fn builtin_profiles_are_valid() {
        assert!(validate_manifest(&Manifest::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let base = Batch::Cards.profile();

        let quality = Profile { quality: 101, ..base };
        assert!(validate_profile(&quality).is_err());

        let width = Profile { max_width: Some(0), ..base };
        assert!(validate_profile(&width).is_err());

        let level = Profile { png_compression_level: Some(10), ..Batch::Png.profile() };
        assert!(validate_profile(&level).is_err());

        let misplaced = Profile { png_compression_level: Some(9), ..base };
        assert!(validate_profile(&misplaced).is_err());
    }

    #[test]
    fn public_dir_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.jpg");
        std::fs::write(&file, b"x").unwrap();

        assert!(validate_public_dir(dir.path()).is_ok());
        assert!(matches!(validate_public_dir(&file), Err(ValidationError::Path(_))));
        assert!(validate_public_dir(&dir.path().join("missing")).is_err());
    }
}
