use super::error::LoadError;
use crate::constants::IMAGE_FILE_EXT;
use std::path::Path;

pub fn validate_extension(path: &Path) -> Result<(), LoadError> {
    let ext = path
        .extension()
        .ok_or(LoadError::MissingExtension)?
        .to_str()
        .ok_or(LoadError::MissingExtension)?;

    if ext.eq_ignore_ascii_case(IMAGE_FILE_EXT) {
        Ok(())
    } else {
        Err(LoadError::InvalidExtension {
            expected: IMAGE_FILE_EXT,
            found: ext.to_string(),
        })
    }
}
