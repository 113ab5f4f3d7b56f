//! Plain file reading

use std::fs;
use std::path::Path;
use crate::error::{Error, Result};

/// Read a whole file as UTF-8 text
///
/// Files that are not valid UTF-8 fail with an IO error of kind `InvalidData`.
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    Ok(fs::read_to_string(path)?)
}
