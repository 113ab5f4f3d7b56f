//! Numbered output file naming

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

pub const TEXT_EXTENSION: &str = "txt";
pub const HTML_EXTENSION: &str = "html";

/// The pair of output files written by one merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Number shared by both files
    pub number: u32,
    pub text: PathBuf,
    pub html: PathBuf,
}

/// Check that `base_name` can be used as the stem of a file in the output folder
pub fn validate_base_name(base_name: &str) -> Result<()> {
    let bad = base_name.trim().is_empty()
        || base_name.contains(['/', '\\'])
        || base_name == "."
        || base_name == "..";

    if bad {
        return Err(Error::InvalidBaseName(base_name.to_string()));
    }
    Ok(())
}

/// File name for output `number`, zero-padded to three digits
pub fn numbered_file_name(base_name: &str, number: u32, extension: &str) -> String {
    format!("{base_name}_{number:03}.{extension}")
}

/// Find the first number for which neither the text nor the HTML output exists
///
/// Numbering starts at 1. Gaps left by deleted outputs are reused.
pub fn next_output_paths(output_dir: &Path, base_name: &str) -> Result<OutputPaths> {
    validate_base_name(base_name)?;

    for number in 1..=u32::MAX {
        let text = output_dir.join(numbered_file_name(base_name, number, TEXT_EXTENSION));
        let html = output_dir.join(numbered_file_name(base_name, number, HTML_EXTENSION));

        if !text.exists() && !html.exists() {
            return Ok(OutputPaths { number, text, html });
        }
    }

    Err(Error::General(format!(
        "No free output number left in {}",
        output_dir.display()
    )))
}

/// Create a file that must not exist yet
///
/// Fails with `AlreadyExists` if another process took the name after it was chosen.
pub fn create_new(path: &Path) -> Result<File> {
    Ok(OpenOptions::new().write(true).create_new(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_numbered_file_name_padding() {
        assert_eq!(numbered_file_name("your_files", 1, "txt"), "your_files_001.txt");
        assert_eq!(numbered_file_name("your_files", 42, "html"), "your_files_042.html");
        assert_eq!(numbered_file_name("your_files", 1000, "txt"), "your_files_1000.txt");
    }

    #[test]
    fn test_first_run_gets_number_one() {
        let dir = TempDir::new().unwrap();
        let paths = next_output_paths(dir.path(), "your_files").unwrap();

        assert_eq!(paths.number, 1);
        assert_eq!(paths.text, dir.path().join("your_files_001.txt"));
        assert_eq!(paths.html, dir.path().join("your_files_001.html"));
    }

    #[test]
    fn test_skips_taken_numbers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("your_files_001.txt"), "").unwrap();
        fs::write(dir.path().join("your_files_001.html"), "").unwrap();
        fs::write(dir.path().join("your_files_002.txt"), "").unwrap();

        let paths = next_output_paths(dir.path(), "your_files").unwrap();
        assert_eq!(paths.number, 3);
    }

    #[test]
    fn test_html_alone_blocks_number() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("your_files_001.html"), "").unwrap();

        let paths = next_output_paths(dir.path(), "your_files").unwrap();
        assert_eq!(paths.number, 2);
    }

    #[test]
    fn test_reuses_gap() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("your_files_002.txt"), "").unwrap();

        let paths = next_output_paths(dir.path(), "your_files").unwrap();
        assert_eq!(paths.number, 1);
    }

    #[test]
    fn test_other_base_names_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes_001.txt"), "").unwrap();

        let paths = next_output_paths(dir.path(), "your_files").unwrap();
        assert_eq!(paths.number, 1);
    }

    #[test]
    fn test_invalid_base_names() {
        for name in ["", "  ", "a/b", "a\\b", ".."] {
            assert!(
                matches!(validate_base_name(name), Err(Error::InvalidBaseName(_))),
                "{name:?} should be rejected"
            );
        }
        assert!(validate_base_name("merged").is_ok());
    }

    #[test]
    fn test_create_new_refuses_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taken.txt");
        fs::write(&path, "keep me").unwrap();

        match create_new(&path) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }
}
