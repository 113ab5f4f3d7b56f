//! Error types for the file merger library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the file merger library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF loading or text extraction error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Source folder holds nothing to merge
    #[error("No files to merge in {}", .0.display())]
    NoSourceFiles(PathBuf),

    /// Output base name that cannot be used as a file name
    #[error("Invalid output name: {0:?}")]
    InvalidBaseName(String),

    /// General error
    #[error("{0}")]
    General(String),
}
