//! File Merger Library
//!
//! Concatenates the text and PDF files of a source folder into one combined
//! text file and one combined HTML file. This library provides functionality to:
//! - Create the source and output folders
//! - Wait until the source folder has something to merge
//! - Extract text from plain files and PDFs
//! - Pick the first unused numbered output names
//! - Write both output formats side by side
//!
//! # Example
//!
//! ```no_run
//! use file_merger::merge::{merge_files, prepare_folders, MergeOptions};
//!
//! let options = MergeOptions::default();
//! prepare_folders(&options).expect("Failed to create folders");
//!
//! let report = merge_files(&options).expect("Failed to merge files");
//! println!("{}", report.text_output.display());
//! ```

pub mod error;
pub mod extract;
pub mod labels;
pub mod merge;
pub mod naming;
pub mod render;
pub mod wait;

// Re-export commonly used items
pub use error::{Error, Result};
pub use labels::Language;
pub use merge::{merge_files, MergeOptions, MergeReport};
