//! Folder setup and the merge routine

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::error::{Error, Result};
use crate::extract::extract_contents;
use crate::labels::Language;
use crate::naming::{create_new, next_output_paths};
use crate::render::DualWriter;

pub const DEFAULT_SOURCE_DIR: &str = "./pliki_do_połączenia";
pub const DEFAULT_OUTPUT_DIR: &str = "./połączone";
pub const DEFAULT_BASE_NAME: &str = "your_files";

/// Options for merging a folder
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Folder whose files are merged
    pub source_dir: PathBuf,
    /// Folder receiving the numbered outputs
    pub output_dir: PathBuf,
    /// Stem of the output file names (`{base_name}_001.txt`)
    pub base_name: String,
    /// Language of the labels written into the outputs
    pub language: Language,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_name: DEFAULT_BASE_NAME.to_string(),
            language: Language::default(),
        }
    }
}

/// A source file left out of the outputs
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub name: String,
    pub reason: String,
}

/// Outcome of one merge run
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub text_output: PathBuf,
    pub html_output: PathBuf,
    /// Names of the files written to both outputs, in order
    pub merged: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}

fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(Error::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    debug!(path = %path.display(), "creating folder");
    fs::create_dir_all(path)?;
    Ok(())
}

/// Create the output and source folders if they do not exist
pub fn prepare_folders(options: &MergeOptions) -> Result<()> {
    ensure_dir(&options.output_dir)?;
    ensure_dir(&options.source_dir)?;
    Ok(())
}

/// Regular files of `dir`, sorted by file name
///
/// Sub-directories are skipped. Symlinks are followed.
pub fn list_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::FileNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    // read_dir order is platform dependent
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Whether `dir` holds at least one regular file
pub fn has_source_files(dir: &Path) -> Result<bool> {
    Ok(!list_sources(dir)?.is_empty())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Merge every file of the source folder into a fresh pair of numbered outputs
///
/// Files that cannot be read or extracted are logged and skipped. Only errors
/// concerning the outputs themselves abort the run.
///
/// # Example
///
/// ```no_run
/// use file_merger::merge::{merge_files, MergeOptions};
/// use file_merger::Language;
/// use std::path::PathBuf;
///
/// let options = MergeOptions {
///     source_dir: PathBuf::from("inbox"),
///     output_dir: PathBuf::from("merged"),
///     base_name: "notes".to_string(),
///     language: Language::English,
/// };
///
/// let report = merge_files(&options).expect("Failed to merge");
/// assert!(report.html_output.ends_with("notes_001.html"));
/// ```
pub fn merge_files(options: &MergeOptions) -> Result<MergeReport> {
    let sources = list_sources(&options.source_dir)?;
    ensure_dir(&options.output_dir)?;

    let outputs = next_output_paths(&options.output_dir, &options.base_name)?;
    let text_file = create_new(&outputs.text)?;
    let html_file = match create_new(&outputs.html) {
        Ok(file) => file,
        Err(e) => {
            let _ = fs::remove_file(&outputs.text);
            return Err(e);
        }
    };
    info!(
        text = %outputs.text.display(),
        html = %outputs.html.display(),
        "writing outputs"
    );

    let mut writer = DualWriter::begin(
        options.language,
        BufWriter::new(text_file),
        BufWriter::new(html_file),
    )?;

    let mut merged = Vec::new();
    let mut skipped = Vec::new();

    for path in &sources {
        let name = display_name(path);

        let contents = match extract_contents(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(file = %name, error = %e, "skipping unreadable file");
                skipped.push(SkippedFile {
                    name,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        debug!(file = %name, bytes = contents.len(), "appending file");
        writer.append(&name, &contents)?;
        merged.push(name);
    }

    writer.finish()?;

    info!(merged = merged.len(), skipped = skipped.len(), "merge finished");

    Ok(MergeReport {
        text_output: outputs.text,
        html_output: outputs.html,
        merged,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::pdf::tests::write_test_pdf;
    use tempfile::TempDir;

    fn options_in(root: &Path) -> MergeOptions {
        MergeOptions {
            source_dir: root.join("in"),
            output_dir: root.join("out"),
            base_name: DEFAULT_BASE_NAME.to_string(),
            language: Language::English,
        }
    }

    #[test]
    fn test_default_options() {
        let options = MergeOptions::default();
        assert_eq!(options.source_dir, Path::new("./pliki_do_połączenia"));
        assert_eq!(options.output_dir, Path::new("./połączone"));
        assert_eq!(options.base_name, "your_files");
        assert_eq!(options.language, Language::Polish);
    }

    #[test]
    fn test_prepare_folders_creates_both() {
        let dir = TempDir::new().unwrap();
        let mut options = options_in(dir.path());
        options.source_dir = dir.path().join("deep/in");

        prepare_folders(&options).unwrap();
        assert!(options.source_dir.is_dir());
        assert!(options.output_dir.is_dir());

        // second call is a no-op
        prepare_folders(&options).unwrap();
    }

    #[test]
    fn test_prepare_folders_rejects_file() {
        let dir = TempDir::new().unwrap();
        let options = options_in(dir.path());
        fs::write(&options.output_dir, "not a folder").unwrap();

        let result = prepare_folders(&options);
        assert!(matches!(result.unwrap_err(), Error::NotADirectory(_)));
    }

    #[test]
    fn test_list_sources_skips_dirs_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let names: Vec<String> = list_sources(dir.path())
            .unwrap()
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_has_source_files_ignores_subfolders() {
        let dir = TempDir::new().unwrap();
        assert!(!has_source_files(dir.path()).unwrap());

        fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(!has_source_files(dir.path()).unwrap());

        fs::write(dir.path().join("x.txt"), "x").unwrap();
        assert!(has_source_files(dir.path()).unwrap());
    }

    #[test]
    fn test_list_sources_missing_dir() {
        let result = list_sources(Path::new("no/such/folder"));
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_merge_text_and_pdf() {
        let dir = TempDir::new().unwrap();
        let options = options_in(dir.path());
        prepare_folders(&options).unwrap();
        fs::write(options.source_dir.join("1-notes.txt"), "plain notes").unwrap();
        write_test_pdf(&options.source_dir.join("2-slides.pdf"), &["Slide text"]);

        let report = merge_files(&options).unwrap();
        assert_eq!(report.merged, vec!["1-notes.txt", "2-slides.pdf"]);
        assert!(report.skipped.is_empty());

        let text = fs::read_to_string(&report.text_output).unwrap();
        assert!(text.starts_with("# File: \"1-notes.txt\"\n### File contents:\n\nplain notes\n\n"));
        assert!(text.contains("# File: \"2-slides.pdf\""));
        assert!(text.contains("Slide text"));

        let html = fs::read_to_string(&report.html_output).unwrap();
        assert!(html.contains("<pre>plain notes</pre>"));
        assert!(html.contains("Slide text"));
    }

    #[test]
    fn test_merge_skips_unreadable() {
        let dir = TempDir::new().unwrap();
        let options = options_in(dir.path());
        prepare_folders(&options).unwrap();
        fs::write(options.source_dir.join("a.txt"), "first").unwrap();
        fs::write(options.source_dir.join("b.pdf"), b"garbage").unwrap();
        fs::write(options.source_dir.join("c.bin"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        fs::write(options.source_dir.join("d.txt"), "last").unwrap();

        let report = merge_files(&options).unwrap();
        assert_eq!(report.merged, vec!["a.txt", "d.txt"]);
        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skipped, vec!["b.pdf", "c.bin"]);

        let text = fs::read_to_string(&report.text_output).unwrap();
        assert!(!text.contains("b.pdf"));
        assert!(text.find("first").unwrap() < text.find("last").unwrap());
    }

    #[test]
    fn test_merge_numbers_successive_runs() {
        let dir = TempDir::new().unwrap();
        let options = options_in(dir.path());
        prepare_folders(&options).unwrap();
        fs::write(options.source_dir.join("a.txt"), "a").unwrap();

        let first = merge_files(&options).unwrap();
        let second = merge_files(&options).unwrap();

        assert!(first.text_output.ends_with("your_files_001.txt"));
        assert!(second.text_output.ends_with("your_files_002.txt"));
        assert!(second.html_output.ends_with("your_files_002.html"));
    }

    #[test]
    fn test_merge_rejects_bad_base_name() {
        let dir = TempDir::new().unwrap();
        let mut options = options_in(dir.path());
        options.base_name = "../escape".to_string();
        prepare_folders(&options).unwrap();

        let result = merge_files(&options);
        assert!(matches!(result.unwrap_err(), Error::InvalidBaseName(_)));
    }
}
