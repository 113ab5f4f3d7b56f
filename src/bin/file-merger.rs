//! File Merger CLI tool
//!
//! Merges the text and PDF files of a folder into one numbered text file and
//! one numbered HTML file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use file_merger::extract::{pdf_info, SourceKind};
use file_merger::merge::{
    list_sources, merge_files, prepare_folders, MergeOptions, DEFAULT_BASE_NAME,
    DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR,
};
use file_merger::wait::{wait_for_sources, TerminalPrompt};
use file_merger::Language;

/// File Merger - Combine text and PDF files into one text and one HTML file
#[derive(Parser)]
#[command(name = "file-merger")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Merge everything in the default source folder
    file-merger

    # Merge a custom folder with English labels and open the HTML result
    file-merger --source inbox --output merged --lang en merge --open

    # Show what would be merged
    file-merger --source inbox list")]
struct Cli {
    /// Folder whose files are merged
    #[arg(long, env = "FILE_MERGER_SOURCE", default_value = DEFAULT_SOURCE_DIR, global = true)]
    source: PathBuf,

    /// Folder receiving the numbered outputs
    #[arg(long, env = "FILE_MERGER_OUTPUT", default_value = DEFAULT_OUTPUT_DIR, global = true)]
    output: PathBuf,

    /// Stem of the output file names (NAME_001.txt, NAME_001.html)
    #[arg(long, env = "FILE_MERGER_NAME", default_value = DEFAULT_BASE_NAME, global = true)]
    name: String,

    /// Label language: pl, en, it
    #[arg(long, env = "FILE_MERGER_LANG", default_value = "pl", value_parser = parse_language, global = true)]
    lang: Language,

    /// Log every file as it is processed
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the source folder (the default when no command is given)
    Merge {
        /// Fail instead of waiting for a key press when the source folder is empty
        #[arg(long)]
        no_wait: bool,

        /// Open the HTML output after creation
        #[arg(long)]
        open: bool,
    },

    /// List the files that would be merged
    List,
}

fn parse_language(value: &str) -> std::result::Result<Language, String> {
    value.parse::<Language>().map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let options = MergeOptions {
        source_dir: cli.source,
        output_dir: cli.output,
        base_name: cli.name,
        language: cli.lang,
    };

    let result = match cli.command.unwrap_or(Commands::Merge { no_wait: false, open: false }) {
        Commands::Merge { no_wait, open } => cmd_merge(&options, no_wait, open),
        Commands::List => cmd_list(&options),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Merge the source folder into a new pair of outputs
fn cmd_merge(options: &MergeOptions, no_wait: bool, open: bool) -> Result<()> {
    prepare_folders(options).context("Failed to create folders")?;

    if no_wait {
        if list_sources(&options.source_dir)?.is_empty() {
            bail!(file_merger::Error::NoSourceFiles(options.source_dir.clone()));
        }
    } else if !wait_for_sources(&options.source_dir, options.language, &mut TerminalPrompt)? {
        return Ok(());
    }

    let report = merge_files(options)
        .with_context(|| format!("Failed to merge {}", options.source_dir.display()))?;

    for skipped in &report.skipped {
        eprintln!("Skipped {}: {}", skipped.name, skipped.reason);
    }

    let text_output = absolute(&report.text_output);
    let html_output = absolute(&report.html_output);
    println!(
        "{}",
        options
            .language
            .outputs_message(&text_output.display().to_string(), &html_output.display().to_string())
    );
    println!("{}", options.language.success_message());

    if open {
        open_file(&html_output)?;
    }

    Ok(())
}

/// Show the files that a merge would pick up
fn cmd_list(options: &MergeOptions) -> Result<()> {
    if !options.source_dir.exists() {
        bail!(file_merger::Error::FileNotFound(options.source_dir.clone()));
    }

    let sources = list_sources(&options.source_dir)?;
    if sources.is_empty() {
        println!("No files in {}", options.source_dir.display());
        return Ok(());
    }

    for path in &sources {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let kind = SourceKind::of(path);

        match kind {
            SourceKind::Pdf => match pdf_info(path) {
                Ok(info) => {
                    let title = info.title.map(|t| format!(" \"{}\"", t)).unwrap_or_default();
                    println!("{}\t{}\t{} pages{}", name, kind.as_str(), info.page_count, title);
                }
                Err(e) => println!("{}\t{}\tunreadable: {}", name, kind.as_str(), e),
            },
            SourceKind::Text => {
                let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                println!("{}\t{}\t{} bytes", name, kind.as_str(), size);
            }
        }
    }

    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Open a file with the system default application
fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to launch viewer")?;
    }
    #[cfg(target_os = "linux")]
    {
        process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to launch viewer")?;
    }
    #[cfg(target_os = "windows")]
    {
        process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()
            .context("Failed to launch viewer")?;
    }
    Ok(())
}
