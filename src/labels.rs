//! Literal string labels for the supported output languages

use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// Language of the labels written into the outputs and printed on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Polish,
    English,
    Italian,
}

impl Language {
    /// Short code, as accepted on the command line (`pl`, `en`, `it`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::English => "en",
            Language::Italian => "it",
        }
    }

    /// Heading label in front of each file name
    pub fn file_label(&self) -> &'static str {
        match self {
            Language::Polish => "Plik",
            Language::English => "File",
            Language::Italian => "File",
        }
    }

    /// Sub-heading label in front of each file's contents
    pub fn contents_label(&self) -> &'static str {
        match self {
            Language::Polish => "Treść pliku",
            Language::English => "File contents",
            Language::Italian => "Contenuto del file",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Language::Polish => "Pliki zostały połączone pomyślnie!",
            Language::English => "Files merged successfully!",
            Language::Italian => "File uniti con successo!",
        }
    }

    /// Printed while the source folder has nothing to merge
    pub fn empty_source_prompt(&self, source_dir: &str) -> String {
        match self {
            Language::Polish => format!(
                "Katalog źródłowy [{source_dir}] nie zawiera plików. Brak plików do połączenia w dokument tekstowy. \
                 Dodaj pliki do połączenia i wciśnij Enter, aby sprawdzić zawartość katalogu ponownie. \
                 Wciśnij Spację, aby zamknąć program."
            ),
            Language::English => format!(
                "The source folder [{source_dir}] contains no files. There is nothing to merge into a text document. \
                 Add files to merge and press Enter to check the folder again. \
                 Press Space to close the program."
            ),
            Language::Italian => format!(
                "La cartella di origine [{source_dir}] non contiene file. Non ci sono file da unire in un documento di testo. \
                 Aggiungi i file da unire e premi Invio per controllare di nuovo la cartella. \
                 Premi Spazio per chiudere il programma."
            ),
        }
    }

    /// Printed after a successful merge, naming both outputs
    pub fn outputs_message(&self, text_output: &str, html_output: &str) -> String {
        match self {
            Language::Polish => format!(
                "Program wykonał połączenie plików źródłowych do {text_output} i {html_output}"
            ),
            Language::English => format!("Source files merged into {text_output} and {html_output}"),
            Language::Italian => format!("File di origine uniti in {text_output} e {html_output}"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pl" | "polish" | "polski" => Ok(Language::Polish),
            "en" | "uk" | "english" => Ok(Language::English),
            "it" | "italian" | "italiano" => Ok(Language::Italian),
            other => Err(Error::General(format!("Unknown language: {other}"))),
        }
    }
}
