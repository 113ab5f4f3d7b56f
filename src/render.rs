//! Text and HTML formatting of merged file blocks

use std::io::Write;
use crate::error::Result;
use crate::labels::Language;

pub const HTML_TITLE: &str = "Your Files";

/// Escape the characters that would otherwise be parsed as markup
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// One file's block in the text output
pub fn text_block(language: Language, file_name: &str, contents: &str) -> String {
    format!(
        "# {}: \"{}\"\n### {}:\n\n{}\n\n",
        language.file_label(),
        file_name,
        language.contents_label(),
        contents
    )
}

/// One file's block in the HTML output
pub fn html_block(language: Language, file_name: &str, contents: &str) -> String {
    format!(
        "<h1>{}: \"{}\"</h1>\n<h3>{}:</h3>\n<pre>{}</pre>\n",
        language.file_label(),
        escape_html(file_name),
        language.contents_label(),
        escape_html(contents)
    )
}

pub fn html_header(language: Language) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n</head>\n<body>\n",
        language.code(),
        HTML_TITLE
    )
}

pub fn html_footer() -> &'static str {
    "</body>\n</html>"
}

/// Writes the two parallel outputs of a merge
pub struct DualWriter<T: Write, H: Write> {
    language: Language,
    text: T,
    html: H,
}

impl<T: Write, H: Write> DualWriter<T, H> {
    /// Wrap both sinks and emit the HTML header
    pub fn begin(language: Language, text: T, mut html: H) -> Result<Self> {
        html.write_all(html_header(language).as_bytes())?;
        Ok(Self { language, text, html })
    }

    /// Append one file to both outputs
    pub fn append(&mut self, file_name: &str, contents: &str) -> Result<()> {
        self.text
            .write_all(text_block(self.language, file_name, contents).as_bytes())?;
        self.html
            .write_all(html_block(self.language, file_name, contents).as_bytes())?;
        Ok(())
    }

    /// Emit the HTML footer, flush, and hand the sinks back
    pub fn finish(mut self) -> Result<(T, H)> {
        self.html.write_all(html_footer().as_bytes())?;
        self.text.flush()?;
        self.html.flush()?;
        Ok((self.text, self.html))
    }
}
