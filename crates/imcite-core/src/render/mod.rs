//! Output renderers for the sorted citation list
//!
//! Renderers see only the final strings and the document style; they
//! have no access to the records that produced them.

mod html;
mod markdown;
mod style;
mod text;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use style::{Alignment, DocumentStyle};
pub use text::PlainTextRenderer;

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Writing the document failed
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes an ordered citation list as a document
pub trait Renderer {
    fn render(
        &self,
        rows: &[String],
        style: &DocumentStyle,
        out: &mut dyn Write,
    ) -> Result<(), RenderError>;

    /// Render into memory
    fn render_to_string(
        &self,
        rows: &[String],
        style: &DocumentStyle,
    ) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(rows, style, &mut buf)?;
        // Renderers only ever write UTF-8 text
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Supported output document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    #[default]
    Markdown,
    Html,
}

/// Unrecognized output format name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown output format: {0} (expected text, markdown or html)")]
pub struct UnknownFormat(pub String);

impl OutputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" | "text" => Some(Self::Text),
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(PlainTextRenderer),
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Html => Box::new(HtmlRenderer),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("out.md", Some(OutputFormat::Markdown))]
    #[case("out.HTML", Some(OutputFormat::Html))]
    #[case("refs.txt", Some(OutputFormat::Text))]
    #[case("refs.docx", None)]
    #[case("refs", None)]
    fn test_format_from_path(#[case] path: &str, #[case] expected: Option<OutputFormat>) {
        assert_eq!(OutputFormat::from_path(Path::new(path)), expected);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("HTML".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert!("docx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_every_format_renders_all_rows() {
        let rows = vec!["First.".to_string(), "Second.".to_string()];
        let style = DocumentStyle::gost();
        for format in [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Html] {
            let output = format.renderer().render_to_string(&rows, &style).unwrap();
            assert!(output.contains("First."), "{}", format.as_str());
            assert!(output.contains("Second."), "{}", format.as_str());
        }
    }
}
