use super::{DocumentStyle, RenderError, Renderer};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::Write;

lazy_static! {
    /// Line openings Markdown reads as a heading, list item or ordered list marker
    static ref BLOCK_MARKER: Regex = Regex::new(r"^(?:[#+-]|\d+[.)])").unwrap();
}

/// Markdown: a level-one heading followed by an ordered list (numbered
/// styles) or one paragraph per entry
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(
        &self,
        rows: &[String],
        style: &DocumentStyle,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        writeln!(out, "# {}", style.title)?;
        for (index, row) in rows.iter().enumerate() {
            let row = escape(row);
            if style.numbered {
                if index == 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}. {}", index + 1, row)?;
            } else {
                writeln!(out)?;
                writeln!(out, "{}", row)?;
            }
        }
        Ok(())
    }
}

/// Escape characters Markdown would treat as markup
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 1);
    let mut rest = text;
    if let Some(marker) = BLOCK_MARKER.find(text) {
        // "1984." becomes "1984\.", "#" becomes "\#"
        let end = marker.end();
        escaped.push_str(&text[..end - 1]);
        escaped.push('\\');
        escaped.push_str(&text[end - 1..end]);
        rest = &text[end..];
    }
    for c in rest.chars() {
        if matches!(c, '\\' | '*' | '_' | '[' | ']' | '`' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gost_ordered_list() {
        let rows = vec!["A.".to_string(), "B.".to_string()];
        let output = MarkdownRenderer
            .render_to_string(&rows, &DocumentStyle::gost())
            .unwrap();
        assert_eq!(output, "# Список использованной литературы\n\n1. A.\n2. B.\n");
    }

    #[test]
    fn test_apa_paragraphs_escape_brackets() {
        let rows = vec!["Author (2020). Title [канд., some university].".to_string()];
        let output = MarkdownRenderer
            .render_to_string(&rows, &DocumentStyle::apa())
            .unwrap();
        assert_eq!(
            output,
            "# References\n\nAuthor (2020). Title \\[канд., some university\\].\n"
        );
    }

    #[test]
    fn test_escape_leading_block_markers() {
        assert_eq!(escape("1984. Title."), "1984\\. Title.");
        assert_eq!(escape("2) Title."), "2\\) Title.");
        assert_eq!(escape("# Title"), "\\# Title");
        assert_eq!(escape("- Title"), "\\- Title");
        assert_eq!(escape("+ Title"), "\\+ Title");
        assert_eq!(escape("Title 1984. - # +"), "Title 1984. - # +");
    }

    #[test]
    fn test_apa_paragraph_starting_with_year_stays_a_paragraph() {
        let rows = vec!["1984. (2020). Title.".to_string()];
        let output = MarkdownRenderer
            .render_to_string(&rows, &DocumentStyle::apa())
            .unwrap();
        assert_eq!(output, "# References\n\n1984\\. (2020). Title.\n");
    }
}
