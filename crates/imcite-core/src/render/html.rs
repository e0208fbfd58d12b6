use super::{DocumentStyle, RenderError, Renderer};
use std::io::Write;

/// Standalone HTML page with the document style applied as CSS
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(
        &self,
        rows: &[String],
        style: &DocumentStyle,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape(style.title))?;
        writeln!(out, "<style>")?;
        write_css(style, out)?;
        writeln!(out, "</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{}</h1>", escape(style.title))?;

        let (open, close) = if style.numbered {
            ("<ol>", "</ol>")
        } else {
            ("<div class=\"references\">", "</div>")
        };
        let item = if style.numbered { "li" } else { "p" };
        writeln!(out, "{}", open)?;
        for row in rows {
            writeln!(out, "<{item} class=\"entry\">{}</{item}>", escape(row))?;
        }
        writeln!(out, "{}", close)?;

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(())
    }
}

fn write_css(style: &DocumentStyle, out: &mut dyn Write) -> Result<(), RenderError> {
    writeln!(
        out,
        "body {{ font-family: \"{}\", serif; font-size: {}pt; line-height: {}; }}",
        style.font_family, style.font_size_pt, style.line_spacing
    )?;
    writeln!(
        out,
        "h1 {{ font-size: {}pt; font-weight: {}; text-align: {}; }}",
        style.title_size_pt,
        if style.title_bold { "bold" } else { "normal" },
        style.title_alignment.css()
    )?;

    let mut entry = format!(
        ".entry {{ text-align: {}; margin: 0 0 {}pt 0;",
        style.alignment.css(),
        style.space_after_pt
    );
    if style.first_line_indent_mm < 0.0 {
        let hang = -style.first_line_indent_mm;
        entry.push_str(&format!(" padding-left: {hang}mm; text-indent: -{hang}mm;"));
    } else if style.first_line_indent_mm > 0.0 {
        entry.push_str(&format!(" text-indent: {}mm;", style.first_line_indent_mm));
    }
    if style.keep_together {
        entry.push_str(" break-inside: avoid;");
    }
    entry.push_str(" }");
    writeln!(out, "{}", entry)?;
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
