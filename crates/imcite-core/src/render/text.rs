use super::{DocumentStyle, RenderError, Renderer};
use std::io::Write;

/// Plain UTF-8 text: the title, a blank line, then one entry per line
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn render(
        &self,
        rows: &[String],
        style: &DocumentStyle,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        writeln!(out, "{}", style.title)?;
        writeln!(out)?;
        for (index, row) in rows.iter().enumerate() {
            if style.numbered {
                writeln!(out, "{}. {}", index + 1, row)?;
            } else {
                writeln!(out, "{}", row)?;
            }
        }
        Ok(())
    }
}
