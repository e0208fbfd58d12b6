//! Document-level styling per citation standard

use crate::CitationStandard;

/// Horizontal alignment of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Justify,
}

impl Alignment {
    pub fn css(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Justify => "justify",
        }
    }
}

/// Heading and body styling of the rendered bibliography
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStyle {
    pub title: &'static str,
    pub title_size_pt: f32,
    pub title_bold: bool,
    pub title_alignment: Alignment,
    pub font_family: &'static str,
    pub font_size_pt: f32,
    pub line_spacing: f32,
    pub alignment: Alignment,
    pub space_after_pt: f32,
    /// Negative values produce a hanging indent
    pub first_line_indent_mm: f32,
    pub keep_together: bool,
    /// Number the entries (GOST) or list them as plain paragraphs (APA)
    pub numbered: bool,
}

impl DocumentStyle {
    pub fn for_standard(standard: CitationStandard) -> Self {
        match standard {
            CitationStandard::Gost => Self::gost(),
            CitationStandard::Apa => Self::apa(),
        }
    }

    pub fn gost() -> Self {
        Self {
            title: "Список использованной литературы",
            title_size_pt: 16.0,
            title_bold: true,
            title_alignment: Alignment::Left,
            font_family: "Times New Roman",
            font_size_pt: 13.0,
            line_spacing: 1.5,
            alignment: Alignment::Justify,
            space_after_pt: 0.0,
            first_line_indent_mm: 0.0,
            keep_together: true,
            numbered: true,
        }
    }

    pub fn apa() -> Self {
        Self {
            title: "References",
            title_size_pt: 14.0,
            title_bold: true,
            title_alignment: Alignment::Center,
            font_family: "Times New Roman",
            font_size_pt: 12.0,
            line_spacing: 1.5,
            alignment: Alignment::Left,
            space_after_pt: 12.0,
            first_line_indent_mm: -10.0,
            keep_together: true,
            numbered: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_per_standard() {
        let gost = DocumentStyle::for_standard(CitationStandard::Gost);
        assert_eq!(gost.title, "Список использованной литературы");
        assert!(gost.numbered);
        assert_eq!(gost.alignment, Alignment::Justify);

        let apa = DocumentStyle::for_standard(CitationStandard::Apa);
        assert_eq!(apa.title, "References");
        assert!(!apa.numbered);
        assert_eq!(apa.title_alignment, Alignment::Center);
        assert!(apa.first_line_indent_mm < 0.0);
    }
}
