//! Standalone SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord, xml_escape};

/// Builder for a complete SVG document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    font_family: String,
    background: Option<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            font_family: String::new(),
            background: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Font family inherited by every text element.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Fill the whole canvas before any element is drawn.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();
        let width = format_coord(self.width);
        let height = format_coord(self.height);

        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let font = if self.font_family.is_empty() {
            String::new()
        } else {
            format!(r#" font-family="{}""#, xml_escape(&self.font_family))
        };
        let _ = writeln!(
            output,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" role="img"{font}>"#
        );

        if !self.title.is_empty() {
            let escaped = xml_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        if let Some(background) = &self.background {
            let _ = writeln!(
                output,
                r#"    <rect width="100%" height="100%" fill="{}"/>"#,
                xml_escape(background)
            );
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
