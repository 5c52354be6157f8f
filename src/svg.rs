//! Minimal SVG document builder.
//!
//! Collects elements as strings and emits a pretty-printed document, one
//! element per line, so the output files stay readable and diffable.

/// Incrementally built SVG document of fixed size.
pub struct SvgBuilder {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Full-canvas background fill.
    pub fn background(&mut self, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, fill
        ));
    }

    /// Open polyline through `points`, no fill.
    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, stroke_width: f64) {
        let pts = points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"<polyline points="{pts}" fill="none" stroke="{stroke}" stroke-width="{stroke_width:.1}" stroke-linecap="round" stroke-linejoin="round"/>"#
        ));
    }

    /// Text anchored at (x, y). `anchor` is the SVG text-anchor value.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        font_size: u32,
        font_weight: &str,
        fill: &str,
        anchor: &str,
    ) {
        let escaped = escape(content);
        self.elements.push(format!(
            r#"<text x="{x:.0}" y="{y:.0}" fill="{fill}" font-size="{font_size}px" font-weight="{font_weight}" text-anchor="{anchor}">{escaped}</text>"#
        ));
    }

    /// Serialize to a pretty-printed standalone document.
    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Helvetica', 'Arial', sans-serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
