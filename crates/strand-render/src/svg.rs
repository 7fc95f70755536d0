//! SVG backend for [`Scene`].

use crate::palette::Color;
use crate::scene::{DrawTarget, Scene, Stroke, TextStyle};
use std::fmt::Write as _;
use strand_core::geom::{Point, Size};

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Optional root `id`; sanitized with [`sanitize_svg_id`].
    pub svg_id: Option<String>,
    /// When false, the label text is left out.
    pub include_label: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            svg_id: None,
            include_label: true,
        }
    }
}

pub fn render_svg(scene: &Scene, options: &SvgRenderOptions) -> String {
    let mut writer = SvgWriter::new(scene.size(), options);
    scene.replay(&mut writer);
    writer.finish()
}

/// Converts an arbitrary string into a conservative SVG `id` token.
///
/// This helper:
/// - trims whitespace
/// - replaces unsupported characters with `-`
/// - ensures the id starts with an ASCII letter by prefixing `s-` when needed
pub fn sanitize_svg_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "s-untitled".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
        out.push(if ok { ch } else { '-' });
    }

    let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_ok {
        out.insert_str(0, "s-");
    }

    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() || out == "s" {
        return "s-untitled".to_string();
    }
    out.to_string()
}

/// A [`DrawTarget`] that accumulates SVG markup.
pub struct SvgWriter {
    out: String,
    include_label: bool,
    ryu: ryu_js::Buffer,
}

impl SvgWriter {
    pub fn new(size: Size, options: &SvgRenderOptions) -> Self {
        let mut w = Self {
            out: String::with_capacity(1024),
            include_label: options.include_label,
            ryu: ryu_js::Buffer::new(),
        };
        w.out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
        if let Some(id) = options.svg_id.as_deref() {
            let _ = write!(w.out, r#" id="{}""#, escape_attr(&sanitize_svg_id(id)));
        }
        let width = w.num(size.width);
        let height = w.num(size.height);
        let _ = write!(
            w.out,
            r#" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        w
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }

    fn num(&mut self, v: f64) -> String {
        fmt_number(v, &mut self.ryu)
    }

    fn points_attr(&mut self, points: &[Point]) -> String {
        let mut s = String::with_capacity(points.len() * 16);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            s.push_str(&self.num(p.x));
            s.push(',');
            s.push_str(&self.num(p.y));
        }
        s
    }

    fn stroke_attrs(&mut self, stroke: &Stroke) -> String {
        format!(
            r#"stroke="{}" stroke-width="{}""#,
            stroke.color,
            self.num(stroke.width)
        )
    }
}

impl DrawTarget for SvgWriter {
    fn clear(&mut self, color: Color, size: Size) {
        let width = self.num(size.width);
        let height = self.num(size.height);
        let _ = write!(
            self.out,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{color}"/>"#
        );
    }

    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        let pts = self.points_attr(points);
        let st = self.stroke_attrs(stroke);
        let _ = write!(
            self.out,
            r#"<polyline class="chain-path" points="{pts}" fill="none" {st} stroke-linecap="round"/>"#
        );
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let (x1, y1, x2, y2) = (
            self.num(from.x),
            self.num(from.y),
            self.num(to.x),
            self.num(to.y),
        );
        let st = self.stroke_attrs(stroke);
        let _ = write!(
            self.out,
            r#"<line class="repeat-connector" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" {st} stroke-linecap="round"/>"#
        );
    }

    fn polygon(&mut self, vertices: &[Point], fill: Color, stroke: &Stroke) {
        let pts = self.points_attr(vertices);
        let st = self.stroke_attrs(stroke);
        let _ = write!(
            self.out,
            r#"<polygon class="node-polygon" points="{pts}" fill="{fill}" {st}/>"#
        );
    }

    fn text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        if !self.include_label {
            return;
        }
        let (x, y) = (self.num(anchor.x), self.num(anchor.y));
        let size = self.num(style.font_size);
        let _ = write!(
            self.out,
            r#"<text class="label" x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="{weight}" fill="{fill}">{body}</text>"#,
            family = escape_attr(&style.font_family),
            weight = style.font_weight,
            fill = style.fill,
            body = escape_xml(text),
        );
    }
}

/// JS-style number text for attributes, rounded to 3 fractional digits.
///
/// Avoids `-0` and the float noise from trigonometry (e.g. `6.123233995736766e-16`).
fn fmt_number(v: f64, buf: &mut ryu_js::Buffer) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        return "0".to_string();
    }
    buf.format_finite(r).to_string()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    escape_xml(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_noise_and_negative_zero() {
        let mut buf = ryu_js::Buffer::new();
        assert_eq!(fmt_number(6.123233995736766e-16, &mut buf), "0");
        assert_eq!(fmt_number(-0.0001, &mut buf), "0");
        assert_eq!(fmt_number(400.0, &mut buf), "400");
        assert_eq!(fmt_number(12.3456, &mut buf), "12.346");
        assert_eq!(fmt_number(-7.5, &mut buf), "-7.5");
        assert_eq!(fmt_number(f64::NAN, &mut buf), "0");
    }

    #[test]
    fn sanitizes_ids() {
        assert_eq!(sanitize_svg_id("  my chain  "), "my-chain");
        assert_eq!(sanitize_svg_id("1st"), "s-1st");
        assert_eq!(sanitize_svg_id("***"), "s-untitled");
        assert_eq!(sanitize_svg_id(""), "s-untitled");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
