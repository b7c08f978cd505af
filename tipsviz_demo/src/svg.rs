// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `tipsviz_demo`.

use std::fmt::Write as _;

use kurbo::{BezPath, Line, Point, Rect};
use peniko::Color;

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextAnchor {
    Start,
    Middle,
    End,
}

/// An SVG document built element by element, in paint order.
#[derive(Debug)]
pub(crate) struct SvgScene {
    width: f64,
    height: f64,
    body: String,
}

impl SvgScene {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub(crate) fn rect(&mut self, rect: Rect, fill: Color) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn circle(&mut self, center: Point, radius: f64, fill: Color) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            center.x, center.y, radius
        );
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn line(&mut self, line: Line, stroke: Color) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
        write_paint_attr(&mut self.body, "stroke", stroke);
        self.body.push_str("/>\n");
    }

    /// Adds a path. `fill: None` leaves the interior unpainted.
    pub(crate) fn path(&mut self, path: &BezPath, fill: Option<Color>, stroke: Option<(Color, f64)>) {
        if path.elements().is_empty() {
            return;
        }
        let _ = write!(self.body, r#"<path d="{}""#, path.to_svg());
        match fill {
            Some(fill) => write_paint_attr(&mut self.body, "fill", fill),
            None => self.body.push_str(r#" fill="none""#),
        }
        if let Some((stroke, width)) = stroke {
            write_paint_attr(&mut self.body, "stroke", stroke);
            let _ = write!(self.body, r#" stroke-width="{width}""#);
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn text(&mut self, pos: Point, text: &str, font_size: f64, anchor: TextAnchor) {
        let anchor = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle" text-anchor="{}">{}</text>"#,
            pos.x,
            pos.y,
            font_size,
            anchor,
            escape_xml(text)
        );
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 160);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn elements_are_written_in_order_with_hex_paint() {
        let mut scene = SvgScene::new(100.0, 50.0);
        scene.rect(Rect::new(0.0, 0.0, 10.0, 5.0), css::RED);
        scene.circle(Point::new(1.0, 2.0), 3.0, css::BLUE);
        let svg = scene.to_svg_string();
        assert!(svg.starts_with("<svg "), "{svg}");
        assert!(svg.contains(r#"viewBox="0 0 100 50""#), "{svg}");
        let rect = svg.find(r##"<rect x="0" y="0" width="10" height="5" fill="#ff0000"/>"##);
        let circle = svg.find(r##"<circle cx="1" cy="2" r="3" fill="#0000ff"/>"##);
        assert!(rect.is_some() && circle.is_some(), "{svg}");
        assert!(rect < circle, "rect is painted first");
    }

    #[test]
    fn text_is_escaped() {
        let mut scene = SvgScene::new(10.0, 10.0);
        scene.text(Point::ORIGIN, "a<b & 'c'", 12.0, TextAnchor::Middle);
        let svg = scene.to_svg_string();
        assert!(svg.contains("a&lt;b &amp; &apos;c&apos;"), "{svg}");
    }

    #[test]
    fn empty_paths_are_skipped_and_unfilled_paths_say_so() {
        let mut scene = SvgScene::new(10.0, 10.0);
        scene.path(&BezPath::new(), Some(css::RED), None);
        assert!(!scene.to_svg_string().contains("<path"), "empty path dropped");

        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((5.0, 5.0));
        scene.path(&path, None, Some((css::BLACK, 2.0)));
        let svg = scene.to_svg_string();
        assert!(svg.contains(r##"fill="none" stroke="#000000" stroke-width="2""##), "{svg}");
    }
}
