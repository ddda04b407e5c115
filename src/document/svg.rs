//! Multi-page SVG serialization in the Inkscape style: one
//! `inkscape:page` element per report page, each page a translated
//! group layer, pages stacked vertically on the canvas.

use std::io::Write;

use crate::document::{Document, Page, Primitive, Stroke, TextAnchor, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::DocumentError;

/// Vertical gap between stacked pages on the canvas, in millimeters.
const PAGE_SEP: f64 = 10.0;

type SvgResult = std::result::Result<(), DocumentError>;

/// Writes the whole document.
pub(super) fn write_document(doc: &Document, w: &mut impl Write) -> SvgResult {
    let pages = doc.pages();
    if pages.is_empty() {
        return Err(DocumentError::EmptyDocument);
    }

    #[allow(clippy::cast_precision_loss)]
    let n = pages.len() as f64;
    let total_height = n * (PAGE_HEIGHT + PAGE_SEP) - PAGE_SEP;

    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
    writeln!(
        w,
        r#"<svg width="{0}mm" height="{1}mm" viewBox="0 0 {0} {1}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">"#,
        PAGE_WIDTH, total_height
    )?;

    writeln!(w, r"<sodipodi:namedview>")?;
    for (i, _) in pages.iter().enumerate() {
        writeln!(
            w,
            r#"<inkscape:page x="0" y="{}" width="{}" height="{}" id="Page_{}" />"#,
            page_offset(i),
            PAGE_WIDTH,
            PAGE_HEIGHT,
            i + 1
        )?;
    }
    writeln!(w, r"</sodipodi:namedview>")?;

    for (i, page) in pages.iter().enumerate() {
        writeln!(
            w,
            r#"<g inkscape:label="Page_{0}" inkscape:groupmode="layer" id="page_{0}" transform="translate(0,{1})">"#,
            i + 1,
            page_offset(i)
        )?;
        writeln!(
            w,
            r##"<rect x="0" y="0" width="{PAGE_WIDTH}" height="{PAGE_HEIGHT}" fill="#ffffff" stroke="none"/>"##
        )?;
        write_page(page, w)?;
        writeln!(w, r"</g>")?;
    }

    writeln!(w, r"</svg>")?;
    Ok(())
}

fn page_offset(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    i * (PAGE_HEIGHT + PAGE_SEP)
}

fn write_page(page: &Page, w: &mut impl Write) -> SvgResult {
    for primitive in page.primitives() {
        match primitive {
            Primitive::Polygon {
                points,
                fill,
                stroke,
            } => {
                write!(w, r#"<polygon points=""#)?;
                for p in points {
                    write!(w, "{:.3},{:.3} ", p.x, p.y)?;
                }
                write!(w, r#"" {}"#, fill_attr(*fill))?;
                write_stroke_attrs(*stroke, w)?;
                writeln!(w, "/>")?;
            }
            Primitive::Line { a, b, stroke } => {
                write!(
                    w,
                    r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}""#,
                    a.x, a.y, b.x, b.y
                )?;
                write_stroke_attrs(Some(*stroke), w)?;
                writeln!(w, "/>")?;
            }
            Primitive::Rect {
                origin,
                width,
                height,
                fill,
                stroke,
            } => {
                write!(
                    w,
                    r#"<rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" {}"#,
                    origin.x,
                    origin.y,
                    width,
                    height,
                    fill_attr(*fill)
                )?;
                write_stroke_attrs(*stroke, w)?;
                writeln!(w, "/>")?;
            }
            Primitive::Text {
                pos,
                content,
                size,
                anchor,
                bold,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let weight = if *bold { " font-weight=\"bold\"" } else { "" };
                writeln!(
                    w,
                    r#"<text x="{:.3}" y="{:.3}" font-family="monospace" font-size="{}" text-anchor="{}"{}>{}</text>"#,
                    pos.x,
                    pos.y,
                    size,
                    anchor,
                    weight,
                    escape_xml(content)
                )?;
            }
        }
    }
    Ok(())
}

fn fill_attr(fill: Option<crate::model::Rgb>) -> String {
    match fill {
        Some(color) => format!(r#"fill="{}""#, color.to_hex()),
        None => r#"fill="none""#.to_owned(),
    }
}

fn write_stroke_attrs(stroke: Option<Stroke>, w: &mut impl Write) -> SvgResult {
    match stroke {
        Some(s) => {
            write!(
                w,
                r#" stroke="{}" stroke-width="{}""#,
                s.color.to_hex(),
                s.width
            )?;
            if let Some(dash) = s.dash {
                write!(w, r#" stroke-dasharray="{dash},{dash}""#)?;
            }
        }
        None => write!(w, r#" stroke="none""#)?,
    }
    Ok(())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::{Document, Page, TextAnchor};
    use crate::math::Point2;
    use crate::model::Rgb;

    fn render(doc: &Document) -> String {
        let mut out = Vec::new();
        write_document(doc, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn two_page_doc() -> Document {
        let mut doc = Document::new();
        for label in ["one", "two"] {
            let mut page = Page::new();
            page.text(Point2::new(10.0, 10.0), label, 4.0, TextAnchor::Start);
            doc.push_page(page);
        }
        doc
    }

    #[test]
    fn one_page_element_per_page() {
        let svg = render(&two_page_doc());
        assert_eq!(svg.matches("<inkscape:page ").count(), 2);
        assert_eq!(svg.matches("inkscape:groupmode=\"layer\"").count(), 2);
    }

    #[test]
    fn second_page_is_offset_below_the_first() {
        let svg = render(&two_page_doc());
        assert!(svg.contains(r#"transform="translate(0,0)"#));
        assert!(svg.contains(r#"transform="translate(0,220)"#));
    }

    #[test]
    fn dashed_stroke_emits_dasharray() {
        let mut page = Page::new();
        page.line(
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            crate::document::Stroke::dashed(Rgb::new(0, 0, 0), 0.2, 1.5),
        );
        let mut doc = Document::new();
        doc.push_page(page);
        assert!(render(&doc).contains(r#"stroke-dasharray="1.5,1.5""#));
    }

    #[test]
    fn text_is_escaped() {
        let mut page = Page::new();
        page.text(Point2::new(0.0, 0.0), "a < b & c", 4.0, TextAnchor::Start);
        let mut doc = Document::new();
        doc.push_page(page);
        assert!(render(&doc).contains("a &lt; b &amp; c"));
    }
}
