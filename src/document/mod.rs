pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{DocumentError, Result};
use crate::math::Point2;
use crate::model::Rgb;

/// Page size of the report: A4 landscape, in millimeters.
pub const PAGE_WIDTH: f64 = 297.0;
/// See [`PAGE_WIDTH`].
pub const PAGE_HEIGHT: f64 = 210.0;

/// Stroke style of a drawn outline or line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
    /// Dash pattern length; `None` draws a solid line.
    pub dash: Option<f64>,
}

impl Stroke {
    /// A solid stroke.
    #[must_use]
    pub fn solid(color: Rgb, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// A dashed stroke with the given pattern length.
    #[must_use]
    pub fn dashed(color: Rgb, width: f64, dash: f64) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A single vector drawing primitive, in page millimeters.
#[derive(Debug, Clone)]
pub enum Primitive {
    Polygon {
        points: Vec<Point2>,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Line {
        a: Point2,
        b: Point2,
        stroke: Stroke,
    },
    Rect {
        origin: Point2,
        width: f64,
        height: f64,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Text {
        pos: Point2,
        content: String,
        size: f64,
        anchor: TextAnchor,
        bold: bool,
    },
}

/// One report page: an ordered list of primitives, painted first to last.
#[derive(Debug, Clone, Default)]
pub struct Page {
    primitives: Vec<Primitive>,
}

impl Page {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The primitives in paint order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Appends a primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Appends a filled polygon.
    pub fn polygon(&mut self, points: Vec<Point2>, fill: Option<Rgb>, stroke: Option<Stroke>) {
        self.push(Primitive::Polygon {
            points,
            fill,
            stroke,
        });
    }

    /// Appends a line.
    pub fn line(&mut self, a: Point2, b: Point2, stroke: Stroke) {
        self.push(Primitive::Line { a, b, stroke });
    }

    /// Appends a rectangle.
    pub fn rect(
        &mut self,
        origin: Point2,
        width: f64,
        height: f64,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    ) {
        self.push(Primitive::Rect {
            origin,
            width,
            height,
            fill,
            stroke,
        });
    }

    /// Appends a text run.
    pub fn text(&mut self, pos: Point2, content: impl Into<String>, size: f64, anchor: TextAnchor) {
        self.push(Primitive::Text {
            pos,
            content: content.into(),
            size,
            anchor,
            bold: false,
        });
    }

    /// Appends a bold text run.
    pub fn bold_text(
        &mut self,
        pos: Point2,
        content: impl Into<String>,
        size: f64,
        anchor: TextAnchor,
    ) {
        self.push(Primitive::Text {
            pos,
            content: content.into(),
            size,
            anchor,
            bold: true,
        });
    }
}

/// A paginated vector document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document pages, in order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Appends a page.
    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Serializes the document as multi-page SVG into a writer.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EmptyDocument`] for a document with no
    /// pages, or an I/O error from the writer.
    pub fn write_svg(&self, w: &mut impl std::io::Write) -> Result<()> {
        svg::write_document(self, w)?;
        Ok(())
    }

    /// Serializes and writes the document to `dir`, named after `date`.
    ///
    /// The document is serialized fully in memory before the single
    /// file write, so a failed export never leaves a partial artifact.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or write failure.
    pub fn save(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        let mut buffer = Vec::new();
        self.write_svg(&mut buffer)?;

        let path = dir.join(file_name(date));
        fs::write(&path, buffer).map_err(DocumentError::Io)?;
        Ok(path)
    }
}

/// Deterministic artifact name for an export date.
#[must_use]
pub fn file_name(date: NaiveDate) -> String {
    format!("Rapporto_Scavo_{}.svg", date.format("%Y-%m-%d"))
}
