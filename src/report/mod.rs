//! Two-page report assembly: a flattened-layout page and an isometric
//! page, always both, serialized as one date-stamped artifact.

mod flat_page;
mod iso_page;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::document::{Document, Page, Stroke, TextAnchor};
use crate::error::Result;
use crate::math::Point2;
use crate::model::{ExcavationDimensions, Rgb, SurfaceBreakdown, SurfaceColors};

/// Left/right page margin, in millimeters.
pub(crate) const MARGIN: f64 = 12.0;
/// Page width minus margins.
pub(crate) const CONTENT_RIGHT: f64 = crate::document::PAGE_WIDTH - MARGIN;

pub(crate) const INK: Rgb = Rgb {
    r: 0x20,
    g: 0x20,
    b: 0x20,
};
pub(crate) const RULE_GRAY: Rgb = Rgb {
    r: 0x5A,
    g: 0x5A,
    b: 0x5A,
};
/// Fill of the highlighted grand-total box.
pub(crate) const HIGHLIGHT: Rgb = Rgb {
    r: 0xFF,
    g: 0xF3,
    b: 0xCD,
};

/// Assembles and exports the two-page excavation report.
///
/// The whole pipeline is synchronous and pure in its inputs: every
/// derived value is recomputed from the dimensions/colors snapshot, so
/// two rapid exports simply produce two independent artifacts.
pub struct ExportReport<'a> {
    dims: &'a ExcavationDimensions,
    colors: &'a SurfaceColors,
    date: NaiveDate,
}

impl<'a> ExportReport<'a> {
    /// Creates an export operation dated today.
    #[must_use]
    pub fn new(dims: &'a ExcavationDimensions, colors: &'a SurfaceColors) -> Self {
        Self {
            dims,
            colors,
            date: Local::now().date_naive(),
        }
    }

    /// Overrides the report date (drives the footer and the file name).
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Assembles the document: page 1 is the flattened view, page 2 the
    /// isometric view. Both pages are always produced.
    ///
    /// # Errors
    ///
    /// Returns an error if a layout step fails.
    pub fn execute(&self) -> Result<Document> {
        debug!(
            length = self.dims.length,
            width = self.dims.width,
            depth = self.dims.depth,
            sfido = self.dims.sfido,
            "assembling excavation report"
        );
        let breakdown = SurfaceBreakdown::derive(self.dims, self.colors);

        let mut doc = Document::new();
        doc.push_page(
            flat_page::FlatPage::new(self.dims, self.colors, &breakdown, self.date).assemble()?,
        );
        doc.push_page(
            iso_page::IsoPage::new(self.dims, self.colors, &breakdown, self.date).assemble()?,
        );
        Ok(doc)
    }

    /// Assembles the document and writes it to `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error on layout or write failure; a failed export
    /// leaves no partial artifact behind.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let doc = self.execute()?;
        let path = doc.save(dir, self.date)?;
        info!(path = %path.display(), "excavation report exported");
        Ok(path)
    }
}

/// Draws the shared page header: centered title and a rule underneath.
pub(crate) fn header(page: &mut Page, title: &str) {
    page.bold_text(
        Point2::new(crate::document::PAGE_WIDTH * 0.5, 15.0),
        title,
        6.0,
        TextAnchor::Middle,
    );
    page.line(
        Point2::new(MARGIN, 20.0),
        Point2::new(CONTENT_RIGHT, 20.0),
        Stroke::solid(RULE_GRAY, 0.3),
    );
}

/// Draws the shared page footer: date on the left, page number right.
pub(crate) fn footer(page: &mut Page, date: NaiveDate, number: u32) {
    let y = 202.0;
    page.line(
        Point2::new(MARGIN, y - 4.0),
        Point2::new(CONTENT_RIGHT, y - 4.0),
        Stroke::solid(RULE_GRAY, 0.2),
    );
    page.text(
        Point2::new(MARGIN, y),
        format!("Generated {}", date.format("%Y-%m-%d")),
        3.0,
        TextAnchor::Start,
    );
    page.text(
        Point2::new(CONTENT_RIGHT, y),
        format!("Page {number} of 2"),
        3.0,
        TextAnchor::End,
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::Primitive;

    fn export(dims: &ExcavationDimensions) -> Document {
        let colors = SurfaceColors::default();
        ExportReport::new(dims, &colors)
            .with_date(NaiveDate::from_ymd_opt(2026, 8, 28).unwrap())
            .execute()
            .unwrap()
    }

    fn page_text(doc: &Document, index: usize) -> String {
        doc.pages()[index]
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn always_two_pages() {
        for dims in [
            ExcavationDimensions::new(4.0, 3.0, 2.5),
            ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2),
            ExcavationDimensions::new(0.0, 0.0, 0.0),
        ] {
            assert_eq!(export(&dims).pages().len(), 2);
        }
    }

    #[test]
    fn pages_carry_titles_and_footers() {
        let doc = export(&ExcavationDimensions::new(4.0, 3.0, 2.5));
        let first = page_text(&doc, 0);
        let second = page_text(&doc, 1);
        assert!(first.contains("FLATTENED"));
        assert!(first.contains("Page 1 of 2"));
        assert!(first.contains("Generated 2026-08-28"));
        assert!(second.contains("ISOMETRIC"));
        assert!(second.contains("Page 2 of 2"));
    }

    #[test]
    fn summary_matches_the_standard_scenario() {
        let doc = export(&ExcavationDimensions::new(4.0, 3.0, 2.5));
        let first = page_text(&doc, 0);
        assert!(first.contains("12.00 m²"));
        assert!(first.contains("47.00 m²"));
    }

    #[test]
    fn overlap_sections_appear_only_with_sfido() {
        let plain = export(&ExcavationDimensions::new(4.0, 3.0, 2.5));
        let overlapped = export(&ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2));
        for index in 0..2 {
            assert!(!page_text(&plain, index).to_lowercase().contains("sfido"));
        }
        let first = page_text(&overlapped, 0);
        assert!(first.to_lowercase().contains("sfido"));
        assert!(first.contains("2.80 m²"));
        assert!(first.contains("49.80 m²"));
    }

    #[test]
    fn degenerate_export_serializes() {
        let doc = export(&ExcavationDimensions::new(0.0, 0.0, 0.0));
        let mut out = Vec::new();
        doc.write_svg(&mut out).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn save_writes_the_dated_artifact() {
        let dir = std::env::temp_dir().join("scavo-report-test");
        std::fs::create_dir_all(&dir).unwrap();
        let dims = ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2);
        let colors = SurfaceColors::default();
        let path = ExportReport::new(&dims, &colors)
            .with_date(NaiveDate::from_ymd_opt(2026, 8, 28).unwrap())
            .save(&dir)
            .unwrap();
        assert!(path.ends_with("Rapporto_Scavo_2026-08-28.svg"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("<inkscape:page ").count(), 2);
        std::fs::remove_file(&path).unwrap();
    }
}
