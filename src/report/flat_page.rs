//! Page 1: the unfolded cross layout with the surface summary table,
//! overlap detail block and grand-total box.

use chrono::NaiveDate;

use crate::document::{Page, Stroke, TextAnchor};
use crate::error::Result;
use crate::layout::{FlatLayout, PlanFlatLayout};
use crate::math::Point2;
use crate::model::surfaces::format_area;
use crate::model::{ExcavationDimensions, SurfaceBreakdown, SurfaceClass, SurfaceColors};
use crate::report::{footer, header, CONTENT_RIGHT, HIGHLIGHT, INK, MARGIN, RULE_GRAY};

/// Region of the page holding the unfolded drawing.
const DRAWING_LEFT: f64 = MARGIN;
const DRAWING_TOP: f64 = 28.0;
const DRAWING_WIDTH: f64 = 155.0;
const DRAWING_HEIGHT: f64 = 162.0;

/// Left edge of the summary column.
const TABLE_LEFT: f64 = 178.0;
const ROW_HEIGHT: f64 = 13.0;
const SWATCH: f64 = 5.0;

/// Smallest rectangle that still carries its class label.
const LABEL_MIN_WIDTH: f64 = 24.0;
const LABEL_MIN_HEIGHT: f64 = 8.0;
/// Taller rectangles also carry their dimensions line.
const DIMS_MIN_HEIGHT: f64 = 14.0;

pub(super) struct FlatPage<'a> {
    dims: &'a ExcavationDimensions,
    colors: &'a SurfaceColors,
    breakdown: &'a SurfaceBreakdown,
    date: NaiveDate,
}

impl<'a> FlatPage<'a> {
    pub(super) fn new(
        dims: &'a ExcavationDimensions,
        colors: &'a SurfaceColors,
        breakdown: &'a SurfaceBreakdown,
        date: NaiveDate,
    ) -> Self {
        Self {
            dims,
            colors,
            breakdown,
            date,
        }
    }

    pub(super) fn assemble(&self) -> Result<Page> {
        let mut page = Page::new();
        header(&mut page, "EXCAVATION SURFACES — FLATTENED LAYOUT");

        let layout = PlanFlatLayout::new(
            self.dims,
            self.colors,
            Point2::new(DRAWING_LEFT, DRAWING_TOP),
            DRAWING_WIDTH,
            DRAWING_HEIGHT,
        )
        .execute()?;
        Self::draw_layout(&mut page, &layout);

        let mut y = self.summary_table(&mut page, 32.0);
        if self.dims.has_overlap() {
            y = self.overlap_block(&mut page, y + 6.0);
        }
        self.total_box(&mut page, y + 8.0);

        footer(&mut page, self.date, 1);
        Ok(page)
    }

    fn draw_layout(page: &mut Page, layout: &FlatLayout) {
        for face in &layout.faces {
            page.rect(
                face.origin,
                face.width,
                face.height,
                Some(face.color),
                Some(Stroke::solid(INK, 0.25)),
            );
            if face.width > LABEL_MIN_WIDTH && face.height > LABEL_MIN_HEIGHT {
                let cx = face.origin.x + face.width * 0.5;
                let cy = face.origin.y + face.height * 0.5;
                page.text(Point2::new(cx, cy), face.label, 3.0, TextAnchor::Middle);
                if face.height > DIMS_MIN_HEIGHT {
                    page.text(
                        Point2::new(cx, cy + 4.0),
                        face.dimensions_label.clone(),
                        2.5,
                        TextAnchor::Middle,
                    );
                }
            }
        }

        // Fold lines along the shared base/wall edges.
        for fold in &layout.folds {
            page.line(fold.a, fold.b, Stroke::dashed(RULE_GRAY, 0.25, 1.2));
        }

        for strip in &layout.strips {
            page.rect(
                strip.origin,
                strip.width,
                strip.height,
                Some(strip.color),
                Some(Stroke::solid(INK, 0.15)),
            );
            if let Some(label) = &strip.label {
                page.text(
                    Point2::new(
                        strip.origin.x + strip.width * 0.5,
                        strip.origin.y + strip.height * 0.5 + 1.0,
                    ),
                    label.clone(),
                    2.5,
                    TextAnchor::Middle,
                );
            }
        }
    }

    /// One row per face class: swatch, label, unit dimensions, unit
    /// area, quantity and subtotal. Returns the y below the table.
    fn summary_table(&self, page: &mut Page, top: f64) -> f64 {
        page.bold_text(
            Point2::new(TABLE_LEFT, top),
            "SURFACE SUMMARY",
            4.0,
            TextAnchor::Start,
        );
        let mut y = top + 7.0;

        for surface in self.breakdown.surfaces() {
            page.rect(
                Point2::new(TABLE_LEFT, y - SWATCH + 1.0),
                SWATCH,
                SWATCH,
                Some(surface.color),
                Some(Stroke::solid(INK, 0.2)),
            );
            let text_x = TABLE_LEFT + SWATCH + 3.0;
            page.bold_text(
                Point2::new(text_x, y),
                surface.label,
                3.2,
                TextAnchor::Start,
            );
            page.text(
                Point2::new(text_x, y + 4.5),
                format!(
                    "{}   {}",
                    surface.dimensions_label,
                    format_area(surface.area)
                ),
                2.8,
                TextAnchor::Start,
            );
            let quantity = surface.class.quantity();
            page.text(
                Point2::new(text_x, y + 8.5),
                format!(
                    "x {}  =  {}",
                    quantity,
                    format_area(surface.area * f64::from(quantity))
                ),
                2.8,
                TextAnchor::Start,
            );
            y += ROW_HEIGHT;
        }
        y
    }

    /// Per-direction strip computations for the overlap allowance.
    fn overlap_block(&self, page: &mut Page, top: f64) -> f64 {
        let overlap = self.breakdown.overlap();
        page.bold_text(
            Point2::new(TABLE_LEFT, top),
            format!("SFIDO STRIPS ({:.2} m)", overlap.strip_width),
            4.0,
            TextAnchor::Start,
        );
        page.rect(
            Point2::new(TABLE_LEFT, top + 2.5),
            SWATCH,
            SWATCH,
            Some(self.colors.sfido),
            Some(Stroke::solid(INK, 0.2)),
        );

        let mut y = top + 6.5;
        let lines = [
            format!(
                "Long:  {:.2} x {:.2} x 2 = {}",
                self.dims.length,
                self.dims.sfido,
                format_area(overlap.long_strip_area)
            ),
            format!(
                "Short: {:.2} x {:.2} x 2 = {}",
                self.dims.width,
                self.dims.sfido,
                format_area(overlap.short_strip_area)
            ),
            format!("Strips total: {}", format_area(overlap.total_strip_area)),
        ];
        let long = self.breakdown.surface(SurfaceClass::SideLong);
        let short = self.breakdown.surface(SurfaceClass::SideShort);
        let lines = lines.into_iter().chain([
            format!(
                "Long wall incl.:  {} ({})",
                long.dimensions_with_overlap_label,
                format_area(long.area_with_overlap)
            ),
            format!(
                "Short wall incl.: {} ({})",
                short.dimensions_with_overlap_label,
                format_area(short.area_with_overlap)
            ),
        ]);
        for line in lines {
            page.text(
                Point2::new(TABLE_LEFT + SWATCH + 3.0, y),
                line,
                2.8,
                TextAnchor::Start,
            );
            y += 4.5;
        }
        y
    }

    /// The highlighted grand-total box closing the summary column.
    fn total_box(&self, page: &mut Page, top: f64) {
        let totals = self.breakdown.totals();
        let height = if self.dims.has_overlap() { 16.0 } else { 11.0 };
        page.rect(
            Point2::new(TABLE_LEFT, top),
            CONTENT_RIGHT - TABLE_LEFT,
            height,
            Some(HIGHLIGHT),
            Some(Stroke::solid(INK, 0.35)),
        );
        page.bold_text(
            Point2::new(TABLE_LEFT + 3.0, top + 7.0),
            format!("TOTAL AREA: {}", format_area(totals.total_area)),
            3.6,
            TextAnchor::Start,
        );
        if self.dims.has_overlap() {
            page.bold_text(
                Point2::new(TABLE_LEFT + 3.0, top + 12.5),
                format!(
                    "WITH SFIDO: {}",
                    format_area(totals.total_area_with_overlap)
                ),
                3.6,
                TextAnchor::Start,
            );
        }
    }
}
