//! Page 2: the isometric drawing with annotation arrows, the color
//! legend and the specifications block.

use chrono::NaiveDate;

use crate::document::{Page, Stroke, TextAnchor};
use crate::error::Result;
use crate::layout::{ComposeIsoView, IsoFaceKind, IsoView, WallSide};
use crate::math::{Point2, Vector2};
use crate::model::surfaces::format_area;
use crate::model::{ExcavationDimensions, SurfaceBreakdown, SurfaceColors};
use crate::report::{footer, header, CONTENT_RIGHT, INK, MARGIN, RULE_GRAY};

/// Region of the page holding the isometric drawing.
const DRAWING_LEFT: f64 = MARGIN + 8.0;
const DRAWING_TOP: f64 = 30.0;
const DRAWING_WIDTH: f64 = 175.0;
const DRAWING_HEIGHT: f64 = 155.0;

/// Left edge of the legend/specifications column.
const SIDEBAR_LEFT: f64 = 212.0;
const SWATCH: f64 = 5.0;

pub(super) struct IsoPage<'a> {
    dims: &'a ExcavationDimensions,
    colors: &'a SurfaceColors,
    breakdown: &'a SurfaceBreakdown,
    date: NaiveDate,
}

impl<'a> IsoPage<'a> {
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
        header(&mut page, "EXCAVATION SURFACES — ISOMETRIC VIEW");

        let view = ComposeIsoView::new(
            self.dims,
            self.colors,
            self.breakdown,
            Point2::new(DRAWING_LEFT, DRAWING_TOP),
            DRAWING_WIDTH,
            DRAWING_HEIGHT,
        )
        .execute()?;
        Self::draw_view(&mut page, &view);
        Self::annotate(&mut page, &view);

        let y = self.legend(&mut page, 34.0);
        self.specifications(&mut page, y + 8.0);

        footer(&mut page, self.date, 2);
        Ok(page)
    }

    fn draw_view(page: &mut Page, view: &IsoView) {
        // Painter order is already fixed by the compositor; bands get a
        // hairline outline so they read as separate folds.
        for face in &view.faces {
            let stroke = match face.kind {
                IsoFaceKind::Band(_) => Some(Stroke::solid(INK, 0.15)),
                IsoFaceKind::Wall(_) | IsoFaceKind::Bottom => None,
            };
            page.polygon(face.points.clone(), Some(face.fill), stroke);
        }
        for edge in &view.edges {
            let stroke = if edge.dashed {
                // Dashes mark the open mouth of the excavation.
                Stroke::dashed(INK, 0.3, 1.5)
            } else {
                Stroke::solid(INK, 0.3)
            };
            page.line(edge.a, edge.b, stroke);
        }
    }

    /// Fixed per-face label offsets; the topology never changes, so no
    /// dynamic repositioning is needed.
    fn label_offset(kind: IsoFaceKind) -> Option<(Vector2, TextAnchor)> {
        match kind {
            IsoFaceKind::Wall(WallSide::Back) => {
                Some((Vector2::new(18.0, -24.0), TextAnchor::Start))
            }
            IsoFaceKind::Wall(WallSide::Left) => {
                Some((Vector2::new(-30.0, -14.0), TextAnchor::End))
            }
            IsoFaceKind::Bottom => Some((Vector2::new(-34.0, 20.0), TextAnchor::End)),
            IsoFaceKind::Wall(WallSide::Right) => {
                Some((Vector2::new(30.0, 14.0), TextAnchor::Start))
            }
            IsoFaceKind::Wall(WallSide::Front) => {
                Some((Vector2::new(-16.0, 26.0), TextAnchor::End))
            }
            IsoFaceKind::Band(_) => None,
        }
    }

    fn annotate(page: &mut Page, view: &IsoView) {
        for face in &view.faces {
            let Some((offset, anchor)) = Self::label_offset(face.kind) else {
                continue;
            };
            let Some(area_label) = &face.area_label else {
                continue;
            };
            let text_pos = face.centroid + offset;
            page.line(text_pos, face.centroid, Stroke::solid(RULE_GRAY, 0.2));
            let name = match face.kind {
                IsoFaceKind::Wall(WallSide::Back | WallSide::Front) => "Long side",
                IsoFaceKind::Wall(WallSide::Left | WallSide::Right) => "Short side",
                IsoFaceKind::Bottom | IsoFaceKind::Band(_) => "Bottom",
            };
            page.text(
                Point2::new(text_pos.x, text_pos.y - 1.5),
                format!("{name}: {area_label}"),
                2.8,
                anchor,
            );
        }
    }

    /// Textual legend mapping colors to face classes. Returns the y
    /// below the block.
    fn legend(&self, page: &mut Page, top: f64) -> f64 {
        page.bold_text(
            Point2::new(SIDEBAR_LEFT, top),
            "LEGEND",
            4.0,
            TextAnchor::Start,
        );
        let mut y = top + 6.0;

        let mut rows = vec![
            (self.colors.bottom, "Bottom".to_owned()),
            (self.colors.sides_long, "Long sides".to_owned()),
            (self.colors.sides_short, "Short sides".to_owned()),
        ];
        if self.dims.has_overlap() {
            rows.push((self.colors.sfido, "Sfido strips".to_owned()));
        }

        for (color, name) in rows {
            page.rect(
                Point2::new(SIDEBAR_LEFT, y - SWATCH + 1.0),
                SWATCH,
                SWATCH,
                Some(color),
                Some(Stroke::solid(INK, 0.2)),
            );
            page.text(
                Point2::new(SIDEBAR_LEFT + SWATCH + 3.0, y),
                name,
                3.0,
                TextAnchor::Start,
            );
            y += 7.0;
        }
        y
    }

    /// Raw dimensions, volume and area totals.
    fn specifications(&self, page: &mut Page, top: f64) {
        page.bold_text(
            Point2::new(SIDEBAR_LEFT, top),
            "SPECIFICATIONS",
            4.0,
            TextAnchor::Start,
        );
        page.line(
            Point2::new(SIDEBAR_LEFT, top + 2.0),
            Point2::new(CONTENT_RIGHT, top + 2.0),
            Stroke::solid(RULE_GRAY, 0.2),
        );

        let totals = self.breakdown.totals();
        let mut lines = vec![
            format!("Length: {:.2} m", self.dims.length),
            format!("Width:  {:.2} m", self.dims.width),
            format!("Depth:  {:.2} m", self.dims.depth),
        ];
        if self.dims.has_overlap() {
            lines.push(format!("Sfido:  {:.2} m", self.dims.sfido));
        }
        lines.push(format!("Volume: {:.2} m³", self.dims.volume()));
        lines.push(format!("Total area: {}", format_area(totals.total_area)));
        if self.dims.has_overlap() {
            lines.push(format!(
                "With sfido: {}",
                format_area(totals.total_area_with_overlap)
            ));
        }

        let mut y = top + 7.0;
        for line in lines {
            page.text(Point2::new(SIDEBAR_LEFT, y), line, 3.0, TextAnchor::Start);
            y += 5.0;
        }
    }
}
