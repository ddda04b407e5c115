use crate::error::Result;
use crate::layout::fit::FitScale;
use crate::layout::prism::{PrismVertices, WallSide};
use crate::layout::STRIP_DRAW_THRESHOLD;
use crate::math::projection::IsoProjector;
use crate::math::{Point2, Point3};
use crate::model::surfaces::format_area;
use crate::model::{ExcavationDimensions, Rgb, SurfaceBreakdown, SurfaceClass, SurfaceColors};

/// Lightening delta applied to the two viewer-facing walls to fake a
/// directional light.
pub const LIGHTEN_DELTA: u8 = 25;

/// Shade delta distinguishing far from near overlap bands.
pub const BAND_SHADE_DELTA: u8 = 15;

/// What a composed polygon represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoFaceKind {
    Wall(WallSide),
    Bottom,
    /// Overlap band folding outward from a wall's rim edge.
    Band(WallSide),
}

/// A filled polygon of the isometric view, in page coordinates.
#[derive(Debug, Clone)]
pub struct IsoFace {
    pub kind: IsoFaceKind,
    pub points: Vec<Point2>,
    pub fill: Rgb,
    pub centroid: Point2,
    /// Area annotation for walls and bottom; bands carry none.
    pub area_label: Option<String>,
}

/// A stroked edge of the isometric view. Dashed edges mark the open
/// top rim of the excavation.
#[derive(Debug, Clone, Copy)]
pub struct IsoEdge {
    pub a: Point2,
    pub b: Point2,
    pub dashed: bool,
}

/// The composed isometric drawing: polygons in fixed back-to-front
/// painter order, then the edge strokes drawn on top.
#[derive(Debug, Clone)]
pub struct IsoView {
    pub scale: f64,
    pub faces: Vec<IsoFace>,
    pub edges: Vec<IsoEdge>,
}

/// Composes the isometric page drawing for a rectangular page region.
///
/// Hidden surfaces are approximated by a fixed draw order (the shape
/// topology never changes), not by a general visibility algorithm.
pub struct ComposeIsoView<'a> {
    dims: &'a ExcavationDimensions,
    colors: &'a SurfaceColors,
    breakdown: &'a SurfaceBreakdown,
    origin: Point2,
    avail_width: f64,
    avail_height: f64,
}

impl<'a> ComposeIsoView<'a> {
    /// Creates a compositor for the region with top-left corner `origin`.
    #[must_use]
    pub fn new(
        dims: &'a ExcavationDimensions,
        colors: &'a SurfaceColors,
        breakdown: &'a SurfaceBreakdown,
        origin: Point2,
        avail_width: f64,
        avail_height: f64,
    ) -> Self {
        Self {
            dims,
            colors,
            breakdown,
            origin,
            avail_width,
            avail_height,
        }
    }

    /// Executes the composition.
    ///
    /// # Errors
    ///
    /// Returns an error if the page region is empty.
    pub fn execute(&self) -> Result<IsoView> {
        let prism = PrismVertices::new(self.dims);
        let projector = self.fit_projector(&prism)?;
        let scale = projector.scale();

        let draw_bands = self.dims.has_overlap() && self.dims.sfido * scale > STRIP_DRAW_THRESHOLD;

        let wall_color = |side: WallSide| {
            let base = match side {
                WallSide::Back | WallSide::Front => self.colors.sides_long,
                WallSide::Left | WallSide::Right => self.colors.sides_short,
            };
            match side {
                // Viewer-facing walls are lightened for a directional-light effect.
                WallSide::Right | WallSide::Front => base.lighten(LIGHTEN_DELTA),
                WallSide::Back | WallSide::Left => base,
            }
        };
        let band_color = |side: WallSide| match side {
            WallSide::Back | WallSide::Left => self.colors.sfido.darken(BAND_SHADE_DELTA),
            WallSide::Right | WallSide::Front => self.colors.sfido.lighten(BAND_SHADE_DELTA),
        };
        let wall_class = |side: WallSide| match side {
            WallSide::Back | WallSide::Front => SurfaceClass::SideLong,
            WallSide::Left | WallSide::Right => SurfaceClass::SideShort,
        };

        let make_face = |kind: IsoFaceKind, quad: [Point3; 4], fill: Rgb, label: Option<String>| {
            IsoFace {
                kind,
                points: projector.project_polygon(&quad),
                fill,
                centroid: projector.project_centroid(&quad),
                area_label: label,
            }
        };

        // Fixed painter order; each wall's band folds from its rim and
        // is laid down right after the wall itself.
        let mut faces = Vec::new();
        for side in [WallSide::Back, WallSide::Left] {
            faces.push(make_face(
                IsoFaceKind::Wall(side),
                prism.wall(side),
                wall_color(side),
                Some(format_area(self.breakdown.surface(wall_class(side)).area)),
            ));
            if draw_bands {
                faces.push(make_face(
                    IsoFaceKind::Band(side),
                    prism.overlap_band(side),
                    band_color(side),
                    None,
                ));
            }
        }
        faces.push(make_face(
            IsoFaceKind::Bottom,
            prism.bottom(),
            self.colors.bottom,
            Some(format_area(
                self.breakdown.surface(SurfaceClass::Bottom).area,
            )),
        ));
        for side in [WallSide::Right, WallSide::Front] {
            faces.push(make_face(
                IsoFaceKind::Wall(side),
                prism.wall(side),
                wall_color(side),
                Some(format_area(self.breakdown.surface(wall_class(side)).area)),
            ));
            if draw_bands {
                faces.push(make_face(
                    IsoFaceKind::Band(side),
                    prism.overlap_band(side),
                    band_color(side),
                    None,
                ));
            }
        }

        let edges = Self::edges(&prism, &projector);

        Ok(IsoView {
            scale,
            faces,
            edges,
        })
    }

    /// Fits the projected prism into the region and returns the final
    /// projector. Works at unit scale first: the projection is affine,
    /// so the fitted center is the region center minus the scaled
    /// bounding-box center.
    fn fit_projector(&self, prism: &PrismVertices) -> Result<IsoProjector> {
        let unit = IsoProjector::new(Point2::new(0.0, 0.0), 1.0);

        let mut pts: Vec<Point2> = prism
            .base()
            .iter()
            .chain(prism.rim())
            .map(|p| unit.project(p))
            .collect();
        if self.dims.has_overlap() {
            for side in [WallSide::Back, WallSide::Front, WallSide::Left, WallSide::Right] {
                for corner in PrismVertices::wall_corners(side) {
                    pts.push(unit.project(&prism.extended_rim(side, corner)));
                }
            }
        }

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &pts {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let scale =
            FitScale::new(max_x - min_x, max_y - min_y, self.avail_width, self.avail_height)
                .execute()?;

        let center = Point2::new(
            self.origin.x + self.avail_width * 0.5 - (min_x + max_x) * 0.5 * scale,
            self.origin.y + self.avail_height * 0.5 - (min_y + max_y) * 0.5 * scale,
        );
        Ok(IsoProjector::new(center, scale))
    }

    fn edges(prism: &PrismVertices, projector: &IsoProjector) -> Vec<IsoEdge> {
        let base: Vec<Point2> = prism.base().iter().map(|p| projector.project(p)).collect();
        let rim: Vec<Point2> = prism.rim().iter().map(|p| projector.project(p)).collect();

        let mut edges = Vec::with_capacity(12);
        for i in 0..4 {
            let j = (i + 1) % 4;
            edges.push(IsoEdge {
                a: base[i],
                b: base[j],
                dashed: false,
            });
            edges.push(IsoEdge {
                a: base[i],
                b: rim[i],
                dashed: false,
            });
            // The open mouth of the excavation is marked by dashes.
            edges.push(IsoEdge {
                a: rim[i],
                b: rim[j],
                dashed: true,
            });
        }
        edges
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn compose(dims: &ExcavationDimensions) -> IsoView {
        let colors = SurfaceColors::default();
        let breakdown = SurfaceBreakdown::derive(dims, &colors);
        ComposeIsoView::new(
            dims,
            &colors,
            &breakdown,
            Point2::new(20.0, 35.0),
            180.0,
            140.0,
        )
        .execute()
        .unwrap()
    }

    fn kinds(view: &IsoView) -> Vec<IsoFaceKind> {
        view.faces.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn painter_order_without_overlap() {
        let view = compose(&ExcavationDimensions::new(4.0, 3.0, 2.5));
        assert_eq!(
            kinds(&view),
            vec![
                IsoFaceKind::Wall(WallSide::Back),
                IsoFaceKind::Wall(WallSide::Left),
                IsoFaceKind::Bottom,
                IsoFaceKind::Wall(WallSide::Right),
                IsoFaceKind::Wall(WallSide::Front),
            ]
        );
    }

    #[test]
    fn painter_order_with_overlap() {
        let view = compose(&ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2));
        assert_eq!(
            kinds(&view),
            vec![
                IsoFaceKind::Wall(WallSide::Back),
                IsoFaceKind::Band(WallSide::Back),
                IsoFaceKind::Wall(WallSide::Left),
                IsoFaceKind::Band(WallSide::Left),
                IsoFaceKind::Bottom,
                IsoFaceKind::Wall(WallSide::Right),
                IsoFaceKind::Band(WallSide::Right),
                IsoFaceKind::Wall(WallSide::Front),
                IsoFaceKind::Band(WallSide::Front),
            ]
        );
    }

    #[test]
    fn facing_walls_are_lightened() {
        let view = compose(&ExcavationDimensions::new(4.0, 3.0, 2.5));
        let colors = SurfaceColors::default();
        let fill_of = |kind: IsoFaceKind| {
            view.faces
                .iter()
                .find(|f| f.kind == kind)
                .map(|f| f.fill)
                .unwrap()
        };
        assert_eq!(fill_of(IsoFaceKind::Wall(WallSide::Back)), colors.sides_long);
        assert_eq!(
            fill_of(IsoFaceKind::Wall(WallSide::Front)),
            colors.sides_long.lighten(LIGHTEN_DELTA)
        );
        assert_eq!(
            fill_of(IsoFaceKind::Wall(WallSide::Right)),
            colors.sides_short.lighten(LIGHTEN_DELTA)
        );
    }

    #[test]
    fn twelve_edges_with_dashed_rim() {
        let view = compose(&ExcavationDimensions::new(4.0, 3.0, 2.5));
        assert_eq!(view.edges.len(), 12);
        assert_eq!(view.edges.iter().filter(|e| e.dashed).count(), 4);
    }

    #[test]
    fn drawing_fits_inside_the_region() {
        let view = compose(&ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2));
        for face in &view.faces {
            for p in &face.points {
                assert!(p.x >= 20.0 && p.x <= 200.0, "x out of region: {}", p.x);
                assert!(p.y >= 35.0 && p.y <= 175.0, "y out of region: {}", p.y);
            }
        }
    }

    #[test]
    fn degenerate_dimensions_stay_finite() {
        let view = compose(&ExcavationDimensions::new(0.0, 0.0, 0.0));
        assert!(view.scale.is_finite());
        for face in &view.faces {
            for p in &face.points {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn walls_carry_area_labels_and_bands_do_not() {
        let view = compose(&ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2));
        for face in &view.faces {
            match face.kind {
                IsoFaceKind::Band(_) => assert!(face.area_label.is_none()),
                _ => assert!(face.area_label.is_some()),
            }
        }
    }
}
