use crate::error::Result;
use crate::layout::fit::FitScale;
use crate::layout::prism::WallSide;
use crate::layout::{STRIP_DRAW_THRESHOLD, STRIP_LABEL_THRESHOLD};
use crate::math::Point2;
use crate::model::surfaces::format_meters;
use crate::model::{ExcavationDimensions, Rgb, SurfaceClass, SurfaceColors};

/// One face rectangle of the unfolded cross, in page coordinates.
#[derive(Debug, Clone)]
pub struct FlatFace {
    pub class: SurfaceClass,
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub label: &'static str,
    pub dimensions_label: String,
}

/// A dashed fold line along a shared base/wall edge.
#[derive(Debug, Clone, Copy)]
pub struct FoldLine {
    pub a: Point2,
    pub b: Point2,
}

/// An overlap strip band just outside a wall's outer edge.
#[derive(Debug, Clone)]
pub struct FlatStrip {
    pub side: WallSide,
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    /// Present only when the strip is wide enough to carry legible text.
    pub label: Option<String>,
}

/// The planned unfolded layout: base centered, long walls above and
/// below, short walls left and right, strips fringing the perimeter.
#[derive(Debug, Clone)]
pub struct FlatLayout {
    pub scale: f64,
    pub faces: Vec<FlatFace>,
    pub folds: Vec<FoldLine>,
    pub strips: Vec<FlatStrip>,
}

/// Plans the unfolded cross-shaped arrangement of the five faces for a
/// rectangular page region.
pub struct PlanFlatLayout<'a> {
    dims: &'a ExcavationDimensions,
    colors: &'a SurfaceColors,
    origin: Point2,
    avail_width: f64,
    avail_height: f64,
}

impl<'a> PlanFlatLayout<'a> {
    /// Creates a planner for the region with top-left corner `origin`.
    #[must_use]
    pub fn new(
        dims: &'a ExcavationDimensions,
        colors: &'a SurfaceColors,
        origin: Point2,
        avail_width: f64,
        avail_height: f64,
    ) -> Self {
        Self {
            dims,
            colors,
            origin,
            avail_width,
            avail_height,
        }
    }

    /// Executes the planning step.
    ///
    /// # Errors
    ///
    /// Returns an error if the page region is empty. Degenerate
    /// excavation dimensions are legal and yield finite coordinates.
    pub fn execute(&self) -> Result<FlatLayout> {
        let d = self.dims;
        // Per side, strips reserve the strip itself plus an equal
        // clearance band so they never touch the region edge.
        let allowance = if d.has_overlap() { 2.0 * d.sfido } else { 0.0 };
        let raw_w = d.length + 2.0 * (d.depth + allowance);
        let raw_h = d.width + 2.0 * (d.depth + allowance);

        let scale = FitScale::new(raw_w, raw_h, self.avail_width, self.avail_height).execute()?;

        let base_w = d.length * scale;
        let base_h = d.width * scale;
        let wall_d = d.depth * scale;
        let strip_w = d.sfido * scale;

        // Base top-left corner, cross centered in the region.
        let base = Point2::new(
            self.origin.x + (self.avail_width - base_w) * 0.5,
            self.origin.y + (self.avail_height - base_h) * 0.5,
        );

        let face = |class: SurfaceClass, origin: Point2, width: f64, height: f64| {
            let (a, b) = match class {
                SurfaceClass::Bottom => (d.length, d.width),
                SurfaceClass::SideLong => (d.length, d.depth),
                SurfaceClass::SideShort => (d.width, d.depth),
            };
            FlatFace {
                class,
                origin,
                width,
                height,
                color: self.colors.for_class(class),
                label: class.label(),
                dimensions_label: format_meters(a, b),
            }
        };

        let faces = vec![
            face(SurfaceClass::Bottom, base, base_w, base_h),
            // Long walls unfold above and below the base.
            face(
                SurfaceClass::SideLong,
                Point2::new(base.x, base.y - wall_d),
                base_w,
                wall_d,
            ),
            face(
                SurfaceClass::SideLong,
                Point2::new(base.x, base.y + base_h),
                base_w,
                wall_d,
            ),
            // Short walls unfold left and right.
            face(
                SurfaceClass::SideShort,
                Point2::new(base.x - wall_d, base.y),
                wall_d,
                base_h,
            ),
            face(
                SurfaceClass::SideShort,
                Point2::new(base.x + base_w, base.y),
                wall_d,
                base_h,
            ),
        ];

        let folds = vec![
            FoldLine {
                a: base,
                b: Point2::new(base.x + base_w, base.y),
            },
            FoldLine {
                a: Point2::new(base.x, base.y + base_h),
                b: Point2::new(base.x + base_w, base.y + base_h),
            },
            FoldLine {
                a: base,
                b: Point2::new(base.x, base.y + base_h),
            },
            FoldLine {
                a: Point2::new(base.x + base_w, base.y),
                b: Point2::new(base.x + base_w, base.y + base_h),
            },
        ];

        let strips = if strip_w > STRIP_DRAW_THRESHOLD {
            self.plan_strips(base, base_w, base_h, wall_d, strip_w)
        } else {
            Vec::new()
        };

        Ok(FlatLayout {
            scale,
            faces,
            folds,
            strips,
        })
    }

    fn plan_strips(
        &self,
        base: Point2,
        base_w: f64,
        base_h: f64,
        wall_d: f64,
        strip_w: f64,
    ) -> Vec<FlatStrip> {
        let d = self.dims;
        let color = self.colors.sfido;
        let labeled = strip_w > STRIP_LABEL_THRESHOLD;
        let long_label = || labeled.then(|| format_meters(d.length, d.sfido));
        let short_label = || labeled.then(|| format_meters(d.width, d.sfido));

        vec![
            FlatStrip {
                side: WallSide::Back,
                origin: Point2::new(base.x, base.y - wall_d - strip_w),
                width: base_w,
                height: strip_w,
                color,
                label: long_label(),
            },
            FlatStrip {
                side: WallSide::Front,
                origin: Point2::new(base.x, base.y + base_h + wall_d),
                width: base_w,
                height: strip_w,
                color,
                label: long_label(),
            },
            FlatStrip {
                side: WallSide::Left,
                origin: Point2::new(base.x - wall_d - strip_w, base.y),
                width: strip_w,
                height: base_h,
                color,
                label: short_label(),
            },
            FlatStrip {
                side: WallSide::Right,
                origin: Point2::new(base.x + base_w + wall_d, base.y),
                width: strip_w,
                height: base_h,
                color,
                label: short_label(),
            },
        ]
    }
}
