use std::f64::consts::FRAC_PI_6;

use super::{Point2, Point3};

/// Fixed axonometric angle of the isometric view (30°).
pub const ISO_ANGLE: f64 = FRAC_PI_6;

/// Maps 3D model-space points to 2D page points under a fixed 30°
/// axonometric transform.
///
/// Model space is y-up, page space is y-down, hence the `y` subtraction.
/// The projector is stateless apart from its configuration: identical
/// inputs always produce bit-identical outputs.
#[derive(Debug, Clone, Copy)]
pub struct IsoProjector {
    center: Point2,
    scale: f64,
}

impl IsoProjector {
    /// Creates a projector centered at `center`, with model coordinates
    /// multiplied by `scale` before projection.
    #[must_use]
    pub fn new(center: Point2, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Returns the page-space center of the projection.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the linear model-to-page scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Projects a model-space point to page coordinates.
    #[must_use]
    pub fn project(&self, p: &Point3) -> Point2 {
        let x = p.x * self.scale;
        let y = p.y * self.scale;
        let z = p.z * self.scale;
        Point2::new(
            self.center.x + (x - z) * ISO_ANGLE.cos(),
            self.center.y - y + (x + z) * ISO_ANGLE.sin(),
        )
    }

    /// Projects every point of a polygon, preserving order.
    #[must_use]
    pub fn project_polygon(&self, points: &[Point3]) -> Vec<Point2> {
        points.iter().map(|p| self.project(p)).collect()
    }

    /// Projects the centroid of a set of model-space points.
    ///
    /// Returns the projection center for an empty set.
    #[must_use]
    pub fn project_centroid(&self, points: &[Point3]) -> Point2 {
        if points.is_empty() {
            return self.center;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let mut sum = Point3::origin();
        for p in points {
            sum.coords += p.coords;
        }
        self.project(&Point3::from(sum.coords / n))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_projects_to_center() {
        let proj = IsoProjector::new(Point2::new(100.0, 50.0), 3.0);
        let p = proj.project(&Point3::origin());
        assert_relative_eq!(p.x, 100.0);
        assert_relative_eq!(p.y, 50.0);
    }

    #[test]
    fn unit_x_projects_along_iso_axis() {
        let proj = IsoProjector::new(Point2::new(0.0, 0.0), 1.0);
        let p = proj.project(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, ISO_ANGLE.cos());
        assert_relative_eq!(p.y, ISO_ANGLE.sin());
    }

    #[test]
    fn unit_y_moves_up_the_page() {
        let proj = IsoProjector::new(Point2::new(10.0, 10.0), 1.0);
        let p = proj.project(&Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(p.x, 10.0);
        assert_relative_eq!(p.y, 9.0);
    }

    #[test]
    fn projection_is_deterministic() {
        let proj = IsoProjector::new(Point2::new(42.5, 17.25), 2.375);
        let p = Point3::new(1.3, 2.7, -0.9);
        let a = proj.project(&p);
        let b = proj.project(&p);
        assert_eq!(a, b);
    }

    #[test]
    fn scale_is_applied_before_projection() {
        let proj = IsoProjector::new(Point2::new(0.0, 0.0), 10.0);
        let p = proj.project(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 10.0 * ISO_ANGLE.cos());
        assert_relative_eq!(p.y, 10.0 * ISO_ANGLE.sin());
    }

    #[test]
    fn centroid_of_square_face() {
        let proj = IsoProjector::new(Point2::new(0.0, 0.0), 1.0);
        let face = [
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(-1.0, 0.0, 1.0),
        ];
        let c = proj.project_centroid(&face);
        assert_relative_eq!(c.x, 0.0);
        assert_relative_eq!(c.y, 0.0);
    }
}
