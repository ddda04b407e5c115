use crate::math::Point3;
use crate::model::ExcavationDimensions;

/// The four walls of the excavation, named from the isometric viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// Long wall at −z, farthest from the viewer.
    Back,
    /// Long wall at +z, nearest to the viewer.
    Front,
    /// Short wall at −x.
    Left,
    /// Short wall at +x.
    Right,
}

impl WallSide {
    /// Axis-aligned outward normal of the wall, as (x, z) components.
    #[must_use]
    pub fn outward(&self) -> (f64, f64) {
        match self {
            Self::Back => (0.0, -1.0),
            Self::Front => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// Model-space vertices of the open-topped excavation prism, centered
/// on the origin: 4 base corners at y = 0, 4 rim corners at y = depth,
/// and, when overlap is active, 8 rim corners pushed outward by the
/// overlap width along each wall's outward normal.
///
/// Corner indices run back-left, back-right, front-right, front-left.
#[derive(Debug, Clone, Copy)]
pub struct PrismVertices {
    base: [Point3; 4],
    rim: [Point3; 4],
    sfido: f64,
}

impl PrismVertices {
    /// Builds the prism for the given dimensions.
    #[must_use]
    pub fn new(dims: &ExcavationDimensions) -> Self {
        let hl = dims.length * 0.5;
        let hw = dims.width * 0.5;
        let corner = |y: f64, i: usize| match i {
            0 => Point3::new(-hl, y, -hw),
            1 => Point3::new(hl, y, -hw),
            2 => Point3::new(hl, y, hw),
            _ => Point3::new(-hl, y, hw),
        };
        Self {
            base: [0, 1, 2, 3].map(|i| corner(0.0, i)),
            rim: [0, 1, 2, 3].map(|i| corner(dims.depth, i)),
            sfido: dims.sfido,
        }
    }

    /// The four base corners at y = 0.
    #[must_use]
    pub fn base(&self) -> &[Point3; 4] {
        &self.base
    }

    /// The four rim corners at y = depth.
    #[must_use]
    pub fn rim(&self) -> &[Point3; 4] {
        &self.rim
    }

    /// The rim corner indices belonging to a wall, ordered along the rim.
    #[must_use]
    pub fn wall_corners(side: WallSide) -> [usize; 2] {
        match side {
            WallSide::Back => [0, 1],
            WallSide::Right => [1, 2],
            WallSide::Front => [3, 2],
            WallSide::Left => [0, 3],
        }
    }

    /// A wall face as a model-space quad, base edge first.
    #[must_use]
    pub fn wall(&self, side: WallSide) -> [Point3; 4] {
        let [a, b] = Self::wall_corners(side);
        [self.base[a], self.base[b], self.rim[b], self.rim[a]]
    }

    /// The bottom face as a model-space quad.
    #[must_use]
    pub fn bottom(&self) -> [Point3; 4] {
        self.base
    }

    /// A rim corner pushed outward by the overlap width along the
    /// wall's outward normal.
    #[must_use]
    pub fn extended_rim(&self, side: WallSide, corner: usize) -> Point3 {
        let (nx, nz) = side.outward();
        let p = self.rim[corner];
        Point3::new(p.x + nx * self.sfido, p.y, p.z + nz * self.sfido)
    }

    /// The overlap band of a wall: the quad between its rim edge and
    /// the outward-extended counterpart.
    #[must_use]
    pub fn overlap_band(&self, side: WallSide) -> [Point3; 4] {
        let [a, b] = Self::wall_corners(side);
        [
            self.rim[a],
            self.rim[b],
            self.extended_rim(side, b),
            self.extended_rim(side, a),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn prism() -> PrismVertices {
        PrismVertices::new(&ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2))
    }

    #[test]
    fn base_and_rim_heights() {
        let p = prism();
        for v in p.base() {
            assert_relative_eq!(v.y, 0.0);
        }
        for v in p.rim() {
            assert_relative_eq!(v.y, 2.5);
        }
    }

    #[test]
    fn corners_are_centered() {
        let p = prism();
        assert_relative_eq!(p.base()[0].x, -2.0);
        assert_relative_eq!(p.base()[0].z, -1.5);
        assert_relative_eq!(p.base()[2].x, 2.0);
        assert_relative_eq!(p.base()[2].z, 1.5);
    }

    #[test]
    fn extension_follows_outward_normal() {
        let p = prism();
        let back = p.extended_rim(WallSide::Back, 0);
        assert_relative_eq!(back.z, -1.7);
        assert_relative_eq!(back.x, -2.0);
        let right = p.extended_rim(WallSide::Right, 1);
        assert_relative_eq!(right.x, 2.2);
        assert_relative_eq!(right.z, -1.5);
    }

    #[test]
    fn overlap_band_stays_at_rim_height() {
        let p = prism();
        for v in p.overlap_band(WallSide::Front) {
            assert_relative_eq!(v.y, 2.5);
        }
    }

    #[test]
    fn wall_quad_uses_base_edge_first() {
        let p = prism();
        let wall = p.wall(WallSide::Back);
        assert_relative_eq!(wall[0].y, 0.0);
        assert_relative_eq!(wall[1].y, 0.0);
        assert_relative_eq!(wall[2].y, 2.5);
        assert_relative_eq!(wall[3].y, 2.5);
    }
}
