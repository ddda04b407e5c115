/// Geometric parameters of a rectangular excavation, in meters.
///
/// All values are assumed finite and non-negative; the calling UI is
/// responsible for clamping before handing them over. Zero values are
/// legal and collapse the corresponding faces to zero area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcavationDimensions {
    pub length: f64,
    pub width: f64,
    pub depth: f64,
    /// Edge-overlap allowance ("sfido"). Zero disables overlap strips.
    pub sfido: f64,
}

impl ExcavationDimensions {
    /// Creates dimensions without an overlap allowance.
    #[must_use]
    pub fn new(length: f64, width: f64, depth: f64) -> Self {
        Self {
            length,
            width,
            depth,
            sfido: 0.0,
        }
    }

    /// Sets the edge-overlap allowance.
    #[must_use]
    pub fn with_sfido(mut self, sfido: f64) -> Self {
        self.sfido = sfido;
        self
    }

    /// Excavation volume in cubic meters.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.depth
    }

    /// Whether overlap strips are active.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        self.sfido > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn volume_of_standard_box() {
        let dims = ExcavationDimensions::new(4.0, 3.0, 2.5);
        assert_relative_eq!(dims.volume(), 30.0);
    }

    #[test]
    fn overlap_flag_follows_sfido() {
        let dims = ExcavationDimensions::new(4.0, 3.0, 2.5);
        assert!(!dims.has_overlap());
        assert!(dims.with_sfido(0.2).has_overlap());
    }
}
