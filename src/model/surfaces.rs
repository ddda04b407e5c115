use crate::error::Result;
use crate::model::color::Rgb;
use crate::model::dimensions::ExcavationDimensions;

/// Per-surface fill colors for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceColors {
    pub bottom: Rgb,
    pub sides_long: Rgb,
    pub sides_short: Rgb,
    pub sfido: Rgb,
}

impl SurfaceColors {
    /// Parses the four `#RRGGBB` strings supplied by the UI layer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ModelError::InvalidColor`] on the first
    /// malformed string.
    pub fn parse(bottom: &str, sides_long: &str, sides_short: &str, sfido: &str) -> Result<Self> {
        Ok(Self {
            bottom: Rgb::parse(bottom)?,
            sides_long: Rgb::parse(sides_long)?,
            sides_short: Rgb::parse(sides_short)?,
            sfido: Rgb::parse(sfido)?,
        })
    }

    /// Returns the fill color for a structural face class.
    #[must_use]
    pub fn for_class(&self, class: SurfaceClass) -> Rgb {
        match class {
            SurfaceClass::Bottom => self.bottom,
            SurfaceClass::SideLong => self.sides_long,
            SurfaceClass::SideShort => self.sides_short,
        }
    }
}

impl Default for SurfaceColors {
    /// Earth-toned defaults matching the live-scene materials.
    fn default() -> Self {
        Self {
            bottom: Rgb::new(0x8B, 0x5A, 0x2B),
            sides_long: Rgb::new(0xA0, 0x6A, 0x35),
            sides_short: Rgb::new(0xB0, 0x7A, 0x40),
            sfido: Rgb::new(0x4C, 0xAF, 0x50),
        }
    }
}

/// The three structural face classes of the excavation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceClass {
    Bottom,
    SideLong,
    SideShort,
}

impl SurfaceClass {
    /// Stable iteration order used by tables and legends.
    pub const ALL: [Self; 3] = [Self::Bottom, Self::SideLong, Self::SideShort];

    /// Human-readable name of the class.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bottom => "Bottom",
            Self::SideLong => "Long side",
            Self::SideShort => "Short side",
        }
    }

    /// How many faces of this class the excavation has.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        match self {
            Self::Bottom => 1,
            Self::SideLong | Self::SideShort => 2,
        }
    }
}

/// Derived description of one face class, recomputed per export.
#[derive(Debug, Clone)]
pub struct SurfaceData {
    pub class: SurfaceClass,
    pub label: &'static str,
    pub area: f64,
    pub area_with_overlap: f64,
    pub color: Rgb,
    pub dimensions_label: String,
    pub dimensions_with_overlap_label: String,
}

/// Derived areas of the four rim overlap strips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapSummary {
    pub long_strip_area: f64,
    pub short_strip_area: f64,
    pub total_strip_area: f64,
    pub strip_width: f64,
}

/// Derived area totals, overlap excluded and included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total_area: f64,
    pub total_area_with_overlap: f64,
}

/// The full derived surface model: pure function of dimensions and colors,
/// recomputed on every export. No state survives a model change.
#[derive(Debug, Clone)]
pub struct SurfaceBreakdown {
    surfaces: [SurfaceData; 3],
    overlap: OverlapSummary,
    totals: Totals,
}

impl SurfaceBreakdown {
    /// Derives surface data, overlap summary and totals from the model.
    #[must_use]
    pub fn derive(dims: &ExcavationDimensions, colors: &SurfaceColors) -> Self {
        let surfaces = SurfaceClass::ALL.map(|class| {
            let (a, b) = match class {
                SurfaceClass::Bottom => (dims.length, dims.width),
                SurfaceClass::SideLong => (dims.length, dims.depth),
                SurfaceClass::SideShort => (dims.width, dims.depth),
            };
            // The overlap strip extends walls past the rim; the bottom is unaffected.
            let b_overlap = match class {
                SurfaceClass::Bottom => b,
                SurfaceClass::SideLong | SurfaceClass::SideShort => b + dims.sfido,
            };
            SurfaceData {
                class,
                label: class.label(),
                area: a * b,
                area_with_overlap: a * b_overlap,
                color: colors.for_class(class),
                dimensions_label: format_meters(a, b),
                dimensions_with_overlap_label: format_meters(a, b_overlap),
            }
        });

        let long_strip_area = dims.length * dims.sfido * 2.0;
        let short_strip_area = dims.width * dims.sfido * 2.0;
        let overlap = OverlapSummary {
            long_strip_area,
            short_strip_area,
            total_strip_area: long_strip_area + short_strip_area,
            strip_width: dims.sfido,
        };

        let total_area = surfaces
            .iter()
            .map(|s| s.area * f64::from(s.class.quantity()))
            .sum();
        let totals = Totals {
            total_area,
            total_area_with_overlap: total_area + overlap.total_strip_area,
        };

        Self {
            surfaces,
            overlap,
            totals,
        }
    }

    /// The three per-class records, in [`SurfaceClass::ALL`] order.
    #[must_use]
    pub fn surfaces(&self) -> &[SurfaceData; 3] {
        &self.surfaces
    }

    /// The record for one class.
    #[must_use]
    pub fn surface(&self, class: SurfaceClass) -> &SurfaceData {
        match class {
            SurfaceClass::Bottom => &self.surfaces[0],
            SurfaceClass::SideLong => &self.surfaces[1],
            SurfaceClass::SideShort => &self.surfaces[2],
        }
    }

    /// The overlap strip summary.
    #[must_use]
    pub fn overlap(&self) -> &OverlapSummary {
        &self.overlap
    }

    /// The grand totals.
    #[must_use]
    pub fn totals(&self) -> &Totals {
        &self.totals
    }
}

/// Formats a pair of dimensions as `"{a} × {b} m"` with fixed-point rounding.
#[must_use]
pub fn format_meters(a: f64, b: f64) -> String {
    format!("{a:.2} × {b:.2} m")
}

/// Formats an area as `"{value} m²"` with fixed-point rounding.
#[must_use]
pub fn format_area(value: f64) -> String {
    format!("{value:.2} m²")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn standard_box(sfido: f64) -> SurfaceBreakdown {
        let dims = ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(sfido);
        SurfaceBreakdown::derive(&dims, &SurfaceColors::default())
    }

    #[test]
    fn standard_box_areas() {
        let breakdown = standard_box(0.0);
        assert_relative_eq!(breakdown.surface(SurfaceClass::Bottom).area, 12.0);
        assert_relative_eq!(breakdown.surface(SurfaceClass::SideLong).area, 10.0);
        assert_relative_eq!(breakdown.surface(SurfaceClass::SideShort).area, 7.5);
        assert_relative_eq!(breakdown.totals().total_area, 47.0);
    }

    #[test]
    fn standard_box_with_overlap() {
        let breakdown = standard_box(0.2);
        let overlap = breakdown.overlap();
        assert_relative_eq!(overlap.long_strip_area, 1.6);
        assert_relative_eq!(overlap.short_strip_area, 1.2);
        assert_relative_eq!(overlap.total_strip_area, 2.8);
        assert_relative_eq!(breakdown.totals().total_area_with_overlap, 49.8);
    }

    #[test]
    fn total_is_weighted_sum_of_classes() {
        let dims = ExcavationDimensions::new(7.3, 2.1, 1.4);
        let breakdown = SurfaceBreakdown::derive(&dims, &SurfaceColors::default());
        let expected = 7.3 * 2.1 + 2.0 * (7.3 * 1.4) + 2.0 * (2.1 * 1.4);
        assert_relative_eq!(breakdown.totals().total_area, expected);
    }

    #[test]
    fn zero_sfido_means_no_strip_area() {
        let breakdown = standard_box(0.0);
        assert_relative_eq!(breakdown.overlap().total_strip_area, 0.0);
        assert_relative_eq!(
            breakdown.totals().total_area,
            breakdown.totals().total_area_with_overlap
        );
    }

    #[test]
    fn degenerate_dimensions_collapse_to_zero() {
        let dims = ExcavationDimensions::new(0.0, 3.0, 2.5);
        let breakdown = SurfaceBreakdown::derive(&dims, &SurfaceColors::default());
        assert_relative_eq!(breakdown.surface(SurfaceClass::Bottom).area, 0.0);
        assert_relative_eq!(breakdown.surface(SurfaceClass::SideLong).area, 0.0);
        assert_relative_eq!(breakdown.surface(SurfaceClass::SideShort).area, 7.5);
    }

    #[test]
    fn wall_overlap_extends_past_the_rim() {
        let breakdown = standard_box(0.2);
        let long = breakdown.surface(SurfaceClass::SideLong);
        assert_relative_eq!(long.area_with_overlap, 4.0 * 2.7);
        assert_eq!(long.dimensions_label, "4.00 × 2.50 m");
        assert_eq!(long.dimensions_with_overlap_label, "4.00 × 2.70 m");
    }

    #[test]
    fn labels_use_fixed_point_meters() {
        assert_eq!(format_meters(4.0, 3.0), "4.00 × 3.00 m");
        assert_eq!(format_area(49.8), "49.80 m²");
    }
}
