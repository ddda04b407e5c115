pub mod color;
pub mod dimensions;
pub mod surfaces;

pub use color::Rgb;
pub use dimensions::ExcavationDimensions;
pub use surfaces::{
    OverlapSummary, SurfaceBreakdown, SurfaceClass, SurfaceColors, SurfaceData, Totals,
};
