pub mod document;
pub mod error;
pub mod layout;
pub mod math;
pub mod model;
pub mod report;

pub use error::{Result, ScavoError};
pub use model::{ExcavationDimensions, SurfaceBreakdown, SurfaceColors};
pub use report::ExportReport;
