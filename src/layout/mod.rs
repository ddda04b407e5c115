pub mod compose;
pub mod fit;
pub mod flat;
pub mod prism;

pub use compose::{ComposeIsoView, IsoEdge, IsoFace, IsoFaceKind, IsoView};
pub use fit::FitScale;
pub use flat::{FlatFace, FlatLayout, FlatStrip, FoldLine, PlanFlatLayout};
pub use prism::{PrismVertices, WallSide};

/// Scaled strip width below which overlap strips are not drawn at all,
/// in page units. One policy shared by both report pages.
pub const STRIP_DRAW_THRESHOLD: f64 = 2.0;

/// Scaled strip width below which strips are drawn without a label.
pub const STRIP_LABEL_THRESHOLD: f64 = 6.0;
