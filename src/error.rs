use thiserror::Error;

/// Top-level error type for the scavo report engine.
#[derive(Debug, Error)]
pub enum ScavoError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors related to the excavation model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid color {value:?}: expected '#' followed by 6 hex digits")]
    InvalidColor { value: String },
}

/// Errors related to page-layout computations.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("drawing region {width} x {height} is empty")]
    EmptyRegion { width: f64, height: f64 },
}

/// Errors related to document assembly and serialization.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document has no pages")]
    EmptyDocument,

    #[error("I/O error while writing document")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`ScavoError`].
pub type Result<T> = std::result::Result<T, ScavoError>;
