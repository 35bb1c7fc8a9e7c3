use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("series `{name}` is empty")]
    EmptySeries { name: &'static str },

    #[error("relative change of `{name}` at iteration {index} divides by a zero reference sample")]
    ZeroReference { name: &'static str, index: usize },

    #[error("`{name}` has a non-finite sample at index {index}")]
    NonFiniteSample { name: &'static str, index: usize },

    #[error("iteration {requested} is outside the layer table (0..{rows})")]
    SnapshotOutOfRange { requested: usize, rows: usize },

    #[error("`{name}` has {found} entries, expected {expected}")]
    LengthMismatch { name: &'static str, expected: usize, found: usize },

    #[error("failed to render {path}: {message}")]
    Render { path: String, message: String },

    #[error("failed to write {path}: {source}")]
    FigureWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
