//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("unknown {vocabulary} keyword: {keyword}")]
    UnknownKeyword {
        vocabulary: &'static str,
        keyword: String,
    },

    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("no element at path {0:?}")]
    InvalidPath(Vec<usize>),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
