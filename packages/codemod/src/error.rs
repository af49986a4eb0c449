//! Transform Errors
//!
//! The rewrite decisions themselves never fail; errors only come from the
//! pipeline around them (parsing, file types, options).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// The parser reported errors; nothing was rewritten.
    #[error("failed to parse {path}: {}", .diagnostics.join("; "))]
    Parse {
        path: String,
        diagnostics: Vec<String>,
    },

    #[error("unsupported file extension: {path}")]
    UnsupportedExtension { path: String },

    #[error("invalid quote style `{0}` (expected `single` or `double`)")]
    InvalidQuoteStyle(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
