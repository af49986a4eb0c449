#![deny(clippy::all)]

/**
 * Object Shorthand - Rust Implementation
 *
 * Rewrites object-literal properties into shorthand properties and
 * shorthand methods wherever that preserves semantics.
 */

// Decision modules
pub mod identifier;
pub mod self_reference;
pub mod simplify;

// Tree passes
pub mod rewriter;
pub mod scanner;

// Pipeline
pub mod error;
pub mod options;
pub mod transform;

// Re-exports
pub use error::{Result, TransformError};
pub use options::{PrintOptions, QuoteStyle, TransformOptions};
pub use simplify::{can_simplify, Key, Simplification, Value};
pub use transform::{
    simplify_program, source_type_for_path, transform_file, transform_source, TransformOutput,
    TransformStats,
};
