#![deny(clippy::all)]

/**
 * Object Shorthand CLI
 *
 * Command-line runner that applies the object-shorthand transform to files
 * and directories.
 */
pub use object_shorthand as transform;

pub mod cli;
pub mod config;
pub mod runner;
pub mod tracing_config;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
