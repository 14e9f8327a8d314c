//! CLI command implementations.
//!
//! The single `minify` command owns the two-pass batch run: a collection
//! pass that only counts class usage, followed by either a preview of the
//! resulting map or a rewrite pass that applies it file by file.

pub mod minify;

pub use minify::{run, MinifyConfig};
