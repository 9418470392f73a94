#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod document;

pub use document::{DEFAULT_SECTION, Document, DocumentError, ParseOptions, Sections, Value};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
