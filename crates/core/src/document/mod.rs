//! INI document parsing, mutation, and serialization.
//!
//! This module provides functionality to:
//! - Parse sectioned `key=value` text into an ordered model
//! - Query and modify keys and sections in place
//! - Serialize the model back to text and to files

pub mod errors;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod types;

pub use errors::DocumentError;
pub use model::Document;
pub use parser::{ParseOptions, parse};
pub use serializer::serialize;
pub use types::{DEFAULT_SECTION, Section, Sections, Value};
