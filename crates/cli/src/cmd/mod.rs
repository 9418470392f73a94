pub mod dump;
pub mod get;
pub mod has;
pub mod remove;
pub mod set;

use iniparser_core::config::loader::ConfigLoader;
use iniparser_core::{Document, ParseOptions};
use std::path::Path;

use crate::logging;

/// Resolved settings shared by every command.
pub struct Session {
    pub options: ParseOptions,
}

impl Session {
    /// Load configuration, install logging, and apply flag overrides.
    pub fn start(config: Option<&Path>, no_sections: bool, no_repeat: bool) -> Self {
        let rc = match ConfigLoader::load(config) {
            Ok(rc) => rc,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        };

        logging::init(&rc.logging);

        let mut options = rc.format;
        if no_sections {
            options.sections = false;
        }
        if no_repeat {
            options.allow_repeated_values = false;
        }
        tracing::debug!(?options, "session started");

        Self { options }
    }

    pub fn open(&self, file: &Path) -> Document {
        match Document::read_from_file_with(file, self.options) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    /// Write `doc` back to the file it was read from.
    pub fn save(&self, doc: &Document) {
        match doc.write(self.options.sections, None) {
            Ok(true) => {}
            Ok(false) => {
                let path = doc.path().map(|p| p.display().to_string()).unwrap_or_default();
                eprintln!("Error: failed to write {}", path);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
