//! The in-memory document and its query/mutation API.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::DocumentError;
use super::parser::{ParseOptions, parse};
use super::serializer::serialize;
use super::types::{DEFAULT_SECTION, Section, Sections, Value};

/// An INI document: ordered sections plus the file it was read from, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Sections,
    path: Option<PathBuf>,
}

impl Document {
    /// Create an empty document with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `content` into a fresh document.
    pub fn parse(content: &str, options: ParseOptions) -> Self {
        Self { sections: parse(content, options), path: None }
    }

    pub fn read_from_string(
        content: &str,
        sections_enabled: bool,
        allow_repeated_values: bool,
    ) -> Self {
        Self::parse(content, ParseOptions::new(sections_enabled, allow_repeated_values))
    }

    /// Read and parse a file, remembering its path for later [`write`](Self::write) calls.
    /// Repeated keys are accumulated.
    pub fn read_from_file(
        path: impl AsRef<Path>,
        sections_enabled: bool,
    ) -> Result<Self, DocumentError> {
        Self::read_from_file_with(path, ParseOptions::new(sections_enabled, true))
    }

    pub fn read_from_file_with(
        path: impl AsRef<Path>,
        options: ParseOptions,
    ) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DocumentError::Read { path: path.to_path_buf(), source: e })?;

        let mut doc = Self::parse(&content, options);
        doc.path = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            sections = doc.sections.len(),
            "read document"
        );
        Ok(doc)
    }

    /// The parsed section map.
    pub fn raw_data(&self) -> &Sections {
        &self.sections
    }

    /// Path the document was read from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections, including `default` when present.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn build_output(&self, sections_enabled: bool) -> String {
        serialize(&self.sections, sections_enabled)
    }

    /// Serialize to `path`, or to the file the document was read from.
    ///
    /// Returns `Ok(false)` when the write itself fails. Having no target path
    /// at all is an error, reported before anything is written.
    pub fn write(
        &self,
        sections_enabled: bool,
        path: Option<&Path>,
    ) -> Result<bool, DocumentError> {
        let target = path.or(self.path.as_deref()).ok_or(DocumentError::MissingPath)?;

        match fs::write(target, self.build_output(sections_enabled)) {
            Ok(()) => {
                tracing::debug!(path = %target.display(), "wrote document");
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("Failed to write {}: {}", target.display(), e);
                Ok(false)
            }
        }
    }

    /// Look up a key. A `None` section means `default`.
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&Value> {
        self.sections.get(section.unwrap_or(DEFAULT_SECTION))?.get(key)
    }

    /// Check whether a section, a default key, or a key in a section exists.
    pub fn has(&self, section: Option<&str>, key: Option<&str>) -> Result<bool, DocumentError> {
        Ok(match (section, key) {
            (None, None) => return Err(both_absent()),
            (Some(section), None) => self.sections.contains_key(section),
            (section, Some(key)) => self.get(section, key).is_some(),
        })
    }

    /// Assign `value` to `key`, creating the section if needed.
    ///
    /// An existing key keeps its position and is replaced by a single value.
    pub fn set(
        &mut self,
        section: Option<&str>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let name = section.unwrap_or(DEFAULT_SECTION).to_string();
        self.sections
            .entry(name)
            .or_default()
            .insert(key.into(), Value::Single(value.into()));
        self
    }

    /// Remove a section, a default key, or a key in a section.
    ///
    /// Missing targets are ignored. Removing by section name is refused while
    /// the only section is the implicit `default` one. A section left without
    /// keys is dropped, since text cannot express an empty section.
    pub fn remove(&mut self, section: Option<&str>, key: Option<&str>) -> Result<(), DocumentError> {
        match (section, key) {
            (None, None) => return Err(both_absent()),
            (None, Some(key)) => self.remove_key(DEFAULT_SECTION, key),
            (Some(section), key) => {
                self.ensure_sections_in_use()?;
                match key {
                    None => {
                        self.sections.shift_remove(section);
                    }
                    Some(key) => self.remove_key(section, key),
                }
            }
        }
        Ok(())
    }

    fn remove_key(&mut self, section: &str, key: &str) {
        let Some(entries) = self.sections.get_mut(section) else {
            return;
        };
        entries.shift_remove(key);
        if entries.is_empty() {
            self.sections.shift_remove(section);
        }
    }

    fn ensure_sections_in_use(&self) -> Result<(), DocumentError> {
        if self.sections.len() == 1 && self.sections.contains_key(DEFAULT_SECTION) {
            return Err(DocumentError::InvalidArgument(
                "cannot remove by section when no sections are in use".to_string(),
            ));
        }
        Ok(())
    }
}

fn both_absent() -> DocumentError {
    DocumentError::InvalidArgument("section and key cannot both be absent".to_string())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_output(true))
    }
}
