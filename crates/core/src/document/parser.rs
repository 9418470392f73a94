//! Line-oriented parsing of INI text.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::types::{DEFAULT_SECTION, Section, Sections, Value};

static SECTION_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[([^\]]+)\]\s*$").unwrap());

static KEY_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]+)=(.*)$").unwrap());

/// Switches controlling how text is mapped onto sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Honour `[section]` headers. When off, every pair lands in `default`.
    pub sections: bool,
    /// Accumulate repeated keys into [`Value::Multi`] instead of overwriting.
    pub allow_repeated_values: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { sections: true, allow_repeated_values: true }
    }
}

impl ParseOptions {
    pub fn new(sections: bool, allow_repeated_values: bool) -> Self {
        Self { sections, allow_repeated_values }
    }
}

/// Parse INI text into an ordered section map.
///
/// With sections on, a key assigned again anywhere in the same section is a
/// repeat, including after the section is reopened by a second header. With
/// sections off, every block folds into `default` and a key only repeats
/// within one header block; assigning it again after a later header
/// overwrites the earlier value.
///
/// Any input is accepted. Lines that are neither a `[section]` header nor a
/// `key=value` pair are skipped:
/// ```text
/// top=level        -> default.top
/// [server]
/// host = example   -> server.host
/// not a pair       (ignored)
/// ```
pub fn parse(content: &str, options: ParseOptions) -> Sections {
    let mut sections = Sections::new();
    if content.is_empty() {
        return sections;
    }

    let mut current: Option<&str> = None;
    let mut block_keys: HashSet<&str> = HashSet::new();

    for (number, line) in content.split('\n').enumerate() {
        if let Some(caps) = SECTION_HEADER_RE.captures(line) {
            current = caps.get(1).map(|m| m.as_str());
            block_keys.clear();
            continue;
        }

        let Some((key, value)) = split_pair(line) else {
            if !line.trim().is_empty() {
                tracing::trace!(line = number + 1, "skipping unrecognised line");
            }
            continue;
        };

        let target = match current {
            Some(name) if options.sections => name,
            _ => DEFAULT_SECTION,
        };

        let seen_in_block = !block_keys.insert(key);
        let section = sections.entry(target.to_string()).or_insert_with(Section::new);
        let repeated = if options.sections { section.contains_key(key) } else { seen_in_block };
        let repeat = options.allow_repeated_values && repeated;
        insert_value(section, key, value, repeat);
    }

    sections
}

/// Extract a trimmed key and value from a `key=value` line.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    let caps = KEY_VALUE_RE.captures(line)?;
    let key = caps.get(1)?.as_str().trim();
    let value = caps.get(2)?.as_str().trim();
    Some((key, value))
}

fn insert_value(section: &mut Section, key: &str, value: &str, repeat: bool) {
    match section.get_mut(key) {
        Some(existing) if repeat => existing.push(value.to_string()),
        Some(existing) => *existing = Value::Single(value.to_string()),
        None => {
            section.insert(key.to_string(), Value::Single(value.to_string()));
        }
    }
}
