//! Serialization of sections back to INI text.

use super::types::{DEFAULT_SECTION, Section, Sections};

/// Serialize sections to INI text.
///
/// With `sections_enabled`, every section is written under a `[name]` header
/// and followed by a blank line. The `default` section never gets a header,
/// so its pairs come first, ahead of any header. Sections without keys are
/// skipped, as parsing could not bring them back. Without `sections_enabled`,
/// only the `default` section's pairs are written. Values are emitted verbatim.
pub fn serialize(sections: &Sections, sections_enabled: bool) -> String {
    let mut out = String::new();

    if sections_enabled {
        if let Some(section) = sections.get(DEFAULT_SECTION)
            && !section.is_empty()
        {
            write_pairs(&mut out, section);
            out.push('\n');
        }
        let named = sections
            .iter()
            .filter(|(name, section)| *name != DEFAULT_SECTION && !section.is_empty());
        for (name, section) in named {
            out.push('[');
            out.push_str(name);
            out.push_str("]\n");
            write_pairs(&mut out, section);
            out.push('\n');
        }
    } else if let Some(section) = sections.get(DEFAULT_SECTION) {
        write_pairs(&mut out, section);
    }

    out
}

fn write_pairs(out: &mut String, section: &Section) {
    for (key, value) in section {
        for item in value.values() {
            out.push_str(key);
            out.push('=');
            out.push_str(item);
            out.push('\n');
        }
    }
}
