//! Manifest attribute parsing.
//!
//! Distribution archives conventionally ship a small key/value resource
//! (`META-INF/MANIFEST.MF`) carrying version and build attributes. The format
//! is line-oriented `Name: Value` pairs; attribute names are case-insensitive
//! and long values wrap onto continuation lines marked by a leading space.

use std::io::{self, BufRead, BufReader, Read};

/// Well-known manifest resource path, relative to a unit's origin.
pub const MANIFEST_RESOURCE: &str = "META-INF/MANIFEST.MF";

/// Attribute bag read from a manifest resource.
#[derive(Debug, Clone, Default)]
pub struct ManifestAttributes {
    entries: Vec<(String, String)>,
}

impl ManifestAttributes {
    /// Read attributes from a manifest stream.
    ///
    /// Lines without a `:` separator are skipped. Continuation lines append
    /// to the most recent attribute value.
    pub fn read<R: Read>(reader: R) -> io::Result<Self> {
        let mut entries: Vec<(String, String)> = Vec::new();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix(' ') {
                if let Some((_, value)) = entries.last_mut() {
                    value.push_str(rest);
                }
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                entries.push((name.trim().to_string(), value.trim().to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Look up an attribute value by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Number of parsed attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest carried no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> ManifestAttributes {
        ManifestAttributes::read(Cursor::new(text.as_bytes())).unwrap()
    }

    #[test]
    fn parses_simple_attributes() {
        let attrs = parse("Manifest-Version: 1.0\nBundle-Version: 13.0.0\n");
        assert_eq!(attrs.get("Manifest-Version"), Some("1.0"));
        assert_eq!(attrs.get("Bundle-Version"), Some("13.0.0"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn attribute_names_are_case_insensitive() {
        let attrs = parse("Implementation-Version: 2.4.1\n");
        assert_eq!(attrs.get("implementation-version"), Some("2.4.1"));
        assert_eq!(attrs.get("IMPLEMENTATION-VERSION"), Some("2.4.1"));
    }

    #[test]
    fn continuation_lines_append_to_previous_value() {
        let attrs = parse("Bundle-Description: a library for\n functional collections\n");
        assert_eq!(
            attrs.get("Bundle-Description"),
            Some("a library forfunctional collections")
        );
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let attrs = parse("garbage line without separator\nBundle-Version: 1.0.0\n");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("Bundle-Version"), Some("1.0.0"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let attrs = parse("Bundle-Version: 1.0.0\n\nImplementation-Version: 2.0.0\n");
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn values_are_trimmed() {
        let attrs = parse("Bundle-Version:   1.2.3  \n");
        assert_eq!(attrs.get("Bundle-Version"), Some("1.2.3"));
    }

    #[test]
    fn empty_manifest_is_empty() {
        let attrs = parse("");
        assert!(attrs.is_empty());
        assert_eq!(attrs.get("Bundle-Version"), None);
    }

    #[test]
    fn leading_continuation_without_previous_entry_is_dropped() {
        let attrs = parse(" orphan continuation\nBundle-Version: 1.0.0\n");
        assert_eq!(attrs.len(), 1);
    }
}
