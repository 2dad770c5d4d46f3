//! JSON manifests: name lists authored by hand or exported by other tools.
//!
//! ```json
//! {
//!   "name": "Foo",
//!   "names": [
//!     { "constant": "Identifier", "display": "identifier", "raw": "id" },
//!     { "constant": "Keyword", "display": "keyword" },
//!     { "constant": "Identifier2", "display": "identifier", "duplicate": true }
//!   ]
//! }
//! ```
//!
//! `raw` defaults to `display`. When no entry sets `duplicate`, duplicates
//! are derived from list order; otherwise the flags are taken as written and
//! validated.

use std::fs;

use camino::Utf8Path;
use enums_core::{ContainerName, EnumTable, NameRecord, mark_duplicates};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ManifestError;

/// A parsed manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Container name of the enumeration.
    pub name: String,

    /// Entries in value order.
    pub names: Vec<ManifestEntry>,
}

/// One entry of a [`Manifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Constant identifier.
    pub constant: String,

    /// Display string.
    pub display: String,

    /// Source label, defaults to `display`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// Explicit duplicate flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<bool>,
}

impl Manifest {
    /// Converts the entries to records, deriving duplicate flags if none are given.
    #[must_use]
    pub fn records(&self) -> Vec<NameRecord> {
        let explicit = self.names.iter().any(|entry| entry.duplicate.is_some());
        let mut records: Vec<NameRecord> = self
            .names
            .iter()
            .map(|entry| NameRecord {
                constant_name: entry.constant.clone(),
                is_duplicate: entry.duplicate.unwrap_or(false),
                display_name: entry.display.clone(),
                raw_name: entry.raw.clone().unwrap_or_else(|| entry.display.clone()),
            })
            .collect();
        if !explicit {
            mark_duplicates(&mut records);
        }
        records
    }

    /// Builds the validated table.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Validation`] if the name or entries violate a
    /// table invariant.
    pub fn into_table(self, type_prefix: &str) -> Result<EnumTable, ManifestError> {
        let records = self.records();
        let container = ContainerName::new(self.name)?;
        Ok(EnumTable::with_prefix(container, type_prefix, records)?)
    }
}

/// Parses a manifest from JSON text.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] if `json` is not a manifest.
///
/// # Examples
///
/// ```
/// use enums_grammar::parse_manifest;
///
/// let manifest = parse_manifest(r#"{"name": "Foo", "names": [
///     {"constant": "Identifier", "display": "identifier"}
/// ]}"#)?;
/// let table = manifest.into_table("SyntaxType")?;
/// assert_eq!(table.type_name(), "SyntaxTypeFoo");
/// # Ok::<(), enums_grammar::ManifestError>(())
/// ```
pub fn parse_manifest(json: &str) -> Result<Manifest, ManifestError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a manifest file.
///
/// # Errors
///
/// Returns [`ManifestError::Read`] if the file cannot be read and
/// [`ManifestError::Parse`] if its content is not a manifest.
pub fn load_manifest(path: &Utf8Path) -> Result<Manifest, ManifestError> {
    let json = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_owned(),
        source,
    })?;
    let manifest = parse_manifest(&json)?;
    debug!(path = %path, names = manifest.names.len(), "Loaded manifest");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use enums_core::ValidationError;

    use super::*;

    const FOO: &str = r#"{
        "name": "Foo",
        "names": [
            {"constant": "Identifier", "display": "identifier", "raw": "id"},
            {"constant": "Keyword", "display": "keyword", "raw": "kw"},
            {"constant": "Identifier2", "display": "identifier", "raw": "id2"}
        ]
    }"#;

    #[test]
    fn test_duplicates_derived_without_flags() {
        let table = parse_manifest(FOO).unwrap().into_table("SyntaxType").unwrap();
        assert!(table.records()[2].is_duplicate);
        assert_eq!(table.from_display("identifier").unwrap(), 0);
        assert_eq!(table.records()[1].raw_name, "kw");
    }

    #[test]
    fn test_explicit_flags_are_validated() {
        let json = r#"{"name": "Foo", "names": [
            {"constant": "A", "display": "a", "duplicate": false},
            {"constant": "B", "display": "a", "duplicate": false}
        ]}"#;
        let err = parse_manifest(json).unwrap().into_table("SyntaxType").unwrap_err();
        assert!(matches!(
            err,
            ManifestError::Validation(ValidationError::DisplayCollision { .. })
        ));
    }

    #[test]
    fn test_raw_defaults_to_display() {
        let json = r#"{"name": "Foo", "names": [{"constant": "Plus", "display": "+"}]}"#;
        let records = parse_manifest(json).unwrap().records();
        assert_eq!(records[0].raw_name, "+");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{"name": "Foo", "names": [], "extra": 1}"#;
        assert!(matches!(parse_manifest(json), Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_invalid_container_name() {
        let json = r#"{"name": "my lang", "names": [{"constant": "A", "display": "a"}]}"#;
        let err = parse_manifest(json).unwrap().into_table("SyntaxType").unwrap_err();
        assert!(matches!(
            err,
            ManifestError::Validation(ValidationError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_load_manifest_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FOO.as_bytes()).unwrap();
        let path = Utf8Path::from_path(file.path()).unwrap();
        let manifest = load_manifest(path).unwrap();
        assert_eq!(manifest.name, "Foo");
        assert_eq!(manifest.names.len(), 3);
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let err = load_manifest(Utf8Path::new("/nonexistent/names.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
