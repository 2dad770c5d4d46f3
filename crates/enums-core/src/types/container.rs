//! Container names, the group a generated enumeration belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::naming::{capitalize, is_identifier};

/// Default prefix of generated type names.
pub const DEFAULT_TYPE_PREFIX: &str = "SyntaxType";

/// The logical group name of an enumeration (`c_name`).
///
/// Derives the generated type name, the package name and output file names.
///
/// # Examples
///
/// ```
/// use enums_core::ContainerName;
///
/// let name = ContainerName::new("Typescript")?;
/// assert_eq!(name.type_name("SyntaxType"), "SyntaxTypeTypescript");
/// assert_eq!(name.package_name(), "typescript");
/// assert_eq!(name.file_stem("language_$"), "language_typescript");
/// # Ok::<(), enums_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContainerName(String);

impl ContainerName {
    /// Creates a container name, rejecting anything that is not an identifier
    /// both capitalized (type name) and lowercased (package name).
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_identifier(&capitalize(&name)) || !is_identifier(&name.to_lowercase()) {
            return Err(ValidationError::InvalidIdentifier(name));
        }
        Ok(Self(name))
    }

    /// Returns the name as given.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the generated type name: `prefix` followed by the capitalized name.
    #[must_use]
    pub fn type_name(&self, prefix: &str) -> String {
        format!("{prefix}{}", capitalize(&self.0))
    }

    /// Returns the lowercase package or namespace identifier.
    #[must_use]
    pub fn package_name(&self) -> String {
        self.0.to_lowercase()
    }

    /// Expands a file name template, replacing each `$` with the package name.
    #[must_use]
    pub fn file_stem(&self, template: &str) -> String {
        template.replace('$', &self.package_name())
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContainerName {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<ContainerName> for String {
    fn from(name: ContainerName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_capitalizes() {
        let name = ContainerName::new("foo").unwrap();
        assert_eq!(name.type_name(DEFAULT_TYPE_PREFIX), "SyntaxTypeFoo");
        assert_eq!(name.to_string(), "foo");
    }

    #[test]
    fn test_rejects_invalid_names() {
        assert_eq!(
            ContainerName::new(""),
            Err(ValidationError::InvalidIdentifier(String::new()))
        );
        assert!(ContainerName::new("type-script").is_err());
        assert!(ContainerName::new("9lives").is_err());
    }

    #[test]
    fn test_rejects_keyword_package_names() {
        for name in ["Go", "Type", "Func", "Map", "Range", "Select", "Var"] {
            assert_eq!(
                ContainerName::new(name),
                Err(ValidationError::InvalidIdentifier(name.to_owned())),
                "{name}"
            );
        }
        assert!(ContainerName::new("Golang").is_ok());
    }

    #[test]
    fn test_file_stem_replaces_every_marker() {
        let name = ContainerName::new("CSharp").unwrap();
        assert_eq!(name.file_stem("$/language_$"), "csharp/language_csharp");
        assert_eq!(name.file_stem("fixed"), "fixed");
    }

    #[test]
    fn test_deserialize_validates() {
        let name: ContainerName = serde_json::from_str(r#""Tsx""#).unwrap();
        assert_eq!(name.as_str(), "Tsx");
        assert!(serde_json::from_str::<ContainerName>(r#""a b""#).is_err());
    }
}
