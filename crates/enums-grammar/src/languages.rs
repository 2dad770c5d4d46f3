//! Built-in tree-sitter grammars.

use std::fmt;
use std::str::FromStr;

use enums_core::naming::camel_case;
use enums_core::{ContainerName, EnumTable, NameRecord, ValidationError};
use tracing::debug;
use tree_sitter::Language;

use crate::error::GrammarError;
use crate::tokens::token_records;

/// A grammar whose node kinds can be turned into an enumeration.
///
/// # Examples
///
/// ```
/// use enums_grammar::Lang;
///
/// let lang: Lang = "TypeScript".parse()?;
/// assert_eq!(lang, Lang::TypeScript);
/// assert_eq!(lang.container_name()?.as_str(), "Typescript");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Lang {
    /// TypeScript, from `tree-sitter-typescript`.
    TypeScript,
    /// TypeScript with JSX, from `tree-sitter-typescript`.
    Tsx,
}

impl Lang {
    /// All built-in grammars.
    pub const ALL: [Self; 2] = [Self::TypeScript, Self::Tsx];

    /// Returns the lowercase name used on the command line and in configuration.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    /// Returns the tree-sitter language.
    #[must_use]
    pub fn language(self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Returns the container name of the generated enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIdentifier`] if the name cannot form a type name.
    pub fn container_name(self) -> Result<ContainerName, ValidationError> {
        ContainerName::new(camel_case(self.name()))
    }

    /// Returns one record per node kind, plus the trailing `Error` record.
    #[must_use]
    pub fn records(self) -> Vec<NameRecord> {
        token_records(&self.language())
    }

    /// Builds the validated table for this grammar.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::Validation`] if the derived names violate a
    /// table invariant, which indicates a bug in name derivation.
    pub fn table(self, type_prefix: &str) -> Result<EnumTable, GrammarError> {
        let records = self.records();
        debug!(language = %self, kinds = records.len(), "Collected node kinds");
        Ok(EnumTable::with_prefix(
            self.container_name()?,
            type_prefix,
            records,
        )?)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lang {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GrammarError::UnknownLanguage(s.to_owned()))
    }
}
