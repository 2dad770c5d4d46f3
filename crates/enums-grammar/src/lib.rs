//! Name record sources for the enums generator.
//!
//! Records come from two places:
//!
//! - Built-in tree-sitter grammars ([`Lang`]): every node kind becomes a
//!   constant, see [`token_records`] for the naming rules.
//! - JSON manifests ([`Manifest`]): hand-written or exported name lists.
//!
//! Both end in a validated [`EnumTable`](enums_core::EnumTable):
//!
//! ```
//! use enums_grammar::Lang;
//!
//! let table = Lang::Tsx.table("SyntaxType")?;
//! assert_eq!(table.type_name(), "SyntaxTypeTsx");
//! # Ok::<(), enums_grammar::GrammarError>(())
//! ```
//!
//! # Thread Safety
//!
//! tree-sitter [`Language`](tree_sitter::Language) handles are `Send + Sync`,
//! so tables for several grammars can be built in parallel.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
mod languages;
pub mod manifest;
mod tokens;

pub use error::{GrammarError, ManifestError};
pub use languages::Lang;
pub use manifest::{Manifest, ManifestEntry, load_manifest, parse_manifest};
pub use tokens::{ERROR_KIND, token_records};
