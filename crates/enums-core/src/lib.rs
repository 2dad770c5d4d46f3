//! Core types, validation, and naming helpers for the enums generator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`NameRecord`] and [`ContainerName`], the generator's input
//! - [`EnumTable`], a validated record list with the forward and reverse
//!   conversions the generated code implements
//! - [`naming`] helpers that turn grammar kinds into identifiers
//! - Error types and [`GenerateConfig`]
//! - Type aliases for `FxHashMap`/`FxHashSet`
//!
//! # Example
//!
//! ```
//! use enums_core::{ContainerName, EnumTable, NameRecord};
//!
//! let table = EnumTable::new(
//!     ContainerName::new("Foo")?,
//!     vec![
//!         NameRecord::new("Identifier", "identifier", "id"),
//!         NameRecord::new("Keyword", "keyword", "kw"),
//!     ],
//! )?;
//! assert_eq!(table.from_display("keyword")?, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod naming;
pub mod types;

pub use config::{GenerateConfig, Target};
pub use error::{ConfigError, LookupError, ValidationError};
pub use hash::{FxHashMap, FxHashSet, fx_hash_map_with_capacity, fx_hash_set_with_capacity};
pub use types::{
    ContainerName, DEFAULT_TYPE_PREFIX, EnumTable, MAX_RECORDS, NameRecord, mark_duplicates,
};
