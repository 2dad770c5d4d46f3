//! Domain types for the enums generator.
//!
//! # Module Organization
//!
//! - [`container`] - Container names and the names derived from them
//! - [`record`] - Name records and duplicate marking
//! - [`table`] - Validated enumeration tables
//!
//! All public types are re-exported at the crate root:
//!
//! ```
//! use enums_core::{ContainerName, EnumTable, NameRecord};
//! ```

mod container;
mod record;
mod table;

pub use container::{ContainerName, DEFAULT_TYPE_PREFIX};
pub use record::{NameRecord, mark_duplicates};
pub use table::{EnumTable, MAX_RECORDS};
