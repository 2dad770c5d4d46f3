//! Renders enumeration tables as source text.
//!
//! Every target emits the same contract from an [`EnumTable`]:
//!
//! 1. an integer-backed type named after the container,
//! 2. one constant per record, valued by its position,
//! 3. a forward conversion covering every record, duplicates included,
//! 4. a reverse conversion covering only non-duplicate records,
//!
//! and neither conversion ever maps unknown input to a default.
//!
//! ```
//! use enums_core::{ContainerName, EnumTable, NameRecord, Target};
//! use enums_render::renderer_for;
//!
//! let table = EnumTable::new(
//!     ContainerName::new("Foo")?,
//!     vec![NameRecord::new("Identifier", "identifier", "id")],
//! )?;
//! let go = renderer_for(Target::Go).render(&table)?;
//! assert!(go.contains("func FromString(str string) SyntaxTypeFoo {"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Rendering is pure; tables may be rendered from several threads at once.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
mod go;
mod json;
mod rust;
mod writer;

use enums_core::{EnumTable, Target};

pub use error::RenderError;
pub use go::GoRenderer;
pub use json::JsonRenderer;
pub use rust::RustRenderer;

/// First line of every generated source file.
pub const GENERATED_HEADER: &str = "// Code generated; DO NOT EDIT.";

/// An output language.
pub trait Renderer: Send + Sync {
    /// File extension of generated files, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders `table` as a complete source file.
    fn render(&self, table: &EnumTable) -> Result<String, RenderError>;
}

/// Returns the renderer for `target`.
#[must_use]
pub fn renderer_for(target: Target) -> &'static dyn Renderer {
    match target {
        Target::Go => &GoRenderer,
        Target::Rust => &RustRenderer,
        Target::Json => &JsonRenderer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_extensions_match_targets() {
        for target in Target::ALL {
            assert_eq!(renderer_for(target).extension(), target.extension());
        }
    }

    #[test]
    fn test_every_target_renders_grammar_tables() {
        let table = enums_grammar::Lang::TypeScript.table("SyntaxType").unwrap();
        for target in Target::ALL {
            let rendered = renderer_for(target).render(&table).unwrap();
            assert!(rendered.contains("SyntaxTypeTypescript"));
        }
    }
}
