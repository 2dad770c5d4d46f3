//! Rust target.
//!
//! Emits a `#[repr(u16)]` enum with explicit discriminants and the
//! conversions around it. Where the Go target panics, the Rust target
//! returns `Err`: `FromStr` for unknown strings and `TryFrom<u16>` for
//! undeclared values. The forward conversion is total by construction.

use enums_core::EnumTable;
use enums_core::naming::escape_string;

use crate::error::RenderError;
use crate::writer::CodeWriter;
use crate::{GENERATED_HEADER, Renderer};

/// Renders tables as Rust source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl Renderer for RustRenderer {
    fn extension(&self) -> &'static str {
        "rs"
    }

    fn render(&self, table: &EnumTable) -> Result<String, RenderError> {
        let ty = table.type_name();
        let mut w = CodeWriter::new("    ");

        w.line(GENERATED_HEADER);
        w.blank();
        w.line("#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]");
        w.line("#[repr(u16)]");
        w.line("#[allow(non_camel_case_types, clippy::upper_case_acronyms)]");
        w.line(format_args!("pub enum {ty} {{"));
        w.indent();
        for (value, record) in table.iter() {
            w.line(format_args!("{} = {value},", record.constant_name));
        }
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!("impl {ty} {{"));
        w.indent();
        w.line("/// Returns the display string of this kind.");
        w.line("pub const fn as_str(self) -> &'static str {");
        w.indent();
        w.line("match self {");
        w.indent();
        for (_, record) in table.iter() {
            w.line(format_args!(
                "Self::{} => \"{}\",",
                record.constant_name,
                escape_string(&record.display_name)
            ));
        }
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!("impl std::fmt::Display for {ty} {{"));
        w.indent();
        w.line("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        w.indent();
        w.line("f.write_str(self.as_str())");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!("impl From<{ty}> for &'static str {{"));
        w.indent();
        w.line(format_args!("fn from(value: {ty}) -> Self {{"));
        w.indent();
        w.line("value.as_str()");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!("impl std::str::FromStr for {ty} {{"));
        w.indent();
        w.line("type Err = String;");
        w.blank();
        w.line("fn from_str(s: &str) -> Result<Self, Self::Err> {");
        w.indent();
        w.line("match s {");
        w.indent();
        for (_, record) in table.reverse_entries() {
            w.line(format_args!(
                "\"{}\" => Ok(Self::{}),",
                escape_string(&record.display_name),
                record.constant_name
            ));
        }
        w.line(format_args!("_ => Err(format!(\"Unsupported {ty} name '{{s}}'\")),"));
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!("impl TryFrom<u16> for {ty} {{"));
        w.indent();
        w.line("type Error = u16;");
        w.blank();
        w.line("fn try_from(value: u16) -> Result<Self, Self::Error> {");
        w.indent();
        w.line("match value {");
        w.indent();
        for (value, record) in table.iter() {
            w.line(format_args!("{value} => Ok(Self::{}),", record.constant_name));
        }
        w.line("_ => Err(value),");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!("impl PartialEq<u16> for {ty} {{"));
        w.indent();
        w.line("fn eq(&self, other: &u16) -> bool {");
        w.indent();
        w.line("*self as u16 == *other");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!("impl PartialEq<{ty}> for u16 {{"));
        w.indent();
        w.line(format_args!("fn eq(&self, other: &{ty}) -> bool {{"));
        w.indent();
        w.line("*self == *other as u16");
        w.dedent();
        w.line("}");
        w.dedent();
        w.line("}");

        Ok(w.finish())
    }
}
