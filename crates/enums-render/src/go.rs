//! Go target.
//!
//! Emits a package named after the container with an `int16` type, one
//! `iota` constant per record, a `String()` method and a `FromString`
//! function. Both conversions panic on input outside the table.

use enums_core::EnumTable;
use enums_core::naming::escape_string;

use crate::error::RenderError;
use crate::writer::CodeWriter;
use crate::{GENERATED_HEADER, Renderer};

/// Renders tables as Go source.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl Renderer for GoRenderer {
    fn extension(&self) -> &'static str {
        "go"
    }

    fn render(&self, table: &EnumTable) -> Result<String, RenderError> {
        let ty = table.type_name();
        let mut w = CodeWriter::new("\t");

        w.line(GENERATED_HEADER);
        w.blank();
        w.line(format_args!("package {}", table.container().package_name()));
        w.blank();
        w.line(format_args!("type {ty} int16"));
        w.blank();

        let width = table
            .records()
            .iter()
            .map(|r| r.constant_name.len())
            .max()
            .unwrap_or(0);
        w.line("const (");
        w.indent();
        for (_, record) in table.iter() {
            let name = &record.constant_name;
            if record.raw_name == record.display_name {
                w.line(format_args!("{name:<width$} {ty} = iota"));
            } else {
                let raw = escape_string(&record.raw_name);
                w.line(format_args!("{name:<width$} {ty} = iota // {raw}"));
            }
        }
        w.dedent();
        w.line(")");
        w.blank();

        w.line(format_args!(
            "// String returns the display string of a {ty}, panicking on undeclared values."
        ));
        w.line(format_args!("func (st {ty}) String() string {{"));
        w.indent();
        w.line("switch st {");
        for (_, record) in table.iter() {
            w.line(format_args!("case {}:", record.constant_name));
            w.indent();
            w.line(format_args!("return \"{}\"", escape_string(&record.display_name)));
            w.dedent();
        }
        w.line("}");
        w.line(format_args!("panic(\"Unsupported {ty}\")"));
        w.dedent();
        w.line("}");
        w.blank();

        w.line(format_args!(
            "// FromString returns the {ty} displayed as str, panicking on unknown strings."
        ));
        w.line(format_args!("func FromString(str string) {ty} {{"));
        w.indent();
        w.line("switch str {");
        for (_, record) in table.reverse_entries() {
            w.line(format_args!("case \"{}\":", escape_string(&record.display_name)));
            w.indent();
            w.line(format_args!("return {}", record.constant_name));
            w.dedent();
        }
        w.line("}");
        w.line(format_args!("panic(\"Unsupported {ty}\")"));
        w.dedent();
        w.line("}");

        Ok(w.finish())
    }
}

#[cfg(test)]
mod tests {
    use enums_core::{ContainerName, NameRecord};

    use super::*;

    const FOO_GO: &str = "\
// Code generated; DO NOT EDIT.

package foo

type SyntaxTypeFoo int16

const (
\tIdentifier  SyntaxTypeFoo = iota // id
\tKeyword     SyntaxTypeFoo = iota // kw
\tIdentifier2 SyntaxTypeFoo = iota // id2
)

// String returns the display string of a SyntaxTypeFoo, panicking on undeclared values.
func (st SyntaxTypeFoo) String() string {
\tswitch st {
\tcase Identifier:
\t\treturn \"identifier\"
\tcase Keyword:
\t\treturn \"keyword\"
\tcase Identifier2:
\t\treturn \"identifier\"
\t}
\tpanic(\"Unsupported SyntaxTypeFoo\")
}

// FromString returns the SyntaxTypeFoo displayed as str, panicking on unknown strings.
func FromString(str string) SyntaxTypeFoo {
\tswitch str {
\tcase \"identifier\":
\t\treturn Identifier
\tcase \"keyword\":
\t\treturn Keyword
\t}
\tpanic(\"Unsupported SyntaxTypeFoo\")
}
";

    fn foo_table() -> EnumTable {
        EnumTable::new(
            ContainerName::new("Foo").unwrap(),
            vec![
                NameRecord::new("Identifier", "identifier", "id"),
                NameRecord::new("Keyword", "keyword", "kw"),
                NameRecord::duplicate("Identifier2", "identifier", "id2"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_render_foo() {
        let rendered = GoRenderer.render(&foo_table()).unwrap();
        assert_eq!(rendered, FOO_GO);
    }

    #[test]
    fn test_escapes_display_strings() {
        let table = EnumTable::new(
            ContainerName::new("Foo").unwrap(),
            vec![
                NameRecord::new("DQUOTE", "\"", "\""),
                NameRecord::new("BSLASH", "\\", "\\"),
            ],
        )
        .unwrap();
        let rendered = GoRenderer.render(&table).unwrap();
        assert!(rendered.contains("\tcase \"\\\"\":\n\t\treturn DQUOTE\n"));
        assert!(rendered.contains("\t\treturn \"\\\\\"\n"));
        assert!(rendered.contains("DQUOTE SyntaxTypeFoo = iota\n"));
    }
}
