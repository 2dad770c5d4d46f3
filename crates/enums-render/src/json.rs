//! JSON target: the table as data, for consumers without a code generator.

use enums_core::EnumTable;
use serde::Serialize;

use crate::Renderer;
use crate::error::RenderError;

/// Renders tables as a pretty-printed JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct Document<'a> {
    container: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
    names: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Entry<'a> {
    constant: &'a str,
    value: u16,
    display: &'a str,
    raw: &'a str,
    duplicate: bool,
}

impl Renderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, table: &EnumTable) -> Result<String, RenderError> {
        let document = Document {
            container: table.container().as_str(),
            type_name: table.type_name(),
            names: table
                .iter()
                .map(|(value, record)| Entry {
                    constant: &record.constant_name,
                    value,
                    display: &record.display_name,
                    raw: &record.raw_name,
                    duplicate: record.is_duplicate,
                })
                .collect(),
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use enums_core::{ContainerName, NameRecord};

    use super::*;

    #[test]
    fn test_render_foo() {
        let table = EnumTable::new(
            ContainerName::new("Foo").unwrap(),
            vec![
                NameRecord::new("Identifier", "identifier", "id"),
                NameRecord::duplicate("Identifier2", "identifier", "id2"),
            ],
        )
        .unwrap();
        let rendered = JsonRenderer.render(&table).unwrap();
        insta::assert_snapshot!(rendered, @r#"
        {
          "container": "Foo",
          "type": "SyntaxTypeFoo",
          "names": [
            {
              "constant": "Identifier",
              "value": 0,
              "display": "identifier",
              "raw": "id",
              "duplicate": false
            },
            {
              "constant": "Identifier2",
              "value": 1,
              "display": "identifier",
              "raw": "id2",
              "duplicate": true
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_output_parses_back() {
        let table = EnumTable::new(
            ContainerName::new("Foo").unwrap(),
            vec![NameRecord::new("DQUOTE", "\"", "\"")],
        )
        .unwrap();
        let rendered = JsonRenderer.render(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["names"][0]["display"], "\"");
        assert_eq!(value["type"], "SyntaxTypeFoo");
    }
}
