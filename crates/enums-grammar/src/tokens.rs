//! Name records from tree-sitter node kinds.

use std::collections::BTreeMap;

use enums_core::naming::ConstantNamer;
use enums_core::{NameRecord, mark_duplicates};
use tracing::warn;
use tree_sitter::Language;

/// Display name of the record appended for tree-sitter's error node.
pub const ERROR_KIND: &str = "ERROR";

/// Returns one record per node kind of `language`, ordered by kind id.
///
/// Named kinds are assigned constants before anonymous ones, so when a
/// named kind and a token share a spelling the named kind keeps the bare
/// constant (`Identifier`) and the token gets a suffix. A final `Error`
/// record for the error node is appended.
///
/// Kinds sharing a display string are flagged as duplicates by kind id, not
/// by constant name. Keyword tokens usually have lower ids than the named
/// node spelled the same way, so for `import` the reverse lookup returns the
/// suffixed token constant (`Import2`) and the bare `Import` is the duplicate.
///
/// # Examples
///
/// ```
/// use enums_grammar::{Lang, token_records};
///
/// let records = token_records(&Lang::TypeScript.language());
/// assert_eq!(records.last().map(|r| r.display_name.as_str()), Some("ERROR"));
/// ```
#[must_use]
pub fn token_records(language: &Language) -> Vec<NameRecord> {
    let count = language.node_kind_count();
    let mut namer = ConstantNamer::new();
    let mut by_id = BTreeMap::new();

    for named in [true, false] {
        for id in (0..=u16::MAX).take(count) {
            if language.node_kind_is_named(id) != named {
                continue;
            }
            let Some(kind) = language.node_kind_for_id(id) else {
                warn!(id, "Node kind has no name, skipping");
                continue;
            };
            by_id.insert(id, NameRecord::new(namer.assign(kind), kind, kind));
        }
    }

    let mut records: Vec<NameRecord> = by_id.into_values().collect();
    records.push(NameRecord::new(
        namer.assign("error"),
        ERROR_KIND,
        ERROR_KIND,
    ));
    mark_duplicates(&mut records);
    records
}
