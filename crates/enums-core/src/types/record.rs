//! Name records, the rows of a generated enumeration.

use serde::{Deserialize, Serialize};

use crate::hash::{FxHashSet, fx_hash_set_with_capacity};

/// One constant of a generated enumeration.
///
/// The position of a record in its list is the constant's integer value, so
/// records only make sense as part of an ordered sequence.
///
/// # Examples
///
/// ```
/// use enums_core::NameRecord;
///
/// let record = NameRecord::new("LPAREN", "(", "(");
/// assert!(!record.is_duplicate);
/// assert_eq!(record.display_name, "(");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameRecord {
    /// Identifier of the constant, unique within the enumeration.
    pub constant_name: String,

    /// Whether an earlier record already uses `display_name`.
    ///
    /// Duplicates keep their forward mapping but are left out of the
    /// reverse lookup, which must stay a function.
    pub is_duplicate: bool,

    /// The string the constant converts to and from.
    pub display_name: String,

    /// The label the record was derived from in its source.
    pub raw_name: String,
}

impl NameRecord {
    /// Creates a record that is not a duplicate.
    #[must_use]
    pub fn new(
        constant_name: impl Into<String>,
        display_name: impl Into<String>,
        raw_name: impl Into<String>,
    ) -> Self {
        Self {
            constant_name: constant_name.into(),
            is_duplicate: false,
            display_name: display_name.into(),
            raw_name: raw_name.into(),
        }
    }

    /// Creates a record aliasing the display name of an earlier record.
    #[must_use]
    pub fn duplicate(
        constant_name: impl Into<String>,
        display_name: impl Into<String>,
        raw_name: impl Into<String>,
    ) -> Self {
        Self {
            is_duplicate: true,
            ..Self::new(constant_name, display_name, raw_name)
        }
    }
}

impl From<(String, bool, String, String)> for NameRecord {
    fn from(
        (constant_name, is_duplicate, display_name, raw_name): (String, bool, String, String),
    ) -> Self {
        Self {
            constant_name,
            is_duplicate,
            display_name,
            raw_name,
        }
    }
}

/// Recomputes `is_duplicate` for every record from list order.
///
/// The first record with a given display name is the canonical one; every
/// later record sharing it is flagged.
///
/// # Examples
///
/// ```
/// use enums_core::{NameRecord, mark_duplicates};
///
/// let mut records = vec![
///     NameRecord::new("Identifier", "identifier", "identifier"),
///     NameRecord::new("Identifier2", "identifier", "identifier"),
/// ];
/// mark_duplicates(&mut records);
/// assert!(!records[0].is_duplicate);
/// assert!(records[1].is_duplicate);
/// ```
pub fn mark_duplicates(records: &mut [NameRecord]) {
    let mut seen: FxHashSet<String> = fx_hash_set_with_capacity(records.len());
    for record in records {
        record.is_duplicate = !seen.insert(record.display_name.clone());
    }
}
