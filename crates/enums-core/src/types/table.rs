//! Validated enumeration tables.
//!
//! An [`EnumTable`] is the single source of truth every renderer reads from.
//! Construction checks the whole record list once; afterwards the forward and
//! reverse mappings cannot drift apart or become ambiguous.

use crate::error::{LookupError, ValidationError};
use crate::hash::{FxHashMap, fx_hash_map_with_capacity};
use crate::naming::{is_generated_name, is_identifier};

use super::container::{ContainerName, DEFAULT_TYPE_PREFIX};
use super::record::NameRecord;

/// Largest number of constants a table may hold.
///
/// Values must fit a signed 16-bit integer, the backing type of the Go target.
pub const MAX_RECORDS: usize = 1 << 15;

/// An ordered, validated list of [`NameRecord`]s for one container.
///
/// The value of each constant is its position in the list.
///
/// # Examples
///
/// ```
/// use enums_core::{ContainerName, EnumTable, NameRecord};
///
/// let table = EnumTable::new(
///     ContainerName::new("Foo")?,
///     vec![
///         NameRecord::new("Identifier", "identifier", "id"),
///         NameRecord::new("Keyword", "keyword", "kw"),
///         NameRecord::duplicate("Identifier2", "identifier", "id2"),
///     ],
/// )?;
///
/// assert_eq!(table.value_of("Identifier2"), Some(2));
/// assert_eq!(table.display(2)?, "identifier");
/// assert_eq!(table.from_display("identifier")?, 0);
/// assert!(table.from_display("missing").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnumTable {
    container: ContainerName,
    type_name: String,
    records: Vec<NameRecord>,
    /// Constant name to value.
    constants: FxHashMap<String, u16>,
    /// Display name to value, non-duplicate records only.
    reverse: FxHashMap<String, u16>,
}

impl EnumTable {
    /// Builds a table whose type name uses [`DEFAULT_TYPE_PREFIX`].
    ///
    /// # Errors
    ///
    /// See [`with_prefix`](Self::with_prefix).
    pub fn new(
        container: ContainerName,
        records: Vec<NameRecord>,
    ) -> Result<Self, ValidationError> {
        Self::with_prefix(container, DEFAULT_TYPE_PREFIX, records)
    }

    /// Builds a table, validating the record list.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Empty`] if `records` is empty
    /// - [`ValidationError::TooManyRecords`] if there are more than [`MAX_RECORDS`]
    /// - [`ValidationError::InvalidIdentifier`] if the type name or a constant is not an identifier
    /// - [`ValidationError::ReservedConstant`] if a constant is the type name or a name the generated code uses
    /// - [`ValidationError::DuplicateConstant`] if a constant is declared twice
    /// - [`ValidationError::DisplayCollision`] if a non-duplicate record reuses a display name
    /// - [`ValidationError::OrphanDuplicate`] if a duplicate has nothing earlier to alias
    pub fn with_prefix(
        container: ContainerName,
        prefix: &str,
        records: Vec<NameRecord>,
    ) -> Result<Self, ValidationError> {
        if records.is_empty() {
            return Err(ValidationError::Empty);
        }
        if records.len() > MAX_RECORDS {
            return Err(ValidationError::TooManyRecords {
                count: records.len(),
                max: MAX_RECORDS,
            });
        }

        let type_name = container.type_name(prefix);
        if !is_identifier(&type_name) {
            return Err(ValidationError::InvalidIdentifier(type_name));
        }

        let mut constants = fx_hash_map_with_capacity(records.len());
        let mut reverse: FxHashMap<String, u16> = fx_hash_map_with_capacity(records.len());

        for (value, record) in (0..=u16::MAX).zip(&records) {
            if !is_identifier(&record.constant_name) {
                return Err(ValidationError::InvalidIdentifier(
                    record.constant_name.clone(),
                ));
            }
            if record.constant_name == type_name || is_generated_name(&record.constant_name) {
                return Err(ValidationError::ReservedConstant(
                    record.constant_name.clone(),
                ));
            }
            if constants
                .insert(record.constant_name.clone(), value)
                .is_some()
            {
                return Err(ValidationError::DuplicateConstant(
                    record.constant_name.clone(),
                ));
            }

            match (reverse.get(&record.display_name), record.is_duplicate) {
                (Some(_), true) => {}
                (Some(&first), false) => {
                    return Err(ValidationError::DisplayCollision {
                        display: record.display_name.clone(),
                        first: records[usize::from(first)].constant_name.clone(),
                        constant: record.constant_name.clone(),
                    });
                }
                (None, true) => {
                    return Err(ValidationError::OrphanDuplicate {
                        constant: record.constant_name.clone(),
                        display: record.display_name.clone(),
                    });
                }
                (None, false) => {
                    reverse.insert(record.display_name.clone(), value);
                }
            }
        }

        Ok(Self {
            container,
            type_name,
            records,
            constants,
            reverse,
        })
    }

    /// Returns the container the table was built for.
    #[inline]
    #[must_use]
    pub fn container(&self) -> &ContainerName {
        &self.container
    }

    /// Returns the generated type name, e.g. `SyntaxTypeFoo`.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns all records in value order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    /// Returns the number of constants.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: construction rejects empty lists.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates `(value, record)` pairs in value order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &NameRecord)> {
        (0..=u16::MAX).zip(&self.records)
    }

    /// Iterates the records that take part in the reverse lookup.
    pub fn reverse_entries(&self) -> impl Iterator<Item = (u16, &NameRecord)> {
        self.iter().filter(|(_, record)| !record.is_duplicate)
    }

    /// Returns the value of a constant.
    #[must_use]
    pub fn value_of(&self, constant: &str) -> Option<u16> {
        self.constants.get(constant).copied()
    }

    /// Returns the record for `value`, if declared.
    #[must_use]
    pub fn record(&self, value: u16) -> Option<&NameRecord> {
        self.records.get(usize::from(value))
    }

    /// Forward conversion: the display string of `value`.
    ///
    /// Duplicates are included, so several values may share a string.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnsupportedValue`] if `value` is not declared.
    pub fn display(&self, value: u16) -> Result<&str, LookupError> {
        self.record(value)
            .map(|record| record.display_name.as_str())
            .ok_or_else(|| LookupError::UnsupportedValue {
                type_name: self.type_name.clone(),
                value,
            })
    }

    /// Reverse conversion: the value whose display string is `display`.
    ///
    /// Only the first record with a given display string is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnsupportedDisplay`] if no record displays as `display`.
    pub fn from_display(&self, display: &str) -> Result<u16, LookupError> {
        self.reverse
            .get(display)
            .copied()
            .ok_or_else(|| LookupError::UnsupportedDisplay {
                type_name: self.type_name.clone(),
                display: display.to_owned(),
            })
    }
}
