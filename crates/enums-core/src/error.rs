//! Error types for the enums-core crate.
//!
//! - [`ValidationError`] - a record list violates the generation contract
//! - [`LookupError`] - a conversion on an [`EnumTable`](crate::EnumTable) hit an unknown input
//! - [`ConfigError`] - configuration loading and validation failures

use camino::Utf8PathBuf;

/// Errors raised when a record list cannot be turned into an enumeration.
///
/// Every variant is a caller contract violation: the renderer never sees a
/// list that produced one of these.
///
/// # Examples
///
/// ```
/// use enums_core::ValidationError;
///
/// let error = ValidationError::InvalidIdentifier("1st".to_owned());
/// assert!(error.to_string().contains("1st"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The record list is empty.
    #[error("cannot generate an enumeration without names")]
    Empty,

    /// More records than the backing integer type can number.
    #[error("{count} names exceed the maximum of {max}")]
    TooManyRecords {
        /// Number of records supplied.
        count: usize,
        /// Largest accepted record count.
        max: usize,
    },

    /// A constant or container name is not a valid identifier.
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    /// A constant collides with a name the generated code declares or relies on.
    #[error("constant '{0}' clashes with a name used by the generated code")]
    ReservedConstant(String),

    /// Two records declare the same constant.
    #[error("constant '{0}' is declared more than once")]
    DuplicateConstant(String),

    /// A record not flagged as duplicate reuses an earlier display name.
    #[error("display name '{display}' of '{constant}' is already used by '{first}'")]
    DisplayCollision {
        /// The shared display name.
        display: String,
        /// Constant of the earlier record.
        first: String,
        /// Constant of the offending record.
        constant: String,
    },

    /// A record flagged as duplicate has no earlier record to alias.
    #[error("'{constant}' is marked duplicate but no earlier name displays as '{display}'")]
    OrphanDuplicate {
        /// Constant of the offending record.
        constant: String,
        /// Its display name.
        display: String,
    },
}

/// Errors returned by the conversion helpers of an [`EnumTable`](crate::EnumTable).
///
/// These mirror the fatal branches of the generated code: an unknown value or
/// string is never mapped to a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The integer value is not one of the declared constants.
    #[error("Unsupported {type_name} value {value}")]
    UnsupportedValue {
        /// Name of the generated type.
        type_name: String,
        /// The rejected value.
        value: u16,
    },

    /// The string is not the display name of any non-duplicate constant.
    #[error("Unsupported {type_name} name '{display}'")]
    UnsupportedDisplay {
        /// Name of the generated type.
        type_name: String,
        /// The rejected string.
        display: String,
    },
}

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use enums_core::ConfigError;
/// use camino::Utf8PathBuf;
///
/// let error = ConfigError::MissingFile(Utf8PathBuf::from("/some/enums.json"));
/// assert!(error.to_string().contains("/some/enums.json"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("missing configuration file: {0}")]
    MissingFile(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
