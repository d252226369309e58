//! Sortable employee fields and sort-key parsing.
//!
//! # Responsibility
//! - Define the closed set of fields a roster can be sorted by.
//! - Parse free-form single-letter sort keys at the caller boundary.
//!
//! # Invariants
//! - Every `SortField` maps to exactly one key letter and back.
//! - Keys are case-sensitive; only `n|s|d|b` are accepted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Field used to order records in a unique list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Salary,
    DateOfJoining,
    DateOfBirth,
}

/// Sort key for `SortField::Name`.
pub const SORT_KEY_NAME: &str = "n";
/// Sort key for `SortField::Salary`.
pub const SORT_KEY_SALARY: &str = "s";
/// Sort key for `SortField::DateOfJoining`.
pub const SORT_KEY_DATE_OF_JOINING: &str = "d";
/// Sort key for `SortField::DateOfBirth`.
pub const SORT_KEY_DATE_OF_BIRTH: &str = "b";

const SUPPORTED_SORT_KEYS: &[&str] = &[
    SORT_KEY_NAME,
    SORT_KEY_SALARY,
    SORT_KEY_DATE_OF_JOINING,
    SORT_KEY_DATE_OF_BIRTH,
];

impl SortField {
    /// All fields in key declaration order.
    pub const ALL: [SortField; 4] = [
        Self::Name,
        Self::Salary,
        Self::DateOfJoining,
        Self::DateOfBirth,
    ];

    /// Single-letter key accepted by `SortField::parse`.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Name => SORT_KEY_NAME,
            Self::Salary => SORT_KEY_SALARY,
            Self::DateOfJoining => SORT_KEY_DATE_OF_JOINING,
            Self::DateOfBirth => SORT_KEY_DATE_OF_BIRTH,
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Name => "Sort by employee name.",
            Self::Salary => "Sort by salary, compared as text.",
            Self::DateOfJoining => "Sort by date of joining, compared as text.",
            Self::DateOfBirth => "Sort by date of birth, compared as text.",
        }
    }

    /// Parses one sort key.
    ///
    /// Keys match exactly: no trimming, no case folding. Anything else,
    /// including an empty key, is unsupported.
    pub fn parse(value: &str) -> Result<Self, SortFieldError> {
        match value {
            SORT_KEY_NAME => Ok(Self::Name),
            SORT_KEY_SALARY => Ok(Self::Salary),
            SORT_KEY_DATE_OF_JOINING => Ok(Self::DateOfJoining),
            SORT_KEY_DATE_OF_BIRTH => Ok(Self::DateOfBirth),
            other => Err(SortFieldError::UnsupportedKey(other.to_string())),
        }
    }
}

impl FromStr for SortField {
    type Err = SortFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Returns the accepted sort keys.
pub fn supported_sort_keys() -> &'static [&'static str] {
    SUPPORTED_SORT_KEYS
}

/// Sort key parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortFieldError {
    UnsupportedKey(String),
}

impl Display for SortFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedKey(value) => write!(
                f,
                "sort key `{value}` is unsupported; expected {}",
                SUPPORTED_SORT_KEYS.join("|")
            ),
        }
    }
}

impl Error for SortFieldError {}
