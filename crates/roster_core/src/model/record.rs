//! Record contract consumed by `UniqueRecordList`.

use crate::model::sort_field::SortField;

/// Domain record stored in a unique list.
///
/// Two relations are involved and must not be conflated:
/// - `PartialEq` is full structural equality over every field.
/// - `is_same_record` is identity: the same logical entity, possibly with
///   different non-key fields.
///
/// # Contract
/// - `is_same_record` must be reflexive and symmetric.
/// - Records that are `==` must also be same-identity.
pub trait Record: PartialEq {
    /// Returns whether `other` represents the same logical entity.
    fn is_same_record(&self, other: &Self) -> bool;

    /// Text form of `field` used for ordering.
    fn sort_value(&self, field: SortField) -> &str;
}
