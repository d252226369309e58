//! Identity-unique, observable, sortable record list.
//!
//! # Responsibility
//! - Own an ordered sequence of records and keep it free of identity
//!   duplicates across every mutation.
//! - Hand out read-only views and notify listeners of committed changes.
//!
//! # Invariants
//! - No two stored records are `Record::is_same_record` to each other.
//! - Order is insertion order until `sort` is called.
//! - A failed operation leaves the sequence untouched and notifies no one.
//! - Adding and replacing check identity; lookups for `replace` and `remove`
//!   use full equality.

use crate::list::change::{ListChange, Listener, ListenerId};
use crate::list::view::ReadOnlyView;
use crate::model::record::Record;
use crate::model::sort_field::{SortField, SortFieldError};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::slice::Iter;

pub type ListResult<T> = Result<T, ListError>;

/// Contract violations reported by unique list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The operation would store two records with the same identity.
    DuplicateEntity,
    /// No stored record is fully equal to the requested one.
    EntityNotFound,
    /// A sort key other than exactly `n`, `s`, `d` or `b` was supplied.
    InvalidSortField(String),
}

impl ListError {
    /// Stable machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateEntity => "duplicate_entity",
            Self::EntityNotFound => "entity_not_found",
            Self::InvalidSortField(_) => "invalid_sort_field",
        }
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntity => write!(f, "operation would result in duplicate records"),
            Self::EntityNotFound => write!(f, "record not found in list"),
            Self::InvalidSortField(value) => write!(
                f,
                "sort field `{value}` is invalid; must be the letter n, s, d or b"
            ),
        }
    }
}

impl Error for ListError {}

impl From<SortFieldError> for ListError {
    fn from(value: SortFieldError) -> Self {
        match value {
            SortFieldError::UnsupportedKey(key) => Self::InvalidSortField(key),
        }
    }
}

/// Ordered list of records that are unique by identity.
///
/// Equality and hashing only consider the stored records; listeners are
/// ignored.
pub struct UniqueRecordList<T> {
    records: Vec<T>,
    listeners: BTreeMap<ListenerId, Listener<T>>,
    next_listener_id: u64,
}

impl<T> Default for UniqueRecordList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            listeners: BTreeMap::new(),
            next_listener_id: 0,
        }
    }
}

impl<T: Record> UniqueRecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a record with the same identity as `candidate` is
    /// stored.
    pub fn contains(&self, candidate: &T) -> bool {
        self.records
            .iter()
            .any(|record| candidate.is_same_record(record))
    }

    /// Appends `record`.
    ///
    /// # Errors
    /// - `DuplicateEntity` when a same-identity record is already stored.
    pub fn add(&mut self, record: T) -> ListResult<()> {
        if self.contains(&record) {
            return Err(ListError::DuplicateEntity);
        }

        self.records.push(record);
        let index = self.records.len() - 1;
        self.notify(ListChange::Added { index });
        Ok(())
    }

    /// Overwrites the first record equal to `target` with `replacement`,
    /// keeping its position.
    ///
    /// `replacement` may change any field as long as its identity does not
    /// collide with a different stored record.
    ///
    /// # Errors
    /// - `EntityNotFound` when no stored record equals `target`.
    /// - `DuplicateEntity` when `replacement` changes identity into one that
    ///   is already stored.
    pub fn replace(&mut self, target: &T, replacement: T) -> ListResult<()> {
        let index = self
            .position_of(target)
            .ok_or(ListError::EntityNotFound)?;

        if !target.is_same_record(&replacement) && self.contains(&replacement) {
            return Err(ListError::DuplicateEntity);
        }

        self.records[index] = replacement;
        self.notify(ListChange::Replaced { index });
        Ok(())
    }

    /// Removes and returns the first record equal to `record`.
    ///
    /// A stored record with the same identity but different fields is not
    /// a match.
    ///
    /// # Errors
    /// - `EntityNotFound` when no stored record equals `record`.
    pub fn remove(&mut self, record: &T) -> ListResult<T> {
        let index = self
            .position_of(record)
            .ok_or(ListError::EntityNotFound)?;

        let removed = self.records.remove(index);
        self.notify(ListChange::Removed { index });
        Ok(removed)
    }

    /// Replaces the whole sequence with the contents of another unique list.
    ///
    /// The source already upholds uniqueness, so no check is repeated.
    pub fn replace_all_from(&mut self, source: &UniqueRecordList<T>)
    where
        T: Clone,
    {
        self.records = source.records.clone();
        self.notify(ListChange::Reset {
            len: self.records.len(),
        });
    }

    /// Replaces the whole sequence with `records`, in the given order.
    ///
    /// Listeners receive a single `Reset` change.
    ///
    /// # Errors
    /// - `DuplicateEntity` when any two inputs share an identity; the
    ///   current sequence is kept.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = T>) -> ListResult<()> {
        let records: Vec<T> = records.into_iter().collect();
        if !records_are_unique(&records) {
            return Err(ListError::DuplicateEntity);
        }

        self.records = records;
        self.notify(ListChange::Reset {
            len: self.records.len(),
        });
        Ok(())
    }

    /// Stable ascending sort on the text of `field`, ignoring case.
    ///
    /// Values are compared as plain text, so `"10/1/2020"` orders before
    /// `"2/1/2020"` and `"900"` after `"1000"`.
    pub fn sort(&mut self, field: SortField) {
        self.records
            .sort_by(|a, b| compare_ignore_case(a.sort_value(field), b.sort_value(field)));
        self.notify(ListChange::Reset {
            len: self.records.len(),
        });
    }

    /// Parses a free-form sort key and sorts by the selected field.
    ///
    /// # Errors
    /// - `InvalidSortField` when `key` is not exactly one of `n|s|d|b`;
    ///   the list order is left as it was.
    pub fn sort_by_field_key(&mut self, key: &str) -> ListResult<SortField> {
        let field = SortField::parse(key)?;
        self.sort(field);
        Ok(field)
    }

    fn position_of(&self, record: &T) -> Option<usize> {
        self.records.iter().position(|stored| stored == record)
    }
}

impl<T> UniqueRecordList<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a read-only view of the current records.
    pub fn view(&self) -> ReadOnlyView<'_, T> {
        ReadOnlyView::new(&self.records)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.records.iter()
    }

    /// Returns an owned copy of the current records.
    pub fn to_snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records.clone()
    }

    /// Registers a listener called after every committed mutation.
    pub fn subscribe(&mut self, listener: Listener<T>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Drops a listener. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, change: ListChange) {
        for listener in self.listeners.values_mut() {
            listener(&change, self.records.as_slice());
        }
    }
}

impl<'a, T> IntoIterator for &'a UniqueRecordList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T: PartialEq> PartialEq for UniqueRecordList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<T: Eq> Eq for UniqueRecordList<T> {}

impl<T: Hash> Hash for UniqueRecordList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.records.hash(state);
    }
}

impl<T: Debug> Debug for UniqueRecordList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueRecordList")
            .field("records", &self.records)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn records_are_unique<T: Record>(records: &[T]) -> bool {
    records.iter().enumerate().all(|(i, left)| {
        records[i + 1..]
            .iter()
            .all(|right| !left.is_same_record(right))
    })
}

fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}
