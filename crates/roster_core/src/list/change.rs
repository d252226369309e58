//! Change notifications emitted by `UniqueRecordList`.

/// One committed mutation of a unique list.
///
/// Granularity is per operation: targeted edits report a single index, while
/// bulk replacement and sorting report the whole list as changed. Listeners
/// must not assume anything finer than this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListChange {
    /// A record was appended at `index`.
    Added { index: usize },
    /// The record at `index` was overwritten in place.
    Replaced { index: usize },
    /// The record previously at `index` was removed.
    Removed { index: usize },
    /// Every position may have changed; the list now holds `len` records.
    Reset { len: usize },
}

/// Handle returned by `UniqueRecordList::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Callback invoked after each committed mutation with the new contents.
pub type Listener<T> = Box<dyn FnMut(&ListChange, &[T])>;
