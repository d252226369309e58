//! Read-only projection over a unique list.
//!
//! # Invariants
//! - A view never grants mutation; it only hands out shared references.
//! - A view borrows the backing storage, so it always reflects the list's
//!   current contents and the list cannot change while the view is alive.

use std::ops::Index;
use std::slice::Iter;

/// Borrowed, non-mutable view of a unique list's records.
#[derive(Debug)]
pub struct ReadOnlyView<'a, T> {
    records: &'a [T],
}

impl<T> Clone for ReadOnlyView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyView<'_, T> {}

impl<'a, T> ReadOnlyView<'a, T> {
    pub(crate) fn new(records: &'a [T]) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&'a T> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.records.last()
    }

    pub fn iter(&self) -> Iter<'a, T> {
        self.records.iter()
    }

    /// Returns the records as a shared slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.records
    }
}

impl<T> Index<usize> for ReadOnlyView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a, T> IntoIterator for ReadOnlyView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T: PartialEq> PartialEq<[T]> for ReadOnlyView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.records == other
    }
}

#[cfg(test)]
mod tests {
    use super::ReadOnlyView;

    #[test]
    fn exposes_slice_accessors() {
        let data = vec![10, 20, 30];
        let view = ReadOnlyView::new(&data);

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.get(1), Some(&20));
        assert_eq!(view.get(3), None);
        assert_eq!(view.first(), Some(&10));
        assert_eq!(view.last(), Some(&30));
        assert_eq!(view[2], 30);
        assert_eq!(view, data[..]);
    }

    #[test]
    fn copies_share_storage() {
        let data = vec!["a", "b"];
        let view = ReadOnlyView::new(&data);
        let copy = view;

        assert!(std::ptr::eq(view.as_slice(), copy.as_slice()));
        assert_eq!(copy.into_iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn empty_view_reports_empty() {
        let data: Vec<u8> = Vec::new();
        let view = ReadOnlyView::new(&data);
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }
}
