//! Observable multi-item selection
//!
//! The selection is a membership-unique set of object handles. Every change
//! in membership is reported through one of three observer lists, which is
//! how the controller keeps its "selected" visual markers in sync.

use crate::observer::ObserverList;

/// A set of selected items with select/unselect/clear notifications.
///
/// Items keep insertion order so `clear()` snapshots are deterministic;
/// the order carries no other meaning.
pub struct SelectionSet<T> {
    items: Vec<T>,
    on_select: ObserverList<T>,
    on_unselect: ObserverList<T>,
    on_clear: ObserverList<[T]>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            on_select: ObserverList::new(),
            on_unselect: ObserverList::new(),
            on_clear: ObserverList::new(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SelectionSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSet")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq + Clone> SelectionSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item`. No-op (and no event) if it is already selected.
    pub fn select(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }

        self.items.push(item.clone());
        tracing::trace!(target: "selection", len = self.items.len(), "select");
        self.on_select.notify(&item);
        true
    }

    /// Remove `item`. No-op (and no event) if it is not selected.
    pub fn unselect(&mut self, item: &T) -> bool {
        let Some(index) = self.items.iter().position(|existing| existing == item) else {
            return false;
        };

        let removed = self.items.remove(index);
        tracing::trace!(target: "selection", len = self.items.len(), "unselect");
        self.on_unselect.notify(&removed);
        true
    }

    /// Flip membership of `item`, returning whether it is now selected
    pub fn toggle(&mut self, item: T) -> bool {
        if self.contains(&item) {
            self.unselect(&item);
            false
        } else {
            self.select(item);
            true
        }
    }

    /// Empty the selection.
    ///
    /// Callbacks receive a snapshot taken before any of them run; the live
    /// set is already empty by then. No-op (and no event) when empty.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }

        let snapshot = std::mem::take(&mut self.items);
        tracing::trace!(target: "selection", cleared = snapshot.len(), "clear");
        self.on_clear.notify(&snapshot);
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Callbacks fired with each newly selected item
    pub fn on_select(&mut self) -> &mut ObserverList<T> {
        &mut self.on_select
    }

    /// Callbacks fired with each unselected item
    pub fn on_unselect(&mut self) -> &mut ObserverList<T> {
        &mut self.on_unselect
    }

    /// Callbacks fired once per non-empty `clear()` with the cleared items
    pub fn on_clear(&mut self) -> &mut ObserverList<[T]> {
        &mut self.on_clear
    }
}
