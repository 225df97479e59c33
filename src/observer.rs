//! Ordered observer lists for synchronous change notification
//!
//! Callbacks run in-line with the triggering call, in registration order.
//! A callback only ever sees `&A`, never the container that notifies it, so
//! it cannot re-enter a mutating operation on that container.

use std::fmt;

/// Handle returned by [`ObserverList::add`], used to unregister a callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback<A> = Box<dyn FnMut(&A)>;

/// An ordered list of callbacks taking `&A`.
///
/// `A` may be unsized, so `ObserverList<[T]>` hands each callback a slice.
pub struct ObserverList<A: ?Sized> {
    observers: Vec<(ObserverId, Callback<A>)>,
    next_id: u64,
}

impl<A: ?Sized> Default for ObserverList<A> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<A: ?Sized> fmt::Debug for ObserverList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.observers.len())
            .finish()
    }
}

impl<A: ?Sized> ObserverList<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback at the end of the list
    pub fn add(&mut self, callback: impl FnMut(&A) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Unregister a callback. Returns false if the id was not registered.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Invoke every callback with `arg`, in registration order
    pub fn notify(&mut self, arg: &A) {
        for (_, callback) in self.observers.iter_mut() {
            callback(arg);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}
