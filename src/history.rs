//! Linear undo/redo history of reversible operations.

/// A reversible action over some target state.
///
/// `revert` must exactly undo a preceding `apply` on the same target, and
/// `apply` must redo a preceding `revert`. Operations receive only the target,
/// never the history, so they cannot call back into `execute`/`undo`/`redo`.
pub trait Operation {
    type Target: ?Sized;

    fn apply(&mut self, target: &mut Self::Target);

    fn revert(&mut self, target: &mut Self::Target);

    /// Short name used in logs
    fn label(&self) -> &'static str {
        "operation"
    }
}

impl<T: ?Sized> Operation for Box<dyn Operation<Target = T>> {
    type Target = T;

    fn apply(&mut self, target: &mut T) {
        (**self).apply(target)
    }

    fn revert(&mut self, target: &mut T) {
        (**self).revert(target)
    }

    fn label(&self) -> &'static str {
        (**self).label()
    }
}

/// Undo/redo stacks, most recent last.
///
/// History is strictly linear: executing a new operation discards everything
/// on the redo stack. Operations move between the stacks by value, so one
/// instance is never on both.
#[derive(Debug, Clone)]
pub struct History<O> {
    undo_stack: Vec<O>,
    redo_stack: Vec<O>,
    max_depth: Option<usize>,
}

impl<O> Default for History<O> {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: None,
        }
    }
}

impl<O: Operation> History<O> {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that evicts its oldest undo entries beyond `max_depth`
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Apply `op` and record it for undo. Clears the redo stack.
    pub fn execute(&mut self, mut op: O, target: &mut O::Target) {
        op.apply(target);
        let label = op.label();
        let discarded = self.redo_stack.len();
        self.redo_stack.clear();
        self.push_undo(op);

        tracing::debug!(
            target: "history",
            op = label,
            undo = self.undo_stack.len(),
            discarded,
            "executed operation"
        );
    }

    /// Revert the most recent operation. No-op returning false when there is
    /// nothing to undo.
    pub fn undo(&mut self, target: &mut O::Target) -> bool {
        let Some(mut op) = self.undo_stack.pop() else {
            return false;
        };

        op.revert(target);
        tracing::debug!(
            target: "history",
            op = op.label(),
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len() + 1,
            "undo"
        );
        self.redo_stack.push(op);
        true
    }

    /// Re-apply the most recently undone operation. No-op returning false
    /// when there is nothing to redo.
    pub fn redo(&mut self, target: &mut O::Target) -> bool {
        let Some(mut op) = self.redo_stack.pop() else {
            return false;
        };

        op.apply(target);
        tracing::debug!(
            target: "history",
            op = op.label(),
            undo = self.undo_stack.len() + 1,
            redo = self.redo_stack.len(),
            "redo"
        );
        self.push_undo(op);
        true
    }

    fn push_undo(&mut self, op: O) {
        self.undo_stack.push(op);

        if let Some(max) = self.max_depth {
            while self.undo_stack.len() > max {
                let evicted = self.undo_stack.remove(0);
                tracing::trace!(target: "history", op = evicted.label(), "evicted oldest operation");
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// The operation the next `undo` would revert
    pub fn peek_undo(&self) -> Option<&O> {
        self.undo_stack.last()
    }

    /// The operation the next `redo` would re-apply
    pub fn peek_redo(&self) -> Option<&O> {
        self.redo_stack.last()
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adds `amount` to a counter; tagged with an id so tests can check identity.
    #[derive(Debug)]
    struct AddAmount {
        id: u32,
        amount: i64,
        applied: u32,
    }

    impl AddAmount {
        fn new(id: u32, amount: i64) -> Self {
            Self {
                id,
                amount,
                applied: 0,
            }
        }
    }

    impl Operation for AddAmount {
        type Target = i64;

        fn apply(&mut self, target: &mut i64) {
            *target += self.amount;
            self.applied += 1;
        }

        fn revert(&mut self, target: &mut i64) {
            *target -= self.amount;
        }
    }

    #[test]
    fn test_execute_then_undo_restores_state() {
        let mut value = 3;
        let mut history = History::new();

        history.execute(AddAmount::new(1, 4), &mut value);
        assert_eq!(value, 7);

        assert!(history.undo(&mut value));
        assert_eq!(value, 3);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_undo_and_redo_on_empty_are_noops() {
        let mut value = 0;
        let mut history: History<AddAmount> = History::new();

        assert!(!history.undo(&mut value));
        assert!(!history.redo(&mut value));
        assert_eq!(value, 0);
        assert_eq!(history.undo_count(), 0);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn test_redo_reuses_same_instance() {
        let mut value = 0;
        let mut history = History::new();

        history.execute(AddAmount::new(42, 5), &mut value);
        history.undo(&mut value);
        history.redo(&mut value);

        assert_eq!(value, 5);
        let op = history.peek_undo().unwrap();
        assert_eq!(op.id, 42);
        assert_eq!(op.applied, 2);
    }

    #[test]
    fn test_execute_clears_redo_stack() {
        let mut value = 0;
        let mut history = History::new();

        history.execute(AddAmount::new(1, 1), &mut value);
        history.undo(&mut value);
        assert!(history.can_redo());

        history.execute(AddAmount::new(2, 10), &mut value);
        assert!(!history.can_redo());
        assert!(!history.redo(&mut value));
        assert_eq!(value, 10);
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut value = 0;
        let mut history = History::with_max_depth(3);

        for i in 0..5 {
            history.execute(AddAmount::new(i, 1), &mut value);
        }

        assert_eq!(history.undo_count(), 3);
        while history.undo(&mut value) {}
        // Only the three newest were reversible
        assert_eq!(value, 2);
        assert_eq!(history.peek_redo().unwrap().id, 2);
    }

    #[test]
    fn test_boxed_operations_share_a_history() {
        struct Double;

        impl Operation for Double {
            type Target = i64;

            fn apply(&mut self, target: &mut i64) {
                *target *= 2;
            }

            fn revert(&mut self, target: &mut i64) {
                *target /= 2;
            }

            fn label(&self) -> &'static str {
                "double"
            }
        }

        let mut value = 1;
        let mut history: History<Box<dyn Operation<Target = i64>>> = History::new();

        history.execute(Box::new(AddAmount::new(1, 2)), &mut value);
        history.execute(Box::new(Double), &mut value);
        assert_eq!(value, 6);
        assert_eq!(history.peek_undo().unwrap().label(), "double");

        history.undo(&mut value);
        history.undo(&mut value);
        assert_eq!(value, 1);
    }
}
