//! Selection set notification tests

use std::cell::RefCell;
use std::rc::Rc;

use dragboard::selection::SelectionSet;

/// Selection of char handles that records every event it fires
fn recording_selection() -> (SelectionSet<char>, Rc<RefCell<Vec<String>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut selection = SelectionSet::new();

    let log = Rc::clone(&events);
    selection
        .on_select()
        .add(move |item: &char| log.borrow_mut().push(format!("select {}", item)));
    let log = Rc::clone(&events);
    selection
        .on_unselect()
        .add(move |item: &char| log.borrow_mut().push(format!("unselect {}", item)));
    let log = Rc::clone(&events);
    selection
        .on_clear()
        .add(move |items: &[char]| {
            let items: String = items.iter().collect();
            log.borrow_mut().push(format!("clear {}", items))
        });

    (selection, events)
}

#[test]
fn test_select_is_idempotent() {
    let (mut selection, events) = recording_selection();

    assert!(selection.select('a'));
    assert!(!selection.select('a'));

    assert_eq!(selection.len(), 1);
    assert_eq!(*events.borrow(), vec!["select a"]);
}

#[test]
fn test_unselect_missing_item_is_silent() {
    let (mut selection, events) = recording_selection();
    selection.select('a');

    assert!(!selection.unselect(&'b'));
    assert!(selection.unselect(&'a'));
    assert!(!selection.unselect(&'a'));

    assert_eq!(*events.borrow(), vec!["select a", "unselect a"]);
}

#[test]
fn test_clear_fires_once_with_snapshot() {
    let (mut selection, events) = recording_selection();
    selection.select('a');
    selection.select('b');
    events.borrow_mut().clear();

    assert!(selection.clear());
    assert!(!selection.clear());

    assert!(selection.is_empty());
    assert_eq!(*events.borrow(), vec!["clear ab"]);
}

#[test]
fn test_clear_snapshot_keeps_selection_order() {
    let mut selection = SelectionSet::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    selection
        .on_clear()
        .add(move |items: &[u32]| log.borrow_mut().extend_from_slice(items));

    for id in [3, 1, 2] {
        selection.select(id);
    }
    selection.clear();

    assert_eq!(*seen.borrow(), vec![3, 1, 2]);
    assert!(selection.items().is_empty());
}

#[test]
fn test_toggle_flips_membership() {
    let (mut selection, events) = recording_selection();

    assert!(selection.toggle('a'));
    assert!(selection.contains(&'a'));
    assert!(!selection.toggle('a'));
    assert!(!selection.contains(&'a'));

    assert_eq!(*events.borrow(), vec!["select a", "unselect a"]);
}

#[test]
fn test_callbacks_run_in_registration_order() {
    let mut selection = SelectionSet::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        selection
            .on_select()
            .add(move |_: &u32| order.borrow_mut().push(name));
    }
    selection.select(7);

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn test_removed_callback_no_longer_fires() {
    let mut selection = SelectionSet::new();
    let count = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&count);
    let id = selection
        .on_select()
        .add(move |_: &u32| *counter.borrow_mut() += 1);
    selection.select(1);
    assert!(selection.on_select().remove(id));
    selection.select(2);

    assert_eq!(*count.borrow(), 1);
}
