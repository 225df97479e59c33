//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dragboard::messages::{EditMsg, Msg, NewObject, PointerButton, PointerMsg};
use dragboard::model::BoardModel;
use dragboard::scene::ObjectId;
use dragboard::update::update;
use dragboard::{Point, Size};

/// Board with objects of size 100x40 at the given positions, added in one
/// history entry. Returns the ids in insertion order.
pub fn board_with_objects(positions: &[(f64, f64)]) -> (BoardModel, Vec<ObjectId>) {
    let mut model = BoardModel::default();
    let objects = positions
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| NewObject {
            label: format!("obj{}", i),
            position: Point::new(x, y),
            size: Size::new(100.0, 40.0),
        })
        .collect();

    update(&mut model, Msg::Edit(EditMsg::InsertObjects(objects)));
    let ids = model.attached().to_vec();
    (model, ids)
}

pub fn press(model: &mut BoardModel, x: f64, y: f64) {
    update(
        model,
        Msg::Pointer(PointerMsg::Down {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }),
    );
}

pub fn move_to(model: &mut BoardModel, x: f64, y: f64) {
    update(
        model,
        Msg::Pointer(PointerMsg::Move {
            position: Point::new(x, y),
        }),
    );
}

/// Release, hit-testing the board for the target the way the runtime does
pub fn release(model: &mut BoardModel, x: f64, y: f64, ctrl: bool) {
    let position = Point::new(x, y);
    let target = model.hit_test(position);
    update(
        model,
        Msg::Pointer(PointerMsg::Up {
            button: PointerButton::Primary,
            position,
            ctrl,
            target,
        }),
    );
}

pub fn click(model: &mut BoardModel, x: f64, y: f64) {
    press(model, x, y);
    release(model, x, y, false);
}

pub fn ctrl_click(model: &mut BoardModel, x: f64, y: f64) {
    press(model, x, y);
    release(model, x, y, true);
}

/// Press at `from`, move to `to` in one step, release at `to`
pub fn drag(model: &mut BoardModel, from: (f64, f64), to: (f64, f64)) {
    press(model, from.0, from.1);
    move_to(model, to.0, to.1);
    release(model, to.0, to.1, false);
}

pub fn edit(model: &mut BoardModel, msg: EditMsg) {
    update(model, Msg::Edit(msg));
}

pub fn position(model: &BoardModel, id: ObjectId) -> Point {
    model
        .scene
        .position(id)
        .expect("object should exist in the scene")
}
