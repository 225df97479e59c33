//! End-to-end replay tests: script in, board state and dumps out

use dragboard::commands::Cmd;
use dragboard::dump::StateDump;
use dragboard::model::BoardModel;
use dragboard::replay::{self, Script};
use dragboard::Point;
use tempfile::TempDir;

const NOTES: &str = r#"
steps:
  - markdown: |
      # Notes

      First paragraph.
  - click: { x: 30, y: 30 }
  - click: { x: 30, y: 70, ctrl: true }
  - drag: { from: { x: 30, y: 30 }, to: { x: 130, y: 40 } }
"#;

fn run_ok(model: &mut BoardModel, script: &Script) -> replay::ReplayStats {
    replay::run(model, script, |_, _| Ok(())).unwrap()
}

#[test]
fn test_replay_select_and_drag() {
    let mut model = BoardModel::default();
    let script = Script::from_yaml(NOTES).unwrap();

    let stats = run_ok(&mut model, &script);

    assert_eq!(stats.steps, 4);
    // markdown + 2 clicks (2 each) + drag (press, 4 moves, release)
    assert_eq!(stats.messages, 1 + 4 + 6);
    let ids = model.attached().to_vec();
    assert_eq!(model.selection.items(), ids.as_slice());
    assert_eq!(model.scene.position(ids[0]), Some(Point::new(124.0, 34.0)));
    assert_eq!(model.scene.position(ids[1]), Some(Point::new(124.0, 70.0)));
}

#[test]
fn test_replay_undo_redo_delete() {
    let mut model = BoardModel::default();
    let script = Script::from_yaml(
        r#"
steps:
  - insert:
      - { label: a, x: 0, y: 0 }
      - { label: b, x: 200, y: 0 }
  - click: { x: 10, y: 10 }
  - delete
  - undo
  - undo
  - redo
"#,
    )
    .unwrap();

    run_ok(&mut model, &script);

    // Insert redone; the delete is still waiting on the redo stack
    assert_eq!(model.attached().len(), 2);
    assert_eq!(model.history.undo_count(), 1);
    assert_eq!(model.history.redo_count(), 1);
    assert!(model.selection.is_empty());
}

#[test]
fn test_export_is_handed_to_callback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exports").join("dump.json");
    let mut model = BoardModel::default();
    let script = Script::from_yaml(
        "steps:\n  - insert:\n      - { label: box, x: 5, y: 5 }\n  - click: { x: 10, y: 10 }\n  - export\n",
    )
    .unwrap();

    let stats = replay::run(&mut model, &script, |cmd, model| {
        if cmd == Cmd::Export {
            StateDump::from_model(model)
                .write_to(&path)
                .map_err(anyhow::Error::msg)?;
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(stats.exports, 1);
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["objects"][0]["label"], "box");
    assert_eq!(json["objects"][0]["display"], "5px 5px");
    assert_eq!(json["selection"].as_array().unwrap().len(), 1);
    assert_eq!(json["history"]["next_undo"], "add");
}

#[test]
fn test_callback_error_stops_replay() {
    let mut model = BoardModel::default();
    let script = Script::from_yaml("steps:\n  - export\n  - markdown: \"Late.\"\n").unwrap();

    let result = replay::run(&mut model, &script, |cmd, _| match cmd {
        Cmd::Export => Err(anyhow::anyhow!("disk full")),
        Cmd::Redraw => Ok(()),
    });

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("disk full"));
    assert!(model.attached().is_empty());
}

#[test]
fn test_script_from_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Script::from_path(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
}
