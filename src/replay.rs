//! Scripted input replay
//!
//! A replay script is a YAML document listing user actions. Each step is
//! expanded into the same [`Msg`]s a windowed runtime would produce, with
//! release positions hit-tested against the board to find the target.
//!
//! ```yaml
//! steps:
//!   - markdown: |
//!       # Notes
//!
//!       First paragraph.
//!   - click: { x: 30, y: 30 }
//!   - drag: { from: { x: 30, y: 30 }, to: { x: 130, y: 30 } }
//!   - undo
//!   - export
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::commands::Cmd;
use crate::geometry::{Point, Size};
use crate::messages::{AppMsg, EditMsg, Msg, NewObject, PointerButton, PointerMsg};
use crate::model::BoardModel;
use crate::update::update;

/// A pointer position with modifier state
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerAt {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub ctrl: bool,
}

impl PointerAt {
    fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A press-move-release gesture interpolated over `steps` moves
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DragSpec {
    pub from: Point,
    pub to: Point,
    #[serde(default = "default_drag_steps")]
    pub steps: u32,
}

fn default_drag_steps() -> u32 {
    4
}

/// An explicitly placed object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsertSpec {
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_insert_width")]
    pub width: f64,
    #[serde(default = "default_insert_height")]
    pub height: f64,
}

fn default_insert_width() -> f64 {
    100.0
}

fn default_insert_height() -> f64 {
    40.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Markdown(String),
    Insert(Vec<InsertSpec>),
    Press(Point),
    Move(Point),
    Release(PointerAt),
    Click(PointerAt),
    Drag(DragSpec),
    Undo,
    Redo,
    Delete,
    Export,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    /// Data-carrying steps are written as single-key maps, e.g. `click: {x, y}`
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse replay script")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In script {}", path.display()))
    }
}

fn release(model: &BoardModel, at: Point, ctrl: bool) -> Msg {
    Msg::Pointer(PointerMsg::Up {
        button: PointerButton::Primary,
        position: at,
        ctrl,
        target: model.hit_test(at),
    })
}

fn press(at: Point) -> Msg {
    Msg::Pointer(PointerMsg::Down {
        button: PointerButton::Primary,
        position: at,
    })
}

fn pointer_move(at: Point) -> Msg {
    Msg::Pointer(PointerMsg::Move { position: at })
}

impl Step {
    /// Expand this step into messages, hit-testing against the current board
    pub fn messages(&self, model: &BoardModel) -> Vec<Msg> {
        match self {
            Step::Markdown(text) => vec![Msg::Edit(EditMsg::InsertMarkdown(text.clone()))],
            Step::Insert(specs) => {
                let objects = specs
                    .iter()
                    .map(|spec| NewObject {
                        label: spec.label.clone(),
                        position: Point::new(spec.x, spec.y),
                        size: Size::new(spec.width, spec.height),
                    })
                    .collect();
                vec![Msg::Edit(EditMsg::InsertObjects(objects))]
            }
            Step::Press(at) => vec![press(*at)],
            Step::Move(at) => vec![pointer_move(*at)],
            Step::Release(at) => vec![release(model, at.point(), at.ctrl)],
            Step::Click(at) => vec![press(at.point()), release(model, at.point(), at.ctrl)],
            Step::Drag(drag) => {
                let steps = drag.steps.max(1);
                let delta = drag.to - drag.from;
                let mut messages = vec![press(drag.from)];
                for i in 1..=steps {
                    let t = f64::from(i) / f64::from(steps);
                    messages.push(pointer_move(Point::new(
                        drag.from.x + delta.x * t,
                        drag.from.y + delta.y * t,
                    )));
                }
                messages.push(release(model, drag.to, false));
                messages
            }
            Step::Undo => vec![Msg::Edit(EditMsg::Undo)],
            Step::Redo => vec![Msg::Edit(EditMsg::Redo)],
            Step::Delete => vec![Msg::Edit(EditMsg::DeleteSelection)],
            Step::Export => vec![Msg::App(AppMsg::Export)],
        }
    }
}

/// Counters from one replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub steps: usize,
    pub messages: usize,
    pub redraws: usize,
    pub exports: usize,
}

/// Feed every step of `script` through `update`, handing commands to `on_cmd`
pub fn run<F>(model: &mut BoardModel, script: &Script, mut on_cmd: F) -> Result<ReplayStats>
where
    F: FnMut(Cmd, &BoardModel) -> Result<()>,
{
    let mut stats = ReplayStats::default();

    for (index, step) in script.steps.iter().enumerate() {
        tracing::debug!(target: "replay", index, ?step, "step");

        for msg in step.messages(model) {
            stats.messages += 1;
            let Some(cmd) = update(model, msg) else {
                continue;
            };

            match cmd {
                Cmd::Redraw => stats.redraws += 1,
                Cmd::Export => stats.exports += 1,
            }
            on_cmd(cmd, model).with_context(|| format!("Step {} failed", index + 1))?;
        }

        stats.steps += 1;
    }

    Ok(stats)
}
