//! Visual objects and the handles that identify them

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Identity handle for a scene object.
///
/// Handles compare by identity: two objects with identical content are still
/// distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity handle for a container objects can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub u64);

impl ContainerId {
    /// The board surface itself
    pub const ROOT: ContainerId = ContainerId(0);
}

/// What kind of content a block holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading(u8),
    #[default]
    Paragraph,
    CodeBlock,
    List,
    BlockQuote,
    Rule,
    Html,
    Other,
}

impl BlockKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            BlockKind::Heading(_) => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::CodeBlock => "code",
            BlockKind::List => "list",
            BlockKind::BlockQuote => "quote",
            BlockKind::Rule => "rule",
            BlockKind::Html => "html",
            BlockKind::Other => "other",
        }
    }
}

/// A movable object on the board.
///
/// The scene keeps an object alive while it is detached so that an undo can
/// re-attach it; `parent` is `None` during that time.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub label: String,
    pub kind: BlockKind,
    pub position: Point,
    pub size: Size,
    pub(crate) parent: Option<ContainerId>,
}

impl SceneObject {
    pub fn parent(&self) -> Option<ContainerId> {
        self.parent
    }

    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}
