//! Markdown import: split text into top-level blocks and lay them out
//!
//! Each top-level block (heading, paragraph, code block, list, ...) becomes
//! one movable board object. Only the structure is used here; styling and
//! syntax coloring belong to whoever renders the board.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::geometry::{Point, Size};
use crate::scene::BlockKind;

/// A top-level Markdown block and its source text
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub source: String,
}

impl Block {
    /// Number of source lines, at least one
    pub fn line_count(&self) -> usize {
        self.source.lines().count().max(1)
    }
}

/// A block with its initial board placement
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    pub block: Block,
    pub position: Point,
    pub size: Size,
}

/// Layout parameters for [`layout_blocks`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    pub origin: Point,
    pub width: f64,
    pub line_height: f64,
    pub spacing: f64,
}

fn block_kind(tag: &Tag<'_>) -> BlockKind {
    match tag {
        Tag::Heading { level, .. } => BlockKind::Heading(*level as u8),
        Tag::Paragraph => BlockKind::Paragraph,
        Tag::CodeBlock(_) => BlockKind::CodeBlock,
        Tag::List(_) => BlockKind::List,
        Tag::BlockQuote(..) => BlockKind::BlockQuote,
        Tag::HtmlBlock => BlockKind::Html,
        _ => BlockKind::Other,
    }
}

fn push_block(blocks: &mut Vec<Block>, text: &str, kind: BlockKind, range: Range<usize>) {
    let source = text[range].trim_end();
    if source.is_empty() {
        return;
    }
    blocks.push(Block {
        kind,
        source: source.to_string(),
    });
}

/// Split `text` into its top-level blocks, in document order
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut open: Option<(BlockKind, Range<usize>)> = None;

    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    open = Some((block_kind(&tag), range));
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some((kind, range)) = open.take() {
                        push_block(&mut blocks, text, kind, range);
                    }
                }
            }
            Event::Rule if depth == 0 => {
                push_block(&mut blocks, text, BlockKind::Rule, range);
            }
            _ => {}
        }
    }

    tracing::debug!(target: "markdown", blocks = blocks.len(), "parsed markdown");
    blocks
}

/// Stack blocks vertically from `layout.origin`, one line height per source line
pub fn layout_blocks(blocks: Vec<Block>, layout: BlockLayout) -> Vec<PlacedBlock> {
    let mut y = layout.origin.y;

    blocks
        .into_iter()
        .map(|block| {
            let height = block.line_count() as f64 * layout.line_height;
            let placed = PlacedBlock {
                position: Point::new(layout.origin.x, y),
                size: Size::new(layout.width, height),
                block,
            };
            y += height + layout.spacing;
            placed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks_top_level_only() {
        let text = "# Title\n\nSome *text* here.\n\n- one\n- two\n\n```rust\nfn main() {}\n```\n";
        let blocks = parse_blocks(text);

        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading(1),
                BlockKind::Paragraph,
                BlockKind::List,
                BlockKind::CodeBlock
            ]
        );
        assert_eq!(blocks[0].source, "# Title");
        assert_eq!(blocks[2].source, "- one\n- two");
        assert_eq!(blocks[3].line_count(), 3);
    }

    #[test]
    fn test_parse_rule_and_quote() {
        let blocks = parse_blocks("> quoted\n\n---\n\n## Sub\n");
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::BlockQuote, BlockKind::Rule, BlockKind::Heading(2)]
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("\n\n  \n").is_empty());
    }

    #[test]
    fn test_layout_stacks_blocks() {
        let blocks = parse_blocks("first\n\nsecond line\nwraps\n\nthird\n");
        let placed = layout_blocks(
            blocks,
            BlockLayout {
                origin: Point::new(24.0, 24.0),
                width: 480.0,
                line_height: 20.0,
                spacing: 16.0,
            },
        );

        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].position, Point::new(24.0, 24.0));
        assert_eq!(placed[0].size, Size::new(480.0, 20.0));
        assert_eq!(placed[1].position, Point::new(24.0, 60.0));
        assert_eq!(placed[1].size.height, 40.0);
        assert_eq!(placed[2].position, Point::new(24.0, 116.0));
    }
}
