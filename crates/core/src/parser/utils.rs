use super::SyntaxNode;
use crate::error::{BioscopeError, Result};
use crate::model::Span;
use tree_sitter::{Language, Node, Parser, Tree, TreeCursor};

/// Converts a tree-sitter range to our internal Span model.
pub fn span_from_ts(range: tree_sitter::Range) -> Span {
    Span {
        start_byte: range.start_byte,
        end_byte: range.end_byte,
        start_line: range.start_point.row,
        start_col: range.start_point.column,
        end_line: range.end_point.row,
        end_col: range.end_point.column,
    }
}

/// Parses `source` with a fresh tree-sitter parser for `language`.
pub fn parse_with(language: &Language, source: &[u8]) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| BioscopeError::Parsing(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| BioscopeError::Parsing("Parser returned no tree".to_string()))
}

/// A tree-sitter node paired with the source it was parsed from.
#[derive(Clone, Copy)]
pub struct TsNode<'t> {
    node: Node<'t>,
    source: &'t [u8],
}

impl<'t> TsNode<'t> {
    pub fn new(node: Node<'t>, source: &'t [u8]) -> Self {
        Self { node, source }
    }

    pub fn root(tree: &'t Tree, source: &'t [u8]) -> Self {
        Self::new(tree.root_node(), source)
    }

    pub fn inner(&self) -> Node<'t> {
        self.node
    }
}

impl<'t> SyntaxNode for TsNode<'t> {
    type Children = TsChildren<'t>;

    fn kind(&self) -> &str {
        self.node.kind()
    }

    fn is_named(&self) -> bool {
        self.node.is_named()
    }

    fn text_bytes(&self) -> &[u8] {
        self.source.get(self.node.byte_range()).unwrap_or_default()
    }

    fn span(&self) -> Span {
        span_from_ts(self.node.range())
    }

    fn children(&self) -> Self::Children {
        TsChildren {
            cursor: self.node.walk(),
            source: self.source,
            started: false,
            done: false,
        }
    }
}

/// Children of a [`TsNode`], read off a tree cursor one sibling at a time.
pub struct TsChildren<'t> {
    cursor: TreeCursor<'t>,
    source: &'t [u8],
    started: bool,
    done: bool,
}

impl<'t> Iterator for TsChildren<'t> {
    type Item = TsNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let moved = if self.started {
            self.cursor.goto_next_sibling()
        } else {
            self.started = true;
            self.cursor.goto_first_child()
        };
        if !moved {
            self.done = true;
            return None;
        }
        Some(TsNode::new(self.cursor.node(), self.source))
    }
}
