use crate::error::Result;
use crate::model::{Classifier, Span};
use tree_sitter::Tree;

pub mod synthetic;
pub mod utils;

pub use synthetic::SyntheticNode;
pub use utils::{TsChildren, TsNode};

/// Read-only view of a node in a parsed syntax tree.
///
/// The walker only needs these accessors, so anything tree-shaped can be
/// tagged: tree-sitter nodes through [`TsNode`], hand-built trees through
/// [`SyntheticNode`].
pub trait SyntaxNode: Sized {
    /// Lazy iterator over direct children. Owns its position, so a walker
    /// can hold one per open ancestor instead of every pending sibling.
    type Children: Iterator<Item = Self>;

    /// Node type name (e.g. `method_declaration`, `ERROR`, `;`).
    fn kind(&self) -> &str;
    fn is_named(&self) -> bool;
    /// Raw bytes of the node's text span. May not be valid UTF-8.
    fn text_bytes(&self) -> &[u8];
    fn span(&self) -> Span;
    /// Direct children, in source order.
    fn children(&self) -> Self::Children;
}

/// A language front-end: turns source bytes into a tree and knows how to
/// categorize that language's node types.
pub trait SourceParser: Send + Sync {
    fn language(&self) -> &str;

    /// Syntax errors must surface as error nodes in the returned tree, not as `Err`.
    fn parse(&self, source: &[u8]) -> Result<Tree>;

    fn classifier(&self) -> &dyn Classifier;
}
