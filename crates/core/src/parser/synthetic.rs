use super::SyntaxNode;
use crate::model::Span;

/// An owned, hand-built syntax tree. Lets the walker and tagger run without
/// a real parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticNode {
    pub kind: String,
    pub named: bool,
    pub text: Vec<u8>,
    pub span: Span,
    pub children: Vec<SyntheticNode>,
}

impl SyntheticNode {
    pub fn named(kind: impl Into<String>, text: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: kind.into(),
            named: true,
            text: text.into(),
            span: Span::default(),
            children: Vec::new(),
        }
    }

    pub fn unnamed(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: text.clone(),
            named: false,
            text: text.into_bytes(),
            span: Span::default(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: SyntheticNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntheticNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Total number of nodes in this subtree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl<'a> SyntaxNode for &'a SyntheticNode {
    type Children = std::slice::Iter<'a, SyntheticNode>;

    fn kind(&self) -> &str {
        &self.kind
    }

    fn is_named(&self) -> bool {
        self.named
    }

    fn text_bytes(&self) -> &[u8] {
        &self.text
    }

    fn span(&self) -> Span {
        self.span
    }

    fn children(&self) -> Self::Children {
        let node: &'a SyntheticNode = *self;
        node.children.iter()
    }
}
