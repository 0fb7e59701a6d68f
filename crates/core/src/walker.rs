use crate::error::{BioscopeError, Result};
use crate::model::{CategorizedToken, Classifier, Span};
use crate::parser::SyntaxNode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do when a node's text is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Replace invalid sequences with U+FFFD, keep the token and record a [`DecodeIssue`].
    #[default]
    Lossy,
    /// Abort the walk on the first undecodable token.
    Fatal,
}

/// A token whose text could only be decoded lossily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeIssue {
    /// Position of the token in traversal order.
    pub index: usize,
    pub kind: String,
    pub span: Span,
    /// Length of the valid UTF-8 prefix of the token's text.
    pub valid_up_to: usize,
}

#[derive(Debug, Clone, Default)]
pub struct WalkOutput {
    pub tokens: Vec<CategorizedToken>,
    pub issues: Vec<DecodeIssue>,
    /// Most frames open at once, i.e. the tree depth counting the root.
    pub max_frames: usize,
}

/// Pre-order, depth-first walk that emits one token per node.
///
/// Uses an explicit stack with one frame per open ancestor (its remaining
/// children), so extra space is O(depth) and never touches the call stack.
pub struct TreeWalker<'c> {
    classifier: &'c dyn Classifier,
    policy: DecodePolicy,
}

impl<'c> TreeWalker<'c> {
    pub fn new(classifier: &'c dyn Classifier) -> Self {
        Self {
            classifier,
            policy: DecodePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn walk<N: SyntaxNode>(&self, root: N) -> Result<WalkOutput> {
        let mut out = WalkOutput::default();
        self.emit(&root, &mut out)?;
        let mut frames = vec![root.children()];
        out.max_frames = 1;

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(child) => {
                    self.emit(&child, &mut out)?;
                    frames.push(child.children());
                    out.max_frames = out.max_frames.max(frames.len());
                }
                None => {
                    frames.pop();
                }
            }
        }

        debug!(
            tokens = out.tokens.len(),
            decode_issues = out.issues.len(),
            max_frames = out.max_frames,
            "Walked syntax tree"
        );
        Ok(out)
    }

    fn emit<N: SyntaxNode>(&self, node: &N, out: &mut WalkOutput) -> Result<()> {
        let index = out.tokens.len();
        let text = self.decode(index, node, &mut out.issues)?;
        let kind = node.kind();

        let token = if node.is_named() {
            CategorizedToken::named(kind, text, self.classifier.classify(kind))
        } else {
            CategorizedToken::unnamed(kind, text)
        };
        out.tokens.push(token.with_span(node.span()));
        Ok(())
    }

    fn decode<N: SyntaxNode>(
        &self,
        index: usize,
        node: &N,
        issues: &mut Vec<DecodeIssue>,
    ) -> Result<String> {
        let bytes = node.text_bytes();
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => {
                let span = node.span();
                if self.policy == DecodePolicy::Fatal {
                    return Err(BioscopeError::Decode {
                        index,
                        offset: span.start_byte + e.valid_up_to(),
                        source: e,
                    });
                }
                warn!(index, kind = node.kind(), "Token text is not valid UTF-8, decoding lossily");
                issues.push(DecodeIssue {
                    index,
                    kind: node.kind().to_string(),
                    span,
                    valid_up_to: e.valid_up_to(),
                });
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Walks `root` with the default (lossy) decode policy.
pub fn walk<N: SyntaxNode>(root: N, classifier: &dyn Classifier) -> Result<WalkOutput> {
    TreeWalker::new(classifier).walk(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryTable};
    use crate::parser::SyntheticNode;

    fn table() -> CategoryTable {
        CategoryTable::new()
            .with("method_declaration", Category::Function)
            .with("for_statement", Category::Loop)
    }

    #[test]
    fn emits_tokens_in_pre_order() {
        let tree = SyntheticNode::named("program", "m(){for(;;);}").child(
            SyntheticNode::named("method_declaration", "m(){for(;;);}")
                .child(SyntheticNode::named("identifier", "m"))
                .child(SyntheticNode::unnamed("("))
                .child(SyntheticNode::unnamed(")"))
                .child(
                    SyntheticNode::named("block", "{for(;;);}")
                        .child(SyntheticNode::unnamed("{"))
                        .child(SyntheticNode::named("for_statement", "for(;;);"))
                        .child(SyntheticNode::unnamed("}")),
                ),
        );

        let out = walk(&tree, &table()).unwrap();
        let kinds: Vec<&str> = out.tokens.iter().map(|t| t.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "program",
                "method_declaration",
                "identifier",
                "(",
                ")",
                "block",
                "{",
                "for_statement",
                "}"
            ]
        );
        assert_eq!(out.tokens[1].category, Category::Function);
        assert_eq!(out.tokens[7].category, Category::Loop);
        assert_eq!(out.tokens[0].category, Category::Other);
        assert!(!out.tokens[3].is_named);
        assert!(out.issues.is_empty());
    }

    #[test]
    fn unnamed_nodes_ignore_the_classifier() {
        let everything_loops = |_: &str| Category::Loop;
        let tree = SyntheticNode::unnamed("for");
        let out = walk(&tree, &everything_loops).unwrap();
        assert_eq!(out.tokens[0].category, Category::Other);
        assert!(!out.tokens[0].is_named);
    }

    #[test]
    fn deep_trees_do_not_overflow() {
        let depth = 100_000;
        let mut node = SyntheticNode::named("identifier", "x");
        for _ in 0..depth {
            node = SyntheticNode::named("parenthesized_expression", "(x)").child(node);
        }
        let out = walk(&node, &table()).unwrap();
        assert_eq!(out.tokens.len(), depth + 1);
        assert_eq!(out.tokens.last().unwrap().kind, "identifier");
        assert_eq!(out.max_frames, depth + 1);
        // Recursive Drop of the tree would overflow too, so leak it.
        std::mem::forget(node);
    }

    #[test]
    fn wide_trees_keep_one_frame_per_level() {
        let leaves = (0..10_000).map(|i| SyntheticNode::named("identifier", format!("x{}", i)));
        let tree = SyntheticNode::named("argument_list", "(..)").with_children(leaves);
        let out = walk(&tree, &table()).unwrap();
        assert_eq!(out.tokens.len(), 10_001);
        assert_eq!(out.tokens[10_000].text, "x9999");
        assert_eq!(out.max_frames, 2);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily_and_reported() {
        let tree = SyntheticNode::named("program", b"a\xffb".to_vec())
            .child(SyntheticNode::named("identifier", b"a\xffb".to_vec()));
        let out = walk(&tree, &table()).unwrap();

        assert_eq!(out.tokens.len(), 2);
        assert_eq!(out.tokens[1].text, "a\u{FFFD}b");
        assert_eq!(out.issues.len(), 2);
        assert_eq!(out.issues[1].index, 1);
        assert_eq!(out.issues[1].valid_up_to, 1);
    }

    #[test]
    fn fatal_policy_aborts_on_invalid_utf8() {
        let tree = SyntheticNode::named("program", "ok")
            .child(SyntheticNode::named("identifier", b"\xc3".to_vec()));
        let table = table();
        let err = TreeWalker::new(&table)
            .with_policy(DecodePolicy::Fatal)
            .walk(&tree)
            .unwrap_err();
        assert!(matches!(err, BioscopeError::Decode { index: 1, .. }));
    }
}
