use crate::annotate::Annotator;
use crate::error::Result;
use crate::model::{Classifier, LabeledDataset, TaggedToken};
use crate::parser::{SourceParser, SyntaxNode, TsNode};
use crate::tagger::{self, Run};
use crate::walker::{DecodeIssue, DecodePolicy, TreeWalker};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of tagging one syntax tree.
#[derive(Debug, Clone, Default)]
pub struct TaggedDocument {
    pub tokens: Vec<TaggedToken>,
    /// Tokens whose text was decoded lossily.
    pub issues: Vec<DecodeIssue>,
}

impl TaggedDocument {
    pub fn runs(&self) -> Vec<Run> {
        tagger::runs(self.tokens.iter().map(|t| t.tag))
    }

    pub fn annotate(&self, annotator: &Annotator) -> LabeledDataset {
        annotator.annotate(&self.tokens)
    }
}

/// Walks and tags a tree in one go. The tagger state spans the whole walk.
pub fn tag_tree<N: SyntaxNode>(
    root: N,
    classifier: &dyn Classifier,
    policy: DecodePolicy,
) -> Result<TaggedDocument> {
    let walked = TreeWalker::new(classifier).with_policy(policy).walk(root)?;
    Ok(TaggedDocument {
        tokens: tagger::tag(walked.tokens),
        issues: walked.issues,
    })
}

/// Parser + walker + tagger for one language.
#[derive(Clone)]
pub struct Pipeline {
    parser: Arc<dyn SourceParser>,
    policy: DecodePolicy,
}

impl Pipeline {
    pub fn new(parser: Arc<dyn SourceParser>) -> Self {
        Self {
            parser,
            policy: DecodePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn language(&self) -> &str {
        self.parser.language()
    }

    pub fn run(&self, source: &[u8]) -> Result<TaggedDocument> {
        let tree = self.parser.parse(source)?;
        if tree.root_node().has_error() {
            warn!("Source contains syntax errors; error nodes are tagged as 'other'");
        }
        tag_tree(
            TsNode::root(&tree, source),
            self.parser.classifier(),
            self.policy,
        )
    }

    pub fn run_file(&self, path: &Path) -> Result<TaggedDocument> {
        let source = std::fs::read(path)?;
        let doc = self.run(&source)?;
        info!(
            "Tagged {} ({}): {} tokens, {} runs, {} decode issues",
            path.display(),
            self.language(),
            doc.tokens.len(),
            doc.runs().len(),
            doc.issues.len()
        );
        Ok(doc)
    }
}
