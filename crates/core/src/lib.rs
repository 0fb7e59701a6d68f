pub mod activation;
pub mod annotate;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod tagger;
pub mod walker;

pub use annotate::{Annotator, ClassFilter, FilterPredicate, annotate};
pub use config::PipelineConfig;
pub use error::{BioscopeError, Result};
pub use model::{
    BioTag, CategorizedToken, Category, CategoryTable, Classifier, LabeledDataset, NEGATIVE_LABEL,
    Span, TaggedToken,
};
pub use parser::{SourceParser, SyntaxNode, SyntheticNode, TsChildren, TsNode};
pub use pipeline::{Pipeline, TaggedDocument, tag_tree};
pub use tagger::{BioTagger, Run, RunViolation, runs, tag, validate_runs};
pub use walker::{DecodeIssue, DecodePolicy, TreeWalker, WalkOutput, walk};
