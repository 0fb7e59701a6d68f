pub mod filters;
pub mod parser;

pub use filters::default_filters;
pub use parser::{JavaParser, classify};

use bioscope_core::{DecodePolicy, Pipeline};
use std::sync::Arc;

/// Builds the Java tagging pipeline with the given decode policy.
pub fn pipeline(policy: DecodePolicy) -> Pipeline {
    Pipeline::new(Arc::new(JavaParser::new())).with_policy(policy)
}
