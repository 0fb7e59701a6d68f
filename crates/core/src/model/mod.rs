pub mod category;
pub mod dataset;
pub mod token;

pub use category::{Category, CategoryTable, Classifier};
pub use dataset::{LabeledDataset, NEGATIVE_LABEL};
pub use token::{BioTag, CategorizedToken, Span, TaggedToken};
