use bioscope_core::error::Result;
use bioscope_core::parser::utils::parse_with;
use bioscope_core::{Category, CategoryTable, Classifier, SourceParser};
use once_cell::sync::Lazy;
use tree_sitter::{Language, Tree};

pub mod constants;

use constants::*;

/// Node types that open a semantic chunk. Everything else is `other`.
static JAVA_CATEGORIES: Lazy<CategoryTable> = Lazy::new(|| {
    CategoryTable::from_iter([
        (KIND_FOR_STMT, Category::Loop),
        (KIND_IF_STMT, Category::Condition),
        (KIND_METHOD_DECL, Category::Function),
        (KIND_VARIABLE_DECL, Category::Variable),
    ])
});

/// Classifies a Java node type. Unknown and error-recovery types are `other`.
pub fn classify(node_type: &str) -> Category {
    JAVA_CATEGORIES.classify(node_type)
}

#[derive(Clone)]
pub struct JavaParser {
    pub language: Language,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for JavaParser {
    fn language(&self) -> &str {
        "java"
    }

    fn parse(&self, source: &[u8]) -> Result<Tree> {
        parse_with(&self.language, source)
    }

    fn classifier(&self) -> &dyn Classifier {
        &*JAVA_CATEGORIES
    }
}
