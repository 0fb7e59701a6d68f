use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Semantic category assigned to a named syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Loop,
    Condition,
    Function,
    Variable,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Loop,
        Category::Condition,
        Category::Function,
        Category::Variable,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Loop => "loop",
            Category::Condition => "condition",
            Category::Function => "function",
            Category::Variable => "variable",
            Category::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a node type name to a [`Category`].
///
/// Implementations must be total: every string, including error-recovery
/// node types, yields a category.
pub trait Classifier: Send + Sync {
    fn classify(&self, node_type: &str) -> Category;
}

impl<F> Classifier for F
where
    F: Fn(&str) -> Category + Send + Sync,
{
    fn classify(&self, node_type: &str) -> Category {
        self(node_type)
    }
}

/// Lookup-table classifier with [`Category::Other`] as the default branch.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    entries: HashMap<String, Category>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, node_type: impl Into<String>, category: Category) -> Self {
        self.insert(node_type, category);
        self
    }

    pub fn insert(&mut self, node_type: impl Into<String>, category: Category) {
        self.entries.insert(node_type.into(), category);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Category)> for CategoryTable {
    fn from_iter<I: IntoIterator<Item = (S, Category)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (node_type, category) in iter {
            table.insert(node_type, category);
        }
        table
    }
}

impl Classifier for CategoryTable {
    fn classify(&self, node_type: &str) -> Category {
        self.entries
            .get(node_type)
            .copied()
            .unwrap_or(Category::Other)
    }
}
