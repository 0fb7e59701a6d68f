//! Multiclass labeling of tokens through ordered, named filters.
//!
//! Each token gets the name of the first filter that matches it, or
//! [`NEGATIVE_LABEL`] when none does. Filters never see each other's results.

use crate::error::{BioscopeError, Result};
use crate::model::{CategorizedToken, LabeledDataset, NEGATIVE_LABEL};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub mod balance;
pub mod config;

pub use balance::balance;
pub use config::{FilterConfig, FilterEntry, load_filters, parse_filters};

pub type CustomPredicate = Arc<dyn Fn(&CategorizedToken) -> bool + Send + Sync>;

#[derive(Clone)]
pub enum FilterPredicate {
    /// Exact match of the token text against a word set.
    Set(HashSet<String>),
    /// Regex anchored at the start of the token text.
    Pattern(Regex),
    Custom(CustomPredicate),
}

impl FilterPredicate {
    pub fn matches(&self, token: &CategorizedToken) -> bool {
        match self {
            FilterPredicate::Set(words) => words.contains(&token.text),
            FilterPredicate::Pattern(regex) => regex.is_match(&token.text),
            FilterPredicate::Custom(predicate) => predicate(token),
        }
    }
}

impl fmt::Debug for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPredicate::Set(words) => f.debug_tuple("Set").field(&words.len()).finish(),
            FilterPredicate::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            FilterPredicate::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassFilter {
    pub name: String,
    pub predicate: FilterPredicate,
}

impl ClassFilter {
    pub fn set<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            predicate: FilterPredicate::Set(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Compiles `pattern` anchored at the start of the token text.
    ///
    /// The raw pattern must compile on its own before it is wrapped, so a
    /// pattern cannot close the anchoring group and escape it.
    pub fn pattern(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let name = name.into();
        let invalid = |source| BioscopeError::InvalidFilter {
            name: name.clone(),
            source,
        };
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(invalid)?;
        Ok(Self {
            name,
            predicate: FilterPredicate::Pattern(regex),
        })
    }

    pub fn custom<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&CategorizedToken) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: FilterPredicate::Custom(Arc::new(predicate)),
        }
    }

    pub fn matches(&self, token: &CategorizedToken) -> bool {
        self.predicate.matches(token)
    }
}

/// Applies an ordered filter list. An empty list labels everything negative.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    filters: Vec<ClassFilter>,
}

impl Annotator {
    pub fn new(filters: Vec<ClassFilter>) -> Self {
        Self { filters }
    }

    pub fn filters(&self) -> &[ClassFilter] {
        &self.filters
    }

    pub fn label_for(&self, token: &CategorizedToken) -> &str {
        self.filters
            .iter()
            .find(|f| f.matches(token))
            .map(|f| f.name.as_str())
            .unwrap_or(NEGATIVE_LABEL)
    }

    pub fn annotate<T: AsRef<CategorizedToken>>(&self, tokens: &[T]) -> LabeledDataset {
        let mut dataset = LabeledDataset::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            dataset.push(token.text.as_str(), self.label_for(token));
        }
        debug!(
            tokens = dataset.len(),
            filters = self.filters.len(),
            "Annotated tokens"
        );
        dataset
    }
}

pub fn annotate<T: AsRef<CategorizedToken>>(tokens: &[T], filters: &[ClassFilter]) -> LabeledDataset {
    Annotator::new(filters.to_vec()).annotate(tokens)
}
