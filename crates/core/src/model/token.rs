use super::Category;
use crate::error::BioscopeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source location of a syntax node. Lines and columns are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

/// One visited syntax node, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedToken {
    pub text: String,
    /// Node type name as reported by the parser.
    pub kind: String,
    pub category: Category,
    pub is_named: bool,
    pub span: Span,
}

impl CategorizedToken {
    pub fn named(kind: impl Into<String>, text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
            category,
            is_named: true,
            span: Span::default(),
        }
    }

    /// Unnamed tokens always carry [`Category::Other`].
    pub fn unnamed(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
            category: Category::Other,
            is_named: false,
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl AsRef<CategorizedToken> for CategorizedToken {
    fn as_ref(&self) -> &CategorizedToken {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BioTag {
    Begin(Category),
    Inside(Category),
    Outside,
}

impl BioTag {
    /// Category of the run this tag belongs to, `None` for `O-other`.
    pub fn category(&self) -> Option<Category> {
        match self {
            BioTag::Begin(c) | BioTag::Inside(c) => Some(*c),
            BioTag::Outside => None,
        }
    }

    pub fn is_outside(&self) -> bool {
        matches!(self, BioTag::Outside)
    }
}

impl fmt::Display for BioTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BioTag::Begin(c) => write!(f, "B-{}", c),
            BioTag::Inside(c) => write!(f, "I-{}", c),
            BioTag::Outside => f.write_str("O-other"),
        }
    }
}

impl FromStr for BioTag {
    type Err = BioscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BioscopeError::Parsing(format!("Invalid BIO tag: {:?}", s));
        let (prefix, name) = s.split_once('-').ok_or_else(invalid)?;
        match (prefix, name) {
            ("O", "other") => Ok(BioTag::Outside),
            ("B", name) => Category::from_name(name).map(BioTag::Begin).ok_or_else(invalid),
            ("I", name) => Category::from_name(name).map(BioTag::Inside).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: CategorizedToken,
    pub tag: BioTag,
}

impl TaggedToken {
    pub fn text(&self) -> &str {
        &self.token.text
    }
}

impl AsRef<CategorizedToken> for TaggedToken {
    fn as_ref(&self) -> &CategorizedToken {
        &self.token
    }
}
