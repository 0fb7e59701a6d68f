use super::ClassFilter;
use crate::error::{BioscopeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk filter definitions, in precedence order.
///
/// ```json
/// { "filters": [
///     { "name": "keyword", "set": ["public", "class"] },
///     { "name": "identifier_like", "pattern": "[A-Za-z_]\\w*$" }
/// ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub filters: Vec<FilterEntry>,
}

/// Exactly one of `set` or `pattern` must be given. Custom predicates only
/// exist in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FilterEntry {
    pub fn compile(&self) -> Result<ClassFilter> {
        match (&self.set, &self.pattern) {
            (Some(words), None) => Ok(ClassFilter::set(&self.name, words.iter().cloned())),
            (None, Some(pattern)) => ClassFilter::pattern(&self.name, pattern),
            _ => Err(BioscopeError::Config(format!(
                "filter '{}' must define exactly one of \"set\" or \"pattern\"",
                self.name
            ))),
        }
    }
}

impl FilterConfig {
    /// Compiles every entry; the first bad entry fails the whole list.
    pub fn compile(&self) -> Result<Vec<ClassFilter>> {
        self.filters.iter().map(FilterEntry::compile).collect()
    }
}

pub fn parse_filters(json: &str) -> Result<Vec<ClassFilter>> {
    let config: FilterConfig = serde_json::from_str(json)?;
    config.compile()
}

pub fn load_filters(path: &Path) -> Result<Vec<ClassFilter>> {
    let json = std::fs::read_to_string(path)?;
    parse_filters(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategorizedToken, Category};

    #[test]
    fn parses_sets_and_patterns_in_order() {
        let filters = parse_filters(
            r#"{ "filters": [
                { "name": "keyword", "set": ["public", "void"] },
                { "name": "number", "pattern": "[0-9]+$" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].name, "keyword");
        assert_eq!(filters[1].name, "number");
        let token = CategorizedToken::named("decimal_integer_literal", "123", Category::Other);
        assert!(filters[1].matches(&token));
    }

    #[test]
    fn empty_document_yields_no_filters() {
        assert!(parse_filters("{}").unwrap().is_empty());
    }

    #[test]
    fn bad_regex_fails_before_use() {
        let err = parse_filters(r#"{ "filters": [ { "name": "bad", "pattern": "(" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, BioscopeError::InvalidFilter { .. }));
    }

    #[test]
    fn entries_need_exactly_one_rule() {
        let both = r#"{ "filters": [ { "name": "x", "set": [], "pattern": "a" } ] }"#;
        let neither = r#"{ "filters": [ { "name": "x" } ] }"#;
        assert!(matches!(parse_filters(both), Err(BioscopeError::Config(_))));
        assert!(matches!(parse_filters(neither), Err(BioscopeError::Config(_))));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(parse_filters("{"), Err(BioscopeError::Json(_))));
    }
}
