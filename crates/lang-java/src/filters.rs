use crate::parser::constants::*;
use bioscope_core::error::Result;
use bioscope_core::{CategorizedToken, ClassFilter};

/// Default multiclass filters for Java tokens, in precedence order:
/// keyword, literal, identifier, operator.
pub fn default_filters() -> Result<Vec<ClassFilter>> {
    Ok(vec![
        ClassFilter::set(LABEL_KEYWORD, JAVA_KEYWORDS.iter().copied()),
        ClassFilter::pattern(LABEL_LITERAL, LITERAL_PATTERN)?,
        ClassFilter::custom(LABEL_IDENTIFIER, is_identifier),
        ClassFilter::set(LABEL_OPERATOR, JAVA_OPERATORS.iter().copied()),
    ])
}

fn is_identifier(token: &CategorizedToken) -> bool {
    token.is_named && (token.kind == KIND_IDENTIFIER || token.kind == KIND_TYPE_IDENTIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioscope_core::{Annotator, Category, NEGATIVE_LABEL};

    fn label(token: CategorizedToken) -> String {
        let annotator = Annotator::new(default_filters().unwrap());
        annotator.label_for(&token).to_string()
    }

    #[test]
    fn test_keywords_win_over_everything() {
        assert_eq!(label(CategorizedToken::unnamed("public", "public")), LABEL_KEYWORD);
        assert_eq!(label(CategorizedToken::unnamed("null", "null")), LABEL_KEYWORD);
    }

    #[test]
    fn test_literals() {
        for text in ["123", "0x1F", "1_000L", "3.14f", ".5", "'a'", "'\\n'", "\"hi there\""] {
            let token = CategorizedToken::named("literal", text, Category::Other);
            assert_eq!(label(token), LABEL_LITERAL, "{}", text);
        }
    }

    #[test]
    fn test_text_blocks() {
        for text in ["\"\"\"\n    hello\n    \"\"\"", "\"\"\"\n  say \"hi\"\"\"\""] {
            let token = CategorizedToken::named("string_literal", text, Category::Other);
            assert_eq!(label(token), LABEL_LITERAL, "{}", text);
        }
    }

    #[test]
    fn test_string_concatenation_is_not_a_literal() {
        for text in [
            "\"a\" + b + \"c\"",
            "\"a\" + \"b\"",
            "\"\"\"\n  a\"\"\" + \"\"\"\n  b\"\"\"",
            "'a' + 'b'",
        ] {
            let token = CategorizedToken::named("binary_expression", text, Category::Other);
            assert_eq!(label(token), NEGATIVE_LABEL, "{}", text);
        }
    }

    #[test]
    fn test_identifiers_use_node_type() {
        let ident = CategorizedToken::named("identifier", "HelloWorld", Category::Other);
        assert_eq!(label(ident), LABEL_IDENTIFIER);

        // Same text, but a declaration node spanning it is not an identifier.
        let decl = CategorizedToken::named("class_declaration", "HelloWorld", Category::Other);
        assert_eq!(label(decl), NEGATIVE_LABEL);
    }

    #[test]
    fn test_operators_and_punctuation() {
        assert_eq!(label(CategorizedToken::unnamed("+=", "+=")), LABEL_OPERATOR);
        assert_eq!(label(CategorizedToken::unnamed(";", ";")), NEGATIVE_LABEL);
        assert_eq!(label(CategorizedToken::unnamed("\"", "\"")), NEGATIVE_LABEL);
    }
}
