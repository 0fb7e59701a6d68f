// --- Tree-sitter Node Kind Constants ---
pub const KIND_FOR_STMT: &str = "for_statement";
pub const KIND_IF_STMT: &str = "if_statement";
pub const KIND_METHOD_DECL: &str = "method_declaration";
pub const KIND_VARIABLE_DECL: &str = "variable_declaration";

pub const KIND_IDENTIFIER: &str = "identifier";
pub const KIND_TYPE_IDENTIFIER: &str = "type_identifier";

// --- Filter Labels ---
pub const LABEL_KEYWORD: &str = "keyword";
pub const LABEL_LITERAL: &str = "literal";
pub const LABEL_IDENTIFIER: &str = "identifier";
pub const LABEL_OPERATOR: &str = "operator";

/// Reserved words and contextual keywords of the Java grammar.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "exports", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "module", "native", "new", "non-sealed", "open", "opens", "package",
    "permits", "private", "protected", "provides", "public", "record", "requires", "return",
    "sealed", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "to", "transient", "transitive", "try", "uses", "var", "void", "volatile", "when",
    "while", "with", "yield", "true", "false", "null",
];

pub const JAVA_OPERATORS: &[&str] = &[
    "=", ">", "<", "!", "~", "?", ":", "->", "::", "==", "<=", ">=", "!=", "&&", "||", "++", "--",
    "+", "-", "*", "/", "&", "|", "^", "%", "<<", ">>", ">>>", "+=", "-=", "*=", "/=", "&=", "|=",
    "^=", "%=", "<<=", ">>=", ">>>=",
];

/// Numeric, character, string and text-block literals. The whole token must
/// be one literal, so concatenations like `"a" + b + "c"` do not match.
pub const LITERAL_PATTERN: &str = concat!(
    r#"(?:[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][+-]?[0-9]+)?[lLfFdD]?"#,
    r#"|0[xX][0-9a-fA-F_]+[lL]?"#,
    r#"|0[bB][01_]+[lL]?"#,
    r#"|\.[0-9][0-9_]*(?:[eE][+-]?[0-9]+)?[fFdD]?"#,
    r#"|'(?:[^'\\\n]|\\.)+'"#,
    r#"|"(?:[^"\\\n]|\\.)*""#,
    // Text block: no unescaped `"""` before the closing delimiter.
    r#"|"{3}(?:[^"\\]|\\(?s:.)|"[^"\\]|""[^"\\]|"{1,2}\\(?s:.))*"{0,2}"{3}"#,
    r#")$"#
);
