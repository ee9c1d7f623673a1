//! Character and word predicates shared by the pattern lexer and the path splitter.

pub const PATH_SEPARATOR: u8 = b'/';
pub const MULTI_PARAM_SEPARATOR: u8 = b'-';

// ECMAScript reserved words; parameter names are usually forwarded to script handlers.
const RESERVED_IDENTIFIERS: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

#[inline]
pub fn is_param_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

#[inline]
pub fn is_param_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

#[inline]
pub fn is_path_separator(ch: char) -> bool {
    ch == PATH_SEPARATOR as char
}

#[inline]
pub fn is_multi_param_separator(ch: char) -> bool {
    ch == MULTI_PARAM_SEPARATOR as char
}

/// Characters a concrete request path may never carry.
#[inline]
pub fn is_forbidden_path_char(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{1680}' | '?'
    )
}

pub fn is_reserved_identifier(word: &str) -> bool {
    RESERVED_IDENTIFIERS.contains(&word)
}
