use std::sync::LazyLock;

use fancy_regex::Regex;

// An identifier character followed by a parenthesized, close-paren-free
// argument list, anywhere in the string. A syntactic sniff only: it does not
// check that the named function exists or that its arguments are well formed.
static CALL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]\([^)]*\)").expect("call shape pattern compiles"));

pub fn looks_like_function_call(text: &str) -> bool {
    CALL_SHAPE.is_match(text).unwrap_or(false)
}

pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
