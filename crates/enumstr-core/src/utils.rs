/// Convert PascalCase or camelCase to snake_case.
///
/// Acronyms stay together: a run of capitals is one word, and its last
/// capital starts a new word when followed by a lowercase letter.
///
/// # Examples
/// ```
/// use enumstr_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("Day"), "day");
/// assert_eq!(to_snake_case("HTTPStatus"), "http_status");
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let after_lower = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            let acronym_end = prev.is_some_and(|p| p.is_ascii_uppercase())
                && next.is_some_and(|n| n.is_ascii_lowercase());
            if (after_lower || acronym_end) && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a type name to SCREAMING_SNAKE_CASE for generated constants.
///
/// # Examples
/// ```
/// use enumstr_core::utils::to_screaming_snake_case;
/// assert_eq!(to_screaming_snake_case("Day"), "DAY");
/// assert_eq!(to_screaming_snake_case("TokenKind"), "TOKEN_KIND");
/// ```
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}

/// Keywords, reserved words and `_`, none of which can name an item.
const RESERVED_WORDS: &[&str] = &[
    "_", "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for",
    "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut",
    "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

/// Whether `s` can name a Rust item: ASCII letters, digits and `_`, not
/// starting with a digit, and not a keyword.
///
/// # Examples
/// ```
/// use enumstr_core::utils::is_rust_identifier;
/// assert!(is_rust_identifier("HTTPStatus"));
/// assert!(!is_rust_identifier("Bad{Name}"));
/// assert!(!is_rust_identifier("match"));
/// ```
pub fn is_rust_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !RESERVED_WORDS.contains(&s)
}
