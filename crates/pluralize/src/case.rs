//! Reapply the casing of an input word onto a transformed token.
//!
//! Only three shapes are recognised: all upper-case, title case (first
//! character upper-case) and everything else. Scripts without case
//! distinction compare equal to their own upper-case form, so they fall into
//! the upper-case branch, which leaves them untouched.

/// Restore the casing of `word` onto `token`.
///
/// ```rust
/// use pluralize::restore_case;
///
/// assert_eq!(restore_case("OX", "oxen"), "OXEN");
/// assert_eq!(restore_case("Ox", "oxen"), "Oxen");
/// assert_eq!(restore_case("ox", "OXEN"), "oxen");
/// ```
pub fn restore_case(word: &str, token: &str) -> String {
    if word == token {
        return token.to_string();
    }

    if word == word.to_uppercase() {
        return token.to_uppercase();
    }

    if let Some(first) = word.chars().next()
        && first.to_uppercase().eq(std::iter::once(first))
    {
        return title_case(token);
    }

    token.to_lowercase()
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
