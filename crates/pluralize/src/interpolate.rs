//! `$N` backreference expansion for rule replacement templates.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BACKREFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]{1,2})").expect("backreference pattern is valid"));

/// Expand `$0`..`$99` in `template` from `groups`, where index 0 is the whole
/// match.
///
/// A reference past the end of `groups`, or to a group that did not take part
/// in the match, expands to the empty string. A `$` that is not followed by a
/// digit is copied through.
///
/// ```rust
/// use pluralize::interpolate;
///
/// let groups = [Some("knife"), Some("kni"), None];
/// assert_eq!(interpolate("$1$2ves", &groups), "knives");
/// ```
pub fn interpolate(template: &str, groups: &[Option<&str>]) -> String {
    BACKREFERENCE
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| groups.get(index).copied().flatten())
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}

/// Highest `$N` index referenced by `template`, if any.
pub(crate) fn max_reference(template: &str) -> Option<usize> {
    BACKREFERENCE
        .captures_iter(template)
        .filter_map(|caps| caps[1].parse::<usize>().ok())
        .max()
}
