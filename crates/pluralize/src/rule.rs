use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::case::restore_case;
use crate::interpolate::{interpolate, max_reference};

/// A compiled match pattern paired with its replacement template.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Rule {
    /// Compile `pattern` into a rule.
    ///
    /// Patterns starting with `(` are used as regular expressions verbatim.
    /// Anything else is a literal word, matched case-insensitively against the
    /// whole input.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, RuleError> {
        let source = if is_expr(pattern) {
            pattern.to_string()
        } else {
            format!("(?i)^{}$", regex::escape(pattern))
        };
        let compiled = Regex::new(&source).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        // `captures_len` counts the implicit whole-match group.
        if let Some(index) = max_reference(replacement)
            && index >= compiled.captures_len()
        {
            warn!(
                pattern,
                replacement, "rule references group ${index} that the pattern never captures"
            );
        }

        Ok(Self {
            pattern: compiled,
            replacement: replacement.to_string(),
        })
    }

    /// The compiled expression, as handed to the regex engine.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        self.replacement.as_str()
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    /// Rewrite the leftmost match in `word`, or `None` if the rule does not
    /// match.
    ///
    /// The expansion takes the casing of the matched text. An empty match
    /// takes it from the character just before the match instead.
    pub fn apply(&self, word: &str) -> Option<String> {
        let caps = self.pattern.captures(word)?;
        let whole = caps.get(0)?;
        let groups: Vec<Option<&str>> = caps.iter().map(|m| m.map(|m| m.as_str())).collect();
        let expanded = interpolate(&self.replacement, &groups);

        let (head, tail) = (&word[..whole.start()], &word[whole.end()..]);
        let restored = if whole.is_empty() {
            match head.chars().next_back() {
                Some(prev) => restore_case(prev.encode_utf8(&mut [0; 4]), &expanded),
                None => expanded,
            }
        } else {
            restore_case(whole.as_str(), &expanded)
        };

        let mut out = String::with_capacity(head.len() + restored.len() + tail.len());
        out.push_str(head);
        out.push_str(&restored);
        out.push_str(tail);
        Some(out)
    }
}

/// Raw expressions are marked by a leading `(`.
pub(crate) fn is_expr(pattern: &str) -> bool {
    pattern.starts_with('(')
}
