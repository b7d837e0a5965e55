use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::builtin;
use crate::case::restore_case;
use crate::config::{ConfigError, RuleConfig};
use crate::rule::{Rule, RuleError, is_expr};

/// Which form a word is being turned into (or tested for).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Plural,
    Singular,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Plural => "plural",
            Direction::Singular => "singular",
        })
    }
}

/// Rule store and transformer.
///
/// Every instance owns its rules and exception tables, so two instances never
/// see each other's additions. Mutators take `&mut self`. Share an instance
/// across threads behind an `Arc` (read-only) or an `RwLock` (if rules are
/// added while other threads read).
#[derive(Clone, Debug)]
pub struct Pluralizer {
    plural_rules: Vec<Rule>,
    singular_rules: Vec<Rule>,
    uncountables: HashSet<String>,
    irregular_singles: HashMap<String, String>,
    irregular_plurals: HashMap<String, String>,
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

/// The tables consulted for one direction: the map that rewrites a token, the
/// map of tokens already in the target form, and the ordered rules.
struct Tables<'a> {
    replace: &'a HashMap<String, String>,
    keep: &'a HashMap<String, String>,
    rules: &'a [Rule],
}

impl Pluralizer {
    /// An engine loaded with the built-in English rules.
    ///
    /// # Panics
    /// If a built-in pattern fails to compile. That is a bug in this crate, not
    /// a runtime condition.
    pub fn new() -> Self {
        let mut pluralizer = Self::empty();
        if let Err(err) = builtin::load(&mut pluralizer) {
            panic!("built-in inflection rules are invalid: {err}");
        }
        debug!(
            plural_rules = pluralizer.plural_rules.len(),
            singular_rules = pluralizer.singular_rules.len(),
            irregulars = pluralizer.irregular_singles.len(),
            uncountables = pluralizer.uncountables.len(),
            "loaded built-in inflection rules"
        );
        pluralizer
    }

    /// Built-in rules followed by the extra rules in the JSON file at `path`.
    pub fn with_rules_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = RuleConfig::load(path)?;
        if config.is_empty() {
            warn!(path = %path.display(), "rule config defines no rules");
        }
        let mut pluralizer = Self::new();
        pluralizer.apply_config(&config)?;
        Ok(pluralizer)
    }

    /// An engine with no rules at all; every word passes through unchanged.
    pub fn empty() -> Self {
        Self {
            plural_rules: Vec::new(),
            singular_rules: Vec::new(),
            uncountables: HashSet::new(),
            irregular_singles: HashMap::new(),
            irregular_plurals: HashMap::new(),
        }
    }

    pub fn plural(&self, word: &str) -> String {
        self.inflect(word, Direction::Plural)
    }

    pub fn singular(&self, word: &str) -> String {
        self.inflect(word, Direction::Singular)
    }

    pub fn is_plural(&self, word: &str) -> bool {
        self.is_form(word, Direction::Plural)
    }

    pub fn is_singular(&self, word: &str) -> bool {
        self.is_form(word, Direction::Singular)
    }

    /// Singular when `count == 1`, plural otherwise, optionally prefixed with
    /// the count.
    ///
    /// ```rust
    /// use pluralize::Pluralizer;
    ///
    /// let p = Pluralizer::new();
    /// assert_eq!(p.pluralize("test", 1, true), "1 test");
    /// assert_eq!(p.pluralize("test", 5, true), "5 tests");
    /// assert_eq!(p.pluralize("test", 0, false), "tests");
    /// ```
    pub fn pluralize(&self, word: &str, count: i64, inclusive: bool) -> String {
        let direction = if count == 1 {
            Direction::Singular
        } else {
            Direction::Plural
        };
        let inflected = self.inflect(word, direction);
        if inclusive {
            format!("{count} {inflected}")
        } else {
            inflected
        }
    }

    /// Convert `word` into `direction`'s form.
    ///
    /// Precedence: a token already in the target irregular form is kept, an
    /// irregular token is swapped, then (unless the token is empty or
    /// uncountable) the most recently registered matching rule rewrites it.
    pub fn inflect(&self, word: &str, direction: Direction) -> String {
        let token = word.to_lowercase();
        let tables = self.tables(direction);

        if tables.keep.contains_key(&token) {
            return restore_case(word, &token);
        }

        if let Some(replacement) = tables.replace.get(&token) {
            return restore_case(word, replacement);
        }

        self.sanitize_word(&token, word, direction, tables.rules)
    }

    /// Whether `word` is already in `direction`'s form.
    ///
    /// Uncountables and known target-form irregulars are always in it. Otherwise
    /// the lower-cased word is run through the same rules and must come back
    /// unchanged.
    pub fn is_form(&self, word: &str, direction: Direction) -> bool {
        let token = word.to_lowercase();
        let tables = self.tables(direction);

        if tables.keep.contains_key(&token) {
            return true;
        }
        if tables.replace.contains_key(&token) {
            return false;
        }

        self.sanitize_word(&token, &token, direction, tables.rules) == token
    }

    pub fn add_plural_rule(&mut self, pattern: &str, replacement: &str) -> Result<(), RuleError> {
        let rule = Rule::new(pattern, replacement)?;
        trace!(pattern, replacement, "added plural rule");
        self.plural_rules.push(rule);
        Ok(())
    }

    pub fn add_singular_rule(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> Result<(), RuleError> {
        let rule = Rule::new(pattern, replacement)?;
        trace!(pattern, replacement, "added singular rule");
        self.singular_rules.push(rule);
        Ok(())
    }

    /// Register an irregular pair in both directions. Both sides are
    /// lower-cased; a later pair sharing a side overwrites that entry.
    pub fn add_irregular_rule(&mut self, singular: &str, plural: &str) {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        trace!(%singular, %plural, "added irregular rule");

        self.irregular_singles.insert(singular.clone(), plural.clone());
        self.irregular_plurals.insert(plural, singular);
    }

    /// Mark a word as uncountable.
    ///
    /// A plain word goes into the exact-match set. An expression (leading `(`)
    /// becomes an identity rule in both rule lists, so it applies to any word
    /// it matches.
    pub fn add_uncountable_rule(&mut self, word: &str) -> Result<(), RuleError> {
        if !is_expr(word) {
            trace!(word, "added uncountable word");
            self.uncountables.insert(word.to_lowercase());
            return Ok(());
        }

        // Compiled once: a bad pattern leaves both lists untouched.
        let rule = Rule::new(word, "$0")?;
        trace!(pattern = word, "added uncountable rule");
        self.plural_rules.push(rule.clone());
        self.singular_rules.push(rule);
        Ok(())
    }

    /// Register everything in `config`: irregulars, plural rules, singular
    /// rules, then uncountables. Stops at the first pattern that fails to
    /// compile; earlier entries stay registered.
    pub fn apply_config(&mut self, config: &RuleConfig) -> Result<(), RuleError> {
        for pair in &config.irregular {
            self.add_irregular_rule(&pair.singular, &pair.plural);
        }
        for rule in &config.plural {
            self.add_plural_rule(&rule.pattern, &rule.replacement)?;
        }
        for rule in &config.singular {
            self.add_singular_rule(&rule.pattern, &rule.replacement)?;
        }
        for word in &config.uncountable {
            self.add_uncountable_rule(word)?;
        }
        debug!(
            irregular = config.irregular.len(),
            plural = config.plural.len(),
            singular = config.singular.len(),
            uncountable = config.uncountable.len(),
            "applied rule config"
        );
        Ok(())
    }

    /// Plural rules in registration order (the scan runs back to front).
    pub fn plural_rules(&self) -> &[Rule] {
        &self.plural_rules
    }

    /// Singular rules in registration order (the scan runs back to front).
    pub fn singular_rules(&self) -> &[Rule] {
        &self.singular_rules
    }

    /// Whether `word` is in the exact-match uncountable set. Expression
    /// uncountables live in the rule lists and are not reported here.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    /// The registered irregular plural of `singular`, lower-cased.
    pub fn irregular_plural(&self, singular: &str) -> Option<&str> {
        self.irregular_singles
            .get(&singular.to_lowercase())
            .map(String::as_str)
    }

    /// The registered irregular singular of `plural`, lower-cased.
    pub fn irregular_singular(&self, plural: &str) -> Option<&str> {
        self.irregular_plurals
            .get(&plural.to_lowercase())
            .map(String::as_str)
    }

    fn tables(&self, direction: Direction) -> Tables<'_> {
        match direction {
            Direction::Plural => Tables {
                replace: &self.irregular_singles,
                keep: &self.irregular_plurals,
                rules: &self.plural_rules,
            },
            Direction::Singular => Tables {
                replace: &self.irregular_plurals,
                keep: &self.irregular_singles,
                rules: &self.singular_rules,
            },
        }
    }

    fn sanitize_word(
        &self,
        token: &str,
        word: &str,
        direction: Direction,
        rules: &[Rule],
    ) -> String {
        if token.is_empty() || self.uncountables.contains(token) {
            return word.to_string();
        }

        // Newest first: later rules are more specific.
        for rule in rules.iter().rev() {
            if let Some(result) = rule.apply(word) {
                trace!(word, %direction, pattern = rule.pattern(), %result, "rule matched");
                return result;
            }
        }

        word.to_string()
    }
}
