//! English noun pluralization and singularization.
//!
//! A rule engine in the classic inflector mould: two exception tables for
//! irregular pairs, a set of uncountable words, and two ordered lists of
//! regular-expression rules. Case is restored onto every result, so
//! `"Ox"` becomes `"Oxen"` and `"BUS"` becomes `"BUSES"`.
//!
//! # How it works
//! 1. Lower-case the word into a lookup token.
//! 2. Keep it if it is already the target irregular form; swap it if it is the
//!    other irregular form.
//! 3. Leave empty and uncountable tokens alone.
//! 4. Otherwise apply the most recently registered rule that matches, expanding
//!    `$N` backreferences and restoring the original casing.
//!
//! # Example
//! ```rust
//! use pluralize::Pluralizer;
//!
//! # fn main() -> Result<(), pluralize::RuleError> {
//! let mut p = Pluralizer::new();
//! assert_eq!(p.plural("person"), "people");
//! assert_eq!(p.singular("Wolves"), "Wolf");
//! assert!(p.is_plural("sheep") && p.is_singular("sheep"));
//!
//! p.add_plural_rule("(?i)gex$", "gexii")?;
//! assert_eq!(p.plural("regex"), "regexii");
//! # Ok(()) }
//! ```
//!
//! The free functions ([`plural`], [`singular`], ...) read a shared instance
//! holding only the built-in rules. Build a [`Pluralizer`] to add your own.
//!
//! For a runnable demo, see `cargo run -p pluralize --example inflect -- [word...]`.

use std::sync::LazyLock;

mod builtin;
pub mod case;
pub mod config;
pub mod engine;
pub mod interpolate;
pub mod rule;

pub use case::restore_case;
pub use config::{ConfigError, IrregularPair, RuleConfig, RuleSpec};
pub use engine::{Direction, Pluralizer};
pub use interpolate::interpolate;
pub use rule::{Rule, RuleError};

static DEFAULT: LazyLock<Pluralizer> = LazyLock::new(Pluralizer::new);

/// The shared built-in instance behind the free functions.
pub fn default_pluralizer() -> &'static Pluralizer {
    &DEFAULT
}

pub fn plural(word: &str) -> String {
    DEFAULT.plural(word)
}

pub fn singular(word: &str) -> String {
    DEFAULT.singular(word)
}

pub fn is_plural(word: &str) -> bool {
    DEFAULT.is_plural(word)
}

pub fn is_singular(word: &str) -> bool {
    DEFAULT.is_singular(word)
}

/// See [`Pluralizer::pluralize`].
pub fn pluralize(word: &str, count: i64, inclusive: bool) -> String {
    DEFAULT.pluralize(word, count, inclusive)
}
