//! Extra rules supplied as JSON.
//!
//! ```json
//! {
//!   "irregular":   [{ "singular": "irregular", "plural": "regular" }],
//!   "uncountable": ["paper", "(?i)ware$"],
//!   "plural":      [{ "pattern": "(?i)gex$", "replacement": "gexii" }],
//!   "singular":    [{ "pattern": "(?i)singles$", "replacement": "singular" }]
//! }
//! ```
//!
//! Every section is optional. Apply a parsed config with
//! [`Pluralizer::apply_config`](crate::Pluralizer::apply_config).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::rule::RuleError;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    pub irregular: Vec<IrregularPair>,
    pub uncountable: Vec<String>,
    pub plural: Vec<RuleSpec>,
    pub singular: Vec<RuleSpec>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IrregularPair {
    pub singular: String,
    pub plural: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub pattern: String,
    pub replacement: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rule config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed rule config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl RuleConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn is_empty(&self) -> bool {
        self.irregular.is_empty()
            && self.uncountable.is_empty()
            && self.plural.is_empty()
            && self.singular.is_empty()
    }
}
