use std::sync::{Arc, RwLock};
use std::thread;

use pluralize::{ConfigError, Pluralizer, RuleConfig, RuleError};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    std::fs::write(file.path(), json).expect("write config");
    file
}

#[test]
fn added_plural_rule_overrides_builtins() {
    let mut p = Pluralizer::new();
    assert_eq!(p.plural("regex"), "regexes");
    p.add_plural_rule("(?i)gex$", "gexii").unwrap();
    assert_eq!(p.plural("regex"), "regexii");
}

#[test]
fn added_singular_rule_overrides_builtins() {
    let mut p = Pluralizer::new();
    assert_eq!(p.singular("singles"), "single");
    p.add_singular_rule("(?i)singles$", "singular").unwrap();
    assert_eq!(p.singular("singles"), "singular");
}

#[test]
fn added_irregular_rule_wins_over_rules() {
    let mut p = Pluralizer::new();
    assert_eq!(p.plural("irregular"), "irregulars");
    p.add_irregular_rule("irregular", "regular");
    assert_eq!(p.plural("irregular"), "regular");
    assert_eq!(p.plural("Irregular"), "Regular");
    assert_eq!(p.singular("regular"), "irregular");
    assert!(p.is_plural("regular"));
    assert!(!p.is_singular("regular"));
}

#[test]
fn added_uncountable_word_is_left_alone() {
    let mut p = Pluralizer::new();
    assert_eq!(p.plural("paper"), "papers");
    p.add_uncountable_rule("Paper").unwrap();
    assert_eq!(p.plural("paper"), "paper");
    assert_eq!(p.singular("paper"), "paper");
    assert!(p.is_plural("PAPER"));
    assert!(p.is_singular("PAPER"));
}

#[test]
fn literal_rules_match_whole_words_only() {
    let mut p = Pluralizer::new();
    p.add_plural_rule("cactus", "cactuses").unwrap();
    assert_eq!(p.plural("Cactus"), "Cactuses");
    assert_eq!(p.plural("megacactus"), "megacacti");
}

#[test]
fn invalid_user_rules_are_reported_not_fatal() {
    let mut p = Pluralizer::new();
    let before = p.plural_rules().len();
    let err = p.add_plural_rule("([a-z", "x").unwrap_err();
    assert!(matches!(err, RuleError::InvalidPattern { .. }));
    assert!(p.add_singular_rule("(?P<", "x").is_err());
    assert_eq!(p.plural_rules().len(), before);
    assert_eq!(p.plural("chair"), "chairs");
}

#[test]
fn instances_do_not_share_rules() {
    let mut custom = Pluralizer::new();
    custom.add_uncountable_rule("paper").unwrap();
    let stock = Pluralizer::new();
    assert_eq!(custom.plural("paper"), "paper");
    assert_eq!(stock.plural("paper"), "papers");
    assert_eq!(pluralize::plural("paper"), "papers");

    let cloned = custom.clone();
    custom.add_irregular_rule("paper", "sheaf");
    assert_eq!(custom.plural("paper"), "sheaf");
    assert_eq!(cloned.plural("paper"), "paper");
}

#[test]
fn free_functions_use_builtins() {
    assert_eq!(pluralize::plural("bus"), "buses");
    assert_eq!(pluralize::singular("Buses"), "Bus");
    assert!(pluralize::is_plural("children"));
    assert!(pluralize::is_singular("child"));
    assert_eq!(pluralize::pluralize("test", 5, true), "5 tests");
    assert!(std::ptr::eq(
        pluralize::default_pluralizer(),
        pluralize::default_pluralizer()
    ));
}

#[test]
fn config_file_extends_builtins() {
    let file = write_config(
        r#"{
            "irregular": [{ "singular": "irregular", "plural": "regular" }],
            "uncountable": ["paper", "(?i)ware$"],
            "plural": [{ "pattern": "(?i)gex$", "replacement": "gexii" }],
            "singular": [{ "pattern": "(?i)singles$", "replacement": "singular" }]
        }"#,
    );
    let p = Pluralizer::with_rules_file(file.path()).unwrap();
    assert_eq!(p.plural("irregular"), "regular");
    assert_eq!(p.plural("paper"), "paper");
    assert_eq!(p.plural("groupware"), "groupware");
    assert_eq!(p.plural("regex"), "regexii");
    assert_eq!(p.singular("singles"), "singular");
    assert_eq!(p.plural("chair"), "chairs");
}

#[test]
fn empty_config_file_keeps_builtins() {
    let file = write_config("{}");
    let p = Pluralizer::with_rules_file(file.path()).unwrap();
    assert_eq!(p.plural("chair"), "chairs");
    assert_eq!(p.singular("oxen"), "ox");
    assert_eq!(p.plural_rules().len(), Pluralizer::new().plural_rules().len());
}

#[test]
fn config_errors_are_typed() {
    let missing = Pluralizer::with_rules_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(missing, ConfigError::Io(_)));

    let malformed = write_config(r#"{ "plural": "nope" }"#);
    let err = Pluralizer::with_rules_file(malformed.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));

    let bad_rule = write_config(r#"{ "plural": [{ "pattern": "(x", "replacement": "y" }] }"#);
    let err = Pluralizer::with_rules_file(bad_rule.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Rule(_)));
    assert!(err.to_string().contains("(x"));
}

#[test]
fn apply_config_keeps_rules_before_a_failure() {
    let config = RuleConfig::from_json_str(
        r#"{
            "irregular": [{ "singular": "irregular", "plural": "regular" }],
            "plural": [
                { "pattern": "(?i)gex$", "replacement": "gexii" },
                { "pattern": "(broken", "replacement": "x" }
            ],
            "uncountable": ["paper"]
        }"#,
    )
    .unwrap();
    let mut p = Pluralizer::new();
    assert!(p.apply_config(&config).is_err());
    assert_eq!(p.plural("irregular"), "regular");
    assert_eq!(p.plural("regex"), "regexii");
    // never reached
    assert_eq!(p.plural("paper"), "papers");
}

#[test]
fn shared_engine_reads_across_threads() {
    let shared = Arc::new(RwLock::new(Pluralizer::new()));
    shared
        .write()
        .unwrap()
        .add_plural_rule("(?i)gex$", "gexii")
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let p = shared.read().unwrap();
                (p.plural("regex"), p.singular("geese"))
            })
        })
        .collect();

    for handle in handles {
        let (plural, singular) = handle.join().unwrap();
        assert_eq!(plural, "regexii");
        assert_eq!(singular, "goose");
    }
}
