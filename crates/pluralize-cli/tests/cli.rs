use std::path::PathBuf;

use clap::Parser;
use pluralize_cli::{Cli, run, version_line};

fn run_args(args: &[&str], rules: Option<PathBuf>) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("pluralize").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, rules, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn prints_every_operation_by_default() {
    let output = run_args(&["--word", "Ox"], None).unwrap();
    assert_eq!(
        output,
        "IsPlural(Ox)   => false\n\
         IsSingular(Ox) => true\n\
         Plural(Ox)     => Oxen\n\
         Singular(Ox)   => Ox\n"
    );
}

#[test]
fn filters_by_cmd() {
    let output = run_args(&["--word", "buses", "--cmd", "Singular"], None).unwrap();
    assert_eq!(output, "Singular(buses)   => bus\n");

    let output = run_args(&["--word", "sheep", "--cmd", "isplural"], None).unwrap();
    assert_eq!(output, "IsPlural(sheep)   => true\n");
}

#[test]
fn unknown_cmd_is_rejected_before_running() {
    let err = Cli::try_parse_from(["pluralize", "--word", "ox", "--cmd", "Bogus"]).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("Bogus"));
    assert!(rendered.contains("IsPlural"));
}

#[test]
fn missing_word_prints_notice() {
    assert_eq!(run_args(&[], None).unwrap(), "-word not specified\n");
    assert_eq!(
        run_args(&["--word", ""], None).unwrap(),
        "-word not specified\n"
    );
}

#[test]
fn version_flag_short_circuits() {
    let output = run_args(&["--version", "--word", "ox"], None).unwrap();
    assert_eq!(output, format!("{}\n", version_line()));
}

#[test]
fn rules_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(
        &path,
        r#"{ "plural": [{ "pattern": "(?i)gex$", "replacement": "gexii" }] }"#,
    )
    .unwrap();

    let output = run_args(&["--word", "regex", "--cmd", "Plural"], Some(path)).unwrap();
    assert_eq!(output, "Plural(regex)     => regexii\n");
}

#[test]
fn broken_rules_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = run_args(&["--word", "regex"], Some(path.clone())).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
}
