use std::env;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pluralize::Pluralizer;
use tracing::info;

pub const APP_NAME: &str = "pluralize";
pub const RULES_ENV: &str = "PLURALIZE_RULES";

#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(about = "Pluralize, singularize and classify English nouns")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Word to inflect
    #[arg(long)]
    pub word: Option<String>,

    /// Which operations to print
    #[arg(long, value_enum, ignore_case = true, default_value_t = Cmd::All)]
    pub cmd: Cmd,

    /// JSON file with extra rules (falls back to $PLURALIZE_RULES)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Print version info and exit
    #[arg(short = 'V', long)]
    pub version: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Cmd {
    #[value(name = "All")]
    All,
    #[value(name = "IsPlural")]
    IsPlural,
    #[value(name = "IsSingular")]
    IsSingular,
    #[value(name = "Plural")]
    Plural,
    #[value(name = "Singular")]
    Singular,
}

impl Cmd {
    fn includes(self, op: Cmd) -> bool {
        self == Cmd::All || self == op
    }
}

pub fn version_line() -> String {
    format!(
        "{APP_NAME} {} [{}].[{}]",
        env!("CARGO_PKG_VERSION"),
        env::consts::OS,
        env::consts::ARCH
    )
}

/// The rules file named on the command line, else the one in the environment.
pub fn rules_path(cli: &Cli) -> Option<PathBuf> {
    cli.rules
        .clone()
        .or_else(|| env::var_os(RULES_ENV).map(PathBuf::from))
}

fn build_pluralizer(rules: Option<PathBuf>) -> Result<Pluralizer> {
    let Some(path) = rules else {
        return Ok(Pluralizer::new());
    };
    let pluralizer = Pluralizer::with_rules_file(&path)
        .with_context(|| format!("loading rules from {}", path.display()))?;
    info!("loaded extra rules from {}", path.display());
    Ok(pluralizer)
}

pub fn run(cli: &Cli, rules: Option<PathBuf>, out: &mut impl Write) -> Result<()> {
    if cli.version {
        writeln!(out, "{}", version_line())?;
        return Ok(());
    }

    let word = match cli.word.as_deref() {
        Some(word) if !word.is_empty() => word,
        _ => {
            writeln!(out, "-word not specified")?;
            return Ok(());
        }
    };

    let pluralizer = build_pluralizer(rules)?;

    if cli.cmd.includes(Cmd::IsPlural) {
        writeln!(out, "IsPlural({word})   => {}", pluralizer.is_plural(word))?;
    }
    if cli.cmd.includes(Cmd::IsSingular) {
        writeln!(out, "IsSingular({word}) => {}", pluralizer.is_singular(word))?;
    }
    if cli.cmd.includes(Cmd::Plural) {
        writeln!(out, "Plural({word})     => {}", pluralizer.plural(word))?;
    }
    if cli.cmd.includes(Cmd::Singular) {
        writeln!(out, "Singular({word})   => {}", pluralizer.singular(word))?;
    }
    Ok(())
}
