use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use amareh::calculator::{CalcResult, evaluate_expression, format_display, looks_like_expression};
use amareh::config::Config;
use amareh::i18n::Translator;
use amareh::logging;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

/// Solve short calculator expressions. Operators are applied strictly left
/// to right: `2+3*4` is 20.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/amareh/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language for error messages, e.g. `en` or `fa`.
    #[arg(short, long)]
    lang: Option<String>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    /// Group the integer part of results with thousand separators.
    #[arg(long)]
    separators: bool,

    /// When reading stdin, silently skip lines that do not look like expressions.
    #[arg(short, long)]
    filter: bool,

    /// Expressions to solve. Reads one expression per line from stdin when empty.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every expression was solved.
fn run() -> Result<bool> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    config.apply_process_env();
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
    }
    if args.verbose {
        config.log.level = "debug".to_string();
    }
    config.display.separators |= args.separators;

    logging::init(&config.log)?;
    info!(%config, "starting");

    let translator = Translator::new(&config.language)?;
    let mut out = io::stdout().lock();

    if !args.expressions.is_empty() {
        let mut all_solved = true;
        for expression in &args.expressions {
            all_solved &= answer(&mut out, &translator, &config, expression)?;
        }
        return Ok(all_solved);
    }

    let mut all_solved = true;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if args.filter && !looks_like_expression(&line) {
            debug!(%line, "not an expression, skipping");
            continue;
        }
        all_solved &= answer(&mut out, &translator, &config, &line)?;
    }

    Ok(all_solved)
}

/// Solve one expression and print the outcome.
fn answer(
    out: &mut impl Write,
    translator: &Translator,
    config: &Config,
    expression: &str,
) -> Result<bool> {
    match evaluate_expression(expression) {
        CalcResult::Success { value, .. } => {
            writeln!(out, "{}", format_display(&value, config.display.separators))?;
            Ok(true)
        }
        CalcResult::Error { error, .. } => {
            eprintln!("{}", translator.error(&error));
            Ok(false)
        }
    }
}
