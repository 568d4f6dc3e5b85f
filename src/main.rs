//! form-verify - Anderson Cleaning form endpoint smoke tester
//!
//! A CLI tool that submits canned payloads to the site's three form
//! endpoints (quote, contact, quick-quote) and reports whether each one
//! accepted the submission, plus the manual steps to confirm the
//! datastore writes and confirmation emails behind them.
//!
//! ## Usage
//!
//! ```bash
//! # Non-interactive run against production (CI-friendly, exit code 1 on failure)
//! form-verify run
//!
//! # Run against a local dev server without pacing delays
//! form-verify run --env local --no-delay
//!
//! # Run a single test with JSON output
//! form-verify run --test 2 --format json-pretty
//!
//! # Original interactive flow with confirmation and environment prompts
//! form-verify interactive
//! ```

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

mod cli;
mod config;
mod http;
mod models;
mod output;
mod payloads;
mod runner;
mod utils;

use cli::Args;
use config::{Environment, EnvConfig, RunConfig, DEFAULT_TEST_EMAIL, PRODUCTION_URL};
use models::FormTest;
use output::{print_manual_verification_steps, OutputFormat, ResultFormatter};
use runner::FormVerifier;
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env_config = EnvConfig::load();

    let verbose = args.verbose || env_config.verbose == Some(true);
    init_logger(if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    match args.command {
        cli::Command::Run(run_args) => {
            run_tests(run_args, &env_config).await?;
        }
        cli::Command::Interactive => {
            run_interactive().await?;
        }
        cli::Command::List => {
            list_tests();
        }
        cli::Command::Env => {
            env_config.print_summary();
            println!();
            config::env::print_env_help();
        }
    }

    Ok(())
}

async fn run_tests(args: cli::RunArgs, env_config: &EnvConfig) -> Result<()> {
    let env_selection = args
        .env
        .clone()
        .or_else(|| env_config.environment.clone())
        .unwrap_or_default();
    let environment = Environment::from_selection(&env_selection);

    let mut config = RunConfig::new(environment).apply_env(env_config);

    // CLI flags win over environment variables
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url);
    }
    if let Some(email) = &args.email {
        config = config.with_email(email);
    }
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }
    if args.no_delay {
        config = config.without_delays();
    }

    let formatter = ResultFormatter::new(
        OutputFormat::from_str(&args.format).unwrap_or(OutputFormat::Table),
    );

    let test_email = config.test_email.clone();
    let verifier = FormVerifier::new(config)?;

    if let Some(test_num) = args.test {
        let test = FormTest::from_number(test_num)
            .ok_or_else(|| anyhow::anyhow!("Invalid test number: {test_num}. Valid range: 1-3"))?;
        let result = verifier.run_test(test).await;
        println!("{}", formatter.format_result(&result));

        if !result.passed() {
            std::process::exit(1);
        }
    } else {
        let summary = verifier.run_all().await;
        println!("{}", formatter.format_summary(&summary));

        if summary.any_passed() {
            print_manual_verification_steps(&test_email);
        }

        if !summary.all_passed() {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Interactive flow: confirmation gate, environment prompt, then a full
/// run with pacing delays. Anything other than "yes" at the gate aborts
/// before a single request is sent.
async fn run_interactive() -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("ANDERSON CLEANING - FORM END-TO-END TESTING");
    println!("{}", "=".repeat(60));

    println!("\nTest Configuration:");
    println!("  Production URL: {PRODUCTION_URL}");
    println!("  Test Email: {DEFAULT_TEST_EMAIL}");
    println!("\nIMPORTANT: These submissions create real records and send real emails.");

    // The gate runs before any verifier exists, so a declined run
    // sends zero requests.
    let answer = prompt("\nProceed with testing? (yes/no): ")?;
    if !is_affirmative(&answer) {
        println!("Testing cancelled.");
        return Ok(());
    }

    let env_answer = prompt("\nTest environment (production/local): ")?;
    let environment = Environment::from_selection(&env_answer);

    let config = RunConfig::new(environment);
    let test_email = config.test_email.clone();

    println!("\n🚀 Testing against: {}", config.base_url);

    let verifier = FormVerifier::new(config)?;
    let summary = verifier.run_all().await;

    let formatter = ResultFormatter::new(OutputFormat::Table);
    println!("{}", formatter.format_summary(&summary));

    if summary.any_passed() {
        print_manual_verification_steps(&test_email);
    }

    Ok(())
}

fn list_tests() {
    println!("\nForm Submission Tests (3 total)\n");
    println!("──────────────────────────────────────────────");

    for test in FormTest::all() {
        println!(
            "  {}. {:14} POST {}",
            test.number(),
            test.name(),
            test.endpoint()
        );
    }

    println!("──────────────────────────────────────────────\n");
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES\n"));
        assert!(is_affirmative("  yes  "));

        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("maybe"));
    }
}
