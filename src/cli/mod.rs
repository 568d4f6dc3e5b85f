//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Anderson Cleaning form endpoint smoke tester
#[derive(Parser, Debug)]
#[command(name = "form-verify")]
#[command(version = "0.1.0")]
#[command(about = "Verify the quote, contact, and quick-quote form endpoints end to end")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the form submission tests (non-interactive)
    Run(RunArgs),

    /// Run with the interactive confirmation and environment prompts
    Interactive,

    /// List the form tests and their endpoints
    List,

    /// Show recognized environment variables
    Env,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Target environment (production, local); defaults to production
    #[arg(short, long)]
    pub env: Option<String>,

    /// Explicit base URL override (takes precedence over --env)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Mailbox that should receive the confirmation emails
    #[arg(long)]
    pub email: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Run a single test by number (1: quote, 2: contact, 3: quick-quote)
    #[arg(short, long)]
    pub test: Option<u8>,

    /// Skip the pacing delays between submissions
    #[arg(long)]
    pub no_delay: bool,

    /// Output format (table, json, json-pretty)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["form-verify", "list"]);
        assert!(matches!(args.command, Command::List));
    }

    #[test]
    fn test_run_args() {
        let args = Args::parse_from([
            "form-verify",
            "run",
            "--env",
            "local",
            "--no-delay",
            "--test",
            "2",
        ]);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.env.as_deref(), Some("local"));
                assert!(run_args.no_delay);
                assert_eq!(run_args.test, Some(2));
                assert_eq!(run_args.format, "table");
            }
            _ => panic!("Expected Run command"),
        }
    }
}
