//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

#![allow(dead_code)]

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "FORM_VERIFY";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Environment selection from FORM_VERIFY_ENV
    pub environment: Option<String>,
    /// Base URL override from FORM_VERIFY_BASE_URL
    pub base_url: Option<String>,
    /// Test email from FORM_VERIFY_EMAIL
    pub email: Option<String>,
    /// Timeout from FORM_VERIFY_TIMEOUT
    pub timeout: Option<u64>,
    /// Skip pacing delays, from FORM_VERIFY_NO_DELAY
    pub no_delay: Option<bool>,
    /// Verbose from FORM_VERIFY_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            environment: get_env("ENV"),
            base_url: get_env("BASE_URL"),
            email: get_env("EMAIL"),
            timeout: get_env_parse("TIMEOUT"),
            no_delay: get_env_bool("NO_DELAY"),
            verbose: get_env_bool("VERBOSE"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.environment.is_some()
            || self.base_url.is_some()
            || self.email.is_some()
            || self.timeout.is_some()
            || self.no_delay.is_some()
            || self.verbose.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_ENV:       {:?}", ENV_PREFIX, self.environment);
        println!("  {}_BASE_URL:  {:?}", ENV_PREFIX, self.base_url);
        println!("  {}_EMAIL:     {:?}", ENV_PREFIX, self.email);
        println!("  {}_TIMEOUT:   {:?}", ENV_PREFIX, self.timeout);
        println!("  {}_NO_DELAY:  {:?}", ENV_PREFIX, self.no_delay);
        println!("  {}_VERBOSE:   {:?}", ENV_PREFIX, self.verbose);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get and parse environment variable
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get boolean environment variable (true/1/yes)
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
}

/// Print help for recognized environment variables
pub fn print_env_help() {
    println!("Recognized environment variables:\n");
    println!("  {ENV_PREFIX}_ENV       Target environment (production, local)");
    println!("  {ENV_PREFIX}_BASE_URL  Explicit base URL override");
    println!("  {ENV_PREFIX}_EMAIL     Mailbox for confirmation emails");
    println!("  {ENV_PREFIX}_TIMEOUT   Per-request timeout in seconds");
    println!("  {ENV_PREFIX}_NO_DELAY  Skip pacing delays (true/1/yes)");
    println!("  {ENV_PREFIX}_VERBOSE   Enable debug logging (true/1/yes)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let config = EnvConfig::default();
        assert!(!config.has_any());
    }
}
