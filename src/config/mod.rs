//! Run configuration
//!
//! Target environment, base URLs, test email, timeout, and pacing.
//! Configuration is passed explicitly into the runner rather than held
//! in process-wide state.

#![allow(dead_code)]

pub mod env;

pub use env::EnvConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Production deployment base URL
pub const PRODUCTION_URL: &str = "https://andersoncleaning.com";

/// Local development base URL
pub const LOCAL_URL: &str = "http://localhost:3000";

/// Default mailbox that receives the confirmation emails
pub const DEFAULT_TEST_EMAIL: &str = "test@andersoncleaning.com";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with the main quote form request
pub const TEST_USER_AGENT: &str = "Anderson-Cleaning-Test-Script/1.0";

/// Target deployment environment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Local,
}

impl Environment {
    /// Parse an environment selection. Anything other than "local"
    /// selects production, matching the interactive prompt contract.
    pub fn from_selection(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "local" => Environment::Local,
            _ => Environment::Production,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Local => LOCAL_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// Configuration for a verification run
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub base_url: String,
    pub test_email: String,
    pub timeout_secs: u64,
    /// Delay before the first submission, seconds
    pub initial_delay_secs: u64,
    /// Delay between consecutive submissions, seconds
    pub between_delay_secs: u64,
    /// Skip all pacing delays (automated runs against a test double)
    pub no_delay: bool,
}

impl RunConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            test_email: DEFAULT_TEST_EMAIL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            initial_delay_secs: 2,
            between_delay_secs: 3,
            no_delay: false,
        }
    }

    /// Override the base URL directly (test doubles, staging hosts)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.test_email = email.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn without_delays(mut self) -> Self {
        self.no_delay = true;
        self
    }

    /// Apply environment-variable overrides
    pub fn apply_env(mut self, env: &EnvConfig) -> Self {
        if let Some(url) = &env.base_url {
            self.base_url = url.clone();
        }
        if let Some(email) = &env.email {
            self.test_email = email.clone();
        }
        if let Some(timeout) = env.timeout {
            self.timeout_secs = timeout;
        }
        if env.no_delay == Some(true) {
            self.no_delay = true;
        }
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Environment::Production)
    }
}
