//! Test result models for form endpoint verification
//!
//! Defines the form tests, results, and status types.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three form submission tests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTest {
    QuoteForm,
    ContactForm,
    QuickQuote,
}

impl FormTest {
    /// Get test number (1-3)
    pub fn number(&self) -> u8 {
        match self {
            FormTest::QuoteForm => 1,
            FormTest::ContactForm => 2,
            FormTest::QuickQuote => 3,
        }
    }

    /// Get test name
    pub fn name(&self) -> &'static str {
        match self {
            FormTest::QuoteForm => "Quote Form",
            FormTest::ContactForm => "Contact Form",
            FormTest::QuickQuote => "Quick Quote",
        }
    }

    /// API endpoint path for this form
    pub fn endpoint(&self) -> &'static str {
        match self {
            FormTest::QuoteForm => "/api/quote",
            FormTest::ContactForm => "/api/contact",
            FormTest::QuickQuote => "/api/quick-quote",
        }
    }

    /// Get all form tests in submission order
    pub fn all() -> Vec<FormTest> {
        vec![
            FormTest::QuoteForm,
            FormTest::ContactForm,
            FormTest::QuickQuote,
        ]
    }

    /// Parse from test number
    pub fn from_number(n: u8) -> Option<FormTest> {
        match n {
            1 => Some(FormTest::QuoteForm),
            2 => Some(FormTest::ContactForm),
            3 => Some(FormTest::QuickQuote),
            _ => None,
        }
    }
}

impl fmt::Display for FormTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test {}: {}", self.number(), self.name())
    }
}

/// Test execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    /// HTTP 200 with a parsable JSON body
    Pass,
    /// Non-200 HTTP response
    Fail,
    /// HTTP 200 but the body was not valid JSON
    ParseFail,
    /// Transport-level failure (connect, DNS, timeout)
    Error,
}

impl TestStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Pass => "✓",
            TestStatus::Fail => "✗",
            TestStatus::ParseFail => "?",
            TestStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "PASS"),
            TestStatus::Fail => write!(f, "FAIL"),
            TestStatus::ParseFail => write!(f, "PARSE-FAIL"),
            TestStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single form submission test
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub test: FormTest,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
    pub response: Option<serde_json::Value>,
}

impl TestResult {
    pub fn pass(test: FormTest, duration_ms: u64) -> Self {
        Self {
            test,
            status: TestStatus::Pass,
            duration_ms,
            message: None,
            response: None,
        }
    }

    pub fn fail(test: FormTest, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            test,
            status: TestStatus::Fail,
            duration_ms,
            message: Some(message.into()),
            response: None,
        }
    }

    pub fn parse_fail(test: FormTest, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            test,
            status: TestStatus::ParseFail,
            duration_ms,
            message: Some(message.into()),
            response: None,
        }
    }

    pub fn error(test: FormTest, error: impl Into<String>) -> Self {
        Self {
            test,
            status: TestStatus::Error,
            duration_ms: 0,
            message: Some(error.into()),
            response: None,
        }
    }

    pub fn with_response(mut self, response: serde_json::Value) -> Self {
        self.response = Some(response);
        self
    }

    pub fn passed(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.test,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a verification run across all three forms
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl RunSummary {
    pub fn new(base_url: impl Into<String>, results: Vec<TestResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        let failed = total - passed;
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            base_url: base_url.into(),
            total,
            passed,
            failed,
            total_duration_ms,
            results,
        }
    }

    /// Truncating integer percentage: 2 of 3 passing reports 66%.
    pub fn pass_percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.passed * 100 / self.total
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn any_passed(&self) -> bool {
        self.passed > 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Form verification against {}", self.base_url)?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for result in &self.results {
            writeln!(f, "  {result}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "Overall: {}/{} tests passed ({}%)",
            self.passed,
            self.total,
            self.pass_percent()
        )
    }
}
