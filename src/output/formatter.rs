//! Output formatters for verification results
//!
//! Provides Table and JSON output formats.

use crate::models::{RunSummary, TestResult, TestStatus};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a single test result
    pub fn format_result(&self, result: &TestResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
        }
    }

    fn format_result_table(&self, result: &TestResult) -> String {
        let status_str = match result.status {
            TestStatus::Pass => "✅ PASSED",
            TestStatus::Fail => "❌ FAILED",
            TestStatus::ParseFail => "❓ PARSE-FAIL",
            TestStatus::Error => "❌ ERROR",
        };

        format!("{}: {}", result.test.name(), status_str)
    }

    /// Format a run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", "=".repeat(60)));
        out.push_str("TEST SUMMARY\n");
        out.push_str(&format!("{}\n\n", "=".repeat(60)));

        for result in &summary.results {
            out.push_str(&self.format_result_table(result));
            out.push('\n');
        }

        out.push_str(&format!(
            "\nOverall: {}/{} tests passed ({}%)\n",
            summary.passed,
            summary.total,
            summary.pass_percent()
        ));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormTest, TestResult};

    fn sample_summary() -> RunSummary {
        RunSummary::new(
            "http://localhost:3000",
            vec![
                TestResult::pass(FormTest::QuoteForm, 100),
                TestResult::pass(FormTest::ContactForm, 80),
                TestResult::fail(FormTest::QuickQuote, 40, "HTTP 500"),
            ],
        )
    }

    #[test]
    fn format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_str("json-pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("csv"), None);
    }

    #[test]
    fn table_summary_shows_truncated_percent() {
        let formatter = ResultFormatter::new(OutputFormat::Table);
        let out = formatter.format_summary(&sample_summary());

        assert!(out.contains("Quote Form: ✅ PASSED"));
        assert!(out.contains("Quick Quote: ❌ FAILED"));
        assert!(out.contains("2/3 tests passed (66%)"));
    }

    #[test]
    fn json_summary_round_trips() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let out = formatter.format_summary(&sample_summary());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["passed"], 2);
        assert_eq!(value["total"], 3);
    }
}
