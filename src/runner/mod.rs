//! Form verification runner
//!
//! Submits the canned payloads to the three form endpoints in sequence
//! and classifies each response. Tests are isolated: a failure in one
//! never prevents the others from running, and no error escapes as a
//! panic or propagated exception.

use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::{RunConfig, TEST_USER_AGENT};
use crate::http::HttpClient;
use crate::models::{FormTest, RunSummary, TestResult};
use crate::payloads::{ContactPayload, QuickQuotePayload, QuotePayload};

/// Runner for the three form submission tests
pub struct FormVerifier {
    config: RunConfig,
    client: HttpClient,
}

impl FormVerifier {
    pub fn new(config: RunConfig) -> Result<Self> {
        let client = HttpClient::new(&config.base_url, config.timeout_secs)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Submit the main quote request form
    pub async fn submit_quote_form(&self) -> TestResult {
        self.print_banner(FormTest::QuoteForm);

        let payload = QuotePayload::new(&self.config.test_email);
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), TEST_USER_AGENT.to_string());

        let result = self.submit(FormTest::QuoteForm, &payload, &headers).await;

        if result.passed() {
            println!("\n📧 Check email at: {}", self.config.test_email);
            println!("📊 Check Supabase for new record");
        }

        result
    }

    /// Submit the contact form
    pub async fn submit_contact_form(&self) -> TestResult {
        self.print_banner(FormTest::ContactForm);

        let payload = ContactPayload::new(&self.config.test_email);
        self.submit(FormTest::ContactForm, &payload, &HashMap::new())
            .await
    }

    /// Submit the quick quote form
    pub async fn submit_quick_quote(&self) -> TestResult {
        self.print_banner(FormTest::QuickQuote);

        let payload = QuickQuotePayload::new(&self.config.test_email);
        self.submit(FormTest::QuickQuote, &payload, &HashMap::new())
            .await
    }

    /// Run a single test by its identifier
    pub async fn run_test(&self, test: FormTest) -> TestResult {
        match test {
            FormTest::QuoteForm => self.submit_quote_form().await,
            FormTest::ContactForm => self.submit_contact_form().await,
            FormTest::QuickQuote => self.submit_quick_quote().await,
        }
    }

    /// Run all three tests in fixed sequence with pacing delays.
    ///
    /// The delays avoid overlapping submissions against the live shared
    /// backend; they are not needed for correctness and are skipped when
    /// the config disables them.
    pub async fn run_all(&self) -> RunSummary {
        info!("Starting form verification against {}", self.config.base_url);

        self.pace(self.config.initial_delay_secs).await;

        let mut results = Vec::new();

        results.push(self.submit_quote_form().await);
        self.pace(self.config.between_delay_secs).await;

        results.push(self.submit_contact_form().await);
        self.pace(self.config.between_delay_secs).await;

        results.push(self.submit_quick_quote().await);

        let summary = RunSummary::new(&self.config.base_url, results);

        info!(
            "Verification completed - Pass: {}/{} ({}%)",
            summary.passed,
            summary.total,
            summary.pass_percent()
        );

        summary
    }

    async fn pace(&self, secs: u64) {
        if !self.config.no_delay && secs > 0 {
            sleep(Duration::from_secs(secs)).await;
        }
    }

    fn print_banner(&self, test: FormTest) {
        println!("\n{}", "=".repeat(60));
        println!(
            "Testing {}: {}{}",
            test.name(),
            self.config.base_url,
            test.endpoint()
        );
        println!("{}\n", "=".repeat(60));
    }

    /// Submit a payload and classify the outcome. Every branch produces
    /// a TestResult; transport and parse failures are reported, never
    /// propagated.
    async fn submit<T: serde::Serialize>(
        &self,
        test: FormTest,
        payload: &T,
        headers: &HashMap<String, String>,
    ) -> TestResult {
        info!("Running {}", test);
        println!("📤 Submitting form data...");

        match self.client.post_json(test.endpoint(), payload, headers).await {
            Ok(resp) => {
                println!("Response Status: {}", resp.status_code);

                if resp.is_success() {
                    match resp.json() {
                        Some(body) => {
                            println!("\n✅ SUCCESS: {body}");
                            TestResult::pass(test, resp.duration_ms).with_response(body)
                        }
                        None => {
                            warn!("{} returned 200 with an unparsable body", test);
                            println!("\n❓ PARSE FAILURE: response body is not valid JSON");
                            println!("Response: {}", resp.body);
                            TestResult::parse_fail(
                                test,
                                resp.duration_ms,
                                "200 response body is not valid JSON",
                            )
                        }
                    }
                } else {
                    println!("\n❌ FAILED: {}", resp.status_code);
                    println!("Response: {}", resp.body);
                    TestResult::fail(
                        test,
                        resp.duration_ms,
                        format!("HTTP {}", resp.status_code),
                    )
                }
            }
            Err(e) => {
                println!("\n❌ ERROR: {e}");
                TestResult::error(test, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::models::TestStatus;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_config(base_url: &str) -> RunConfig {
        RunConfig::new(Environment::Local)
            .with_base_url(base_url)
            .without_delays()
    }

    async fn mount_ok(server: &MockServer, endpoint: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn quote_form_passes_on_200_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/quote"))
            .and(header("content-type", "application/json"))
            .and(header("user-agent", TEST_USER_AGENT))
            .and(body_partial_json(json!({
                "fullName": "Claude Test User",
                "website": ""
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let result = verifier.submit_quote_form().await;

        assert!(result.passed());
        assert_eq!(result.response.unwrap()["success"], true);
    }

    #[tokio::test]
    async fn contact_form_passes_and_sends_empty_honeypot() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .and(body_partial_json(json!({"website": ""})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let result = verifier.submit_contact_form().await;

        assert!(result.passed());
    }

    #[tokio::test]
    async fn quick_quote_passes_and_sends_empty_honeypot() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/quick-quote"))
            .and(body_partial_json(json!({
                "name": "Claude Quick Test",
                "facilityType": "healthcare",
                "website": ""
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let result = verifier.submit_quick_quote().await;

        assert!(result.passed());
    }

    #[tokio::test]
    async fn non_200_status_fails_without_panic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let result = verifier.submit_contact_form().await;

        assert_eq!(result.status, TestStatus::Fail);
        assert_eq!(result.message.as_deref(), Some("HTTP 500"));
    }

    #[tokio::test]
    async fn created_201_is_not_a_pass() {
        // The backend contract is strictly 200; other 2xx codes fail.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/quick-quote"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let result = verifier.submit_quick_quote().await;

        assert_eq!(result.status, TestStatus::Fail);
        assert_eq!(result.message.as_deref(), Some("HTTP 201"));
    }

    #[tokio::test]
    async fn unparsable_200_body_is_a_parse_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let result = verifier.submit_quote_form().await;

        assert_eq!(result.status, TestStatus::ParseFail);
        assert!(result.response.is_none());
    }

    #[tokio::test]
    async fn transport_error_is_reported_not_propagated() {
        // Grab an address, then shut the server down so the connection
        // is refused. A pooled server (`MockServer::start`) would keep
        // listening after drop, so use an exclusive one.
        let server = MockServer::builder().start().await;
        let uri = server.uri();
        drop(server);

        let verifier = FormVerifier::new(mock_config(&uri)).unwrap();
        let result = verifier.submit_contact_form().await;

        assert_eq!(result.status, TestStatus::Error);
        assert!(result.message.is_some());
    }

    #[tokio::test]
    async fn run_all_reports_three_of_three_on_success() {
        let server = MockServer::start().await;
        mount_ok(&server, "/api/quote").await;
        mount_ok(&server, "/api/contact").await;
        mount_ok(&server, "/api/quick-quote").await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let summary = verifier.run_all().await;

        assert_eq!(summary.passed, 3);
        assert_eq!(summary.pass_percent(), 100);
        assert!(summary.all_passed());
        assert!(summary.any_passed());
    }

    #[tokio::test]
    async fn run_all_reports_zero_of_three_on_server_errors() {
        let server = MockServer::start().await;
        for endpoint in ["/api/quote", "/api/contact", "/api/quick-quote"] {
            Mock::given(method("POST"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
                .mount(&server)
                .await;
        }

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let summary = verifier.run_all().await;

        assert_eq!(summary.passed, 0);
        assert_eq!(summary.pass_percent(), 0);
        assert!(!summary.any_passed());
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_others() {
        let server = MockServer::start().await;
        mount_ok(&server, "/api/quote").await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;
        mount_ok(&server, "/api/quick-quote").await;

        let verifier = FormVerifier::new(mock_config(&server.uri())).unwrap();
        let summary = verifier.run_all().await;

        assert_eq!(summary.results.len(), 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.pass_percent(), 66);
    }
}
