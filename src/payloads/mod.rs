//! Canned form payloads
//!
//! One fixed payload per endpoint, matching what a legitimate visitor
//! would submit through the site. The `website` field is the spam
//! honeypot and must always go over the wire as an empty string.

use chrono::Utc;
use serde::Serialize;

/// Full quote request form payload
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub facility_type: String,
    pub square_footage: String,
    pub num_restrooms: String,
    pub num_floors: String,
    pub address: String,
    pub services: Vec<String>,
    pub cleaning_frequency: String,
    pub special_requirements: String,
    pub start_date: String,
    pub current_provider: String,
    pub budget_range: String,
    pub how_heard: String,
    pub additional_notes: String,
    /// Honeypot: always empty
    pub website: String,
}

impl QuotePayload {
    pub fn new(test_email: &str) -> Self {
        Self {
            full_name: "Claude Test User".to_string(),
            company: "Anderson Test Company".to_string(),
            email: test_email.to_string(),
            phone: "(413) 555-0123".to_string(),
            facility_type: "office".to_string(),
            square_footage: "10000".to_string(),
            num_restrooms: "5".to_string(),
            num_floors: "2".to_string(),
            address: "123 Test Street, Springfield, MA 01089".to_string(),
            services: vec!["daily-cleaning".to_string(), "floor-care".to_string()],
            cleaning_frequency: "weekly".to_string(),
            special_requirements: "This is a test submission from automated testing script"
                .to_string(),
            start_date: "2025-12-01".to_string(),
            current_provider: "none".to_string(),
            budget_range: "$1000-2500".to_string(),
            how_heard: "web-search".to_string(),
            additional_notes: format!("Automated test at {}", Utc::now().to_rfc3339()),
            website: String::new(),
        }
    }
}

/// Contact form payload
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    /// Honeypot: always empty
    pub website: String,
}

impl ContactPayload {
    pub fn new(test_email: &str) -> Self {
        Self {
            name: "Claude Test User".to_string(),
            email: test_email.to_string(),
            phone: "(413) 555-0123".to_string(),
            company: "Test Company".to_string(),
            message: format!(
                "This is a test message from automated testing script at {}",
                Utc::now().to_rfc3339()
            ),
            website: String::new(),
        }
    }
}

/// Quick quote (reduced-field lead capture) payload
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickQuotePayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub facility_type: String,
    /// Honeypot: always empty
    pub website: String,
}

impl QuickQuotePayload {
    pub fn new(test_email: &str) -> Self {
        Self {
            name: "Claude Quick Test".to_string(),
            email: test_email.to_string(),
            phone: "(413) 555-0123".to_string(),
            facility_type: "healthcare".to_string(),
            website: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honeypot_is_empty_in_all_payloads() {
        let quote = serde_json::to_value(QuotePayload::new("test@andersoncleaning.com")).unwrap();
        let contact =
            serde_json::to_value(ContactPayload::new("test@andersoncleaning.com")).unwrap();
        let quick =
            serde_json::to_value(QuickQuotePayload::new("test@andersoncleaning.com")).unwrap();

        for payload in [&quote, &contact, &quick] {
            assert_eq!(payload["website"], "");
        }
    }

    #[test]
    fn quote_payload_wire_names() {
        let value = serde_json::to_value(QuotePayload::new("test@andersoncleaning.com")).unwrap();

        assert_eq!(value["fullName"], "Claude Test User");
        assert_eq!(value["facilityType"], "office");
        assert_eq!(value["squareFootage"], "10000");
        assert_eq!(value["numRestrooms"], "5");
        assert_eq!(value["budgetRange"], "$1000-2500");
        assert_eq!(value["howHeard"], "web-search");
        assert!(value["services"].as_array().unwrap().len() == 2);
        assert!(value["additionalNotes"]
            .as_str()
            .unwrap()
            .starts_with("Automated test at "));
    }

    #[test]
    fn payloads_carry_the_test_email() {
        let email = "qa@andersoncleaning.com";
        assert_eq!(QuotePayload::new(email).email, email);
        assert_eq!(ContactPayload::new(email).email, email);
        assert_eq!(QuickQuotePayload::new(email).email, email);
    }

    #[test]
    fn contact_message_is_timestamped() {
        let payload = ContactPayload::new("test@andersoncleaning.com");
        assert!(payload.message.contains("automated testing script at "));
    }
}
