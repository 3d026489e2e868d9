//! Google Sheets webhook client
//!
//! The submission pipeline: validate the draft, build the transport
//! payload, POST it to the configured Apps Script web app, and interpret
//! the response. Every failure path folds into a `SubmissionResult`;
//! nothing propagates past `submit` as an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use xpns_common::config::EndpointConfig;
use xpns_common::{ExpenseDraft, SubmissionResult, SubmitError};

const USER_AGENT: &str = "XPNS/0.1.0 (xpns-fe)";

/// Message used when the webhook answers 2xx without a `message` field
const GENERIC_SUCCESS_MESSAGE: &str = "Data submitted successfully";

/// Transport payload for the Apps Script webhook.
///
/// The script keys its row handling on parsing `value` as
/// `"<cost>, <category>"` — exactly two comma-joined fields. The notes
/// map is attached to the written cell as annotations.
#[derive(Debug, Clone, Serialize)]
pub struct SheetPayload {
    #[serde(rename = "sheetName")]
    pub sheet_name: String,
    pub value: String,
    pub notes: SheetNotes,
}

/// Cell annotations, keyed with the uppercase names the script expects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SheetNotes {
    pub what: String,
    pub why: String,
    pub r#where: String,
    pub receipt: String,
}

/// Webhook response body; all fields optional since the script is a
/// black box
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Google Sheets webhook client
pub struct SheetsClient {
    http_client: reqwest::Client,
    config: EndpointConfig,
}

impl SheetsClient {
    /// Build a client for the resolved endpoint.
    ///
    /// No explicit request timeout and no retries: a submission runs to
    /// completion or failure as determined by the transport.
    pub fn new(config: EndpointConfig) -> Result<Self, SubmitError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SubmitError::Unexpected(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Build the transport payload for a draft.
    ///
    /// Split out of `try_submit` so tests can assert the wire shape
    /// without a server.
    pub fn payload_for(&self, draft: &ExpenseDraft) -> SheetPayload {
        SheetPayload {
            sheet_name: self.config.sheet_name.clone(),
            value: format!("{}, {}", draft.cost, draft.category),
            notes: SheetNotes {
                what: draft.what.clone(),
                why: draft.why.clone(),
                r#where: draft.r#where.clone(),
                receipt: draft.receipt.clone(),
            },
        }
    }

    /// Run one submission: validate → configuration check → POST →
    /// interpret. Always returns a result value; failures carry the
    /// user-facing message.
    pub async fn submit(&self, draft: &ExpenseDraft) -> SubmissionResult {
        match self.try_submit(draft).await {
            Ok(message) => {
                info!(
                    cost = draft.cost,
                    category = %draft.category,
                    "Expense accepted by webhook"
                );
                SubmissionResult::success(message)
            }
            Err(err) => {
                warn!(error = %err, "Expense submission failed");
                SubmissionResult::from(err)
            }
        }
    }

    async fn try_submit(&self, draft: &ExpenseDraft) -> Result<String, SubmitError> {
        // Validation short-circuits before any network I/O
        draft.validate()?;

        if !self.config.is_configured() {
            return Err(SubmitError::NotConfigured);
        }

        let payload = self.payload_for(draft);
        debug!(
            sheet = %payload.sheet_name,
            value = %payload.value,
            "Posting expense to webhook"
        );

        let response = self
            .http_client
            .post(&self.config.web_app_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SubmitError::Unexpected(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Transport(status.as_u16()));
        }

        let body: WebhookResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::Unexpected(e.to_string()))?;

        Ok(body
            .message
            .unwrap_or_else(|| GENERIC_SUCCESS_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpns_common::config::{DEFAULT_SHEET_NAME, PLACEHOLDER_WEB_APP_URL};
    use xpns_common::Category;

    fn client(url: &str) -> SheetsClient {
        SheetsClient::new(EndpointConfig {
            web_app_url: url.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        })
        .unwrap()
    }

    fn lunch_draft() -> ExpenseDraft {
        ExpenseDraft {
            cost: 12.5,
            category: Category::Food,
            what: "lunch".to_string(),
            r#where: "cafe".to_string(),
            why: "meeting".to_string(),
            receipt: String::new(),
        }
    }

    #[test]
    fn client_creation() {
        let client = SheetsClient::new(EndpointConfig {
            web_app_url: "https://script.google.com/macros/s/abc/exec".to_string(),
            sheet_name: "2025".to_string(),
        });
        assert!(client.is_ok());
    }

    #[test]
    fn payload_value_is_cost_comma_category() {
        let payload = client("https://example.test/exec").payload_for(&lunch_draft());
        assert_eq!(payload.value, "12.5, food");
        assert_eq!(payload.sheet_name, "2025");
    }

    #[test]
    fn payload_value_formats_whole_costs_without_fraction() {
        let draft = ExpenseDraft {
            cost: 40.0,
            category: Category::Base,
            ..lunch_draft()
        };
        let payload = client("https://example.test/exec").payload_for(&draft);
        assert_eq!(payload.value, "40, base");
    }

    #[test]
    fn payload_notes_use_uppercase_keys() {
        let payload = client("https://example.test/exec").payload_for(&lunch_draft());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["sheetName"], "2025");
        assert_eq!(json["notes"]["WHAT"], "lunch");
        assert_eq!(json["notes"]["WHERE"], "cafe");
        assert_eq!(json["notes"]["WHY"], "meeting");
        assert_eq!(json["notes"]["RECEIPT"], "");
    }

    #[tokio::test]
    async fn invalid_draft_short_circuits_without_io() {
        // Unroutable URL: if validation did not short-circuit, this would
        // surface a connection error instead of the validation message.
        let client = client("http://127.0.0.1:1/exec");
        let result = client.submit(&ExpenseDraft::default()).await;

        assert!(!result.success);
        assert_eq!(result.message, SubmitError::InvalidCost.to_string());
    }

    #[tokio::test]
    async fn placeholder_endpoint_reports_not_configured() {
        let client = client(PLACEHOLDER_WEB_APP_URL);
        let result = client.submit(&lunch_draft()).await;

        assert!(!result.success);
        assert_eq!(result.message, SubmitError::NotConfigured.to_string());
    }
}
