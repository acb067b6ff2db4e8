//! Card submission.
//!
//! [`CardClient`] posts a snapshot to the server's `/create_card` endpoint as
//! multipart form data. [`SubmissionState`] tracks one submit button:
//!
//! ```text
//! Idle ──begin()──▶ Submitting ──finish()──▶ LinkDisplayed | Rejected | Failed
//!                       ▲                              │
//!                       └───────────begin()────────────┘
//! ```

use std::collections::BTreeMap;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::config::CardConfig;
use crate::error::{CardError, CardResult};
use crate::images::sniff_mime;
use crate::snapshot::{FormSnapshot, TextField};

/// Validation messages keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// What the server made of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Card stored; `url` is its shareable address
    Created { url: String },
    /// Server declined the card (`success` falsy or absent)
    Rejected { errors: FieldErrors },
}

/// Submit button state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    LinkDisplayed { url: String },
    Rejected { errors: FieldErrors },
    Failed { reason: String },
}

impl SubmissionState {
    /// Enter `Submitting`. Returns false if a submission is already in
    /// flight, in which case nothing should be sent.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    /// Record the result of the in-flight submission.
    pub fn finish(&mut self, result: CardResult<SubmissionOutcome>) {
        *self = match result {
            Ok(SubmissionOutcome::Created { url }) => SubmissionState::LinkDisplayed { url },
            Ok(SubmissionOutcome::Rejected { errors }) => SubmissionState::Rejected { errors },
            Err(e) => SubmissionState::Failed {
                reason: e.to_string(),
            },
        };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// The generated card URL, once one is displayed.
    pub fn link(&self) -> Option<&str> {
        match self {
            SubmissionState::LinkDisplayed { url } => Some(url),
            _ => None,
        }
    }
}

/// Interpret a `/create_card` response body.
pub fn parse_response(body: &str) -> CardResult<SubmissionOutcome> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CardError::InvalidResponse(format!("not JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| CardError::InvalidResponse("expected a JSON object".to_string()))?;

    if object.get("success").is_some_and(is_truthy) {
        return match object.get("url") {
            Some(Value::String(url)) if !url.is_empty() => {
                Ok(SubmissionOutcome::Created { url: url.clone() })
            }
            _ => Err(CardError::MissingUrl),
        };
    }

    let errors = object
        .get("errors")
        .and_then(Value::as_object)
        .map(|fields| {
            fields
                .iter()
                .map(|(field, messages)| (field.clone(), messages_of(messages)))
                .collect()
        })
        .unwrap_or_default();
    Ok(SubmissionOutcome::Rejected { errors })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn messages_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
            .collect(),
        Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

/// HTTP client for the card server.
#[derive(Debug, Clone)]
pub struct CardClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CardClient {
    pub fn new(config: &CardConfig) -> CardResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            endpoint: config.create_card_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Multipart body mirroring the HTML form: every text field (empty ones
    /// included) plus a file part for each selected image.
    pub async fn build_form(snapshot: &FormSnapshot) -> CardResult<Form> {
        let mut form = Form::new();
        for field in TextField::ALL {
            form = form.text(field.name(), snapshot.text(field).to_string());
        }
        if snapshot.footer_credit {
            form = form.text("footer_credit", "y");
        }

        for (field, file) in snapshot.selected_images() {
            let bytes = tokio::fs::read(file.path())
                .await
                .map_err(|e| CardError::ImageRead {
                    field: field.name().to_string(),
                    reason: e.to_string(),
                })?;
            let mime = sniff_mime(&bytes, file.path());
            let part = Part::bytes(bytes)
                .file_name(file.file_name.clone())
                .mime_str(mime)?;
            form = form.part(field.name(), part);
        }
        Ok(form)
    }

    /// Send `snapshot` and interpret the reply.
    ///
    /// Validation failures come back as `Ok(Rejected)` even when the server
    /// answers with an error status, as long as the body is JSON.
    pub async fn submit(&self, snapshot: &FormSnapshot) -> CardResult<SubmissionOutcome> {
        let form = Self::build_form(snapshot).await?;
        tracing::info!(endpoint = %self.endpoint, "submitting card");

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let outcome = parse_response(&body).map_err(|e| match e {
            CardError::InvalidResponse(reason) => {
                CardError::InvalidResponse(format!("HTTP {}: {}", status, reason))
            }
            other => other,
        })?;

        match &outcome {
            SubmissionOutcome::Created { url } => tracing::info!(%url, "card created"),
            SubmissionOutcome::Rejected { errors } => {
                tracing::warn!(%status, fields = errors.len(), "card rejected")
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_url() {
        let outcome = parse_response(r#"{"success": true, "url": "https://x/y"}"#).unwrap();
        assert_eq!(
            outcome,
            SubmissionOutcome::Created {
                url: "https://x/y".to_string()
            }
        );
    }

    #[test]
    fn falsy_or_absent_success_is_rejection() {
        for body in [r#"{"success": false}"#, r#"{}"#, r#"{"success": 0, "url": "u"}"#] {
            assert_eq!(
                parse_response(body).unwrap(),
                SubmissionOutcome::Rejected {
                    errors: FieldErrors::new()
                }
            );
        }
    }

    #[test]
    fn rejection_carries_field_errors() {
        let body = r#"{"success": false, "errors": {"fname": ["This field is required."], "lname": "Required"}}"#;
        let SubmissionOutcome::Rejected { errors } = parse_response(body).unwrap() else {
            panic!("expected rejection");
        };
        assert_eq!(errors["fname"], vec!["This field is required."]);
        assert_eq!(errors["lname"], vec!["Required"]);
    }

    #[test]
    fn success_without_url_is_an_error() {
        assert!(matches!(
            parse_response(r#"{"success": true}"#),
            Err(CardError::MissingUrl)
        ));
    }

    #[test]
    fn non_json_is_invalid_response() {
        assert!(matches!(
            parse_response("<html>500</html>"),
            Err(CardError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_response("[true]"),
            Err(CardError::InvalidResponse(_))
        ));
    }

    #[test]
    fn state_machine_blocks_duplicate_submissions() {
        let mut state = SubmissionState::default();
        assert!(state.begin());
        assert!(!state.begin());

        state.finish(Ok(SubmissionOutcome::Created {
            url: "https://x/y".to_string(),
        }));
        assert_eq!(state.link(), Some("https://x/y"));

        assert!(state.begin());
        state.finish(Err(CardError::MissingUrl));
        assert!(matches!(state, SubmissionState::Failed { .. }));
        assert_eq!(state.link(), None);
    }
}
