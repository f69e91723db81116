// src/services/forms.rs

//! Newsletter, contact and coming-soon form submission.
//!
//! All three forms post to the same third-party endpoint. Without one, the
//! submitter reports the form as disabled instead of failing.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Config, FormsConfig};
use crate::utils::http::{HttpTransport, Transport};

/// Notice shown when no form endpoint is configured.
pub const NOT_CONFIGURED: &str = "Form endpoint not configured yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Newsletter,
    Contact,
    ComingSoon,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newsletter => "newsletter",
            Self::Contact => "contact",
            Self::ComingSoon => "coming-soon",
        }
    }

    fn requires_email(self) -> bool {
        matches!(self, Self::Newsletter | Self::ComingSoon)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newsletter" => Ok(Self::Newsletter),
            "contact" => Ok(Self::Contact),
            "coming-soon" | "comingsoon" => Ok(Self::ComingSoon),
            other => Err(AppError::validation(format!("Unknown form: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FormOutcome {
    Accepted,
    Rejected { status: u16 },
    Disabled { notice: String },
}

/// Posts form fields to the configured endpoint.
#[derive(Clone)]
pub struct FormSubmitter {
    endpoint: Option<String>,
    transport: Arc<dyn Transport>,
}

impl FormSubmitter {
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.backend)?;
        Ok(Self::with_transport(&config.forms, Arc::new(transport)))
    }

    pub fn with_transport(config: &FormsConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: config.endpoint.clone().filter(|e| !e.trim().is_empty()),
            transport,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Submit `fields` for `kind`.
    ///
    /// Field validation runs first, so a malformed newsletter signup is an
    /// error even when the endpoint is missing.
    pub async fn submit(&self, kind: FormKind, fields: &[(String, String)]) -> Result<FormOutcome> {
        if kind.requires_email() {
            validate_email(fields)?;
        }

        let Some(endpoint) = self.endpoint.as_deref() else {
            log::warn!("{kind} form submitted without an endpoint");
            return Ok(FormOutcome::Disabled {
                notice: NOT_CONFIGURED.to_string(),
            });
        };

        let status = self.transport.post_form(endpoint, fields).await?;
        if (200..300).contains(&status) {
            log::info!("{kind} form accepted");
            Ok(FormOutcome::Accepted)
        } else {
            log::warn!("{kind} form rejected with status {status}");
            Ok(FormOutcome::Rejected { status })
        }
    }
}

impl fmt::Debug for FormSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSubmitter")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

fn validate_email(fields: &[(String, String)]) -> Result<()> {
    let email = fields
        .iter()
        .find(|(name, _)| name == "email")
        .map(|(_, value)| value.trim())
        .unwrap_or_default();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::validation("A valid email address is required"));
    }
    Ok(())
}

/// Parse a `key=value` pair as given on the command line.
pub fn parse_field(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::validation(format!("Expected key=value, got {raw:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::http::fake::FakeTransport;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn submitter(endpoint: Option<&str>, transport: Arc<FakeTransport>) -> FormSubmitter {
        let config = FormsConfig {
            endpoint: endpoint.map(str::to_string),
        };
        FormSubmitter::with_transport(&config, transport)
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_disabled_without_network() {
        let transport = Arc::new(FakeTransport::with_data(serde_json::json!({})));
        let outcome = submitter(None, transport.clone())
            .submit(FormKind::Newsletter, &fields(&[("email", "a@b.org")]))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            FormOutcome::Disabled {
                notice: "Form endpoint not configured yet.".to_string()
            }
        );
        assert_eq!(transport.form_calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_endpoint_counts_as_missing() {
        let transport = Arc::new(FakeTransport::with_data(serde_json::json!({})));
        let submitter = submitter(Some("  "), transport.clone());
        assert!(!submitter.is_enabled());
    }

    #[tokio::test]
    async fn test_accepted_posts_fields() {
        let transport = Arc::new(FakeTransport::with_data(serde_json::json!({})));
        let sent = fields(&[("name", "Sam"), ("email", "sam@example.org"), ("message", "Hi")]);
        let outcome = submitter(Some("https://forms.example.org/f/abc"), transport.clone())
            .submit(FormKind::Contact, &sent)
            .await
            .unwrap();

        assert_eq!(outcome, FormOutcome::Accepted);
        assert_eq!(transport.form_calls(), 1);
        assert_eq!(transport.forms()[0], sent);
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let transport =
            Arc::new(FakeTransport::with_data(serde_json::json!({})).form_status(422));
        let outcome = submitter(Some("https://forms.example.org/f/abc"), transport)
            .submit(FormKind::ComingSoon, &fields(&[("email", "x@y.z")]))
            .await
            .unwrap();
        assert_eq!(outcome, FormOutcome::Rejected { status: 422 });
    }

    #[tokio::test]
    async fn test_email_required_for_signups() {
        let transport = Arc::new(FakeTransport::with_data(serde_json::json!({})));
        let submitter = submitter(Some("https://forms.example.org/f/abc"), transport.clone());

        assert!(submitter.submit(FormKind::Newsletter, &[]).await.is_err());
        assert!(
            submitter
                .submit(FormKind::ComingSoon, &fields(&[("email", "not-an-address")]))
                .await
                .is_err()
        );
        assert_eq!(transport.form_calls(), 0);

        // Contact forms carry their own fields.
        assert!(submitter.submit(FormKind::Contact, &[]).await.is_ok());
    }

    #[test]
    fn test_form_kind_from_str() {
        assert_eq!("Coming-Soon".parse::<FormKind>().unwrap(), FormKind::ComingSoon);
        assert_eq!("newsletter".parse::<FormKind>().unwrap(), FormKind::Newsletter);
        assert!("survey".parse::<FormKind>().is_err());
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("message=a=b").unwrap(),
            ("message".to_string(), "a=b".to_string())
        );
        assert!(parse_field("=x").is_err());
        assert!(parse_field("novalue").is_err());
    }
}
