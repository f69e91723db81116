// src/services/client.rs

//! GraphQL content client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value, json};

use crate::error::{AppError, Result};
use crate::models::BackendConfig;
use crate::utils::http::{HttpTransport, Transport};

/// Sends queries to the configured GraphQL endpoint.
///
/// Each call is a single read-only request; nothing is cached or retried
/// here. A missing endpoint fails before any network I/O.
#[derive(Clone)]
pub struct ContentClient {
    endpoint: Option<String>,
    revalidate: Duration,
    transport: Arc<dyn Transport>,
}

impl ContentClient {
    /// Create a client using the HTTP transport.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: &BackendConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            revalidate: Duration::from_secs(config.revalidate_secs),
            transport,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Run `query` with `variables` and return the `data` member.
    ///
    /// A response carrying an `errors` member fails the whole call;
    /// partial data is never returned alongside errors. A response without
    /// `data` yields an empty object.
    pub async fn query(&self, query: &str, variables: Value) -> Result<Value> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            AppError::config("Missing GraphQL endpoint (set backend.endpoint or WORDPRESS_API_URL)")
        })?;

        let variables = match variables {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        let body = json!({ "query": query, "variables": variables });

        log::debug!("GraphQL request to {endpoint}");
        let mut response = self
            .transport
            .post_json(endpoint, &body, self.revalidate)
            .await?;

        if let Some(errors) = reported_errors(&response) {
            log::error!(
                "GraphQL errors: {}",
                serde_json::to_string_pretty(errors).unwrap_or_else(|_| errors.to_string())
            );
            return Err(AppError::Query {
                errors: errors.clone(),
            });
        }

        Ok(match response.get_mut("data").map(Value::take) {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(data) => data,
        })
    }
}

/// Any non-null `errors` member, an empty list included.
fn reported_errors(response: &Value) -> Option<&Value> {
    response.get("errors").filter(|errors| !errors.is_null())
}
