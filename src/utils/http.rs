// src/utils/http.rs

//! HTTP transport.
//!
//! Everything that leaves the process goes through [`Transport`], so the
//! content client and form submitter can be exercised with a fake.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::multipart::Form;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::BackendConfig;

/// Outbound network operations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body and decode the JSON response.
    ///
    /// `max_age` is passed on as a reuse hint for caches in front of the
    /// backend; the transport does not cache anything itself.
    async fn post_json(&self, endpoint: &str, body: &Value, max_age: Duration) -> Result<Value>;

    /// POST multipart form data, returning the response status.
    async fn post_form(&self, endpoint: &str, fields: &[(String, String)]) -> Result<u16>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &BackendConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// [`Transport`] backed by `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, endpoint: &str, body: &Value, max_age: Duration) -> Result<Value> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, format!("max-age={}", max_age.as_secs()))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        // GraphQL servers often report errors in a JSON body on 4xx/5xx;
        // only a body we cannot decode turns a bad status into an error.
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(AppError::status(status.as_u16(), endpoint)),
            Err(e) => Err(e.into()),
        }
    }

    async fn post_form(&self, endpoint: &str, fields: &[(String, String)]) -> Result<u16> {
        let form = fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self
            .client
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    type Responder = Box<dyn Fn(&Value) -> Value + Send + Sync>;

    /// Records requests and answers JSON posts through a closure.
    pub(crate) struct FakeTransport {
        responder: Responder,
        form_status: u16,
        json_calls: AtomicUsize,
        form_calls: AtomicUsize,
        requests: Mutex<Vec<Value>>,
        forms: Mutex<Vec<Vec<(String, String)>>>,
    }

    impl FakeTransport {
        pub(crate) fn new(responder: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
            Self {
                responder: Box::new(responder),
                form_status: 200,
                json_calls: AtomicUsize::new(0),
                form_calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                forms: Mutex::new(Vec::new()),
            }
        }

        /// Answer every JSON post with `{ "data": data }`.
        pub(crate) fn with_data(data: Value) -> Self {
            Self::new(move |_| serde_json::json!({ "data": data.clone() }))
        }

        pub(crate) fn form_status(mut self, status: u16) -> Self {
            self.form_status = status;
            self
        }

        pub(crate) fn json_calls(&self) -> usize {
            self.json_calls.load(Ordering::SeqCst)
        }

        pub(crate) fn form_calls(&self) -> usize {
            self.form_calls.load(Ordering::SeqCst)
        }

        pub(crate) fn requests(&self) -> Vec<Value> {
            self.requests.lock().unwrap().clone()
        }

        pub(crate) fn forms(&self) -> Vec<Vec<(String, String)>> {
            self.forms.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn post_json(&self, _endpoint: &str, body: &Value, _max_age: Duration) -> Result<Value> {
            self.json_calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(body.clone());
            Ok((self.responder)(body))
        }

        async fn post_form(&self, _endpoint: &str, fields: &[(String, String)]) -> Result<u16> {
            self.form_calls.fetch_add(1, Ordering::SeqCst);
            self.forms.lock().unwrap().push(fields.to_vec());
            Ok(self.form_status)
        }
    }
}
