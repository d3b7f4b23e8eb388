//! HTTP backend abstraction for the web and app JSON APIs.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and makes exactly one attempt per request.

use crate::error::{ApiError, ApiResult};
use crate::models::ApiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    /// POST with a url-encoded form body.
    Post,
}

/// A fully built request, ready for any backend to send.
///
/// Web requests authenticate with the `SESSDATA` cookie, app requests with
/// an `access_key` parameter (query for GET, form field for POST).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub form: Vec<(String, String)>,
    pub sess_data: Option<String>,
}

impl HttpRequest {
    pub const fn get(url: Url) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            form: Vec::new(),
            sess_data: None,
        }
    }

    pub const fn post(url: Url) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            form: Vec::new(),
            sess_data: None,
        }
    }

    /// Append a form field (POST only).
    pub fn with_form_field(mut self, key: &str, value: impl ToString) -> Self {
        self.form.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach the session cookie if one is present.
    pub fn with_session(mut self, sess_data: Option<&str>) -> Self {
        self.sess_data = sess_data.map(str::to_string);
        self
    }

    /// Attach an app access key where the method expects it.
    pub fn with_access_key(mut self, access_key: Option<&str>) -> Self {
        let Some(key) = access_key else {
            return self;
        };
        match self.method {
            HttpMethod::Get => {
                self.url.query_pairs_mut().append_pair("access_key", key);
            }
            HttpMethod::Post => {
                self.form.push(("access_key".to_string(), key.to_string()));
            }
        }
        self
    }

    /// Look up a form field by name.
    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that send a request and decode a JSON body.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the `UserPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send the request and deserialize the JSON response body.
    async fn send_json<T: DeserializeOwned + Send>(&self, request: &HttpRequest) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

const REFERER: &str = "https://www.bilibili.com";

/// Production HTTP backend using reqwest.
///
/// This is an implementation detail - external code should use `DefaultBiliClient`
/// and interact with it through the `UserPort` trait.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    fn build_request(&self, request: &HttpRequest) -> reqwest::RequestBuilder {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(request.url.as_str()),
            HttpMethod::Post => self.client.post(request.url.as_str()).form(&request.form),
        };
        if let Some(ref sess_data) = request.sess_data {
            builder = builder.header(reqwest::header::COOKIE, format!("SESSDATA={sess_data}"));
        }
        builder.header(reqwest::header::REFERER, REFERER)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send_json<T: DeserializeOwned + Send>(&self, request: &HttpRequest) -> ApiResult<T> {
        tracing::debug!(
            method = ?request.method,
            path = request.url.path(),
            cookie = request.sess_data.is_some(),
            "Sending request"
        );

        let response = self.build_request(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ApiRequestFailed {
                status: status.as_u16(),
                url: request.url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub struct CannedResponse {
        /// Body to decode, or `None` to fail with the given status
        pub json: Option<serde_json::Value>,
        pub status: u16,
        pub delay: Duration,
    }

    impl CannedResponse {
        pub const fn json(json: serde_json::Value) -> Self {
            Self {
                json: Some(json),
                status: 200,
                delay: Duration::ZERO,
            }
        }

        pub const fn failure(status: u16) -> Self {
            Self {
                json: None,
                status,
                delay: Duration::ZERO,
            }
        }

        pub const fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    /// A fake HTTP backend that returns canned responses and records requests.
    ///
    /// Patterns are matched against the full URL in insertion order; the first
    /// match wins.
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl FakeBackend {
        pub const fn new() -> Self {
            Self {
                responses: Vec::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Add a canned response for URLs containing `url_contains`.
        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        /// Every request sent so far, in send order.
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn find_response(&self, url: &str) -> Option<CannedResponse> {
            self.responses
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn send_json<T: DeserializeOwned + Send>(
            &self,
            request: &HttpRequest,
        ) -> ApiResult<T> {
            self.requests.lock().unwrap().push(request.clone());

            let url = request.url.to_string();
            let response = self
                .find_response(&url)
                .ok_or_else(|| ApiError::ApiRequestFailed {
                    status: 404,
                    url: url.clone(),
                })?;

            if !response.delay.is_zero() {
                tokio::time::sleep(response.delay).await;
            }

            match response.json {
                Some(json) => serde_json::from_value(json).map_err(Into::into),
                None => Err(ApiError::ApiRequestFailed {
                    status: response.status,
                    url,
                }),
            }
        }
    }
}
