//! Client layer: the configured HTTP client, the shared request executor, and the
//! instance/message services built on top of it.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{AccessToken, InstanceId, ValidationErrors};

mod instance;
mod message;
#[cfg(test)]
pub(crate) mod testing;

pub use instance::InstanceService;
pub use message::MessageService;

/// Base URL of the public W-API v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.w-api.app/v1";

const AUTHORIZATION: &str = "Authorization";
const ACCEPT: &str = "Accept";
const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Header and query-parameter maps accepted by the `*_with` methods.
pub type Params = BTreeMap<String, String>;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub(crate) method: HttpMethod,
    pub(crate) url: Url,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(request.url),
                HttpMethod::Post => self.client.post(request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`WapiClient`] and its services.
///
/// Nothing is retried; every failure reaches the caller.
pub enum WapiError {
    /// A request violated a field constraint; no request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// HTTP client / transport failure (DNS, TLS, timeouts, invalid headers, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// W-API answered with a 4xx or 5xx status.
    #[error("W-API call failed with HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// Response body could not be decoded into the expected shape.
    ///
    /// This includes a 2xx response with an empty body (e.g. `204 No Content`).
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request body could not be encoded as JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured base URL does not form a valid request URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The blocking client could not start its runtime.
    #[error("runtime error: {0}")]
    Runtime(#[source] std::io::Error),
}

impl WapiError {
    /// HTTP status for [`WapiError::Remote`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`WapiClient`].
///
/// Use this when you need to customize the base URL, timeouts, or user-agent.
pub struct WapiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Default for WapiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WapiClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            connect_timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (for example a staging host or a local mock).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a timeout for establishing the connection only.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`WapiClient`].
    pub fn build(self) -> Result<WapiClient, WapiError> {
        Url::parse(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| WapiError::Transport(Box::new(err)))?;

        Ok(WapiClient {
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Configured W-API client.
///
/// Holds no per-call state, so one instance (or its clones) can serve concurrent calls.
/// Every request goes through a single executor which attaches the JSON headers and turns
/// 4xx/5xx responses into [`WapiError::Remote`] after logging the body.
pub struct WapiClient {
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl Default for WapiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WapiClient {
    /// Create a client for [`DEFAULT_BASE_URL`].
    ///
    /// For more customization, use [`WapiClient::builder`].
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> WapiClientBuilder {
        WapiClientBuilder::new()
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Instance metadata calls.
    pub fn instances(&self) -> InstanceService {
        InstanceService::new(self.clone())
    }

    /// Message sending calls.
    pub fn messages(&self) -> MessageService {
        MessageService::new(self.clone())
    }

    #[cfg(test)]
    pub(crate) fn with_transport(base_url: &str, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.to_owned(),
            http,
        }
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        headers: &Params,
        query: &Params,
        body: Option<String>,
    ) -> Result<HttpRequest, WapiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url.trim_end_matches('/'), path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        let mut all_headers = headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect::<Vec<_>>();
        for name in [ACCEPT, CONTENT_TYPE] {
            if !headers.keys().any(|key| key.eq_ignore_ascii_case(name)) {
                all_headers.push((name.to_owned(), APPLICATION_JSON.to_owned()));
            }
        }

        Ok(HttpRequest {
            method,
            url,
            headers: all_headers,
            body,
        })
    }

    /// Send one request and return the body of a non-error response.
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        headers: &Params,
        query: &Params,
        body: Option<String>,
    ) -> Result<String, WapiError> {
        let request = self.build_request(method, path, headers, query, body)?;
        tracing::debug!(method = method.as_str(), path, "calling W-API");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(WapiError::Transport)?;

        if (400..=599).contains(&response.status) {
            tracing::error!(
                status = response.status,
                body = %response.body,
                "W-API call failed"
            );
            return Err(WapiError::Remote {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

fn authorization_header(token: &AccessToken) -> Params {
    BTreeMap::from([(AUTHORIZATION.to_owned(), token.bearer())])
}

fn instance_query(instance_id: &InstanceId) -> Params {
    BTreeMap::from([(
        InstanceId::FIELD.to_owned(),
        instance_id.as_str().to_owned(),
    )])
}

fn parse_error(path: &str, err: impl StdError + Send + Sync + 'static) -> WapiError {
    tracing::warn!(path, error = %err, "unexpected W-API response body");
    WapiError::Parse(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::testing::FakeTransport;
    use super::*;

    fn make_client(transport: FakeTransport) -> WapiClient {
        WapiClient::with_transport("https://example.invalid/v1", Arc::new(transport))
    }

    #[tokio::test]
    async fn execute_composes_url_and_default_headers() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let query = BTreeMap::from([("instanceId".to_owned(), "I 1".to_owned())]);
        let body = client
            .execute(HttpMethod::Get, "/instance/fetch-instance", &Params::new(), &query, None)
            .await
            .unwrap();
        assert_eq!(body, "{}");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/v1/instance/fetch-instance?instanceId=I+1"
        );
        assert_eq!(
            request.headers,
            vec![
                ("Accept".to_owned(), "application/json".to_owned()),
                ("Content-Type".to_owned(), "application/json".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn caller_headers_win_over_defaults() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        let headers = BTreeMap::from([("accept".to_owned(), "text/plain".to_owned())]);
        client
            .execute(HttpMethod::Post, "/x", &headers, &Params::new(), None)
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.as_str(), "https://example.invalid/v1/x");
        assert_eq!(
            request.headers,
            vec![
                ("accept".to_owned(), "text/plain".to_owned()),
                ("Content-Type".to_owned(), "application/json".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn client_and_server_errors_become_remote_errors() {
        for status in [400, 401, 404, 422, 500, 503] {
            let client = make_client(FakeTransport::new(status, r#"{"error":"bad"}"#));
            let err = client
                .execute(HttpMethod::Get, "/x", &Params::new(), &Params::new(), None)
                .await
                .unwrap_err();

            assert_eq!(err.status(), Some(status));
            assert!(err.to_string().contains(r#"{"error":"bad"}"#));
        }
    }

    #[tokio::test]
    async fn non_error_statuses_pass_through() {
        for status in [200, 201, 204, 302] {
            let client = make_client(FakeTransport::new(status, "ok"));
            let body = client
                .execute(HttpMethod::Get, "/x", &Params::new(), &Params::new(), None)
                .await
                .unwrap();
            assert_eq!(body, "ok");
        }
    }

    #[tokio::test]
    async fn transport_failures_are_propagated() {
        let client = make_client(FakeTransport::failing("connection refused"));
        let err = client
            .execute(HttpMethod::Get, "/x", &Params::new(), &Params::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, WapiError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn invalid_base_url_is_reported() {
        let client = WapiClient::with_transport("not a url", Arc::new(FakeTransport::new(200, "")));
        let err = client
            .execute(HttpMethod::Get, "/x", &Params::new(), &Params::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, WapiError::InvalidUrl(_)));
    }

    #[test]
    fn builder_applies_base_url_and_validates_it() {
        let client = WapiClient::builder()
            .base_url("http://127.0.0.1:8080/v1")
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(1))
            .user_agent("wapi-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/v1");

        assert!(matches!(
            WapiClient::builder().base_url("::nope").build(),
            Err(WapiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn default_client_targets_public_api() {
        assert_eq!(WapiClient::new().base_url(), "https://api.w-api.app/v1");
    }
}
