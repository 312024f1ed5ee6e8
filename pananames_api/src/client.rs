//! HTTP client for the Pananames merchant API: request construction and
//! envelope unwrapping shared by every endpoint.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    errors::{ApiError, ErrorResponse},
    options::append_query,
    request::RequestOption,
    types::{Envelope, Pagination, Response, ZeroTimestamps},
    user_agent::DEFAULT_USER_AGENT,
    Error,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.pananames.com";

/// Versioned prefix joined to every resource path.
pub const API_VERSION_PATH: &str = "/merchant/v2/";

const SIGNATURE: HeaderName = HeaderName::from_static("signature");

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Statuses treated as success; anything else is decoded as an error body.
const ACCEPTED_STATUSES: [StatusCode; 5] = [
    StatusCode::OK,
    StatusCode::CREATED,
    StatusCode::ACCEPTED,
    StatusCode::NO_CONTENT,
    StatusCode::NOT_MODIFIED,
];

/// HTTP client for the Pananames merchant API.
///
/// Configuration is fixed at construction. The underlying `reqwest::Client`
/// is reused for every call, so cloning is cheap and clones share the
/// connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    token: HeaderValue,
    user_agent: HeaderValue,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Builder for [`Client`]: base URL, transport, and user agent overrides.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    token: String,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Overrides the API host. Any path on the URL is replaced by the
    /// versioned API prefix.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Uses a caller-configured `reqwest::Client` instead of the default one
    /// (30-second timeout).
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let mut base_url =
            Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)).map_err(|e| {
                tracing::error!("Invalid base URL: {}", e);
                Error::Url(e)
            })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidInput(format!(
                "base URL {} cannot carry a path",
                base_url
            )));
        }
        base_url.set_path(API_VERSION_PATH);
        base_url.set_query(None);
        base_url.set_fragment(None);

        let mut token = HeaderValue::from_str(&self.token).map_err(|_| {
            Error::InvalidInput("token contains characters not allowed in a header".to_string())
        })?;
        token.set_sensitive(true);

        let user_agent =
            HeaderValue::from_str(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .map_err(|e| Error::InvalidInput(format!("invalid user agent: {}", e)))?;

        let http = match self.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .map_err(|e| {
                    tracing::error!("Failed to build HTTP client: {}", e);
                    Error::Transport(e)
                })?,
        };

        Ok(Client {
            http,
            base_url,
            token,
            user_agent,
        })
    }
}

impl Client {
    /// Creates a client for the production API.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::builder(token).build()
    }

    /// Creates a client against a different host. Used for testing with wiremock.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self, Error> {
        Self::builder(token).base_url(base_url).build()
    }

    pub fn builder(token: &str) -> ClientBuilder {
        ClientBuilder {
            token: token.to_string(),
            base_url: None,
            http_client: None,
            user_agent: None,
        }
    }

    /// Base URL including the versioned API prefix.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a request for `path`, relative to the versioned API prefix.
    ///
    /// For POST, PUT, PATCH, and DELETE the options become the JSON body;
    /// for every other verb they are encoded into the query string. Core
    /// headers are attached first, then `options` run in order.
    pub fn new_request<O>(
        &self,
        method: Method,
        path: &str,
        opt: Option<&O>,
        options: &[&dyn RequestOption],
    ) -> Result<reqwest::Request, Error>
    where
        O: Serialize + ?Sized,
    {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{}", self.base_url.path(), path));

        let mut body = None;
        match (has_body(&method), opt) {
            (true, Some(opt)) => body = Some(serde_json::to_vec(opt).map_err(Error::Encode)?),
            (false, Some(opt)) => append_query(&mut url, opt)?,
            (_, None) => {}
        }

        let mut req = reqwest::Request::new(method, url);
        let headers = req.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(SIGNATURE, self.token.clone());
        headers.insert(USER_AGENT, self.user_agent.clone());
        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *req.body_mut() = Some(body.into());
        }

        for option in options {
            option.apply(&mut req)?;
        }
        Ok(req)
    }

    /// Sends the request and decodes the envelope's `data` into `T`.
    ///
    /// Zero timestamps anywhere in the decoded value are cleared to `None`
    /// before it is returned.
    pub async fn execute<T>(&self, req: reqwest::Request) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned + ZeroTimestamps,
    {
        let resp = self.send(req).await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        let envelope = serde_json::from_slice::<Envelope>(&body).map_err(|e| {
            tracing::error!(
                "Failed to decode response envelope: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode { status, source: e }
        })?;
        let Some(data) = envelope.data else {
            tracing::error!("Response is missing data | body: {}", truncate_body(&body));
            return Err(Error::MissingData { status });
        };
        let mut data = serde_json::from_value::<T>(data).map_err(|e| {
            tracing::error!(
                "Failed to parse response data: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Parse { status, source: e }
        })?;
        data.clear_zero_timestamps();

        Ok(Response {
            data,
            meta: envelope.meta,
        })
    }

    /// Sends a request that expects no payload. The body is never read.
    pub async fn execute_empty(&self, req: reqwest::Request) -> Result<(), Error> {
        self.send(req).await?;
        Ok(())
    }

    async fn send(&self, req: reqwest::Request) -> Result<reqwest::Response, Error> {
        let method = req.method().clone();
        tracing::debug!(%method, url = %req.url(), "sending request");

        let resp = self.http.execute(req).await.map_err(|e| {
            tracing::error!("Failed to send {} request: {}", method, e);
            Error::Transport(e)
        })?;

        if ACCEPTED_STATUSES.contains(&resp.status()) {
            return Ok(resp);
        }
        Err(check_response(method, resp).await)
    }

    pub(crate) async fn fetch<T, O>(
        &self,
        method: Method,
        path: &str,
        opt: Option<&O>,
        options: &[&dyn RequestOption],
    ) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned + ZeroTimestamps,
        O: Serialize + ?Sized,
    {
        let req = self.new_request(method, path, opt, options)?;
        self.execute(req).await
    }

    pub(crate) async fn fetch_empty<O>(
        &self,
        method: Method,
        path: &str,
        opt: Option<&O>,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error>
    where
        O: Serialize + ?Sized,
    {
        let req = self.new_request(method, path, opt, options)?;
        self.execute_empty(req).await
    }

    pub(crate) async fn fetch_list<T, O>(
        &self,
        path: &str,
        opt: &O,
        options: &[&dyn RequestOption],
    ) -> Result<(Vec<T>, Pagination), Error>
    where
        T: DeserializeOwned + ZeroTimestamps,
        O: Serialize + ?Sized,
    {
        let resp = self
            .fetch::<Vec<T>, O>(Method::GET, path, Some(opt), options)
            .await?;
        Ok((resp.data, resp.meta.pagination))
    }
}

fn has_body(method: &Method) -> bool {
    *method == Method::POST
        || *method == Method::PUT
        || *method == Method::PATCH
        || *method == Method::DELETE
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// Turns a non-success response into the structured error when the body is
/// an error envelope, or a status-plus-raw-body error otherwise.
async fn check_response(method: Method, resp: reqwest::Response) -> Error {
    let status = resp.status().as_u16();
    let url = resp.url().clone();
    let body = match resp.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Failed to read error body: {}", e);
            return Error::Transport(e);
        }
    };

    match serde_json::from_slice::<ErrorBody>(&body) {
        Ok(parsed) => {
            let err = ErrorResponse {
                http_status: status,
                request_method: method,
                request_url: url,
                errors: parsed.errors,
            };
            tracing::error!("API error: {}", err);
            Error::Api(err)
        }
        Err(_) => {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(body.as_bytes())
            );
            Error::HttpStatus { status, body }
        }
    }
}

/// Response bodies are cut to this many bytes in log lines.
fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        String::from_utf8_lossy(body).into_owned()
    } else {
        format!("{}...[truncated]", String::from_utf8_lossy(&body[..MAX]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GetDomainsOptions;
    use crate::ListQuery;

    fn client() -> Client {
        Client::with_base_url("secret", "https://example.com/ignored/path?x=1").unwrap()
    }

    #[test]
    fn base_url_path_is_replaced_by_api_prefix() {
        assert_eq!(
            client().base_url().as_str(),
            "https://example.com/merchant/v2/"
        );
        assert_eq!(
            Client::new("t").unwrap().base_url().as_str(),
            "https://api.pananames.com/merchant/v2/"
        );
    }

    #[test]
    fn invalid_base_url_fails_at_build() {
        assert!(matches!(
            Client::with_base_url("t", "not a url"),
            Err(Error::Url(_))
        ));
        assert!(matches!(
            Client::with_base_url("t", "mailto:someone@example.com"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn token_is_redacted_from_debug() {
        let out = format!("{:?}", client());
        assert!(!out.contains("secret"));
        assert!(out.contains("redacted"));
    }

    #[test]
    fn get_request_encodes_query_and_core_headers() {
        let opts = GetDomainsOptions::default()
            .with_status("suspended")
            .with_page(1)
            .with_limit(10);
        let req = client()
            .new_request(Method::GET, "domains", Some(&opts), &[])
            .unwrap();
        assert_eq!(req.url().path(), "/merchant/v2/domains");
        assert_eq!(
            req.url().query(),
            Some("current_page=1&per_page=10&status=suspended")
        );
        assert!(req.body().is_none());
        let h = req.headers();
        assert_eq!(h[ACCEPT], "application/json");
        assert_eq!(h["signature"], "secret");
        assert_eq!(h[USER_AGENT], DEFAULT_USER_AGENT);
        assert!(h.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn delete_with_options_carries_json_body() {
        #[derive(Serialize)]
        struct Target {
            hostname: &'static str,
        }
        let req = client()
            .new_request(
                Method::DELETE,
                "domains/test.com/child_name_servers",
                Some(&Target { hostname: "ns1.test.com" }),
                &[],
            )
            .unwrap();
        assert!(req.url().query().is_none());
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"hostname":"ns1.test.com"}"#);
    }

    #[test]
    fn put_without_options_has_no_body() {
        let req = client()
            .new_request(Method::PUT, "domains/test.com/redeem", None::<&()>, &[])
            .unwrap();
        assert!(req.body().is_none());
        assert!(req.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn decorators_run_after_core_headers() {
        let override_ua = |req: &mut reqwest::Request| -> Result<(), Error> {
            req.headers_mut()
                .insert(USER_AGENT, HeaderValue::from_static("custom"));
            Ok(())
        };
        let timeout = crate::WithTimeout(Duration::from_secs(2));
        let req = client()
            .new_request(Method::GET, "tlds", None::<&()>, &[&override_ua, &timeout])
            .unwrap();
        assert_eq!(req.headers()[USER_AGENT], "custom");
        assert_eq!(req.timeout(), Some(&Duration::from_secs(2)));
    }

    #[test]
    fn failing_decorator_aborts_build() {
        let reject = |_: &mut reqwest::Request| -> Result<(), Error> {
            Err(Error::InvalidInput("nope".to_string()))
        };
        let result = client().new_request(Method::GET, "tlds", None::<&()>, &[&reject]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn unencodable_query_fails() {
        let result = client().new_request(Method::GET, "tlds", Some(&[1, 2, 3]), &[]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn long_bodies_are_truncated_for_logs() {
        let body = vec![b'x'; 2500];
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
        assert_eq!(truncate_body(b"short"), "short");
    }
}
