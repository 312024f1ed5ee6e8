//! Error types for the API client.

use std::fmt;

use percent_encoding::percent_decode_str;
use reqwest::Method;
use serde::Deserialize;
use url::Url;

/// Errors that can occur when building, sending, or decoding API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status and a structured error body.
    #[error(transparent)]
    Api(#[from] ErrorResponse),

    /// The API answered with a non-success status and a body that is not an error envelope.
    #[error("status: {status}, can't parse error, unknown format, raw data: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not a valid `{data, meta}` envelope.
    #[error("status: {status}, unable to decode response, unknown format: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope parsed but carried no `data` field.
    #[error("status: {status}, missing data from response")]
    MissingData { status: u16 },

    /// `data` was present but did not match the expected shape.
    #[error("status: {status}, unable to parse response data: {source}")]
    Parse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Request options could not be encoded into a query string or JSON body.
    #[error("unable to encode request options: {0}")]
    Encode(#[source] serde_json::Error),

    /// The base URL or a request URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Caller input was rejected before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// A single entry of the API's `errors` array.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub description: String,
}

/// Structured error returned for any status outside the success whitelist.
///
/// Display renders the request path percent-decoded.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    pub http_status: u16,
    pub request_method: Method,
    pub request_url: Url,
    pub errors: Vec<ApiError>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = &self.request_url;
        write!(
            f,
            "{} {}://{}{}{}: {}:",
            self.request_method,
            url.scheme(),
            url.host_str().unwrap_or_default(),
            url.port().map(|p| format!(":{}", p)).unwrap_or_default(),
            percent_decode_str(url.path()).decode_utf8_lossy(),
            self.http_status
        )?;
        for e in &self.errors {
            write!(
                f,
                "\nError code: {}, Message: '{}', Description: '{}'",
                e.code, e.message, e.description
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_renders_every_sub_error() {
        let err = ErrorResponse {
            http_status: 404,
            request_method: Method::GET,
            request_url: Url::parse("https://api.pananames.com/merchant/v2/domains/x.com?a=1")
                .unwrap(),
            errors: vec![
                ApiError {
                    code: 1,
                    message: "not found".to_string(),
                    description: "no such domain".to_string(),
                },
                ApiError {
                    code: 2,
                    message: "second".to_string(),
                    description: "other".to_string(),
                },
            ],
        };
        let text = err.to_string();
        assert!(text.starts_with("GET https://api.pananames.com/merchant/v2/domains/x.com: 404:"));
        assert!(text.contains("Error code: 1, Message: 'not found', Description: 'no such domain'"));
        assert!(text.contains("\nError code: 2, Message: 'second', Description: 'other'"));
        assert!(!text.contains("a=1"));
    }

    #[test]
    fn error_response_decodes_escaped_path() {
        let err = ErrorResponse {
            http_status: 404,
            request_method: Method::DELETE,
            request_url: Url::parse(
                "https://api.pananames.com/merchant/v2/domains/%D1%80%D1%84.%D1%80%D1%84",
            )
            .unwrap(),
            errors: vec![],
        };
        assert_eq!(
            err.to_string(),
            "DELETE https://api.pananames.com/merchant/v2/domains/рф.рф: 404:"
        );
    }
}
