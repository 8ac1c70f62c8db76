use std::fmt;

use reqwest::header::HeaderMap;

use crate::http::ServerResponse;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A non-2xx response returned from the service.
    #[error(transparent)]
    Response(#[from] ErrorResponse),

    /// The service answered `304 Not Modified` to a conditional request.
    #[error("not modified")]
    NotModified(ServerResponse),

    /// An error from the underlying HTTP client.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),

    /// An error from one of the middleware used.
    #[error(transparent)]
    HttpMiddleware(anyhow::Error),

    /// An error from a token source.
    #[error("token source failed: {0}")]
    TokenSource(Box<dyn std::error::Error + Send + Sync>),

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A path template referenced a parameter that was not supplied.
    #[error("missing path parameter: {0}")]
    MissingPathParameter(String),

    /// A path template has a `{` without a closing `}`.
    #[error("invalid path template: {0}")]
    InvalidPathTemplate(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` for the `304 Not Modified` answer to an `If-None-Match` request.
    pub fn is_not_modified(&self) -> bool {
        matches!(self, Error::NotModified(_))
    }

    /// The HTTP status code when the error originates from a service response.
    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            Error::Response(e) => Some(e.code),
            Error::NotModified(r) => Some(r.status_code),
            Error::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(err) => Error::HttpMiddleware(err),
            reqwest_middleware::Error::Reqwest(err) => Error::HttpClient(err),
        }
    }
}

/// An error response returned from a Google API.
///
/// See the [`JSON error format`][1] documentation for more details.
///
/// [1]: https://cloud.google.com/apis/design/errors#http_mapping
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// An HTTP status value, without the textual description.
    ///
    /// Example values include: `400` (Bad Request), `401` (Unauthorized), and `404` (Not Found).
    /// Filled from the HTTP status when the body omits it.
    #[serde(default)]
    pub code: u16,

    /// Description of the error.
    #[serde(default)]
    pub message: String,

    /// The canonical status name, for example `NOT_FOUND`.
    #[serde(default)]
    pub status: Option<String>,

    /// Legacy per-item error list.
    #[serde(default)]
    pub errors: Vec<ErrorResponseItem>,

    /// Typed error details such as `google.rpc.BadRequest`.
    #[serde(default)]
    pub details: Vec<serde_json::Value>,

    /// The raw response body.
    #[serde(skip)]
    pub body: String,

    /// The response headers.
    #[serde(skip)]
    pub headers: HeaderMap,
}

impl ErrorResponse {
    /// Returns `true` if the error is commonly retried by callers.
    pub fn is_retriable(&self) -> bool {
        matches!(self.code, 408 | 429 | 500..=599)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "status {}: {}", self.code, self.body)
        } else {
            write!(f, "status {}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseItem {
    /// The scope of the error. Example values include: `global` and `usageLimits`.
    #[serde(default)]
    pub domain: String,

    /// Example values include `invalid`, `invalidParameter`, and `required`.
    #[serde(default)]
    pub reason: String,

    /// Description of the error.
    #[serde(default)]
    pub message: String,

    /// The part of the request that caused the error, for example the name of a parameter.
    pub location: Option<String>,

    /// Example values include `header` and `parameter`.
    pub location_type: Option<String>,
}

impl fmt::Display for ErrorResponseItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(f)
    }
}

/// The error response JSON format contains an extra object level that is inconvenient to include in our
/// error.
#[derive(serde::Deserialize)]
pub(crate) struct ErrorWrapper {
    pub(crate) error: ErrorResponse,
}
