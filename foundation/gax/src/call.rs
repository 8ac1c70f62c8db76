use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::cancel::CancellationToken;

/// Options shared by every call builder.
#[derive(Clone, Debug, Default)]
pub struct CallOptions {
    params: Vec<(String, String)>,
    headers: HeaderMap,
    if_none_match: Option<String>,
    media: bool,
    cancel: Option<CancellationToken>,
}

impl CallOptions {
    /// Sets a query parameter, replacing any previous value for the same key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.params.retain(|(k, _)| k != key);
        self.params.push((key.to_string(), value.into()));
    }

    /// Adds a query parameter, keeping previous values for the same key.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        self.params.push((key.to_string(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    pub fn set_if_none_match(&mut self, etag: impl Into<String>) {
        self.if_none_match = Some(etag.into());
    }

    pub fn cancel(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    pub fn set_cancel(&mut self, token: CancellationToken) {
        self.cancel = Some(token);
    }

    /// Switches the response format from `alt=json` to `alt=media`.
    pub fn set_media(&mut self) {
        self.media = true;
    }

    pub(crate) fn alt(&self) -> &'static str {
        if self.media {
            "media"
        } else {
            "json"
        }
    }
}

/// Chained setters available on every call builder.
pub trait Call: Sized {
    fn options_mut(&mut self) -> &mut CallOptions;

    /// Selects a subset of fields to include in the response (partial response).
    fn fields(mut self, fields: impl Into<String>) -> Self {
        self.options_mut().set("fields", fields);
        self
    }

    /// Available to use for quota purposes for server-side applications.
    fn quota_user(mut self, quota_user: impl Into<String>) -> Self {
        self.options_mut().set("quotaUser", quota_user);
        self
    }

    /// Attaches an extra header to the request.
    fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.options_mut().headers_mut().insert(name, value);
        self
    }

    /// Aborts the round trip with [`crate::error::Error::Cancelled`] once the token is cancelled.
    fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.options_mut().set_cancel(token);
        self
    }
}

/// Calls that support conditional GET.
pub trait ConditionalCall: Call {
    /// Only return the resource when its ETag differs from `etag`.
    /// The call fails with [`crate::error::Error::NotModified`] otherwise.
    fn if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.options_mut().set_if_none_match(etag);
        self
    }
}

#[cfg(test)]
mod test {
    use super::CallOptions;

    #[test]
    fn test_params() {
        let mut options = CallOptions::default();
        options.set("pageToken", "a");
        options.set("pageToken", "b");
        options.add("id", "1");
        options.add("id", "2");
        assert_eq!(Some("b"), options.get("pageToken"));
        assert_eq!(3, options.params().len());
        assert_eq!("json", options.alt());
        options.set_media();
        assert_eq!("media", options.alt());
    }
}
