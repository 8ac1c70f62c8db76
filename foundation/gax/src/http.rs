use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::HeaderMap;
use reqwest::{Method, Response, StatusCode};
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use token_source::TokenSource;

use crate::call::CallOptions;
use crate::cancel::invoke;
use crate::error::{Error, ErrorResponse, ErrorWrapper};

/// Status code and headers of the response a value was decoded from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerResponse {
    pub status_code: u16,
    pub headers: HeaderMap,
}

impl ServerResponse {
    /// The `ETag` header, if the service sent one.
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(reqwest::header::ETAG).and_then(|v| v.to_str().ok())
    }
}

impl From<&Response> for ServerResponse {
    fn from(response: &Response) -> Self {
        Self {
            status_code: response.status().as_u16(),
            headers: response.headers().clone(),
        }
    }
}

/// Implemented by every top-level response type so the decoded value can carry its `ServerResponse`.
pub trait ResponseMeta {
    fn set_server_response(&mut self, response: ServerResponse);
}

/// Implements [`ResponseMeta`] for structs with a `server_response: ServerResponse` field.
#[macro_export]
macro_rules! impl_response_meta {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::http::ResponseMeta for $t {
                fn set_server_response(&mut self, response: $crate::http::ServerResponse) {
                    self.server_response = response;
                }
            }
        )*
    };
}

/// A generic empty message returned by delete-style methods.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct Empty {
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(Empty);

#[derive(Debug, Clone)]
pub struct ApiClient {
    ts: Option<Arc<dyn TokenSource>>,
    base_url: String,
    http: Client,
    user_agent: String,
    debug: bool,
}

impl ApiClient {
    /// `base_url` is the root every path template is resolved against, for example
    /// `https://dfareporting.googleapis.com/dfareporting/v4`.
    pub fn new(ts: Option<Arc<dyn TokenSource>>, base_url: &str, http: Client, user_agent: &str, debug: bool) -> Self {
        Self {
            ts,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            user_agent: user_agent.to_string(),
            debug,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Resolves the path template against the base URL.
    pub fn url(&self, template: &str, path_params: &[(&str, &str)]) -> Result<String, Error> {
        let path = expand(template, path_params)?;
        Ok(format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }

    /// Creates the request for one call: URL, `alt=json`, system parameters and extra headers.
    pub fn request(
        &self,
        method: Method,
        template: &str,
        path_params: &[(&str, &str)],
        options: &CallOptions,
    ) -> Result<RequestBuilder, Error> {
        let url = self.url(template, path_params)?;
        tracing::debug!("{} {}", method, url);
        let builder = self
            .http
            .request(method, url)
            .query(&[("alt", options.alt()), ("prettyPrint", "false")])
            .query(options.params())
            .headers(options.headers().clone());
        Ok(match options.if_none_match() {
            Some(etag) => builder.header(reqwest::header::IF_NONE_MATCH, etag),
            None => builder,
        })
    }

    async fn with_headers(&self, builder: RequestBuilder) -> Result<RequestBuilder, Error> {
        let builder = builder
            .header("X-Goog-Api-Client", "rust")
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str());
        match &self.ts {
            Some(ts) => {
                let token = ts.token().await.map_err(Error::TokenSource)?;
                Ok(builder.header(reqwest::header::AUTHORIZATION, token))
            }
            None => Ok(builder),
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let request = self.with_headers(builder).await?;
        let response = request.send().await?;
        check_response_status(response).await
    }

    /// Sends the request and decodes the JSON body into `T`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send<T>(&self, builder: RequestBuilder, options: &CallOptions) -> Result<T, Error>
    where
        T: DeserializeOwned + ResponseMeta,
    {
        let action = async {
            let response = self.execute(builder).await?;
            let server_response = ServerResponse::from(&response);
            let bytes = response.bytes().await?;
            if self.debug {
                tracing::info!("{}", String::from_utf8_lossy(&bytes));
            }
            // 204 No Content still decodes into an empty message.
            let mut value: T = if bytes.is_empty() {
                serde_json::from_slice(b"{}")?
            } else {
                serde_json::from_slice(&bytes)?
            };
            value.set_server_response(server_response);
            Ok(value)
        };
        invoke(options.cancel(), action).await
    }

    /// Sends the request and returns the raw response body, such as `alt=media` content.
    ///
    /// Cancellation covers reading the body as well as waiting for the headers.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send_bytes(&self, builder: RequestBuilder, options: &CallOptions) -> Result<Vec<u8>, Error> {
        let action = async {
            let response = self.execute(builder).await?;
            Ok(response.bytes().await?.to_vec())
        };
        invoke(options.cancel(), action).await
    }
}

/// Checks whether an HTTP response is successful and returns it, or returns an error.
pub(crate) async fn check_response_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status == StatusCode::NOT_MODIFIED {
        return Err(Error::NotModified(ServerResponse::from(&response)));
    }
    if status.is_success() {
        return Ok(response);
    }

    // try to extract a response error, falling back to the raw body if it can not be parsed.
    let headers = response.headers().clone();
    let body = response.text().await?;
    let mut error = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| wrapper.error)
        .unwrap_or_else(|_| ErrorResponse {
            code: status.as_u16(),
            ..Default::default()
        });
    if error.code == 0 {
        error.code = status.as_u16();
    }
    error.body = body;
    error.headers = headers;
    Err(Error::Response(error))
}

/// Expands a path template such as `v1/projects/{projectId}/builds/{id}:cancel`.
///
/// `{name}` percent-encodes everything outside the unreserved set, `{+name}` keeps reserved
/// characters such as `/` intact.
pub fn expand(template: &str, params: &[(&str, &str)]) -> Result<String, Error> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let end = match rest[start..].find('}') {
            Some(end) => start + end,
            None => return Err(Error::InvalidPathTemplate(template.to_string())),
        };
        let expr = &rest[start + 1..end];
        let (reserved, name) = match expr.strip_prefix('+') {
            Some(name) => (true, name),
            None => (false, expr),
        };
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| Error::MissingPathParameter(name.to_string()))?;
        if reserved {
            result.push_str(&value.escape_reserved());
        } else {
            result.push_str(&value.escape());
        }
        rest = &rest[end + 1..];
    }
    result.push_str(rest);
    Ok(result)
}

pub(crate) trait Escape {
    fn escape(&self) -> String;
    fn escape_reserved(&self) -> String;
}

impl Escape for &str {
    fn escape(&self) -> String {
        utf8_percent_encode(self, ENCODE_SET).to_string()
    }

    fn escape_reserved(&self) -> String {
        utf8_percent_encode(self, RESERVED_ENCODE_SET).to_string()
    }
}

const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

const RESERVED_ENCODE_SET: &AsciiSet = &ENCODE_SET
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

pub fn from_str_option<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let s: Result<Value, _> = Deserialize::deserialize(deserializer);
    match s {
        Ok(Value::String(s)) => T::from_str(&s).map_err(de::Error::custom).map(Some),
        Ok(Value::Number(num)) => T::from_str(&num.to_string()).map_err(de::Error::custom).map(Some),
        Ok(Value::Null) => Ok(None),
        Ok(_) => Err(de::Error::custom("Incorrect type")),
        Err(_) => Ok(None),
    }
}

pub fn from_str_vec<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let values: Vec<Value> = Deserialize::deserialize(deserializer)?;
    let mut result = Vec::with_capacity(values.len());
    for v in values {
        let s = match v {
            Value::String(s) => s,
            Value::Number(num) => num.to_string(),
            _ => return Err(de::Error::custom("Incorrect type")),
        };
        result.push(T::from_str(&s).map_err(de::Error::custom)?);
    }
    Ok(result)
}

pub fn from_str<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: de::Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    match v {
        Value::String(s) => T::from_str(&s).map_err(de::Error::custom),
        Value::Number(num) => T::from_str(&num.to_string()).map_err(de::Error::custom),
        _ => Err(de::Error::custom("Incorrect type")),
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::Arc;

    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use reqwest::header::{HeaderName, HeaderValue};
    use reqwest::Method;
    use serde_json::json;
    use token_source::TokenSource;

    use crate::call::{Call, CallOptions};
    use crate::error::Error;
    use crate::http::{expand, ApiClient, Empty, ServerResponse};

    #[ctor::ctor]
    fn init() {
        let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
            .add_directive("gcloud_gax=trace".parse().unwrap());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    #[derive(Debug)]
    pub struct StaticTokenSource;

    #[async_trait::async_trait]
    impl TokenSource for StaticTokenSource {
        async fn token(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok("Bearer test-token".to_string())
        }
    }

    pub fn create_client(server: &Server, ts: Option<Arc<dyn TokenSource>>) -> ApiClient {
        let http = reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build();
        ApiClient::new(ts, &server.url_str("/api/v1/"), http, "test-agent", true)
    }

    #[derive(serde::Deserialize, Default, Debug)]
    #[serde(default, rename_all = "camelCase")]
    struct Thing {
        name: String,
        #[serde(deserialize_with = "crate::http::from_str_option")]
        size: Option<i64>,
        #[serde(skip)]
        server_response: ServerResponse,
    }

    impl_response_meta!(Thing);

    #[test]
    fn test_expand() {
        assert_eq!(
            "v1/projects/my-project/builds/abc:cancel",
            expand("v1/projects/{projectId}/builds/{id}:cancel", &[("projectId", "my-project"), ("id", "abc")])
                .unwrap()
        );
        assert_eq!(
            "v1/projects/a%2Fb%20c%3F/builds",
            expand("v1/projects/{projectId}/builds", &[("projectId", "a/b c?")]).unwrap()
        );
        assert_eq!(
            "v1/operations/123/456:cancel",
            expand("v1/{+name}:cancel", &[("name", "operations/123/456")]).unwrap()
        );
        assert_eq!("tasks/v1/users/@me/lists", expand("tasks/v1/users/@me/lists", &[]).unwrap());
        assert_eq!("%E3%81%82", expand("{id}", &[("id", "あ")]).unwrap());
        match expand("v1/datasets/{datasetId}", &[]) {
            Err(Error::MissingPathParameter(name)) => assert_eq!("datasetId", name),
            other => panic!("unexpected {other:?}"),
        }
        match expand("v1/datasets/{datasetId", &[("datasetId", "a")]) {
            Err(Error::InvalidPathTemplate(template)) => assert_eq!("v1/datasets/{datasetId", template),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_from_str_option() {
        let thing: Thing = serde_json::from_str(r#"{"name":"a","size":"1024"}"#).unwrap();
        assert_eq!(Some(1024), thing.size);
        let thing: Thing = serde_json::from_str(r#"{"name":"a","size":12}"#).unwrap();
        assert_eq!(Some(12), thing.size);
        let thing: Thing = serde_json::from_str(r#"{"name":"a","size":null}"#).unwrap();
        assert_eq!(None, thing.size);
        let thing: Thing = serde_json::from_str(r#"{"name":"a"}"#).unwrap();
        assert_eq!(None, thing.size);
    }

    #[tokio::test]
    async fn test_send() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v1/things/a%2Fb"),
                request::query(url_decoded(contains(("alt", "json")))),
                request::query(url_decoded(contains(("prettyPrint", "false")))),
                request::query(url_decoded(contains(("fields", "name")))),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains(("user-agent", "test-agent"))),
                request::headers(contains(("x-custom", "1"))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("etag", "\"v1\"")
                    .body(json!({"name": "a/b", "size": "10"}).to_string()),
            ),
        );
        let client = create_client(&server, Some(Arc::new(StaticTokenSource)));
        let call = Options(CallOptions::default())
            .fields("name")
            .header(HeaderName::from_static("x-custom"), HeaderValue::from_static("1"));
        let builder = client
            .request(Method::GET, "things/{name}", &[("name", "a/b")], &call.0)
            .unwrap();
        let thing: Thing = client.send(builder, &call.0).await.unwrap();
        assert_eq!("a/b", thing.name);
        assert_eq!(Some(10), thing.size);
        assert_eq!(200, thing.server_response.status_code);
        assert_eq!(Some("\"v1\""), thing.server_response.etag());
    }

    struct Options(CallOptions);

    impl Call for Options {
        fn options_mut(&mut self) -> &mut CallOptions {
            &mut self.0
        }
    }

    #[tokio::test]
    async fn test_not_modified() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v1/things/a"),
                request::headers(contains(("if-none-match", "\"v1\""))),
            ])
            .respond_with(status_code(304).append_header("etag", "\"v1\"")),
        );
        let client = create_client(&server, None);
        let mut options = CallOptions::default();
        options.set_if_none_match("\"v1\"");
        let builder = client
            .request(Method::GET, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        let err = client.send::<Thing>(builder, &options).await.unwrap_err();
        assert!(err.is_not_modified());
        match err {
            Error::NotModified(response) => {
                assert_eq!(304, response.status_code);
                assert_eq!(Some("\"v1\""), response.etag());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/api/v1/things/a")).respond_with(
                status_code(500).body(
                    json!({"error": {"code": 500, "message": "backend error", "status": "INTERNAL"}}).to_string(),
                ),
            ),
        );
        let client = create_client(&server, None);
        let options = CallOptions::default();
        let builder = client
            .request(Method::DELETE, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        let err = client.send::<Empty>(builder, &options).await.unwrap_err();
        assert!(!err.is_not_modified());
        assert_eq!(Some(500), err.http_status_code());
        match err {
            Error::Response(e) => {
                assert_eq!("backend error", e.message);
                assert_eq!(Some("INTERNAL".to_string()), e.status);
                assert!(e.body.contains("backend error"));
                assert!(e.is_retriable());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_response_without_code() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v1/things/a")).respond_with(
                status_code(403).body(
                    json!({"error": {"message": "The caller does not have permission", "status": "PERMISSION_DENIED"}})
                        .to_string(),
                ),
            ),
        );
        let client = create_client(&server, None);
        let options = CallOptions::default();
        let builder = client
            .request(Method::GET, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        match client.send::<Thing>(builder, &options).await.unwrap_err() {
            Error::Response(e) => {
                assert_eq!(403, e.code);
                assert_eq!("The caller does not have permission", e.message);
                assert_eq!(Some("PERMISSION_DENIED".to_string()), e.status);
                assert!(!e.is_retriable());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v1/things/a"))
                .respond_with(status_code(502).body("<html>bad gateway</html>")),
        );
        let client = create_client(&server, None);
        let options = CallOptions::default();
        let builder = client
            .request(Method::GET, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        match client.send::<Thing>(builder, &options).await.unwrap_err() {
            Error::Response(e) => {
                assert_eq!(502, e.code);
                assert_eq!("<html>bad gateway</html>", e.body);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancelled() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v1/things/a"))
                .times(0..=1)
                .respond_with(delay_and_then(std::time::Duration::from_secs(5), status_code(200))),
        );
        let client = create_client(&server, None);
        let token = crate::cancel::CancellationToken::new();
        let options = Options(CallOptions::default()).with_cancellation(token.clone()).0;
        token.cancel();
        let builder = client
            .request(Method::GET, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        let err = client.send::<Thing>(builder, &options).await.unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[tokio::test]
    async fn test_send_bytes() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v1/things/a"),
                request::query(url_decoded(contains(("alt", "media")))),
            ])
            .respond_with(status_code(200).body("a,b\n1,2\n")),
        );
        let client = create_client(&server, None);
        let mut options = CallOptions::default();
        options.set_media();
        let builder = client
            .request(Method::GET, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        let bytes = client.send_bytes(builder, &options).await.unwrap();
        assert_eq!(b"a,b\n1,2\n".to_vec(), bytes);
    }

    #[tokio::test]
    async fn test_cancelled_while_reading_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Headers arrive at once but the body stalls after a few bytes.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let stalled = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nabc")
                .await
                .unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        });

        let http = reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build();
        let client = ApiClient::new(None, &format!("http://{addr}/api/v1/"), http, "test-agent", false);
        let token = crate::cancel::CancellationToken::new();
        let mut options = Options(CallOptions::default()).with_cancellation(token.clone()).0;
        options.set_media();
        let builder = client
            .request(Method::GET, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            token.cancel();
        });
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), client.send_bytes(builder, &options))
            .await
            .expect("body read was not cancelled");
        assert!(matches!(result, Err(Error::Cancelled)));
        stalled.abort();
    }

    #[tokio::test]
    async fn test_no_content() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/api/v1/things/a")).respond_with(status_code(204)),
        );
        let client = create_client(&server, None);
        let options = CallOptions::default();
        let builder = client
            .request(Method::DELETE, "things/{name}", &[("name", "a")], &options)
            .unwrap();
        let empty = client.send::<Empty>(builder, &options).await.unwrap();
        assert_eq!(204, empty.server_response.status_code);
    }
}
