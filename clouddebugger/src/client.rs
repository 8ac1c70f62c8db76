use std::sync::Arc;

use google_cloud_gax::http::ApiClient;
use token_source::TokenSourceProvider;

use crate::http::breakpoints_client::BreakpointsClient;
use crate::http::controller_client::ControllerClient;
use crate::http::debuggees_client::DebuggeesClient;

#[derive(Debug)]
pub struct ClientConfig {
    pub http: Option<reqwest_middleware::ClientWithMiddleware>,
    pub endpoint: String,
    pub token_source_provider: Option<Box<dyn TokenSourceProvider>>,
    pub project_id: Option<String>,
    /// Logs every response body.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http: None,
            endpoint: "https://clouddebugger.googleapis.com".to_string(),
            token_source_provider: None,
            project_id: None,
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn anonymous(mut self) -> Self {
        self.token_source_provider = None;
        self
    }
}

#[cfg(feature = "auth")]
pub use google_cloud_auth;

#[cfg(feature = "auth")]
impl ClientConfig {
    pub async fn with_auth(self) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new(Self::auth_config()).await?;
        Ok(self.with_token_source(ts))
    }

    pub async fn with_credentials(
        self,
        credentials: google_cloud_auth::credentials::CredentialsFile,
    ) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
            Self::auth_config(),
            Box::new(credentials),
        )
        .await?;
        Ok(self.with_token_source(ts))
    }

    fn with_token_source(mut self, ts: google_cloud_auth::token::DefaultTokenSourceProvider) -> Self {
        self.project_id = ts.project_id.clone();
        self.token_source_provider = Some(Box::new(ts));
        self
    }

    fn auth_config() -> google_cloud_auth::project::Config<'static> {
        google_cloud_auth::project::Config::default().with_scopes(&crate::http::SCOPES)
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    debuggees_client: DebuggeesClient,
    breakpoints_client: BreakpointsClient,
    controller_client: ControllerClient,
    project_id: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl Client {
    /// New client
    pub fn new(config: ClientConfig) -> Self {
        let ts = match config.token_source_provider {
            Some(tsp) => Some(tsp.token_source()),
            None => {
                tracing::trace!("Use anonymous access due to lack of token");
                None
            }
        };
        let http = config
            .http
            .unwrap_or_else(|| reqwest_middleware::ClientBuilder::new(reqwest::Client::default()).build());
        let inner = Arc::new(ApiClient::new(
            ts,
            config.endpoint.as_str(),
            http,
            "google-cloud-clouddebugger",
            config.debug,
        ));
        Self {
            debuggees_client: DebuggeesClient::new(inner.clone()),
            breakpoints_client: BreakpointsClient::new(inner.clone()),
            controller_client: ControllerClient::new(inner),
            project_id: config.project_id,
        }
    }

    /// The project found in the credentials, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Debuggees as seen by debugger clients.
    pub fn debuggees(&self) -> &DebuggeesClient {
        &self.debuggees_client
    }

    /// Breakpoints of a debuggee as seen by debugger clients.
    pub fn breakpoints(&self) -> &BreakpointsClient {
        &self.breakpoints_client
    }

    /// The API used by debug agents.
    pub fn controller(&self) -> &ControllerClient {
        &self.controller_client
    }
}

#[cfg(test)]
pub(crate) mod test {
    use httptest::Server;

    use crate::client::{Client, ClientConfig};

    #[ctor::ctor]
    fn init() {
        let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
            .add_directive("gcloud_clouddebugger=trace".parse().unwrap())
            .add_directive("gcloud_gax=trace".parse().unwrap());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    pub fn create_client(server: &Server) -> Client {
        Client::new(ClientConfig {
            endpoint: server.url_str(""),
            debug: true,
            ..Default::default()
        })
    }
}
