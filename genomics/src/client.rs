use std::sync::Arc;

use google_cloud_gax::http::ApiClient;
use token_source::TokenSourceProvider;

use crate::http::datasets_client::DatasetsClient;
use crate::http::operations_client::OperationsClient;
use crate::http::read_group_sets_client::ReadGroupSetsClient;
use crate::http::variants_client::VariantsClient;

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
            endpoint: "https://genomics.googleapis.com".to_string(),
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
    datasets_client: DatasetsClient,
    variants_client: VariantsClient,
    read_group_sets_client: ReadGroupSetsClient,
    operations_client: OperationsClient,
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
            "google-cloud-genomics",
            config.debug,
        ));
        Self {
            datasets_client: DatasetsClient::new(inner.clone()),
            variants_client: VariantsClient::new(inner.clone()),
            read_group_sets_client: ReadGroupSetsClient::new(inner.clone()),
            operations_client: OperationsClient::new(inner),
            project_id: config.project_id,
        }
    }

    /// The project found in the credentials, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn datasets(&self) -> &DatasetsClient {
        &self.datasets_client
    }

    pub fn variants(&self) -> &VariantsClient {
        &self.variants_client
    }

    pub fn read_group_sets(&self) -> &ReadGroupSetsClient {
        &self.read_group_sets_client
    }

    pub fn operations(&self) -> &OperationsClient {
        &self.operations_client
    }
}

#[cfg(test)]
pub(crate) mod test {
    use httptest::Server;

    use crate::client::{Client, ClientConfig};

    #[ctor::ctor]
    fn init() {
        let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
            .add_directive("gcloud_genomics=trace".parse().unwrap())
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
