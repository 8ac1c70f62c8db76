use std::sync::Arc;

use google_cloud_gax::http::ApiClient;
use token_source::TokenSourceProvider;

use crate::http::files_client::FilesClient;
use crate::http::report_files_client::ReportFilesClient;
use crate::http::reports_client::ReportsClient;
use crate::http::user_profiles_client::UserProfilesClient;

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
            endpoint: "https://dfareporting.googleapis.com/dfareporting/v4".to_string(),
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
    user_profiles_client: UserProfilesClient,
    reports_client: ReportsClient,
    report_files_client: ReportFilesClient,
    files_client: FilesClient,
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
            "google-cloud-dfareporting",
            config.debug,
        ));
        Self {
            user_profiles_client: UserProfilesClient::new(inner.clone()),
            reports_client: ReportsClient::new(inner.clone()),
            report_files_client: ReportFilesClient::new(inner.clone()),
            files_client: FilesClient::new(inner),
            project_id: config.project_id,
        }
    }

    /// The project found in the credentials, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn user_profiles(&self) -> &UserProfilesClient {
        &self.user_profiles_client
    }

    pub fn reports(&self) -> &ReportsClient {
        &self.reports_client
    }

    /// Files generated by one report.
    pub fn report_files(&self) -> &ReportFilesClient {
        &self.report_files_client
    }

    pub fn files(&self) -> &FilesClient {
        &self.files_client
    }
}

#[cfg(test)]
pub(crate) mod test {
    use httptest::Server;

    use crate::client::{Client, ClientConfig};

    #[ctor::ctor]
    fn init() {
        let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
            .add_directive("gcloud_dfareporting=trace".parse().unwrap())
            .add_directive("gcloud_gax=trace".parse().unwrap());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    pub fn create_client(server: &Server) -> Client {
        Client::new(ClientConfig {
            endpoint: server.url_str("/dfareporting/v4"),
            debug: true,
            ..Default::default()
        })
    }
}
