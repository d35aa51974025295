use crate::adapters::endpoint::Endpoint;
use crate::config::ClientConfig;
use crate::domain::model::{
    GameSetup, MlPrediction, PredictionRequest, SimulationOutcome, SimulationRequest,
};
use crate::domain::ports::GameBackend;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Duration;

static SHARED_CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// HTTP client for the game backend.
///
/// Every call is a single POST. Payloads are serialized as given, replies are
/// decoded as JSON, and transport failures or non-2xx statuses come back as
/// the underlying `reqwest::Error`. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ApiClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        validate_url("base_url", &self.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(ApiClient {
            base_url: self.base_url,
            client: builder.build()?,
        })
    }
}

impl ApiClient {
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            connect_timeout: None,
        }
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self::builder(config.base_url.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(seconds) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(seconds));
        }
        builder.build()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env())
    }

    /// Process-wide client, configured from the environment on first use.
    ///
    /// Later calls return the same instance; the environment is not re-read.
    pub fn shared() -> Result<&'static ApiClient> {
        if let Some(client) = SHARED_CLIENT.get() {
            return Ok(client);
        }

        let client = Self::from_env()?;
        tracing::debug!("Initialized shared API client for {}", client.base_url);
        Ok(SHARED_CLIENT.get_or_init(|| client))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` (or nothing) to `endpoint` and decodes the JSON reply.
    pub async fn post_json<B, R>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = endpoint.url(&self.base_url);
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!("{} responded with {}", endpoint.path(), response.status());

        let response = response.error_for_status()?;
        Ok(response.json::<R>().await?)
    }

    pub async fn new_game(&self) -> Result<GameSetup> {
        self.post_json::<(), _>(Endpoint::NewGame, None).await
    }

    pub async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationOutcome> {
        self.post_json(Endpoint::Simulate, Some(request)).await
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<MlPrediction> {
        self.post_json(Endpoint::Predict, Some(request)).await
    }
}

#[async_trait::async_trait]
impl GameBackend for ApiClient {
    async fn new_game(&self) -> Result<GameSetup> {
        ApiClient::new_game(self).await
    }

    async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationOutcome> {
        ApiClient::simulate(self, request).await
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<MlPrediction> {
        ApiClient::predict(self, request).await
    }
}
