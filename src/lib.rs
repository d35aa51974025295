pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{endpoint::Endpoint, http::ApiClient};
pub use config::{resolve_base_url, ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use core::round::{PickStrategy, RoundEngine, RoundReport};
pub use domain::model::{
    GameSetup, Graph, MlPrediction, NodeId, NodeSuggestion, PredictionRequest, SimulationOutcome,
    SimulationRequest,
};
pub use domain::ports::GameBackend;
pub use utils::error::{ClientError, Result};
