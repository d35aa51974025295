use crate::domain::model::{GameSetup, MlPrediction, PredictionRequest, SimulationOutcome, SimulationRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The remote game service: graph generation, infection simulation and the
/// critical-node model.
#[async_trait]
pub trait GameBackend: Send + Sync {
    async fn new_game(&self) -> Result<GameSetup>;
    async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationOutcome>;
    async fn predict(&self, request: &PredictionRequest) -> Result<MlPrediction>;
}
