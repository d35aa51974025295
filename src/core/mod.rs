pub mod round;

pub use crate::domain::model::{
    GameSetup, Graph, MlPrediction, NodeId, NodeSuggestion, PredictionRequest, SimulationOutcome,
    SimulationRequest,
};
pub use crate::domain::ports::GameBackend;
pub use crate::utils::error::Result;
