use crate::domain::model::{GameSetup, MlPrediction, NodeId, SimulationOutcome};
use crate::domain::ports::GameBackend;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// How the player picks the nodes to firewall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickStrategy {
    /// Firewall exactly these nodes.
    Manual(Vec<NodeId>),
    /// Firewall whatever the model suggested.
    FollowModel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub setup: GameSetup,
    pub suggestion: MlPrediction,
    pub user_picks: Vec<NodeId>,
    pub outcome: SimulationOutcome,
}

/// Plays one round: new game, model suggestion, then the simulation scored
/// against the model's picks.
pub struct RoundEngine<B: GameBackend> {
    backend: B,
    suggestion_count: usize,
}

impl<B: GameBackend> RoundEngine<B> {
    pub fn new(backend: B, suggestion_count: usize) -> Self {
        Self {
            backend,
            suggestion_count,
        }
    }

    pub async fn play(&self, strategy: PickStrategy) -> Result<RoundReport> {
        tracing::info!("Starting a new game");
        let setup = self.backend.new_game().await?;
        tracing::info!(
            "Game ready: {} nodes, {} links, source {} -> target {}",
            setup.graph.node_count(),
            setup.graph.link_count(),
            setup.source,
            setup.target
        );

        let suggestion = self
            .backend
            .predict(&setup.prediction_request(self.suggestion_count))
            .await?;
        let ml_picks = suggestion.node_ids();
        tracing::info!("Model suggests firewalling {:?}", ml_picks);

        let user_picks = match strategy {
            PickStrategy::Manual(nodes) => nodes,
            PickStrategy::FollowModel => ml_picks.clone(),
        };

        let request = setup
            .simulation_request(user_picks.clone())
            .with_ml_picks(ml_picks);
        let outcome = self.backend.simulate(&request).await?;
        tracing::info!(
            "Simulation finished, target status: {}",
            outcome.target_status().unwrap_or("unknown")
        );

        Ok(RoundReport {
            setup,
            suggestion,
            user_picks,
            outcome,
        })
    }
}
