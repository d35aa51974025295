use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type NodeId = i64;

/// Number of suggestions asked from the model when the caller does not say.
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

/// A node-link graph document as produced by the backend.
///
/// The document is carried verbatim so that whatever the caller hands in is
/// exactly what goes over the wire. The accessors only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph(Value);

impl Graph {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Ids of the entries under `nodes` that carry an integer `id`.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.0
            .get("nodes")
            .and_then(Value::as_array)
            .map(|nodes| {
                nodes
                    .iter()
                    .filter_map(|node| node.get("id").and_then(Value::as_i64))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.array_len("nodes")
    }

    pub fn link_count(&self) -> usize {
        self.array_len("links")
    }

    fn array_len(&self, key: &str) -> usize {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

impl From<Value> for Graph {
    fn from(document: Value) -> Self {
        Self(document)
    }
}

/// Body of `POST /api/game/simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub graph: Graph,
    pub source: NodeId,
    pub target: NodeId,
    /// Nodes the player chose to firewall.
    pub user_picks: Vec<NodeId>,
    /// The model's picks, used by the backend to score the player against it.
    #[serde(default)]
    pub ml_picks: Vec<NodeId>,
}

impl SimulationRequest {
    pub fn new(graph: Graph, source: NodeId, target: NodeId, user_picks: Vec<NodeId>) -> Self {
        Self {
            graph,
            source,
            target,
            user_picks,
            ml_picks: Vec::new(),
        }
    }

    pub fn with_ml_picks(mut self, ml_picks: Vec<NodeId>) -> Self {
        self.ml_picks = ml_picks;
        self
    }
}

/// Body of `POST /api/ml/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub graph: Graph,
    pub source: NodeId,
    pub target: NodeId,
    pub k: usize,
}

impl PredictionRequest {
    pub fn new(graph: Graph, source: NodeId, target: NodeId) -> Self {
        Self {
            graph,
            source,
            target,
            k: DEFAULT_SUGGESTION_COUNT,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

/// Reply of `POST /api/game/new_game`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSetup {
    pub graph: Graph,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameSetup {
    pub fn simulation_request(&self, user_picks: Vec<NodeId>) -> SimulationRequest {
        SimulationRequest::new(self.graph.clone(), self.source, self.target, user_picks)
    }

    pub fn prediction_request(&self, k: usize) -> PredictionRequest {
        PredictionRequest::new(self.graph.clone(), self.source, self.target).with_k(k)
    }
}

/// Reply of `POST /api/game/simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub simulation: Value,
    pub scoring: Value,
}

impl SimulationOutcome {
    /// `target_status` reported by the simulation, e.g. `"SAFE"` or `"INFECTED"`.
    pub fn target_status(&self) -> Option<&str> {
        self.simulation.get("target_status").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSuggestion {
    pub node_id: NodeId,
    pub probability: f64,
}

/// Reply of `POST /api/ml/predict`, ordered by descending probability.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MlPrediction {
    pub predictions: Vec<NodeSuggestion>,
}

impl MlPrediction {
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.predictions.iter().map(|p| p.node_id).collect()
    }
}
