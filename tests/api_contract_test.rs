use flow_defence_client::{
    ApiClient, ClientError, Graph, PredictionRequest, SimulationRequest,
};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn sample_graph() -> serde_json::Value {
    json!({
        "directed": false,
        "multigraph": false,
        "graph": {},
        "nodes": [{"id": 0}, {"id": 1}, {"id": 2}, {"id": 3, "kind": "server"}],
        "links": [
            {"source": 0, "target": 1},
            {"source": 1, "target": 2},
            {"source": 2, "target": 3}
        ]
    })
}

#[tokio::test]
async fn test_new_game_posts_to_literal_path() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/game/new_game").body("");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "graph": sample_graph(),
                "source": 0,
                "target": 3
            }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let game = client.new_game().await.unwrap();

    api_mock.assert();
    assert_eq!(game.source, 0);
    assert_eq!(game.target, 3);
    assert_eq!(game.graph.node_count(), 4);
    assert!(game.extra.is_empty());
}

#[tokio::test]
async fn test_simulate_sends_payload_unchanged() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/game/simulate")
            .json_body(json!({
                "graph": sample_graph(),
                "source": 0,
                "target": 3,
                "user_picks": [2],
                "ml_picks": []
            }));
        then.status(200).json_body(json!({
            "simulation": {"target_status": "SAFE", "infected_nodes": [0, 1]},
            "scoring": {"score": 100}
        }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let request = SimulationRequest::new(Graph::new(sample_graph()), 0, 3, vec![2]);
    let outcome = client.simulate(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(outcome.target_status(), Some("SAFE"));
    assert_eq!(outcome.scoring["score"], json!(100));
}

#[tokio::test]
async fn test_simulate_includes_ml_picks_when_given() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/game/simulate").json_body(json!({
            "graph": sample_graph(),
            "source": 0,
            "target": 3,
            "user_picks": [1],
            "ml_picks": [2, 1]
        }));
        then.status(200).json_body(json!({
            "simulation": {"target_status": "SAFE"},
            "scoring": {}
        }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let request =
        SimulationRequest::new(Graph::new(sample_graph()), 0, 3, vec![1]).with_ml_picks(vec![2, 1]);
    client.simulate(&request).await.unwrap();

    api_mock.assert();
}

#[tokio::test]
async fn test_predict_defaults_to_five_suggestions() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/ml/predict").json_body(json!({
            "graph": sample_graph(),
            "source": 0,
            "target": 3,
            "k": 5
        }));
        then.status(200).json_body(json!({
            "predictions": [
                {"node_id": 2, "probability": 0.873},
                {"node_id": 1, "probability": 0.412}
            ]
        }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let request = PredictionRequest::new(Graph::new(sample_graph()), 0, 3);
    let prediction = client.predict(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(prediction.node_ids(), vec![2, 1]);
    assert!((prediction.predictions[0].probability - 0.873).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/ml/predict");
        then.status(200).json_body(json!({"predictions": []}));
    });

    let client = ApiClient::new(format!("{}/", server.base_url())).unwrap();
    let request = PredictionRequest::new(Graph::new(sample_graph()), 0, 3).with_k(2);
    let prediction = client.predict(&request).await.unwrap();

    api_mock.assert();
    assert!(prediction.predictions.is_empty());
}

#[tokio::test]
async fn test_non_success_status_surfaces_as_http_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/ml/predict");
        then.status(500)
            .json_body(json!({"detail": "ML model is not loaded."}));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let request = PredictionRequest::new(Graph::new(sample_graph()), 0, 3);
    let err = client.predict(&request).await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, ClientError::ApiError(_)));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn test_requests_are_not_retried() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/game/new_game");
        then.status(503);
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    assert!(client.new_game().await.is_err());

    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_timeout_is_reported_without_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/game/new_game");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!({"graph": {}, "source": 0, "target": 1}));
    });

    let client = ApiClient::builder(server.base_url())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = client.new_game().await.unwrap_err();

    assert!(err.status().is_none());
    match err {
        ClientError::ApiError(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_reply_shape_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/game/new_game");
        then.status(200).json_body(json!({"message": "welcome"}));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let err = client.new_game().await.unwrap_err();

    match err {
        ClientError::ApiError(e) => assert!(e.is_decode()),
        other => panic!("unexpected error: {:?}", other),
    }
}
