/// Backend routes this client talks to. All of them are POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Generate a fresh graph with a source and a target node.
    NewGame,
    /// Run the infection simulation against the player's firewalls.
    Simulate,
    /// Ask the model for the nodes most worth firewalling.
    Predict,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::NewGame => "/api/game/new_game",
            Self::Simulate => "/api/game/simulate",
            Self::Predict => "/api/ml/predict",
        }
    }

    /// Joins the route onto a base URL, tolerating a trailing slash.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_paths() {
        assert_eq!(Endpoint::NewGame.path(), "/api/game/new_game");
        assert_eq!(Endpoint::Simulate.path(), "/api/game/simulate");
        assert_eq!(Endpoint::Predict.path(), "/api/ml/predict");
    }

    #[test]
    fn test_url_joining() {
        assert_eq!(
            Endpoint::Predict.url("http://localhost:8000"),
            "http://localhost:8000/api/ml/predict"
        );
        assert_eq!(
            Endpoint::NewGame.url("https://game.example.com/"),
            "https://game.example.com/api/game/new_game"
        );
        assert_eq!(
            Endpoint::Simulate.url("http://proxy.local/defence"),
            "http://proxy.local/defence/api/game/simulate"
        );
    }
}
