use crate::config::toml_config::FileConfig;
use crate::config::ClientConfig;
use crate::domain::model::NodeId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "flow-defence")]
#[command(about = "Command-line client for the network flow defence game backend")]
pub struct CliConfig {
    /// Backend base URL (overrides the config file and FLOW_DEFENCE_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start a new game and print its graph, source and target
    NewGame {
        /// Also write the game to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the infection simulation for a saved game
    Simulate {
        /// Game file produced by `new-game`
        #[arg(long)]
        game: PathBuf,

        /// Nodes to firewall
        #[arg(long, value_delimiter = ',')]
        picks: Vec<NodeId>,

        /// Model picks to score against
        #[arg(long, value_delimiter = ',')]
        ml_picks: Vec<NodeId>,
    },
    /// Ask the model which nodes of a saved game to firewall
    Predict {
        #[arg(long)]
        game: PathBuf,

        /// Number of suggestions (defaults to the configured value)
        #[arg(long)]
        k: Option<usize>,
    },
    /// Play a whole round: new game, suggestion, simulation
    Play {
        /// Nodes to firewall; when omitted the model's suggestion is used
        #[arg(long, value_delimiter = ',')]
        picks: Option<Vec<NodeId>>,
    },
}

impl CliConfig {
    pub fn file_config(&self) -> Result<FileConfig> {
        match &self.config {
            Some(path) => FileConfig::from_file(path),
            None => Ok(FileConfig::default()),
        }
    }

    /// Flags first, then the file, then the environment, then defaults.
    pub fn client_config(&self, file: &FileConfig) -> ClientConfig {
        let mut config = file.client_config();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = Some(timeout);
        }
        config
    }
}
