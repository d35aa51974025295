use clap::Parser;
use flow_defence_client::config::cli::Command;
use flow_defence_client::utils::error::ErrorSeverity;
use flow_defence_client::utils::{logger, validation::Validate};
use flow_defence_client::{
    ApiClient, CliConfig, ClientError, GameSetup, PickStrategy, Result, RoundEngine,
};
use serde::Serialize;
use std::path::Path;

fn read_game(path: &Path) -> Result<GameSetup> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: CliConfig) -> Result<()> {
    let file = cli.file_config()?;
    file.validate()?;

    let config = cli.client_config(&file);
    let client = ApiClient::from_config(&config)?;
    tracing::debug!("Using backend at {}", client.base_url());

    match cli.command {
        Command::NewGame { output } => {
            let game = client.new_game().await?;
            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&game)?)?;
                tracing::info!("Game saved to {}", path.display());
            }
            print_json(&game)
        }
        Command::Simulate {
            game,
            picks,
            ml_picks,
        } => {
            let setup = read_game(&game)?;
            let request = setup.simulation_request(picks).with_ml_picks(ml_picks);
            print_json(&client.simulate(&request).await?)
        }
        Command::Predict { game, k } => {
            let setup = read_game(&game)?;
            let request = setup.prediction_request(k.unwrap_or(config.suggestion_count));
            print_json(&client.predict(&request).await?)
        }
        Command::Play { picks } => {
            let strategy = match picks {
                Some(nodes) => PickStrategy::Manual(nodes),
                None => PickStrategy::FollowModel,
            };
            let engine = RoundEngine::new(client, config.suggestion_count);
            print_json(&engine.play(strategy).await?)
        }
    }
}

fn exit_code(error: &ClientError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 日誌設定: 旗標優先，其次是設定檔
    let file_logging = cli.file_config().ok();
    let level = file_logging.as_ref().and_then(|f| f.valid_log_level().map(str::to_owned));
    let json_logs = cli.json_logs || file_logging.as_ref().is_some_and(|f| f.json_logs());
    if json_logs {
        logger::init_json_logger(cli.verbose, level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, level.as_deref());
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
