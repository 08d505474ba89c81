use clap::Parser;
use serde::Serialize;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod handlers;
pub mod profile;
pub mod state;


use self::cli::{Cli, Command};
use self::state::AppState;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Command::InitConfig { path } = &cli.command {
        let path = profile::init_config(path)?;
        return print(&serde_json::json!({ "config": path }), cli.pretty);
    }

    let config = profile::load_config(cli.config.as_deref())?;
    let state = AppState::load(config)?;

    // Shutdown (Ctrl+C)
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown requested");
                cancel.cancel();
            }
        }
    });

    let output = run(&state, cli.command, cancel).await?;
    print(&output, cli.pretty)
}

/// Run one command, returning its JSON output
pub async fn run(
    state: &AppState,
    command: Command,
    cancel: CancellationToken,
) -> anyhow::Result<serde_json::Value> {
    let output = match command {
        Command::Search { query, sources } => {
            serde_json::to_value(handlers::handle_search(state, &query, sources.as_deref()).await?)?
        }
        Command::Related { id } => serde_json::to_value(handlers::handle_related(state, id).await?)?,
        Command::Root { word } => serde_json::to_value(handlers::handle_root(state, &word))?,
        Command::Synonyms { id } => {
            serde_json::to_value(handlers::handle_synonyms(state, id).await?)?
        }
        Command::Wordnet { query, pos } => serde_json::to_value(
            handlers::handle_wordnet_search(state, &query, pos.as_deref()).await?,
        )?,
        Command::BuildSynonyms => {
            serde_json::to_value(handlers::handle_build_synonyms(state, cancel).await?)?
        }
        Command::InitConfig { path } => {
            serde_json::json!({ "config": profile::init_config(&path)? })
        }
    };
    Ok(output)
}

fn print(value: &impl Serialize, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
