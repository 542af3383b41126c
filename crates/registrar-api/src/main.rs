use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use registrar_api::{
    bootstrap::{ensure_admin, BOOTSTRAP_PASSWORD_ENV},
    demo::seed_demo,
    ApiServer, AppState,
};
use registrar_config::{AppConfig, ConfigManager, ConfigManagerTrait, LogFormat};
use registrar_domain::{Clock, SystemClock};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "registrar-api")]
#[command(about = "Course registration API server")]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,

    /// Seed demo accounts, a semester and courses at startup
    #[arg(long)]
    seed_demo: bool,

    /// Create this admin on first start (password from REGISTRAR_BOOTSTRAP_PASSWORD)
    #[arg(long, value_name = "USERNAME")]
    bootstrap_admin: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let mut config = manager
        .load_config()
        .with_context(|| format!("loading {}", manager.config_path().display()))?;
    apply_overrides(&mut config, &cli);
    manager.validate_config(&config)?;

    init_tracing(&config);
    tracing::info!(config = %manager.config_path().display(), "configuration loaded");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = AppState::in_memory(clock.clone(), config.auth.bcrypt_cost);

    if config.demo.seed {
        seed_demo(&state, clock.now()).await?;
    }
    if let Some(username) = &config.auth.bootstrap_admin {
        let password = std::env::var(BOOTSTRAP_PASSWORD_ENV).with_context(|| {
            format!("{BOOTSTRAP_PASSWORD_ENV} must be set to bootstrap admin {username}")
        })?;
        ensure_admin(&state, username, &password).await?;
    }

    ApiServer::new(state, config.server.bind_address()).run().await
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = LogFormat::Json;
    }
    if cli.seed_demo {
        config.demo.seed = true;
    }
    if let Some(username) = &cli.bootstrap_admin {
        config.auth.bootstrap_admin = Some(username.clone());
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
    }
}
