use anyhow::Context;
use kairos::{
    AppState,
    api::routes::create_app,
    cli::{Cli, Commands, config, init, output::Output},
    utils::toml_config::{KairosConfig, LogFormat},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Init {
            path,
            force,
            host,
            port,
            model,
        }) => {
            let result = init::run(
                init::InitConfig {
                    path,
                    force,
                    host,
                    port,
                    model,
                },
                &output,
            );
            if let init::InitResult::Error(e) = result {
                anyhow::bail!("init failed: {}", e);
            }
            Ok(())
        }
        Some(Commands::Config { validate }) => {
            if !config::run(&cli.config, validate, &output) && validate {
                std::process::exit(1);
            }
            Ok(())
        }
        None => serve(&cli).await,
    }
}

async fn serve(cli: &Cli) -> anyhow::Result<()> {
    let config = KairosConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    init_tracing(&config, cli.verbose)?;

    let addr = config.bind_address();
    info!(
        model = %config.upstream.model,
        key_env = %config.upstream.api_key_env,
        "Starting Kairos server"
    );
    if !config.credential_present() {
        tracing::warn!(
            "{} is not set; /api/call-gemini will fail until it is",
            config.upstream.api_key_env
        );
    }

    let state = AppState::from_config(config).context("building upstream client")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &KairosConfig, verbose: bool) -> anyhow::Result<()> {
    let directive = filter_directive(
        &config.server.log_level,
        verbose,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let filter = EnvFilter::try_new(directive)?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
    }

    Ok(())
}

/// `--verbose` forces debug over everything; otherwise a non-empty `RUST_LOG`
/// wins over the configured level
fn filter_directive(config_level: &str, verbose: bool, rust_log: Option<String>) -> String {
    let crate_directive =
        |level: &str| format!("kairos={0},kairos_server={0},tower_http={0}", level);

    if verbose {
        return crate_directive("debug");
    }
    match rust_log {
        Some(env) if !env.trim().is_empty() => env,
        _ => crate_directive(config_level),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
