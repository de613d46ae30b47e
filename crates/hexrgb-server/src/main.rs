mod cli;

use hexrgb_common::Result;
use hexrgb_config::HexRgbConfig;
use hexrgb_server::Server;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "hexrgb=info";

fn load_config(args: &cli::Args) -> Result<HexRgbConfig> {
    let mut config = match &args.config {
        Some(path) => hexrgb_config::load_config_from(path)?,
        None => hexrgb_config::load_config()?,
    };

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    Ok(config)
}

async fn run(config: HexRgbConfig) -> Result<()> {
    let server = Server::bind(config.server).await?;

    let addr = server.local_addr()?;
    tracing::info!("hexrgb listening on {}", addr);

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config first: it decides the default log level.
    let config = load_config(&args);

    let log_directive = match (&args.log_level, &config) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => config.logging.directive(),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
