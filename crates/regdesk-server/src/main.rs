//! Registration server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::{info, warn};

use regdesk_server::logging::{LogConfig, LogFormat, init_logging};
use regdesk_server::{AppState, build_router};
use regdesk_submit::{HostedStoreClient, SchemaStore, StoreConfig};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "regdesk-server", about = "Tournament registration endpoint")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Log output format.
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatArg,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        ..LogConfig::default()
    });

    let state = match StoreConfig::from_env() {
        Ok(config) => {
            let store: Arc<dyn SchemaStore> =
                Arc::new(HostedStoreClient::new(config).context("build store client")?);
            AppState::new(store)
        }
        Err(error) => {
            warn!(%error, "store not configured; submissions will be rejected");
            AppState::unconfigured()
        }
    };

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("parse bind address")?;
    info!(%addr, "listening");
    axum::Server::bind(&addr)
        .serve(build_router(state).into_make_service())
        .await
        .context("serve")?;
    Ok(())
}
