//! OpenAI edge proxy.
//!
//! ```text
//!                         ┌───────────────────────────────────────────┐
//!     Browser             │               EDGE PROXY                  │
//!     ──── POST ─────────▶│  method gate → x-proxy-token → API key    │
//!                         │        → JSON parse → forward ────────────┼──▶ Upstream API
//!     ◀─── relay + CORS ──│◀──────────── status/body/type ────────────┼─── (bearer key)
//!                         └───────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use openai_edge_proxy::config::{
    load_config, validate_config, Credentials, ErrorFormat, LogFormat, ProxyConfig, UpstreamApi,
};
use openai_edge_proxy::error::ConfigError;
use openai_edge_proxy::observability::logging;
use openai_edge_proxy::security::presence;
use openai_edge_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "openai-edge-proxy", version)]
#[command(about = "Forwards browser requests to an OpenAI endpoint with a server-held API key", long_about = None)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Upstream API preset.
    #[arg(long, value_enum)]
    api: Option<UpstreamApi>,

    /// Explicit upstream URL; overrides --api.
    #[arg(long)]
    upstream_url: Option<String>,

    /// Body format for errors raised before forwarding.
    #[arg(long, value_enum)]
    error_format: Option<ErrorFormat>,

    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn apply(self, config: &mut ProxyConfig) {
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(api) = self.api {
            config.upstream.api = api;
        }
        if let Some(url) = self.upstream_url {
            config.upstream.url = Some(url);
        }
        if let Some(format) = self.error_format {
            config.handler.error_format = format;
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    cli.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    config.credentials = Credentials::from_env();

    logging::init(&config.observability);

    tracing::info!("openai-edge-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.endpoint(),
        shared_token = presence(config.credentials.shared_token.is_some()),
        api_key = presence(config.credentials.api_key.is_some()),
        "Configuration loaded"
    );
    if config.credentials.shared_token.is_none() {
        tracing::warn!("PROXY_SHARED_TOKEN not set; accepting requests without a token");
    }
    if config.credentials.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; POST requests will fail with 500");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
