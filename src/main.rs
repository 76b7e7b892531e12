use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use veredicto::{config::Config, gateway};

/// Judicial credit-purchase verifier HTTP service.
#[derive(Parser, Debug)]
#[command(name = "veredicto", version, about)]
struct Cli {
    /// Address to bind the gateway to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    if !config.has_credential() {
        tracing::warn!("OPENAI_API_KEY not set — verification requests will fail until it is");
    }
    tracing::info!(
        env = %config.env,
        model = %config.llm_model_name,
        prompt_version = %config.prompt_version,
        "starting veredicto"
    );

    gateway::run_gateway(&cli.host, cli.port, config).await
}
