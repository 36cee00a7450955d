use clap::Parser as _;
use profiler_mcp_server::config::{Args, LogFormat};
use profiler_mcp_server::server::{self, RelayServer};
use tracing_subscriber::EnvFilter;

fn init_tracing(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))?;

    match args.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let server = RelayServer::new(args.upstream_config());
    server::run(args.bind, server).await?;
    Ok(())
}
