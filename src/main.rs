//! HTTP server for the Event Logistics Engine.

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;

use logistics_engine::api::{AppState, create_router};
use logistics_engine::config::ConfigLoader;

/// Event Logistics Server - per-diem, hotel and trip calculations over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding engine.yaml and locations.yaml
    #[arg(short, long, default_value = "./config/default")]
    config: String,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ConfigLoader::load(&args.config)?;
    let rules = config.rules();
    info!(
        config_dir = %args.config,
        rules_name = %config.metadata().name,
        rules_version = %config.metadata().version,
        crew_car_capacity = rules.vehicles.crew_car_capacity,
        labour_van_capacity = rules.vehicles.labour_van_capacity,
        outside_trips_per_frame = rules.outside_trips_per_frame,
        "Loaded configuration"
    );

    let app = create_router(AppState::new(config));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
