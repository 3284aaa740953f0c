//! HTTP adapter for the OpenSpace organizer.
//!
//! The room is an explicitly shared handle rather than process-global
//! state: every mutating route takes the write lock, queries take the read
//! lock, so reads may run concurrently but never against a mutation.

mod routes;

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use clap::Parser;

use openspace_logic::Openspace;

/// The room handle shared across request handlers.
pub type SharedRoom = Arc<RwLock<Openspace>>;

#[derive(Debug, Parser)]
#[command(name = "openspace-server", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Initial number of tables.
    #[arg(long, default_value_t = 6)]
    tables: usize,

    /// Seats per initial table.
    #[arg(long, default_value_t = 4)]
    seats_per_table: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openspace_server=info".into()),
        )
        .init();

    let cli = Cli::parse();
    if cli.seats_per_table == 0 || cli.tables == 0 {
        return Err("tables and seats-per-table must be at least 1".into());
    }

    let room: SharedRoom = Arc::new(RwLock::new(Openspace::new(
        cli.tables,
        cli.seats_per_table,
    )));
    let app = routes::router(room);

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    tracing::info!("openspace-server listening on {}", cli.listen);
    axum::serve(listener, app).await?;
    Ok(())
}
