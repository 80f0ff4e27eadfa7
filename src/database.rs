use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;

use crate::config::Config;

/// Upper bound on server selection so an unreachable database fails fast
/// instead of hanging for the driver's 30 second default. A timeout given in
/// the connection string takes precedence.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds a client from the configured connection string.
pub async fn build_client(config: &Config) -> mongodb::error::Result<Client> {
    let mut options = ClientOptions::parse(&config.database_url).await?;
    if options.server_selection_timeout.is_none() {
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    }
    Client::with_options(options)
}

/// Connects and pings the configured database so a dead backend is caught at
/// startup rather than on the first request.
pub async fn connect(config: &Config) -> mongodb::error::Result<Database> {
    let client = build_client(config).await?;
    let db = client.database(&config.database_name);
    db.run_command(doc! { "ping": 1 }).await?;

    info!(
        "connected to database '{}' at {}",
        config.database_name, config.database_url
    );
    Ok(db)
}
