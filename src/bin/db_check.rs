//! Connectivity check for the rental database.
//!
//! Connects, lists collections, creates a `placeholder` collection when the
//! database is empty, then disconnects. Exits 0 when every step succeeds and
//! 1 otherwise, logging the failing stage with full detail.

use log::{error, info};

use car_rental::config::Config;
use car_rental::probe;

#[tokio::main]
async fn main() {
    env_logger::init();

    dotenv::dotenv().ok();

    let config = Config::from_env();
    info!("probing database at {}", config.database_url);

    match probe::run(&config).await {
        Ok(report) => {
            if report.created_placeholder {
                info!(
                    "no collections found, created '{}'",
                    probe::PLACEHOLDER_COLLECTION
                );
            } else {
                info!(
                    "found {} collection(s): {}",
                    report.collections.len(),
                    report.collections.join(", ")
                );
            }
            info!("database check passed");
        }
        Err(e) => {
            error!("database check failed: {}", e);
            std::process::exit(1);
        }
    }
}
