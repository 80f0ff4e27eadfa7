//! Connectivity probe behind the `db_check` binary.
//!
//! The probe walks four steps: connect and ping, list collections, create a
//! placeholder collection when the database is empty, disconnect. A failure
//! anywhere reports the stage it happened in together with the driver error,
//! so a refused connection is distinguishable from, say, missing permissions
//! to create a collection.

use mongodb::bson::doc;
use mongodb::Client;
use std::fmt;

use crate::config::Config;
use crate::database;

/// Collection created when the database is reachable but holds nothing yet.
pub const PLACEHOLDER_COLLECTION: &str = "placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    Connect,
    ListCollections,
    CreateCollection,
}

impl fmt::Display for ProbeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeStage::Connect => "connect",
            ProbeStage::ListCollections => "list collections",
            ProbeStage::CreateCollection => "create collection",
        };
        f.write_str(name)
    }
}

/// A probe failure: which stage broke, and the driver error that broke it.
#[derive(Debug, thiserror::Error)]
#[error("probe failed at stage '{stage}': {source}")]
pub struct ProbeError {
    pub stage: ProbeStage,
    #[source]
    pub source: mongodb::error::Error,
}

#[derive(Debug)]
pub struct ProbeReport {
    /// Collection names present before any placeholder was created.
    pub collections: Vec<String>,
    pub created_placeholder: bool,
}

/// Runs the probe against the configured database. The client is shut down
/// before returning, success or not.
pub async fn run(config: &Config) -> Result<ProbeReport, ProbeError> {
    let client = database::build_client(config).await.map_err(|source| ProbeError {
        stage: ProbeStage::Connect,
        source,
    })?;

    let report = inspect(&client, config).await;
    client.shutdown().await;
    report
}

async fn inspect(client: &Client, config: &Config) -> Result<ProbeReport, ProbeError> {
    let db = client.database(&config.database_name);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|source| ProbeError {
            stage: ProbeStage::Connect,
            source,
        })?;

    let collections = db
        .list_collection_names()
        .await
        .map_err(|source| ProbeError {
            stage: ProbeStage::ListCollections,
            source,
        })?;

    let created_placeholder = collections.is_empty();
    if created_placeholder {
        db.create_collection(PLACEHOLDER_COLLECTION)
            .await
            .map_err(|source| ProbeError {
                stage: ProbeStage::CreateCollection,
                source,
            })?;
    }

    Ok(ProbeReport {
        collections,
        created_placeholder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> Config {
        Config {
            // Discard port, with short timeouts so the test stays quick.
            database_url:
                "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=500&connectTimeoutMS=500"
                    .to_string(),
            database_name: "car_rental_test".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            upload_dir: "public/images/autos".to_string(),
            public_image_prefix: "/images/autos".to_string(),
        }
    }

    #[tokio::test]
    async fn unreachable_database_fails_at_the_connect_stage() {
        let err = run(&unreachable_config())
            .await
            .expect_err("probe against a dead endpoint must fail");
        assert_eq!(err.stage, ProbeStage::Connect);
    }
}
