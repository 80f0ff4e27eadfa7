use std::env;

/// MongoDB endpoint used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "mongodb://127.0.0.1:27017";

/// Database name used when `DATABASE_NAME` is unset.
pub const DEFAULT_DATABASE_NAME: &str = "car_rental";

/// Listen address used when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Vehicle images are written below this directory.
pub const UPLOAD_DIR: &str = "public/images/autos";

/// Browser-facing path prefix that maps onto [`UPLOAD_DIR`].
pub const PUBLIC_IMAGE_PREFIX: &str = "/images/autos";

/// Process configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub bind_addr: String,
    pub upload_dir: String,
    pub public_image_prefix: String,
}

impl Config {
    /// Builds the configuration from the environment, falling back to the
    /// local defaults above for anything unset.
    pub fn from_env() -> Self {
        Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            upload_dir: UPLOAD_DIR.to_string(),
            public_image_prefix: PUBLIC_IMAGE_PREFIX.to_string(),
        }
    }
}
