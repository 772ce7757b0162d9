use anyhow::Context;

/// The configuration parameters for the application.
///
/// Pulled from environment variables; there is nothing to configure beyond
/// the storage location and the listen port.
pub struct Config {
    /// The connection URL for the SQLite database this application should use.
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;

        Ok(Config { database_url, port })
    }
}
