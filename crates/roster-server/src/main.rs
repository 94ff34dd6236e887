use roster_server::config::ServerConfig;
use anyhow::{Result, Context};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment variables
    let config = ServerConfig::load()
        .context("Failed to load configuration")?;

    // Run the server using the library's run function
    roster_server::run(config).await
        .context("Server error")?;

    Ok(())
}
