use anyhow::Result;
use contact_relay::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
