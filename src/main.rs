use anyhow::Result;
use interview::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
