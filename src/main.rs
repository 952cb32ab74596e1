use anyhow::Result;
use calendly_gateway::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
