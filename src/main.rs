use anyhow::Result;
use schoolbot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
