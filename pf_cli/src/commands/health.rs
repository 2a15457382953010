use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let health = cli_client.health().await?;
    println!("{}: {}", health.status, health.message);
    Ok(())
}
