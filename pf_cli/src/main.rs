use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
mod cli;
mod client;
mod commands;
mod error;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.url);

    match cli.command {
        Commands::Health => commands::health::handle(&cli_client).await?,
        Commands::Caption {
            sentence,
            platform,
            tone,
            file,
            json,
        } => {
            let form = commands::caption::CaptionForm {
                sentence,
                platform,
                tone,
                file,
            };
            commands::caption::handle(&cli_client, &form, json).await?
        }
    }

    Ok(())
}
