use clap::Parser;
use clap::Subcommand;
use pf_core::server::default_config::DEFAULT_CLI_BACKEND_URL;
use pf_core::types::platform::{DEFAULT_PLATFORM, DEFAULT_TONE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Social media captions from the Promptify API", long_about = None)]
pub struct Cli {
    /// Base URL of the Promptify backend.
    #[arg(long, env = "PROMPTIFY_URL", default_value = DEFAULT_CLI_BACKEND_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the backend is up.
    Health,
    /// Generate captions and hashtags for a post.
    Caption {
        #[arg()]
        sentence: String,
        #[arg(short, long, default_value = DEFAULT_PLATFORM)]
        platform: String,
        #[arg(short, long, default_value = DEFAULT_TONE)]
        tone: String,
        /// Image to attach to the request.
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print the raw JSON response.
        #[arg(long)]
        json: bool,
    },
}
