use clap::Parser;
use std::io;
use vk_links::{app, config, telemetry};

/// Shorten a URL with vk.cc, or show total clicks for a vk.cc link.
#[derive(Parser)]
#[command(name = "vk-links", about, long_about = None)]
struct Cli {
    /// URL to shorten, or a vk.cc link to count clicks for
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env();
    telemetry::init(config.as_ref().ok());

    app::run(config, &cli.url, &mut io::stdout().lock()).await?;

    Ok(())
}
