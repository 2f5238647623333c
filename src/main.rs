use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

mod config;

use config::Config;

/// Serves the word frequency histogram web application.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    address: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Args {
        config,
        address,
        port,
    } = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    cfg.apply_overrides(address, port);

    let config::WebServer { address, port } = cfg.webserver;
    wordfreq_webserver::run(wordfreq_webserver::Cfg { address, port }).await;
    Ok(())
}
