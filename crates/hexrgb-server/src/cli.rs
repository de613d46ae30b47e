use std::path::PathBuf;

use clap::Parser;

/// hexrgb: serve hex color to RGB conversion over HTTP.
#[derive(Parser, Debug)]
#[command(name = "hexrgb", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides `server.port`).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter directive override (e.g. `hexrgb=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
