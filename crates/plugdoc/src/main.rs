//! plugdoc CLI - generates public plugin documentation from the plugin table.
//!
//! # Environment variables
//!
//! | Variable       | Required | Description                     |
//! |----------------|----------|---------------------------------|
//! | `SUPABASE_URL` | yes      | Project URL                     |
//! | `SUPABASE_KEY` | yes      | Anon or service key             |
//!
//! Both may also come from a `.env` file or the `[source]` table of
//! `plugdoc.toml`; the environment wins.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "plugdoc")]
#[command(about = "Generate public plugin documentation pages")]
#[command(version)]
pub struct Cli {
    /// Path to plugdoc.toml config file
    #[arg(short, long, default_value = "plugdoc.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    commands::generate::run(&cli.config).await
}
