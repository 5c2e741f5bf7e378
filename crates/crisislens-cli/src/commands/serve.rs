//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crisislens_core::vision::DEFAULT_MODEL;
use crisislens_web::state::{AppState, VisionCapability};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model to use for analysis
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Also write server logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (with --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let vision = VisionCapability::from_config(args.api_key.as_deref(), &args.model);

    if let VisionCapability::Missing(reason) = &vision {
        tracing::warn!(%reason, "Vision model unavailable; POST /analyze will return 503");
    }

    println!();
    println!("  {} {}", "CrisisLens".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Frontend".green(),
        args.host,
        args.port
    );
    println!(
        "  {}   http://{}:{}/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    crisislens_web::run_server(AppState::new(vision), &args.host, args.port).await?;

    Ok(())
}
