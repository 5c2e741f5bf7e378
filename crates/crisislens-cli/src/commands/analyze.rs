//! One-shot analysis command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crisislens_core::analysis::model::CrisisAssessment;
use crisislens_core::analysis::{self, validate};
use crisislens_core::vision::{GeminiVisionClient, DEFAULT_MODEL};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a JPEG or PNG image
    pub image: PathBuf,

    /// Text context accompanying the image
    #[arg(long)]
    pub text: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Gemini model to use for analysis
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Print the raw JSON instead of a formatted summary
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let media_type = media_type_for(&args.image)?;
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("Failed to read {}", args.image.display()))?;

    let upload = validate::validate_upload(&media_type, bytes)?;

    println!(
        "{} Analyzing image: {}",
        "→".dimmed(),
        args.image.display()
    );
    let client = GeminiVisionClient::new(&args.api_key, &args.model);
    let value = analysis::analyze_crisis(&client, &upload, &args.text).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match serde_json::from_value::<CrisisAssessment>(value.clone()) {
        Ok(assessment) => output::print_assessment(&assessment),
        // Non-object output: show it raw rather than forcing a shape on it.
        Err(_) => println!("{}", serde_json::to_string_pretty(&value)?),
    }

    Ok(())
}

/// Infer the declared media type from the file extension.
fn media_type_for(path: &Path) -> Result<String> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => Ok("image/jpeg".to_string()),
        Some("png") => Ok("image/png".to_string()),
        _ => anyhow::bail!(
            "Unsupported image extension for {}. Use a JPEG or PNG file.",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(media_type_for(Path::new("a.png")).unwrap(), "image/png");
        assert_eq!(media_type_for(Path::new("b.JPG")).unwrap(), "image/jpeg");
        assert_eq!(media_type_for(Path::new("c.jpeg")).unwrap(), "image/jpeg");
        assert!(media_type_for(Path::new("d.webp")).is_err());
        assert!(media_type_for(Path::new("noext")).is_err());
    }
}
