//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for the Inkpress preview tool.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpress", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to render
    pub input: PathBuf,

    /// Output HTML file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Image reference mapping, TOKEN=URL (repeatable)
    #[arg(long = "image", value_name = "TOKEN=URL")]
    pub images: Vec<String>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist or an image mapping
    /// is malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        for mapping in &self.images {
            if !mapping.contains('=') {
                bail!("Invalid image mapping (expected TOKEN=URL): {}", mapping);
            }
        }

        Ok(())
    }

    /// Returns image mappings as token and URL pairs.
    pub fn image_mappings(&self) -> Vec<(String, String)> {
        self.images
            .iter()
            .filter_map(|mapping| {
                mapping
                    .split_once('=')
                    .map(|(token, url)| (token.to_string(), url.to_string()))
            })
            .collect()
    }

    /// Returns page title from configuration or the input file stem.
    ///
    /// # Errors
    ///
    /// Returns error if the input path has no stem or contains invalid UTF8.
    pub fn page_title(&self) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        self.input
            .file_stem()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot derive title from path: {}", self.input.display()))
            .map(String::from)
    }
}
