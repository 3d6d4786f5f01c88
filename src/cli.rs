use bom_tree::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Render the dependency tree of a CycloneDX bill of materials
#[derive(Parser, Debug)]
#[command(name = "bom-tree")]
#[command(version)]
#[command(about = "Render the dependency tree of a CycloneDX bill of materials", long_about = None)]
pub struct Args {
    /// Path to the CycloneDX JSON document
    #[arg(value_name = "BOM", default_value = "bom.json")]
    pub bom: PathBuf,

    /// Show only dependencies whose name contains TEXT (case-insensitive),
    /// together with their ancestors
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Output format: text, markdown or json [default: text]
    #[arg(short = 'F', long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to bom-tree.config.yml next to the BOM)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable highlighting of matched names
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
