mod cli;
mod config;

use bom_tree::adapters::outbound::console::StderrProgressReporter;
use bom_tree::adapters::outbound::filesystem::FileSystemReader;
use bom_tree::application::dto::{OutputFormat, TreeRequest};
use bom_tree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use bom_tree::application::read_models::TreeReadModelBuilder;
use bom_tree::application::use_cases::RenderTreeUseCase;
use bom_tree::ports::outbound::ProgressReporter;
use bom_tree::shared::error::ExitCode;
use bom_tree::shared::Result;
use cli::Args;
use config::ConfigFile;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr so stdout carries only the rendered tree
fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Settings after merging CLI arguments over the config file
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    filter: Option<String>,
    colored: bool,
}

fn run(args: Args) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();
    let config = load_config(&args, &progress_reporter)?;
    let settings = merge_settings(&args, &config, stdout_is_terminal(&args));

    let use_case = RenderTreeUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());

    let request = TreeRequest::new(args.bom.clone(), settings.filter.clone());
    let response = use_case.execute(request)?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let model = TreeReadModelBuilder::build(&response);
    let formatter = FormatterFactory::create(settings.format, settings.colored);
    let formatted_output = formatter.format(&model)?;

    let presenter_type = PresenterType::from_output(args.output.clone());
    let presenter = PresenterFactory::create(presenter_type.clone());
    presenter.present(&formatted_output)?;

    if let PresenterType::File(path) = presenter_type {
        progress_reporter.report_completion(&format!(
            "✅ Dependency tree written to: {}",
            path.display()
        ));
    }

    Ok(())
}

/// Loads the config given with `--config`, or discovers one next to the BOM
fn load_config(args: &Args, reporter: &impl ProgressReporter) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        reporter.report(&format!("⚙️  Using config file: {}", path.display()));
        return config::load_config_from_path(path);
    }

    let dir = bom_directory(&args.bom);
    match config::discover_config(&dir)? {
        Some(config) => {
            reporter.report(&format!(
                "⚙️  Auto-discovered config file: {}",
                dir.join(config::CONFIG_FILENAME).display()
            ));
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn bom_directory(bom_path: &Path) -> PathBuf {
    match bom_path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn stdout_is_terminal(args: &Args) -> bool {
    args.output.is_none() && std::io::stdout().is_terminal()
}

/// CLI > config file > defaults
fn merge_settings(args: &Args, config: &ConfigFile, terminal: bool) -> Settings {
    Settings {
        format: args
            .format
            .or_else(|| config.output_format())
            .unwrap_or_default(),
        filter: args.filter.clone().or_else(|| config.filter.clone()),
        colored: terminal && !args.no_color && config.color != Some(false),
    }
}
