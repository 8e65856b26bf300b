//! pagewin - Entry Point

use clap::Parser;
use pagewin::model::AppError;
use pagewin::view::{parse_filter, CliArgs};
use pagewin::view_state::PageSize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// pagewin - page through a JSON record collection
#[derive(Parser, Debug)]
#[command(name = "pagewin")]
#[command(version)]
#[command(about = "Page through JSON records with a sliding page-number window")]
pub struct Args {
    /// Path to a JSON array or JSON Lines file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Page to show; values past the last page show the last page
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,

    /// Number of page-number controls to show
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Case-insensitive text search applied before paging
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact field match applied before paging (repeatable)
    #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pagewin: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // A non-positive page size is a caller mistake: fail before reading anything
    let per_page_override = args
        .per_page
        .map(|raw| PageSize::from_signed(raw).map(|size| size.get()))
        .transpose()?;

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pagewin::config::load_config_with_precedence(args.config.clone())?;
        let merged = pagewin::config::merge_config(config_file);
        let with_env = pagewin::config::apply_env_overrides(merged)?;
        pagewin::config::apply_cli_overrides(with_env, per_page_override, args.window)
    };
    let page_size = config.validate()?;

    pagewin::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = pagewin::source::detect_input_source(args.file.clone())?;

    let cli_args = CliArgs {
        page: args.page,
        search: args.search,
        filters: args.filters,
        json: args.json,
        ..CliArgs::new(page_size, config.window_size, config.page_size_options)
    };

    pagewin::view::run_with_source(input_source, cli_args)
}
