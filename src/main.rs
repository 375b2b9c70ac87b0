use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use reimburse_cli::cli::{
    handle_export_command, handle_review_command, handle_submit_command, run_form, ExportArgs,
    ReviewCommands,
};
use reimburse_cli::config::{paths::ReimbursePaths, settings::Settings};
use reimburse_cli::error::ReimburseResult;
use reimburse_cli::services::FormSession;

#[derive(Parser)]
#[command(
    name = "reimburse",
    version,
    about = "Expense reimbursement requests from the terminal",
    long_about = "reimburse-cli lets employees fill in reimbursement requests as a \
                  ledger of line items, and lets reviewers approve or deny them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in a reimbursement request interactively
    Form,

    /// Submit a request from a JSON or YAML draft file
    Submit {
        /// Path to the draft file
        draft: PathBuf,
    },

    /// Review submitted requests
    Review {
        /// Requests file (JSON, as written by `export --format json`)
        #[arg(long, global = true, env = "REIMBURSE_CLI_REQUESTS")]
        requests: Option<PathBuf>,

        #[command(subcommand)]
        command: ReviewCommands,
    },

    /// Export requests
    Export(ExportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ReimbursePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let _ = env_logger::try_init_from_env(
        Env::default().default_filter_or(settings.log_filter.as_str()),
    );

    if let Err(err) = run(cli.command, &paths, &settings) {
        log::debug!("Command failed: {:?}", err);
        eprintln!("{}", err.to_notification());
        std::process::exit(1);
    }

    Ok(())
}

fn run(
    command: Option<Commands>,
    paths: &ReimbursePaths,
    settings: &Settings,
) -> ReimburseResult<()> {
    match command {
        Some(Commands::Form) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_form(FormSession::new(), stdin.lock(), &mut stdout.lock(), settings)?;
        }
        Some(Commands::Submit { draft }) => handle_submit_command(settings, &draft)?,
        Some(Commands::Review { requests, command }) => {
            handle_review_command(settings, requests.as_deref(), command)?
        }
        Some(Commands::Export(args)) => handle_export_command(settings, args)?,
        Some(Commands::Init) => {
            println!("Initializing reimburse-cli at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to: {}", paths.settings_file().display());
            println!("Run 'reimburse form' to fill in a request.");
        }
        Some(Commands::Config) => {
            println!("reimburse-cli Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Log filter:         {}", settings.log_filter);
            println!("  Seed demo requests: {}", settings.seed_demo_requests);
        }
        None => {
            println!("reimburse-cli - Expense reimbursement requests");
            println!();
            println!("Run 'reimburse --help' for usage information.");
            println!("Run 'reimburse form' to fill in a request.");
        }
    }

    Ok(())
}
