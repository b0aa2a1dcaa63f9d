use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use allowance_tracker::cli::{
    handle_expense_command, handle_export_command, handle_forecast_command,
    handle_import_command, handle_plan_command, handle_redo_command, handle_summary_command,
    handle_undo_command, ExpenseCommands, ExportFormat, PlanCommands,
};
use allowance_tracker::config::{paths::TrackerPaths, settings::Settings};
use allowance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "allowance",
    version,
    about = "Track a monthly allowance against weekday spending",
    long_about = "Allowance Tracker splits a monthly allowance evenly across the \
                  weekdays of the month, records what you spend each day, and \
                  shows how much you are saving and are likely to save."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly plan commands
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Undo the last expense change
    Undo,

    /// Redo the last undone expense change
    Redo,

    /// Show daily and cumulative savings
    Summary,

    /// Project savings for the coming weekdays
    Forecast {
        /// Number of weekdays to project (defaults to the configured horizon)
        #[arg(short = 'n', long)]
        horizon: Option<usize>,
    },

    /// Import expenses from a CSV file (date,label,amount)
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Export expenses or the full report
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Export daily summaries instead of expense rows (csv only)
        #[arg(long)]
        summaries: bool,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Plan(cmd)) => handle_plan_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Undo) => handle_undo_command(&storage, &settings)?,
        Some(Commands::Redo) => handle_redo_command(&storage, &settings)?,
        Some(Commands::Summary) => handle_summary_command(&storage, &settings)?,
        Some(Commands::Forecast { horizon }) => {
            handle_forecast_command(&storage, &settings, horizon)?
        }
        Some(Commands::Import { file }) => handle_import_command(&storage, &file)?,
        Some(Commands::Export {
            format,
            summaries,
            output,
        }) => handle_export_command(&storage, &settings, format, summaries, output)?,
        Some(Commands::Config) => {
            println!("Allowance Tracker Configuration");
            println!("===============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Session file:     {}", paths.session_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Forecast horizon: {}", settings.forecast_horizon);
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!();
                println!("Default settings written to the settings file.");
            }
        }
        None => {
            println!("Allowance Tracker - weekday allowance ledger and forecast");
            println!();
            println!("Run 'allowance --help' for usage information.");
            println!("Run 'allowance plan set <YYYY-MM> <amount>' to get started.");
        }
    }

    Ok(())
}
