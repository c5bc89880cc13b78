use anyhow::Result;
use clap::{Parser, Subcommand};

use dfmis_periods::cli::{
    handle_allocate_command, handle_generate_command, handle_status_command, AllocateArgs,
    GenerateArgs, StatusArgs,
};
use dfmis_periods::config::{paths::DfmisPaths, settings::Settings};
use dfmis_periods::observability::init_tracing;

#[derive(Parser)]
#[command(
    name = "dfmis-periods",
    version,
    about = "Budget period generation for development-finance project planning",
    long_about = "Splits a project's date range into monthly, quarterly or annual \
                  budget periods, one budget-entry row per period, and optionally \
                  spreads a project total across them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the budget periods covering a date range
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Split a budget total across the periods of a date range
    Allocate(AllocateArgs),

    /// Show how far a project and its current period have progressed
    Status(StatusArgs),

    /// Write a settings file with the given defaults
    Init {
        /// Default granularity: monthly, quarterly or annual
        #[arg(short, long)]
        granularity: Option<String>,

        /// Default output format: table, csv, json or yaml
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = DfmisPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "loaded settings");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Generate(args)) => {
            handle_generate_command(&settings, args, &mut out)?;
        }
        Some(Commands::Allocate(args)) => {
            handle_allocate_command(&settings, args, &mut out)?;
        }
        Some(Commands::Status(args)) => {
            handle_status_command(&settings, args, &mut out)?;
        }
        Some(Commands::Init {
            granularity,
            format,
        }) => {
            if let Some(g) = granularity {
                settings.default_granularity = g.parse()?;
            }
            if let Some(f) = format {
                settings.output_format = f.parse()?;
            }
            settings.save(&paths)?;
            tracing::info!(path = %paths.settings_file().display(), "wrote settings");
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("dfmis-periods Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default granularity: {}", settings.default_granularity);
            println!("  Output format:       {}", settings.output_format);
            println!("  Allocation method:   {}", settings.allocation_method);
            println!("  Currency symbol:     {}", settings.currency_symbol);
        }
        None => {
            println!("dfmis-periods - budget period generation");
            println!();
            println!("Run 'dfmis-periods --help' for usage information.");
            println!("Run 'dfmis-periods generate 2024-01-01 2025-12-31' to list quarters.");
        }
    }

    Ok(())
}
