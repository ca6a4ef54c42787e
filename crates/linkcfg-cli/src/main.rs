mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::convert::ConvertArgs;

#[derive(Parser)]
#[command(
    name = "linkcfg",
    version,
    about = "Generate ePMP AP/SM configuration files from link-budget reports"
)]
struct Cli {
    /// Log pipeline decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert link-budget reports into ap.json / sm.json
    Convert(ConvertArgs),
    /// Show the labeled fields found in a report (without assembling)
    Extract {
        /// Path to PDF or pre-extracted table JSON file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate defaults templates
    Defaults {
        #[command(subcommand)]
        action: DefaultsAction,
    },
}

#[derive(Subcommand)]
enum DefaultsAction {
    /// List the bundled templates
    List,
    /// Print the settings of a bundled template
    Show {
        /// Device: ap or sm
        device: String,
    },
    /// Validate a custom template file
    Validate {
        /// Path to JSON template file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Extract { input_file, output } => commands::extract::run(input_file, &output),
        Commands::Defaults { action } => match action {
            DefaultsAction::List => commands::defaults::list(),
            DefaultsAction::Show { device } => commands::defaults::show(&device),
            DefaultsAction::Validate { file } => commands::defaults::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
