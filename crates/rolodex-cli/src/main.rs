mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use rolodex_core::extraction::TextMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rolodex",
    version,
    about = "Extract company records from trade directory PDF exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Also write log output to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract companies from a directory PDF (or a form-feed separated .txt page dump)
    Extract {
        /// Path to PDF or .txt file
        input_file: PathBuf,

        /// Text extraction mode passed to pdftotext
        #[arg(short, long, value_enum, default_value = "reading")]
        mode: ModeArg,

        /// Write companies to a JSON file
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Write the flattened table (.xlsx, or CSV for a .csv extension)
        #[arg(long, value_name = "FILE")]
        table: Option<PathBuf>,

        /// Output format when no file is given: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Convert a previously written JSON file into the flattened table
    Export {
        /// Path to JSON file written by `extract --json`
        json_file: PathBuf,

        /// Destination .xlsx file, or CSV for a .csv extension
        #[arg(long, value_name = "FILE")]
        table: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Reading,
    Layout,
    Raw,
}

impl From<ModeArg> for TextMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Reading => TextMode::Reading,
            ModeArg::Layout => TextMode::Layout,
            ModeArg::Raw => TextMode::Raw,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Extract {
            input_file,
            mode,
            json,
            table,
            output,
        } => commands::extract::run(input_file, mode.into(), &output, json, table),
        Commands::Export { json_file, table } => commands::export::run(&json_file, &table),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
