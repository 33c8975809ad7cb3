mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "planilha",
    version,
    about = "Convert ABC product reports (PDF) into tagged spreadsheets"
)]
struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract product records from a report PDF
    Parse {
        /// Path to the report PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// PDF text backend
        #[arg(long, default_value = "lopdf", value_parser = ["lopdf", "pdftotext"])]
        backend: String,
    },
    /// Extract products and write them to a spreadsheet
    Export {
        /// Path to the report PDF
        input_file: PathBuf,

        /// Sector tag (e.g. Padaria)
        #[arg(long)]
        sector: String,

        /// Month tag (e.g. Agosto)
        #[arg(long)]
        month: String,

        /// Week tag (1-4)
        #[arg(long)]
        week: String,

        /// Only export products with this exact name (repeatable)
        #[arg(long, value_name = "NAME", conflicts_with = "exclude")]
        include: Vec<String>,

        /// Leave out products with this exact name (repeatable)
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,

        /// Spreadsheet to write
        #[arg(short = 'O', long = "out", value_name = "FILE", default_value = planilha_core::export::EXPORT_FILE_NAME)]
        out: PathBuf,

        /// PDF text backend
        #[arg(long, default_value = "lopdf", value_parser = ["lopdf", "pdftotext"])]
        backend: String,
    },
    /// List the suggested sector, month and week tags
    Options,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            backend,
        } => commands::parse::run(input_file, &output, &backend),
        Commands::Export {
            input_file,
            sector,
            month,
            week,
            include,
            exclude,
            out,
            backend,
        } => commands::export::run(commands::export::ExportArgs {
            input_file,
            sector,
            month,
            week,
            include,
            exclude,
            out,
            backend,
        }),
        Commands::Options => commands::options::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
