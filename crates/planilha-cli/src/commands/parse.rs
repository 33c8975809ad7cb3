use planilha_core::error::PlanilhaError;
use planilha_core::parsing::ExtractionStatus;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands;
use crate::output;

pub fn run(pdf_file: PathBuf, output_format: &str, backend: &str) -> Result<ExitCode, PlanilhaError> {
    let parsed = commands::load_report(&pdf_file, backend)?;

    match output_format {
        "json" => output::json::print(&parsed)?,
        _ => output::table::print_records(&parsed.records),
    }

    if !parsed.skipped_lines.is_empty() {
        eprintln!(
            "  {} row-like line(s) skipped during parsing",
            parsed.skipped_lines.len()
        );
        for line in &parsed.skipped_lines {
            eprintln!("    line {}: {} ({})", line.line_number, line.line_text, line.reason);
        }
    }

    match parsed.status() {
        ExtractionStatus::RecordsFound(n) => {
            eprintln!("{n} produtos encontrados no PDF.");
            Ok(ExitCode::SUCCESS)
        }
        ExtractionStatus::NoRecordsFound => Ok(commands::no_records()),
    }
}
