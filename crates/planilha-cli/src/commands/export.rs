use planilha_core::error::PlanilhaError;
use planilha_core::model::ExportTags;
use planilha_core::parsing::ExtractionStatus;
use planilha_core::selection::ProductSelection;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands;

pub struct ExportArgs {
    pub input_file: PathBuf,
    pub sector: String,
    pub month: String,
    pub week: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub out: PathBuf,
    pub backend: String,
}

pub fn run(args: ExportArgs) -> Result<ExitCode, PlanilhaError> {
    let parsed = commands::load_report(&args.input_file, &args.backend)?;
    if parsed.status() == ExtractionStatus::NoRecordsFound {
        return Ok(commands::no_records());
    }

    let tags = ExportTags::new(args.sector, args.month, args.week);
    if !tags.is_catalogued() {
        log::warn!("tags '{tags}' are not among the suggested options (see `planilha options`)");
    }

    let names = parsed.product_names();
    for name in args.include.iter().chain(&args.exclude) {
        if !names.contains(&name.as_str()) {
            log::warn!("product '{name}' does not appear in the report");
        }
    }

    let selection = if !args.include.is_empty() {
        ProductSelection::include(args.include)
    } else if !args.exclude.is_empty() {
        ProductSelection::exclude(args.exclude)
    } else {
        ProductSelection::All
    };

    let bytes = planilha_core::export_products(&parsed.records, &selection, &tags)?;
    std::fs::write(&args.out, &bytes)?;

    let exported = selection.apply(&parsed.records).len();
    eprintln!(
        "{} of {} product(s) written to {}",
        exported,
        parsed.records.len(),
        args.out.display()
    );

    Ok(ExitCode::SUCCESS)
}
