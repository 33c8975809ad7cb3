use planilha_core::error::PlanilhaError;
use planilha_core::parsing::ParsedReport;

pub fn print(report: &ParsedReport) -> Result<(), PlanilhaError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
