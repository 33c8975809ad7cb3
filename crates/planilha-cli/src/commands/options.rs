use planilha_core::catalog::{MONTHS, SECTORS, WEEKS};
use planilha_core::error::PlanilhaError;
use std::process::ExitCode;

pub fn run() -> Result<ExitCode, PlanilhaError> {
    println!("Suggested tags (any non-empty value is accepted):\n");
    println!("  Setor:   {}", SECTORS.join(", "));
    println!("  Mês:     {}", MONTHS.join(", "));
    println!("  Semana:  {}", WEEKS.join(", "));
    Ok(ExitCode::SUCCESS)
}
