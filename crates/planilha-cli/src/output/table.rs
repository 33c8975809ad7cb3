use planilha_core::model::ProductRecord;

pub fn print_records(records: &[ProductRecord]) {
    if records.is_empty() {
        return;
    }

    let max_name = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(10)
        .max("Produto".len());

    println!(
        "  {:<width$}  {:>12}  {:>12}",
        "Produto",
        "Quantidade",
        "Valor",
        width = max_name
    );
    for record in records {
        println!(
            "  {:<width$}  {:>12}  {:>12}",
            record.name,
            record.quantity.to_string(),
            record.total_value.to_string(),
            width = max_name
        );
    }
    println!();
}
