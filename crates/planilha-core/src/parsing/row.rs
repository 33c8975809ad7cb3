use crate::model::ProductRecord;
use crate::parsing::values::parse_decimal;
use regex::Regex;
use std::sync::LazyLock;

/// One ABC report row:
/// `CLASSIF CODIGO NOME_PRODUTO CUSTO QUANTIDADE VALOR_TOTAL [...]`
///
/// The name is at least 10 characters and matched lazily, so it ends where the
/// three numeric columns can start. The total always has two decimals after a
/// comma. Anything after the total is ignored.
static ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<rank>[0-9]+)\s+",
        r"(?P<code>[0-9]+)\s+",
        r"(?P<name>[A-Z0-9\s\[\]/\-.]{10,}?)\s+",
        r"(?P<cost>[0-9,.]+)\s+",
        r"(?P<quantity>[0-9,.]+)\s+",
        r"(?P<total>[0-9.]+,[0-9]{2})",
    ))
    .expect("report row pattern is valid")
});

/// Lines starting with two integers are shaped like report rows.
static ROW_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s+[0-9]+\s").expect("row prefix pattern is valid"));

/// All six columns of a matched report row, as they appear in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow<'a> {
    pub rank: &'a str,
    pub code: &'a str,
    pub name: &'a str,
    pub cost: &'a str,
    pub quantity: &'a str,
    pub total: &'a str,
}

/// Why a row-shaped line did not become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    PatternMismatch,
    BlankName,
    InvalidQuantity,
    InvalidTotal,
}

impl RowRejection {
    pub fn reason(self) -> &'static str {
        match self {
            RowRejection::PatternMismatch => "does not match report row pattern",
            RowRejection::BlankName => "product name is blank",
            RowRejection::InvalidQuantity => "quantity is not a number",
            RowRejection::InvalidTotal => "total value is not a number",
        }
    }
}

impl<'a> ReportRow<'a> {
    /// Match a trimmed line against the report row pattern.
    pub fn match_line(line: &'a str) -> Option<ReportRow<'a>> {
        let caps = ROW_PATTERN.captures(line)?;
        let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        Some(ReportRow {
            rank: field("rank"),
            code: field("code"),
            name: field("name"),
            cost: field("cost"),
            quantity: field("quantity"),
            total: field("total"),
        })
    }

    /// Narrow the row to the exported fields. Rank, code and cost are dropped here.
    pub fn into_record(self) -> Result<ProductRecord, RowRejection> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RowRejection::BlankName);
        }
        let quantity = parse_decimal(self.quantity).ok_or(RowRejection::InvalidQuantity)?;
        let total_value = parse_decimal(self.total).ok_or(RowRejection::InvalidTotal)?;

        Ok(ProductRecord {
            name: name.to_string(),
            quantity,
            total_value,
        })
    }
}

pub fn looks_like_row(line: &str) -> bool {
    ROW_PREFIX.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_match_line_captures_all_columns() {
        let row = ReportRow::match_line("1 1001 PAO FRANCES UNIDADE 2,50 10,00 25,00").unwrap();
        assert_eq!(
            row,
            ReportRow {
                rank: "1",
                code: "1001",
                name: "PAO FRANCES UNIDADE",
                cost: "2,50",
                quantity: "10,00",
                total: "25,00",
            }
        );
    }

    #[test]
    fn test_projection_drops_rank_code_cost() {
        let record = ReportRow::match_line("1 1001 PAO FRANCES UNIDADE 2,50 10,00 25,00")
            .unwrap()
            .into_record()
            .unwrap();
        assert_eq!(record.name, "PAO FRANCES UNIDADE");
        assert_eq!(record.quantity, dec!(10.00));
        assert_eq!(record.total_value, dec!(25.00));
    }

    #[test]
    fn test_short_name_does_not_match() {
        assert!(ReportRow::match_line("1 1001 PAO 2,50 10,00 25,00").is_none());
    }

    #[test]
    fn test_ten_char_name_matches() {
        let row = ReportRow::match_line("3 77 SONHO CREM 1,00 4,000 12,00").unwrap();
        assert_eq!(row.name, "SONHO CREM");
        assert_eq!(row.quantity, "4,000");
    }

    #[test]
    fn test_layout_whitespace_and_trailing_columns() {
        let row = ReportRow::match_line(
            "12   4410   BOLO [FATIA] 1/2 CENOURA   3,10   1.250,500   4.512,30   18,2%   A",
        )
        .unwrap();
        assert_eq!(row.name, "BOLO [FATIA] 1/2 CENOURA");
        let record = row.into_record().unwrap();
        assert_eq!(record.quantity, dec!(1250.500));
        assert_eq!(record.total_value, dec!(4512.30));
    }

    #[test]
    fn test_name_with_digits_dots_and_hyphens() {
        let row =
            ReportRow::match_line("2 55 REFRIG. COLA-LATA 350ML 2,10 48 120,96").unwrap();
        assert_eq!(row.name, "REFRIG. COLA-LATA 350ML");
        assert_eq!(row.quantity, "48");
    }

    #[test]
    fn test_total_requires_comma_and_two_decimals() {
        assert!(ReportRow::match_line("1 1001 PAO FRANCES UNIDADE 2,50 10,00 25.00").is_none());
        assert!(ReportRow::match_line("1 1001 PAO FRANCES UNIDADE 2,50 10,00 25,0").is_none());
    }

    #[test]
    fn test_lowercase_name_does_not_match() {
        assert!(ReportRow::match_line("1 1001 pao frances unidade 2,50 10,00 25,00").is_none());
    }

    #[test]
    fn test_not_anchored_elsewhere() {
        assert!(
            ReportRow::match_line("Total 1 1001 PAO FRANCES UNIDADE 2,50 10,00 25,00").is_none()
        );
    }

    #[test]
    fn test_unparseable_quantity_is_rejected() {
        let row = ReportRow::match_line("1 1001 PAO FRANCES UNIDADE 2,50 1,0,0 25,00").unwrap();
        assert_eq!(row.into_record(), Err(RowRejection::InvalidQuantity));
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let row = ReportRow::match_line("1 1001              2,50 10,00 25,00").unwrap();
        assert!(row.name.trim().is_empty());
        assert_eq!(row.into_record(), Err(RowRejection::BlankName));
    }

    #[test]
    fn test_looks_like_row() {
        assert!(looks_like_row("1 1001 PAO 2,50 10,00 25,00"));
        assert!(!looks_like_row("CLASSIF CODIGO PRODUTO"));
        assert!(!looks_like_row("Pagina 1 de 3"));
    }
}
