use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One product row of an ABC report, narrowed to the fields that are exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub quantity: Decimal,
    pub total_value: Decimal,
}

/// A product record annotated with the tags shared by a whole export.
///
/// Field order is the spreadsheet column order (see `export::HEADER`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub product: String,
    pub sector: String,
    pub month: String,
    pub week: String,
    pub quantity: Decimal,
    pub value: Decimal,
}

/// Sector, month and week applied uniformly to every exported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTags {
    pub sector: String,
    pub month: String,
    pub week: String,
}

impl ExportTags {
    pub fn new(
        sector: impl Into<String>,
        month: impl Into<String>,
        week: impl Into<String>,
    ) -> Self {
        ExportTags {
            sector: sector.into(),
            month: month.into(),
            week: week.into(),
        }
    }

    /// Returns the name of the first blank tag, if any.
    pub fn blank_field(&self) -> Option<&'static str> {
        [
            ("sector", &self.sector),
            ("month", &self.month),
            ("week", &self.week),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

impl fmt::Display for ExportTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / semana {}", self.sector, self.month, self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_field_none_when_all_set() {
        let tags = ExportTags::new("Padaria", "Agosto", "1");
        assert_eq!(tags.blank_field(), None);
    }

    #[test]
    fn test_blank_field_reports_first_blank() {
        let tags = ExportTags::new("Padaria", "  ", "");
        assert_eq!(tags.blank_field(), Some("month"));
    }
}
