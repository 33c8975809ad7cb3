//! Tag values offered to users when choosing how to label an export.
//!
//! These lists are for front ends only. The export builder accepts any
//! non-empty tag.

use crate::model::ExportTags;

pub const SECTORS: &[&str] = &[
    "Padaria",
    "Confeitaria Fina",
    "Confeitaria Trad",
    "Salgados",
    "Lanchonete",
    "Restaurante",
    "Frios",
];

pub const MONTHS: &[&str] = &["Agosto", "Setembro", "Outubro", "Novembro", "Dezembro"];

pub const WEEKS: &[&str] = &["1", "2", "3", "4"];

impl ExportTags {
    /// True when every tag is one of the catalogued values.
    pub fn is_catalogued(&self) -> bool {
        SECTORS.contains(&self.sector.as_str())
            && MONTHS.contains(&self.month.as_str())
            && WEEKS.contains(&self.week.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogued_tags() {
        assert!(ExportTags::new("Frios", "Dezembro", "4").is_catalogued());
    }

    #[test]
    fn test_uncatalogued_tags() {
        assert!(!ExportTags::new("Padaria", "Janeiro", "1").is_catalogued());
        assert!(!ExportTags::new("Padaria", "Agosto", "5").is_catalogued());
        assert!(!ExportTags::new("padaria", "Agosto", "1").is_catalogued());
    }
}
