use crate::model::ProductRecord;
use std::collections::BTreeSet;

/// Which products a user chose to keep, by exact product name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductSelection {
    #[default]
    All,
    Include(BTreeSet<String>),
    Exclude(BTreeSet<String>),
}

impl ProductSelection {
    pub fn include<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProductSelection::Include(names.into_iter().map(Into::into).collect())
    }

    pub fn exclude<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProductSelection::Exclude(names.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            ProductSelection::All => true,
            ProductSelection::Include(names) => names.contains(name),
            ProductSelection::Exclude(names) => !names.contains(name),
        }
    }

    pub fn apply(&self, records: &[ProductRecord]) -> Vec<ProductRecord> {
        filter_records(records, |name| self.matches(name))
    }
}

/// Keep the records whose name satisfies `predicate`, preserving order.
///
/// Selecting a name keeps every record with that name.
pub fn filter_records<F>(records: &[ProductRecord], predicate: F) -> Vec<ProductRecord>
where
    F: Fn(&str) -> bool,
{
    records
        .iter()
        .filter(|r| predicate(&r.name))
        .cloned()
        .collect()
}
