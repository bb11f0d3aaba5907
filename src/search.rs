//! List filtering for the search boxes

use crate::models::{Asset, Employee};

/// A record that can be matched against a search query
pub trait Searchable {
    /// Fields checked by the search box, any of which may match
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for Asset {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.asset_type.as_str(), &self.serial_number]
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.department.as_str()]
    }
}

/// Records matching `query` case-insensitively, in collection order
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|record| record.matches(query)).collect()
}
