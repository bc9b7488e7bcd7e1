// crates/search/src/domain/value_objects/search_criteria.rs

use crate::domain::value_objects::{CategoryFilter, LocationFilter, SearchQuery};

/// Critères normalisés (minuscules) une seule fois par recherche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    query: String,
    location: Option<String>,
    categories: Vec<String>,
}

impl SearchCriteria {
    pub fn new(query: &SearchQuery, location: &LocationFilter, categories: &CategoryFilter) -> Self {
        Self {
            query: query.normalized(),
            location: location.normalized(),
            categories: categories.normalized(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
