// crates/search/src/domain/value_objects/search_query.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

/// Texte libre saisi dans la barre de recherche.
/// Une requête vide est valide : elle court-circuite toute la recherche.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SearchQuery(String);

impl SearchQuery {
    pub const MAX_LENGTH: usize = 200;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let query = Self(value.into().trim().to_string());
        query.validate()?;
        Ok(query)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Forme utilisée pour les comparaisons insensibles à la casse
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl ValueObject for SearchQuery {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();
        if count > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "query",
                reason: format!(
                    "Query is too long (max {} chars, got {})",
                    Self::MAX_LENGTH,
                    count
                ),
            });
        }
        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for SearchQuery {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
