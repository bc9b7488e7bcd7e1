// crates/search/src/domain/value_objects/category_filter.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Ensemble de catégories sélectionnées (noms libres, comparés sans casse).
/// Les entrées vides sont ignorées, les doublons retirés en gardant la première occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryFilter(Vec<String>);

impl CategoryFilter {
    pub const MAX_LENGTH: usize = 100;

    pub fn try_new(values: Vec<String>) -> Result<Self> {
        let mut categories: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            let lowered = trimmed.to_lowercase();
            if categories.iter().any(|c| c.to_lowercase() == lowered) {
                continue;
            }
            categories.push(trimmed.to_string());
        }

        let filter = Self(categories);
        filter.validate()?;
        Ok(filter)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn normalized(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_lowercase()).collect()
    }
}

impl ValueObject for CategoryFilter {
    fn validate(&self) -> Result<()> {
        if let Some(too_long) = self.0.iter().find(|c| c.chars().count() > Self::MAX_LENGTH) {
            return Err(DomainError::Validation {
                field: "categories",
                reason: format!(
                    "Category '{}...' is too long (max {} chars)",
                    too_long.chars().take(20).collect::<String>(),
                    Self::MAX_LENGTH
                ),
            });
        }
        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<Vec<String>> for CategoryFilter {
    type Error = DomainError;
    fn try_from(values: Vec<String>) -> Result<Self> {
        Self::try_new(values)
    }
}

impl From<CategoryFilter> for Vec<String> {
    fn from(filter: CategoryFilter) -> Self {
        filter.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_cleaned_and_deduplicated() {
        let filter = CategoryFilter::try_new(vec![
            "Tutoring".into(),
            " ".into(),
            "tutoring".into(),
            " Gardening ".into(),
        ])
        .unwrap();

        assert_eq!(filter.as_slice(), &["Tutoring".to_string(), "Gardening".to_string()]);
        assert_eq!(filter.normalized(), vec!["tutoring", "gardening"]);
    }

    #[test]
    fn test_category_too_long_is_rejected() {
        assert!(CategoryFilter::try_new(vec!["c".repeat(100)]).is_ok());
        assert!(CategoryFilter::try_new(vec!["c".repeat(101)]).is_err());
    }

    #[test]
    fn test_deserialization_goes_through_validation() {
        let filter: CategoryFilter =
            serde_json::from_str(r#"["Tutoring", "", "TUTORING", " Cooking "]"#).unwrap();
        assert_eq!(filter.as_slice(), &["Tutoring".to_string(), "Cooking".to_string()]);

        let too_long = format!("[\"{}\"]", "c".repeat(101));
        assert!(serde_json::from_str::<CategoryFilter>(&too_long).is_err());
    }
}
