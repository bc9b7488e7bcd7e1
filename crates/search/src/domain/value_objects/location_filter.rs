// crates/search/src/domain/value_objects/location_filter.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Sous-chaîne de localisation imposée par l'utilisateur.
/// `None` (ou une saisie vide) désactive le filtre.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "Option<String>")]
pub struct LocationFilter(Option<String>);

impl LocationFilter {
    pub const MAX_LENGTH: usize = 100;

    pub fn try_new(value: Option<String>) -> Result<Self> {
        let filter = Self(
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        );
        filter.validate()?;
        Ok(filter)
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }

    pub fn normalized(&self) -> Option<String> {
        self.0.as_ref().map(|v| v.to_lowercase())
    }
}

impl ValueObject for LocationFilter {
    fn validate(&self) -> Result<()> {
        if let Some(value) = &self.0 {
            if value.chars().count() > Self::MAX_LENGTH {
                return Err(DomainError::Validation {
                    field: "location",
                    reason: format!("Location filter is too long (max {} chars)", Self::MAX_LENGTH),
                });
            }
        }
        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<Option<String>> for LocationFilter {
    type Error = DomainError;
    fn try_from(value: Option<String>) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<LocationFilter> for Option<String> {
    fn from(filter: LocationFilter) -> Self {
        filter.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_location_disables_filter() {
        assert!(!LocationFilter::try_new(Some("  ".into())).unwrap().is_active());
        assert!(!LocationFilter::try_new(None).unwrap().is_active());
    }

    #[test]
    fn test_location_too_long_is_rejected() {
        let err = LocationFilter::try_new(Some("b".repeat(101))).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "location", .. }));
    }

    #[test]
    fn test_deserialization_goes_through_validation() {
        let filter: LocationFilter = serde_json::from_str(r#""  Boston ""#).unwrap();
        assert_eq!(filter.as_deref(), Some("Boston"));

        let blank: LocationFilter = serde_json::from_str(r#""   ""#).unwrap();
        assert!(!blank.is_active());

        let too_long = format!("\"{}\"", "b".repeat(101));
        assert!(serde_json::from_str::<LocationFilter>(&too_long).is_err());
    }
}
