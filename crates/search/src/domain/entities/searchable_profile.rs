// crates/search/src/domain/entities/searchable_profile.rs

use serde::Serialize;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::builders::SearchableProfileBuilder;
use crate::domain::value_objects::ResolvedLocation;

/// Projection d'un profil membre limitée aux champs interrogés par la recherche.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchableProfile {
    pub(crate) account_id: AccountId,
    pub(crate) display_name: String,
    pub(crate) bio: Option<String>,
    pub(crate) location: ResolvedLocation,
    pub(crate) expertise: Vec<String>,
    pub(crate) hobbies: Vec<String>,
    pub(crate) domains: Vec<String>,
}

impl SearchableProfile {
    pub fn builder(account_id: AccountId, display_name: impl Into<String>) -> SearchableProfileBuilder {
        SearchableProfileBuilder::new(account_id, display_name)
    }

    // --- GETTERS ---

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn location(&self) -> &ResolvedLocation {
        &self.location
    }

    pub fn expertise(&self) -> &[String] {
        &self.expertise
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Tags comparés aux catégories sélectionnées (expertise puis loisirs)
    pub fn interest_tags(&self) -> impl Iterator<Item = &str> {
        self.expertise
            .iter()
            .chain(self.hobbies.iter())
            .map(String::as_str)
    }
}

impl EntityMetadata for SearchableProfile {
    fn entity_name() -> &'static str {
        "Profile"
    }
}
