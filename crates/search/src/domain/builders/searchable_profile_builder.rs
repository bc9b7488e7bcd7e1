// crates/search/src/domain/builders/searchable_profile_builder.rs

use shared_kernel::domain::value_objects::AccountId;

use crate::domain::entities::SearchableProfile;
use crate::domain::value_objects::ResolvedLocation;

pub struct SearchableProfileBuilder {
    account_id: AccountId,
    display_name: String,
    bio: Option<String>,
    location: ResolvedLocation,
    expertise: Vec<String>,
    hobbies: Vec<String>,
    domains: Vec<String>,
}

impl SearchableProfileBuilder {
    pub fn new(account_id: AccountId, display_name: impl Into<String>) -> Self {
        Self {
            account_id,
            display_name: display_name.into(),
            bio: None,
            location: ResolvedLocation::default(),
            expertise: Vec::new(),
            hobbies: Vec::new(),
            domains: Vec::new(),
        }
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn maybe_bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    /// Valeur brute de la colonne (texte ou JSON)
    pub fn raw_location(mut self, raw: Option<&str>) -> Self {
        self.location = ResolvedLocation::resolve(raw);
        self
    }

    pub fn location(mut self, location: ResolvedLocation) -> Self {
        self.location = location;
        self
    }

    pub fn expertise<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expertise = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn hobbies<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn domains<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> SearchableProfile {
        SearchableProfile {
            account_id: self.account_id,
            display_name: self.display_name,
            bio: self.bio,
            location: self.location,
            expertise: self.expertise,
            hobbies: self.hobbies,
            domains: self.domains,
        }
    }
}
