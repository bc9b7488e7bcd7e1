// crates/search/src/infrastructure/postgres/rows/postgres_searchable_profile_row.rs

use shared_kernel::domain::value_objects::AccountId;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::SearchableProfile;

#[derive(FromRow, Debug)]
pub struct PostgresSearchableProfileRow {
    pub id: Uuid,
    pub full_name: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub expertise: Vec<String>,
    pub hobbies: Vec<String>,
    pub domains: Vec<String>,
}

impl From<PostgresSearchableProfileRow> for SearchableProfile {
    fn from(row: PostgresSearchableProfileRow) -> Self {
        SearchableProfile::builder(AccountId::new_unchecked(row.id), row.full_name)
            .maybe_bio(row.bio)
            .raw_location(row.location.as_deref())
            .expertise(row.expertise)
            .hobbies(row.hobbies)
            .domains(row.domains)
            .build()
    }
}
