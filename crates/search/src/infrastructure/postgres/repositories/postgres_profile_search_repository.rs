// crates/search/src/infrastructure/postgres/repositories/postgres_profile_search_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::entities::SearchableProfile;
use crate::domain::repositories::ProfileSearchRepository;
use crate::domain::value_objects::SearchQuery;
use crate::infrastructure::postgres::rows::PostgresSearchableProfileRow;
use crate::infrastructure::postgres::utils::contains_pattern;

pub struct PostgresProfileSearchRepository {
    pool: PgPool,
}

impl PostgresProfileSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileSearchRepository for PostgresProfileSearchRepository {
    async fn search_profiles(&self, query: &SearchQuery, limit: i64) -> Result<Vec<SearchableProfile>> {
        // Pré-filtre large (la colonne location est comparée brute, JSON compris) :
        // le matching exact et le score sont recalculés en mémoire.
        let sql = r#"
            SELECT
                p.id, p.full_name, p.bio, p.location, p.expertise, p.hobbies,
                ARRAY(
                    SELECT d.name
                    FROM profile_domains pd
                    JOIN domains d ON d.id = pd.domain_id
                    WHERE pd.profile_id = p.id
                    ORDER BY d.name
                ) AS domains
            FROM profiles p
            WHERE p.full_name ILIKE $1
               OR p.bio ILIKE $1
               OR p.location ILIKE $1
               OR EXISTS (SELECT 1 FROM unnest(p.expertise) AS e(tag) WHERE e.tag ILIKE $1)
               OR EXISTS (SELECT 1 FROM unnest(p.hobbies) AS h(tag) WHERE h.tag ILIKE $1)
               OR EXISTS (
                    SELECT 1
                    FROM profile_domains pd
                    JOIN domains d ON d.id = pd.domain_id
                    WHERE pd.profile_id = p.id AND d.name ILIKE $1
               )
            ORDER BY p.created_at DESC, p.id
            LIMIT $2
        "#;

        let rows = sqlx::query_as::<_, PostgresSearchableProfileRow>(sql)
            .bind(contains_pattern(query.as_str()))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("ProfileSearch")?;

        Ok(rows.into_iter().map(SearchableProfile::from).collect())
    }

    async fn find_display_names(&self, ids: &[AccountId]) -> Result<HashMap<AccountId, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let uuids: Vec<Uuid> = ids.iter().map(AccountId::as_uuid).collect();

        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, full_name FROM profiles WHERE id = ANY($1)",
        )
        .bind(uuids)
        .fetch_all(&self.pool)
        .await
        .map_domain_infra("ProfileDisplayNames")?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| (AccountId::new_unchecked(id), name))
            .collect())
    }
}
