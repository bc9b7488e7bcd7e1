// crates/search/src/application/search_community/search_community_command.rs

use serde::Deserialize;
use shared_kernel::domain::value_objects::AccountId;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchCommunityCommand {
    pub account_id: AccountId,
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}
