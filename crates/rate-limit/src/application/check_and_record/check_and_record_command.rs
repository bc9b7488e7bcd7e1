// crates/rate-limit/src/application/check_and_record/check_and_record_command.rs

use crate::domain::value_objects::RateLimitAction;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::AccountId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAndRecordCommand {
    pub account_id: AccountId,
    pub action: RateLimitAction,
}
