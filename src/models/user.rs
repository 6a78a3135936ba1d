use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Display data for an externally managed user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}
