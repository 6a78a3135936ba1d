use async_trait::async_trait;
use sqlx::PgPool;

use crate::interceptors::AppResult;
use crate::models::UserSummary;

/// Read-only view of user accounts, which are managed elsewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn exists(&self, id: i64) -> AppResult<bool>;

    async fn list_by_name(&self) -> AppResult<Vec<UserSummary>>;
}

#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    db: PgPool,
}

impl PgUserDirectory {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.db)
                .await?;

        Ok(exists)
    }

    async fn list_by_name(&self) -> AppResult<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT id, name, email FROM users ORDER BY name, id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }
}
