use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::{PageRequest, Paginated};
use crate::interceptors::AppResult;
use crate::models::{NewService, Service};

/// Persistence for the service catalogue
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Newest first
    async fn paginate(&self, page: PageRequest) -> AppResult<Paginated<Service>>;

    async fn find(&self, id: i64) -> AppResult<Option<Service>>;

    async fn exists(&self, id: i64) -> AppResult<bool>;

    /// Services open for booking, by name
    async fn list_active(&self) -> AppResult<Vec<Service>>;

    async fn count(&self) -> AppResult<i64>;

    async fn insert(&self, service: NewService) -> AppResult<Service>;

    /// Replace every mutable column; `None` when the id is unknown
    async fn update(&self, id: i64, service: NewService) -> AppResult<Option<Service>>;

    /// Delete the service together with its appointments in one transaction.
    ///
    /// Returns the number of appointments removed, or `None` when the id is unknown.
    async fn delete_cascade(&self, id: i64) -> AppResult<Option<u64>>;
}

#[derive(Debug, Clone)]
pub struct PgServiceRepository {
    db: PgPool,
}

impl PgServiceRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn paginate(&self, page: PageRequest) -> AppResult<Paginated<Service>> {
        let total = self.count().await?;

        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paginated::new(services, page, total))
    }

    async fn find(&self, id: i64) -> AppResult<Option<Service>> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(service)
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM services WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.db)
                .await?;

        Ok(exists)
    }

    async fn list_active(&self) -> AppResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE is_active = TRUE ORDER BY name, id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(services)
    }

    async fn count(&self) -> AppResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(&self.db)
            .await?;

        Ok(total)
    }

    async fn insert(&self, service: NewService) -> AppResult<Service> {
        let inserted = sqlx::query_as::<_, Service>(
            "INSERT INTO services
                 (name, description, duration, price, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
             RETURNING *",
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.duration)
        .bind(service.price)
        .bind(service.is_active)
        .fetch_one(&self.db)
        .await?;

        Ok(inserted)
    }

    async fn update(&self, id: i64, service: NewService) -> AppResult<Option<Service>> {
        let updated = sqlx::query_as::<_, Service>(
            "UPDATE services
             SET name = $1, description = $2, duration = $3, price = $4, is_active = $5,
                 updated_at = NOW()
             WHERE id = $6
             RETURNING *",
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.duration)
        .bind(service.price)
        .bind(service.is_active)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(updated)
    }

    async fn delete_cascade(&self, id: i64) -> AppResult<Option<u64>> {
        let mut tx = self.db.begin().await?;

        // Row lock keeps new bookings from slipping in between the two deletes
        let locked =
            sqlx::query_scalar::<_, i64>("SELECT id FROM services WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let removed = sqlx::query("DELETE FROM appointments WHERE service_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(removed))
    }
}
