use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Bookable offering (database entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Minutes
    pub duration: i32,
    pub price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field set for inserting or fully replacing a service
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub duration: i32,
    pub price: Decimal,
    pub is_active: bool,
}

impl NewService {
    /// Materialize as a stored row
    #[cfg(test)]
    pub fn into_service(self, id: i64, now: DateTime<Utc>) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            duration: self.duration,
            price: self.price,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
