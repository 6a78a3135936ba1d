use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use validator::Validate;

use crate::interceptors::{AppError, AppResult};
use crate::models::NewService;
use crate::utils::form::{flag, lenient_number, trimmed_text};
use crate::utils::{collect_errors, parsed, require, require_parsed, Lenient};

/// Create / full-update service request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ServiceRequest {
    #[serde(default, deserialize_with = "trimmed_text")]
    #[validate(length(
        max = 255,
        message = "The name field must not be greater than 255 characters."
    ))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "trimmed_text")]
    pub description: Option<String>,

    /// Minutes
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration: Option<Lenient<i32>>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<Lenient<Decimal>>,

    /// Absent means inactive
    #[serde(default, deserialize_with = "flag")]
    pub is_active: Option<Lenient<bool>>,
}

impl ServiceRequest {
    /// Validate every field, producing the column values to store
    pub fn into_new_service(self) -> AppResult<NewService> {
        let mut errors = collect_errors(&self);

        let name = require(&mut errors, "name", self.name);
        let duration = require_parsed(&mut errors, "duration", self.duration, "an integer");
        let price = require_parsed(&mut errors, "price", self.price, "a number");
        let is_active = parsed(&mut errors, "is_active", self.is_active, "true or false");

        if matches!(duration, Some(d) if d < 1) {
            errors.add("duration", "The duration field must be at least 1.");
        }
        if matches!(price, Some(p) if p < Decimal::ZERO) {
            errors.add("price", "The price field must be at least 0.");
        }

        match (name, duration, price) {
            (Some(name), Some(duration), Some(price)) if errors.is_empty() => Ok(NewService {
                name,
                description: self.description,
                duration,
                price: price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                is_active: is_active.unwrap_or(false),
            }),
            _ => Err(AppError::ValidationError(errors)),
        }
    }
}
