use serde::{Deserialize, Serialize};

use crate::models::{Service, UserSummary};

/// Selection lists for building a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingOptions {
    /// Active services only
    pub services: Vec<Service>,
    /// Ordered by name
    pub users: Vec<UserSummary>,
}
