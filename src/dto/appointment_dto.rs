use serde::Deserialize;

use crate::utils::form::{lenient_number, trimmed_text, Lenient};

/// Create appointment request. A `status` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub user_id: Option<Lenient<i64>>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub service_id: Option<Lenient<i64>>,

    #[serde(default, deserialize_with = "trimmed_text")]
    pub appointment_date: Option<String>,

    #[serde(default, deserialize_with = "trimmed_text")]
    pub notes: Option<String>,
}

/// Full appointment update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub user_id: Option<Lenient<i64>>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub service_id: Option<Lenient<i64>>,

    #[serde(default, deserialize_with = "trimmed_text")]
    pub appointment_date: Option<String>,

    #[serde(default, deserialize_with = "trimmed_text")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "trimmed_text")]
    pub notes: Option<String>,
}

/// Status-only update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default, deserialize_with = "trimmed_text")]
    pub status: Option<String>,
}

/// `GET /appointments` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAppointmentsQuery {
    pub status: Option<String>,
    pub page: Option<String>,
}
