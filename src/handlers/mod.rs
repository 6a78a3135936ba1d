pub mod appointment_handler;
pub mod health_handler;
pub mod service_handler;

pub use appointment_handler::{
    booking_options, create_appointment, delete_appointment, get_appointment, list_appointments,
    update_appointment, update_appointment_status,
};
pub use health_handler::health_check;
pub use service_handler::{
    create_service, delete_service, get_service, list_services, update_service,
};
