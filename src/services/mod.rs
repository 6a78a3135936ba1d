pub mod appointment_service;
pub mod catalog_service;

pub use appointment_service::AppointmentService;
pub use catalog_service::CatalogService;
