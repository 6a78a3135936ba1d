pub mod appointment_repository;
pub mod service_repository;
pub mod user_directory;

pub use appointment_repository::{AppointmentRepository, PgAppointmentRepository};
pub use service_repository::{PgServiceRepository, ServiceRepository};
pub use user_directory::{PgUserDirectory, UserDirectory};

#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
