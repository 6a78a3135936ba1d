pub mod appointment;
pub mod service;
pub mod user;

pub use appointment::{
    Appointment, AppointmentDetails, AppointmentStatus, AppointmentWithUser, NewAppointment,
    ServiceDetails,
};
pub use service::{NewService, Service};
pub use user::UserSummary;
