pub mod appointment_dto;
pub mod booking_dto;
pub mod pagination;
pub mod service_dto;

pub use appointment_dto::{
    CreateAppointmentRequest,
    ListAppointmentsQuery,
    UpdateAppointmentRequest,
    UpdateStatusRequest,
};
pub use booking_dto::BookingOptions;
pub use pagination::{PageQuery, PageRequest, Paginated};
pub use service_dto::ServiceRequest;
