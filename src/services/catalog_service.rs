use crate::config::AppState;
use crate::dto::{PageRequest, Paginated, ServiceRequest};
use crate::interceptors::{AppError, AppResult};
use crate::models::{Service, ServiceDetails};

/// Services are listed ten to a page
pub const SERVICES_PER_PAGE: u32 = 10;

/// Business rules for the bookable service catalogue
#[derive(Clone)]
pub struct CatalogService {
    state: AppState,
}

impl CatalogService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// List services, newest first
    pub async fn list(&self, page: Option<&str>) -> AppResult<Paginated<Service>> {
        let page = PageRequest::from_query(page, SERVICES_PER_PAGE);
        self.state.services.paginate(page).await
    }

    /// Create a new service
    pub async fn create(&self, request: ServiceRequest) -> AppResult<Service> {
        let new_service = request.into_new_service()?;
        let service = self.state.services.insert(new_service).await?;

        tracing::info!(service_id = service.id, name = %service.name, "Service created");
        Ok(service)
    }

    /// Get a service with its appointments and their users
    pub async fn get(&self, id: i64) -> AppResult<ServiceDetails> {
        let service = self.find_or_fail(id).await?;
        let appointments = self.state.appointments.for_service(id).await?;

        Ok(ServiceDetails {
            service,
            appointments,
        })
    }

    /// Replace every mutable field of a service
    pub async fn update(&self, id: i64, request: ServiceRequest) -> AppResult<Service> {
        self.find_or_fail(id).await?;

        let changes = request.into_new_service()?;
        let service = self
            .state
            .services
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("Service", id))?;

        tracing::info!(service_id = id, "Service updated");
        Ok(service)
    }

    /// Delete a service and, atomically, every appointment booked against it
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let removed = self
            .state
            .services
            .delete_cascade(id)
            .await?
            .ok_or_else(|| AppError::not_found("Service", id))?;

        tracing::info!(service_id = id, appointments_removed = removed, "Service deleted");
        Ok(removed)
    }

    async fn find_or_fail(&self, id: i64) -> AppResult<Service> {
        self.state
            .services
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Service", id))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{AppointmentStatus, AppointmentWithUser};
    use crate::repositories::{MockAppointmentRepository, MockServiceRepository, MockUserDirectory};
    use crate::test_support::{self, fixed_now};
    use crate::utils::Lenient;

    fn catalog(
        services: MockServiceRepository,
        appointments: MockAppointmentRepository,
    ) -> CatalogService {
        CatalogService::new(test_support::state(services, appointments, MockUserDirectory::new()))
    }

    fn haircut_request() -> ServiceRequest {
        ServiceRequest {
            name: Some("Haircut".to_string()),
            description: None,
            duration: Some(Lenient::Parsed(30)),
            price: Some(Lenient::Parsed(Decimal::new(2500, 2))),
            is_active: Some(Lenient::Parsed(true)),
        }
    }

    #[tokio::test]
    async fn create_stores_exactly_the_input() {
        let mut services = MockServiceRepository::new();
        services
            .expect_insert()
            .withf(|new| {
                new.name == "Haircut"
                    && new.description.is_none()
                    && new.duration == 30
                    && new.price == Decimal::new(2500, 2)
                    && new.is_active
            })
            .times(1)
            .returning(|new| Ok(new.into_service(1, fixed_now())));

        let created = catalog(services, MockAppointmentRepository::new())
            .create(haircut_request())
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Haircut");
        assert_eq!(created.duration, 30);
        assert_eq!(created.price, Decimal::new(2500, 2));
        assert!(created.is_active);
    }

    #[tokio::test]
    async fn create_with_invalid_input_writes_nothing() {
        let mut services = MockServiceRepository::new();
        services.expect_insert().never();

        let mut request = haircut_request();
        request.duration = Some(Lenient::Parsed(0));
        request.price = Some(Lenient::Parsed(Decimal::NEGATIVE_ONE));

        let result = catalog(services, MockAppointmentRepository::new())
            .create(request)
            .await;

        match result {
            Err(AppError::ValidationError(errors)) => {
                assert!(errors.has("duration"));
                assert!(errors.has("price"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_includes_appointments_with_users() {
        let mut services = MockServiceRepository::new();
        services
            .expect_find()
            .with(eq(1))
            .returning(|id| Ok(Some(test_support::service(id))));

        let mut appointments = MockAppointmentRepository::new();
        appointments.expect_for_service().with(eq(1)).returning(|service_id| {
            Ok(vec![AppointmentWithUser {
                appointment: test_support::appointment(4, service_id, AppointmentStatus::Pending),
                user: test_support::user(7),
            }])
        });

        let details = catalog(services, appointments).get(1).await.unwrap();

        assert_eq!(details.service.id, 1);
        assert_eq!(details.appointments.len(), 1);
        assert_eq!(details.appointments[0].user.id, 7);
    }

    #[tokio::test]
    async fn get_unknown_service_is_not_found() {
        let mut services = MockServiceRepository::new();
        services.expect_find().returning(|_| Ok(None));
        let mut appointments = MockAppointmentRepository::new();
        appointments.expect_for_service().never();

        let result = catalog(services, appointments).get(42).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_unknown_service_is_not_found_before_validation() {
        let mut services = MockServiceRepository::new();
        services.expect_find().returning(|_| Ok(None));
        services.expect_update().never();

        let result = catalog(services, MockAppointmentRepository::new())
            .update(42, ServiceRequest::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let mut services = MockServiceRepository::new();
        services
            .expect_find()
            .returning(|id| Ok(Some(test_support::service(id))));
        services
            .expect_update()
            .withf(|id, changes| *id == 3 && changes.name == "Beard trim" && !changes.is_active)
            .returning(|id, changes| Ok(Some(changes.into_service(id, fixed_now()))));

        let request = ServiceRequest {
            name: Some("Beard trim".to_string()),
            description: Some("Shape and line-up".to_string()),
            duration: Some(Lenient::Parsed(15)),
            price: Some(Lenient::Parsed(Decimal::new(1000, 2))),
            is_active: None,
        };

        let updated = catalog(services, MockAppointmentRepository::new())
            .update(3, request)
            .await
            .unwrap();

        assert_eq!(updated.duration, 15);
        assert_eq!(updated.description.as_deref(), Some("Shape and line-up"));
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn delete_reports_cascaded_appointments() {
        let mut services = MockServiceRepository::new();
        services
            .expect_delete_cascade()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(3)));

        let removed = catalog(services, MockAppointmentRepository::new())
            .delete(1)
            .await
            .unwrap();

        assert_eq!(removed, 3);
    }

    #[tokio::test]
    async fn delete_unknown_service_is_not_found() {
        let mut services = MockServiceRepository::new();
        services.expect_delete_cascade().returning(|_| Ok(None));

        let result = catalog(services, MockAppointmentRepository::new())
            .delete(9)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_uses_pages_of_ten() {
        let mut services = MockServiceRepository::new();
        services
            .expect_paginate()
            .with(eq(PageRequest::new(2, 10)))
            .returning(|page| Ok(Paginated::new(vec![test_support::service(11)], page, 11)));

        let page = catalog(services, MockAppointmentRepository::new())
            .list(Some("2"))
            .await
            .unwrap();

        assert_eq!(page.per_page, 10);
        assert_eq!(page.last_page, 2);
    }
}
