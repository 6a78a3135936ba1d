use axum::extract::{Query, State};

use crate::config::AppState;
use crate::dto::{PageQuery, Paginated, ServiceRequest};
use crate::interceptors::{ApiSuccess, AppError, PathId, Payload};
use crate::models::{Service, ServiceDetails};
use crate::services::CatalogService;

/// List services
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<ApiSuccess<Paginated<Service>>, AppError> {
    let catalog = CatalogService::new(state);
    let services = catalog.list(query.page.as_deref()).await?;

    Ok(ApiSuccess::new("Services retrieved successfully", services))
}

/// Create a service
pub async fn create_service(
    State(state): State<AppState>,
    Payload(request): Payload<ServiceRequest>,
) -> Result<ApiSuccess<Service>, AppError> {
    let catalog = CatalogService::new(state);
    let service = catalog.create(request).await?;

    Ok(ApiSuccess::created("Service created successfully", service))
}

/// Get a service with its appointments
pub async fn get_service(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiSuccess<ServiceDetails>, AppError> {
    let catalog = CatalogService::new(state);
    let service = catalog.get(id).await?;

    Ok(ApiSuccess::new("Service retrieved successfully", service))
}

/// Update a service
pub async fn update_service(
    State(state): State<AppState>,
    PathId(id): PathId,
    Payload(request): Payload<ServiceRequest>,
) -> Result<ApiSuccess<Service>, AppError> {
    let catalog = CatalogService::new(state);
    let service = catalog.update(id, request).await?;

    Ok(ApiSuccess::new("Service updated successfully", service))
}

/// Delete a service and its appointments
pub async fn delete_service(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiSuccess<()>, AppError> {
    let catalog = CatalogService::new(state);
    catalog.delete(id).await?;

    Ok(ApiSuccess::<()>::new_without_data("Service deleted successfully"))
}
