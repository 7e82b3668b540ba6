//! Employee API Handlers
//!
//! Structural field validation happens here, before any service dispatch;
//! violations short-circuit with a 422 and never reach the service.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::StatusCode;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::EMPLOYEE_ROUTE_V1;
use crate::core::ServerState;
use crate::db::models::EmployeeDto;
use crate::services::{EmployeeService, PageRequest};
use crate::utils::validation::reject_on_violations;
use crate::utils::{ApiResponse, AppResult};

/// Offset paging query params (`?page=0&size=20`)
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        let defaults = PageRequest::default();
        PageRequest {
            page: query.page.unwrap_or(defaults.page),
            size: query.size.unwrap_or(defaults.size),
        }
    }
}

/// List one page of employees
pub async fn get_all(
    State(state): State<ServerState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Vec<EmployeeDto>>>> {
    info!("called - get {}", EMPLOYEE_ROUTE_V1);
    let service = EmployeeService::new(state.db.clone());
    let employees = service.get_all_employees(page.into()).await?;
    Ok(Json(ApiResponse::new(StatusCode::OK, employees)))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<EmployeeDto>>> {
    info!("called - get {}/{}", EMPLOYEE_ROUTE_V1, id);
    let service = EmployeeService::new(state.db.clone());
    let employee = service.get_employee_by_id(&id).await?;
    Ok(Json(ApiResponse::new(StatusCode::OK, employee)))
}

/// Create a new employee
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeDto>,
) -> AppResult<(StatusCode, Json<ApiResponse<&'static str>>)> {
    info!("called - post {}", EMPLOYEE_ROUTE_V1);
    reject_on_violations(payload.validate())?;
    let service = EmployeeService::new(state.db.clone());
    service.save_employee(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED,
            "Employee has been created",
        )),
    ))
}

/// Update an employee; the path id wins over any id in the body
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(mut payload): Json<EmployeeDto>,
) -> AppResult<(StatusCode, Json<ApiResponse<&'static str>>)> {
    info!("called - put {}/{}", EMPLOYEE_ROUTE_V1, id);
    reject_on_violations(payload.validate())?;
    payload.id = Some(id);
    let service = EmployeeService::new(state.db.clone());
    service.update_employee(payload).await?;
    Ok((
        StatusCode::NO_CONTENT,
        Json(ApiResponse::new(
            StatusCode::NO_CONTENT,
            "Employee has been updated",
        )),
    ))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<ApiResponse<&'static str>>)> {
    info!("called - delete {}/{}", EMPLOYEE_ROUTE_V1, id);
    let service = EmployeeService::new(state.db.clone());
    service.delete_employee_by_id(&id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        Json(ApiResponse::new(
            StatusCode::NO_CONTENT,
            "Employee has been deleted",
        )),
    ))
}
