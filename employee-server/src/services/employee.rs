//! Employee Service
//!
//! Business-rule layer for the employee resource. Everything crossing this
//! boundary is a DTO; entities stay between here and the repository.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use crate::db::convert;
use crate::db::models::EmployeeDto;
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

const NOT_FOUND_MSG: &str = "Employee has been not found with the given id";

/// Offset page request forwarded to the store
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

#[derive(Clone)]
pub struct EmployeeService {
    repository: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repository: EmployeeRepository::new(db),
        }
    }

    /// One page of employees, in fetch order
    pub async fn get_all_employees(&self, page: PageRequest) -> AppResult<Vec<EmployeeDto>> {
        let employees = self.repository.find_all_paged(page.page, page.size).await?;
        Ok(employees.into_iter().map(convert::to_dto).collect())
    }

    /// Fetch a single employee by id
    pub async fn get_employee_by_id(&self, id: &Uuid) -> AppResult<EmployeeDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(convert::to_dto)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))
    }

    /// Update an existing employee. The handler has already forced `dto.id`
    /// to the path id.
    ///
    /// Email uniqueness is NOT re-checked here: an update may introduce a
    /// duplicate email. This mirrors the reference behavior and is pinned by
    /// a test so it cannot change silently.
    pub async fn update_employee(&self, dto: EmployeeDto) -> AppResult<()> {
        let id = dto
            .id
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))?;
        let existing = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))?;
        let merged = convert::merge_into_entity(dto, existing);
        self.repository.save(merged).await?;
        Ok(())
    }

    /// Create a new employee. The id must be absent and the email unused.
    pub async fn save_employee(&self, dto: EmployeeDto) -> AppResult<()> {
        if dto.id.is_some() {
            return Err(AppError::BadRequest(
                "Employee Id must be null for saving".to_string(),
            ));
        }
        if self.repository.exists_by_email(&dto.email).await? {
            return Err(AppError::BadRequest("Email is already exist".to_string()));
        }
        self.repository.save(convert::to_entity(dto)).await?;
        Ok(())
    }

    /// Delete an employee by id
    pub async fn delete_employee_by_id(&self, id: &Uuid) -> AppResult<()> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))?;
        self.repository.delete_by_id(id).await?;
        Ok(())
    }
}
