//! Employee Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::convert;
use crate::db::models::Employee;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find one page of employees.
    ///
    /// Ordered by record id so offset paging never skips or repeats rows
    /// while the row set is unchanged.
    pub async fn find_all_paged(&self, page: u32, size: u32) -> RepoResult<Vec<Employee>> {
        let start = i64::from(page) * i64::from(size);
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY id LIMIT $limit START $start")
            .bind(("limit", i64::from(size)))
            .bind(("start", start))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &Uuid) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = self.base.db().select(convert::record_id(*id)).await?;
        Ok(employee)
    }

    /// Whether any employee already uses the given email
    pub async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let matches: Vec<Employee> = result.take(0)?;
        Ok(!matches.is_empty())
    }

    /// Insert (no id) or update-in-place (id present); returns the stored row.
    ///
    /// Inserts are keyed by a fresh UUID.
    pub async fn save(&self, entity: Employee) -> RepoResult<Employee> {
        match entity.id {
            Some(id) => {
                let mut result = self
                    .base
                    .db()
                    .query(
                        r#"UPDATE $thing SET
                            email = $email,
                            first_name = $first_name,
                            last_name = $last_name
                        RETURN AFTER"#,
                    )
                    .bind(("thing", id.clone()))
                    .bind(("email", entity.email))
                    .bind(("first_name", entity.first_name))
                    .bind(("last_name", entity.last_name))
                    .await?;
                result
                    .take::<Option<Employee>>(0)?
                    .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
            }
            None => {
                let key = Uuid::new_v4();
                let mut result = self
                    .base
                    .db()
                    .query(
                        r#"CREATE type::thing('employee', $key) SET
                            email = $email,
                            first_name = $first_name,
                            last_name = $last_name
                        RETURN AFTER"#,
                    )
                    .bind(("key", key.simple().to_string()))
                    .bind(("email", entity.email))
                    .bind(("first_name", entity.first_name))
                    .bind(("last_name", entity.last_name))
                    .await?;
                result
                    .take::<Option<Employee>>(0)?
                    .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
            }
        }
    }

    /// Delete by id. Callers pre-check existence; deleting an absent record
    /// is a silent no-op at this layer.
    pub async fn delete_by_id(&self, id: &Uuid) -> RepoResult<()> {
        let _: Option<Employee> = self.base.db().delete(convert::record_id(*id)).await?;
        Ok(())
    }
}
