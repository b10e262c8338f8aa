use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlDatabaseError;
use tracing::{debug, error};
use uuid::Uuid;

use super::EmployeeRepository;
use super::password::{hash_password, verify_password};
use crate::error::RepositoryError;
use crate::model::{Employee, Paging};

const MAX_PAGE_SIZE: u32 = 100;

/// MySQL `ER_DUP_ENTRY`: a unique key already holds the value.
const ER_DUP_ENTRY: u16 = 1062;

const SELECT_EMPLOYEE: &str = r#"
    SELECT id, name, username, password, role, division, position, contact,
           created_at, updated_at
    FROM employees
"#;

pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Employee, RepositoryError> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE {column} = ?");

        sqlx::query_as::<_, Employee>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, column, "Failed to fetch employee");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)
    }
}

/// Page is 1-based; size is clamped to `1..=MAX_PAGE_SIZE`.
fn normalize_paging(page: u32, size: u32) -> (u32, u32, u64) {
    let page = page.max(1);
    let size = size.clamp(1, MAX_PAGE_SIZE);
    let offset = u64::from(page - 1) * u64::from(size);
    (page, size, offset)
}

fn is_duplicate_entry(number: Option<u16>) -> bool {
    number == Some(ER_DUP_ENTRY)
}

fn map_write_error(e: sqlx::Error, username: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        let number = db_err
            .try_downcast_ref::<MySqlDatabaseError>()
            .map(|e| e.number());
        if is_duplicate_entry(number) {
            return RepositoryError::Duplicate(format!("username {username}"));
        }
    }
    RepositoryError::Database(e)
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn get_by_id(&self, id: &str) -> Result<Employee, RepositoryError> {
        self.fetch_one_where("id", id)
            .await
            .map(Employee::without_password)
    }

    async fn get_by_username(&self, username: &str) -> Result<Employee, RepositoryError> {
        self.fetch_one_where("username", username)
            .await
            .map(Employee::without_password)
    }

    async fn get_by_username_for_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Employee, RepositoryError> {
        let employee = match self.fetch_one_where("username", username).await {
            Ok(employee) => employee,
            Err(RepositoryError::NotFound) => return Err(RepositoryError::InvalidCredentials),
            Err(e) => return Err(e),
        };

        verify_password(password, &employee.password)?;
        Ok(employee.without_password())
    }

    async fn create(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let hashed = hash_password(&employee.password)?;

        sqlx::query(
            r#"
            INSERT INTO employees
            (id, name, username, password, role, division, position, contact, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(&id)
        .bind(&employee.name)
        .bind(&employee.username)
        .bind(&hashed)
        .bind(&employee.role)
        .bind(&employee.division)
        .bind(&employee.position)
        .bind(&employee.contact)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, username = %employee.username, "Failed to insert employee");
            map_write_error(e, &employee.username)
        })?;

        debug!(employee_id = %id, "Employee inserted");
        self.get_by_id(&id).await
    }

    async fn update(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let hashed = hash_password(&employee.password)?;

        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, username = ?, password = ?, role = ?, division = ?,
                position = ?, contact = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.username)
        .bind(&hashed)
        .bind(&employee.role)
        .bind(&employee.division)
        .bind(&employee.position)
        .bind(&employee.contact)
        .bind(&employee.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id = %employee.id, "Failed to update employee");
            map_write_error(e, &employee.username)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        self.get_by_id(&employee.id).await
    }

    async fn list(&self, page: u32, size: u32) -> Result<(Vec<Employee>, Paging), RepositoryError> {
        let (page, size, offset) = normalize_paging(page, size);

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count employees");
                RepositoryError::from(e)
            })?;

        let data_sql = format!("{SELECT_EMPLOYEE} ORDER BY created_at DESC, id LIMIT ? OFFSET ?");
        debug!(sql = %data_sql, page, size, offset, "Fetching employees");

        let employees = sqlx::query_as::<_, Employee>(&data_sql)
            .bind(i64::from(size))
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch employees");
                RepositoryError::from(e)
            })?;

        let employees = employees
            .into_iter()
            .map(Employee::without_password)
            .collect();

        Ok((employees, Paging::new(page, size, total.max(0) as u64)))
    }
}
