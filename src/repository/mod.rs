//! Storage contract for employee records.
//!
//! The use case depends only on [`EmployeeRepository`]; the MySQL
//! implementation lives in [`mysql`].

use async_trait::async_trait;

use crate::error::RepositoryError;
use crate::model::{Employee, Paging};

pub mod mysql;
pub mod password;

pub use mysql::MySqlEmployeeRepository;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch one employee by id. Reads never carry the stored password.
    async fn get_by_id(&self, id: &str) -> Result<Employee, RepositoryError>;

    /// Fetch one employee by username.
    async fn get_by_username(&self, username: &str) -> Result<Employee, RepositoryError>;

    /// Fetch the employee owning `username`, only if `password` matches.
    async fn get_by_username_for_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Employee, RepositoryError>;

    /// Persist a new employee and return the stored record.
    async fn create(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    /// Overwrite an existing employee and return the stored record.
    /// `employee.password` is plaintext and replaces the stored one.
    async fn update(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    /// One page of employees plus the paging descriptor.
    async fn list(&self, page: u32, size: u32) -> Result<(Vec<Employee>, Paging), RepositoryError>;
}
