use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::error::UseCaseError;
use crate::model::{Employee, Paging};
use crate::repository::EmployeeRepository;

/// Validates employee requests and forwards them to the repository.
#[derive(Clone)]
pub struct EmployeeUseCase {
    repo: Arc<dyn EmployeeRepository>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl EmployeeUseCase {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "employee_find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: &str) -> Result<Employee, UseCaseError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    #[instrument(name = "employee_find_by_username", skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Employee, UseCaseError> {
        if is_blank(username) {
            info!("Validation failed: empty username");
            return Err(UseCaseError::UsernameRequired);
        }

        Ok(self.repo.get_by_username(username).await?)
    }

    #[instrument(name = "employee_login", skip(self, password))]
    pub async fn find_for_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Employee, UseCaseError> {
        let rejected = match (is_blank(username), password.is_empty()) {
            (true, true) => Some(UseCaseError::UsernameAndPasswordRequired),
            (true, false) => Some(UseCaseError::UsernameRequired),
            (false, true) => Some(UseCaseError::PasswordRequired),
            (false, false) => None,
        };
        if let Some(err) = rejected {
            info!(reason = %err, "Validation failed: missing credentials");
            return Err(err);
        }

        self.repo
            .get_by_username_for_login(username, password)
            .await
            .map_err(|e| {
                info!(error = %e, "Invalid credentials");
                UseCaseError::InvalidCredentials
            })
    }

    #[instrument(
        name = "employee_register",
        skip(self, payload),
        fields(username = %payload.username)
    )]
    pub async fn register(&self, payload: Employee) -> Result<Employee, UseCaseError> {
        let missing = payload.missing_fields();
        if !missing.is_empty() {
            info!(?missing, "Validation failed: required fields empty");
            return Err(UseCaseError::FieldRequired(missing));
        }

        self.repo.create(payload).await.map_err(|e| {
            error!(error = %e, "Failed to save employee");
            UseCaseError::SaveFailed(e)
        })
    }

    #[instrument(
        name = "employee_update",
        skip(self, payload),
        fields(employee_id = %payload.id)
    )]
    pub async fn update(&self, payload: Employee) -> Result<Employee, UseCaseError> {
        let mut missing = payload.missing_fields();
        if payload.id.is_empty() {
            missing.insert(0, "id");
        }
        if !missing.is_empty() {
            info!(?missing, "Validation failed: required fields empty");
            return Err(UseCaseError::FieldRequired(missing));
        }

        self.repo.update(payload).await.map_err(|e| {
            error!(error = %e, "Failed to save employee");
            UseCaseError::SaveFailed(e)
        })
    }

    #[instrument(name = "employee_list", skip(self))]
    pub async fn list_all(
        &self,
        page: u32,
        size: u32,
    ) -> Result<(Vec<Employee>, Paging), UseCaseError> {
        Ok(self.repo.list(page, size).await?)
    }
}
