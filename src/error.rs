use thiserror::Error;

/// Failures raised by an `EmployeeRepository` implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("employee not found")]
    NotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("duplicate employee: {0}")]
    Duplicate(String),
    #[error("password hashing failed: {0}")]
    Password(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Errors returned by `EmployeeUseCase`.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("username is required")]
    UsernameRequired,
    #[error("password is required")]
    PasswordRequired,
    #[error("username and password are required")]
    UsernameAndPasswordRequired,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("field required: {}", .0.join(", "))]
    FieldRequired(Vec<&'static str>),
    #[error("failed to save employee data: {0}")]
    SaveFailed(#[source] RepositoryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// True for input problems the caller can fix.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UseCaseError::UsernameRequired
                | UseCaseError::PasswordRequired
                | UseCaseError::UsernameAndPasswordRequired
                | UseCaseError::FieldRequired(_)
        )
    }
}
