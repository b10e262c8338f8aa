//! Employee management for the room-booking system: lookup, login check,
//! registration, update and paginated listing over a pluggable repository.

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod repository;
pub mod telemetry;
pub mod usecase;

pub use error::{RepositoryError, UseCaseError};
pub use model::{Employee, Paging};
pub use repository::EmployeeRepository;
pub use usecase::EmployeeUseCase;
