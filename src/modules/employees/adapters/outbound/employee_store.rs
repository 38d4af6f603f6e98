// Port for the employee collection.
//
// Handlers code against this trait only. The MongoDB adapter backs it in production and the
// in memory adapter backs it in tests and local development.

use crate::modules::employees::core::employee::{Employee, EmployeeFields};
use crate::modules::employees::core::employee_id::EmployeeId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no employee matches the given id")]
    NotFound,

    #[error("{0}")]
    Backend(String),

    #[error("failed to decode stored employee: {0}")]
    Decode(String),
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    /// Insert a new record and return the id the store assigned to it.
    async fn insert(&self, fields: EmployeeFields) -> Result<EmployeeId, StoreError>;

    async fn find(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError>;

    /// Overwrite name, salary and age. Fails with `StoreError::NotFound` when nothing matches.
    async fn update(&self, id: &EmployeeId, fields: &EmployeeFields) -> Result<(), StoreError>;

    /// Returns the number of deleted records.
    async fn delete(&self, id: &EmployeeId) -> Result<u64, StoreError>;
}
