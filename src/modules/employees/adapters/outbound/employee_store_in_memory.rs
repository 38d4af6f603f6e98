// In memory implementation of the EmployeeStore port.
//
// Purpose
// - Support handler tests and local development without a MongoDB instance.
//
// Responsibilities
// - Assign ids from a counter, so listing follows insertion order.
// - Simulate an unreachable backend through `toggle_offline`.

use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::{Employee, EmployeeFields};
use crate::modules::employees::core::employee_id::{EMPLOYEE_ID_LEN, EmployeeId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    next: u64,
    rows: BTreeMap<EmployeeId, Employee>,
}

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    inner: RwLock<Inner>,
    offline: bool,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("employee store offline".into()));
        }
        Ok(())
    }
}

fn id_from_counter(counter: u64) -> EmployeeId {
    let mut bytes = [0u8; EMPLOYEE_ID_LEN];
    bytes[EMPLOYEE_ID_LEN - 8..].copy_from_slice(&counter.to_be_bytes());
    EmployeeId::from_bytes(bytes)
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<EmployeeId, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        guard.next += 1;
        let id = id_from_counter(guard.next);
        guard.rows.insert(id, Employee::new(id, fields));
        Ok(id)
    }

    async fn find(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.rows.get(id).cloned())
    }

    async fn update(&self, id: &EmployeeId, fields: &EmployeeFields) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let row = guard.rows.get_mut(id).ok_or(StoreError::NotFound)?;
        row.name = fields.name.clone();
        row.salary = fields.salary;
        row.age = fields.age;
        Ok(())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<u64, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.write().await.rows.remove(id).map_or(0, |_| 1))
    }
}
