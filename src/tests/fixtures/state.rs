use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use crate::modules::employees::core::employee::EmployeeFields;
use crate::modules::employees::core::employee_id::EmployeeId;
use crate::shell::state::AppState;
use rstest::fixture;
use std::sync::Arc;

#[fixture]
pub fn test_state() -> AppState {
    AppState {
        store: Arc::new(InMemoryEmployeeStore::new()),
    }
}

#[fixture]
pub fn offline_state() -> AppState {
    let mut store = InMemoryEmployeeStore::new();
    store.toggle_offline();
    AppState {
        store: Arc::new(store),
    }
}

pub async fn make_seeded_state(fields: EmployeeFields) -> (AppState, EmployeeId) {
    let store = InMemoryEmployeeStore::new();
    let id = store.insert(fields).await.unwrap();
    (
        AppState {
            store: Arc::new(store),
        },
        id,
    )
}
