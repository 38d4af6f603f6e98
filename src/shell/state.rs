use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}
