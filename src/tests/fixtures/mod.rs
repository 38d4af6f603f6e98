pub mod employees;
pub mod state;
