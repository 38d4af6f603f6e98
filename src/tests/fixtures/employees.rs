use crate::modules::employees::core::employee::EmployeeFields;

pub struct EmployeeFieldsBuilder {
    inner: EmployeeFields,
}

impl Default for EmployeeFieldsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeFieldsBuilder {
    pub fn new() -> Self {
        Self {
            inner: EmployeeFields {
                name: "Teddy Test".to_string(),
                salary: 1000.0,
                age: 30.0,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn salary(mut self, v: f64) -> Self {
        self.inner.salary = v;
        self
    }

    pub fn age(mut self, v: f64) -> Self {
        self.inner.age = v;
        self
    }

    pub fn build(self) -> EmployeeFields {
        self.inner
    }
}
