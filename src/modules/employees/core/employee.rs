use crate::modules::employees::core::employee_id::EmployeeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// An employee record as stored and returned over HTTP.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl Employee {
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id: Some(id),
            name: fields.name,
            salary: fields.salary,
            age: fields.age,
        }
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            salary: self.salary,
            age: self.age,
        }
    }
}

/// The client-writable part of an employee.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeFields {
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Malformed(String),

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("invalid field {field:?}: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl EmployeeFields {
    /// Decode a request body. Absent or null members keep their zero value and `id` is ignored.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let Value::Object(object) = value else {
            return Err(DecodeError::NotAnObject);
        };

        Ok(Self {
            name: string_field(&object, "name")?,
            salary: number_field(&object, "salary")?,
            age: number_field(&object, "age")?,
        })
    }
}

/// Exact key first, then the first key equal ignoring ASCII case (`"Salary"` fills `salary`).
fn member<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).or_else(|| {
        object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(field))
            .map(|(_, value)| value)
    })
}

fn string_field(object: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    match member(object, field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

fn number_field(object: &Map<String, Value>, field: &'static str) -> Result<f64, DecodeError> {
    match member(object, field) {
        None | Some(Value::Null) => Ok(0.0),
        Some(value) => value.as_f64().ok_or(DecodeError::InvalidField {
            field,
            expected: "a number",
        }),
    }
}
