// MongoDB implementation of the EmployeeStore port.
//
// Documents live in the `employees` collection as `{ _id: ObjectId, name, salary, age }`.
// Documents whose `_id` is not an ObjectId are still listed, without an id.

use crate::modules::employees::adapters::outbound::employee_store::{EmployeeStore, StoreError};
use crate::modules::employees::core::employee::{Employee, EmployeeFields};
use crate::modules::employees::core::employee_id::EmployeeId;
use crate::shared::infrastructure::document_store::DocumentStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

pub const EMPLOYEES_COLLECTION: &str = "employees";

#[derive(Debug, Serialize, Deserialize)]
struct EmployeeDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Bson>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    salary: f64,
    #[serde(default)]
    age: f64,
}

impl From<EmployeeDocument> for Employee {
    fn from(doc: EmployeeDocument) -> Self {
        Self {
            id: doc
                .id
                .as_ref()
                .and_then(Bson::as_object_id)
                .map(|oid| EmployeeId::from_bytes(oid.bytes())),
            name: doc.name,
            salary: doc.salary,
            age: doc.age,
        }
    }
}

fn object_id(id: &EmployeeId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

fn by_id(id: &EmployeeId) -> Document {
    doc! { "_id": object_id(id) }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

pub struct MongoEmployeeStore {
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeStore {
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.collection(EMPLOYEES_COLLECTION),
        }
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(backend)?;
        let documents: Vec<EmployeeDocument> = cursor.try_collect().await.map_err(backend)?;
        Ok(documents.into_iter().map(Employee::from).collect())
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<EmployeeId, StoreError> {
        let document = EmployeeDocument {
            id: None,
            name: fields.name,
            salary: fields.salary,
            age: fields.age,
        };
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(backend)?;
        result
            .inserted_id
            .as_object_id()
            .map(|oid| EmployeeId::from_bytes(oid.bytes()))
            .ok_or_else(|| {
                StoreError::Decode(format!("inserted id {} is not an ObjectId", result.inserted_id))
            })
    }

    async fn find(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        let found = self.collection.find_one(by_id(id)).await.map_err(backend)?;
        Ok(found.map(Employee::from))
    }

    async fn update(&self, id: &EmployeeId, fields: &EmployeeFields) -> Result<(), StoreError> {
        let update = doc! {
            "$set": {
                "name": fields.name.as_str(),
                "age": fields.age,
                "salary": fields.salary,
            }
        };
        self.collection
            .find_one_and_update(by_id(id), update)
            .await
            .map_err(backend)?
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(by_id(id)).await.map_err(backend)?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod employee_mongo_store_tests {
    use super::*;
    use crate::modules::employees::core::employee_id::EMPLOYEE_ID_LEN;
    use mongodb::bson;
    use rstest::rstest;

    #[rstest]
    fn it_should_map_ids_to_object_ids_byte_for_byte() {
        let id = EmployeeId::parse("64b7f0c2a1d3e4f5a6b7c8d9").unwrap();
        assert_eq!(object_id(&id).to_hex(), id.to_string());
        assert_eq!(by_id(&id), doc! { "_id": ObjectId::parse_str("64b7f0c2a1d3e4f5a6b7c8d9").unwrap() });
    }

    #[rstest]
    fn it_should_not_write_an_id_for_new_documents() {
        let document = EmployeeDocument {
            id: None,
            name: "Ada".into(),
            salary: 1000.0,
            age: 30.0,
        };
        let raw = bson::to_document(&document).unwrap();
        assert!(!raw.contains_key("_id"));
        assert_eq!(raw.get_str("name").unwrap(), "Ada");
        assert_eq!(raw.get_f64("salary").unwrap(), 1000.0);
        assert_eq!(raw.get_f64("age").unwrap(), 30.0);
    }

    #[rstest]
    fn it_should_decode_stored_documents_into_employees() {
        let oid = ObjectId::from_bytes([7; EMPLOYEE_ID_LEN]);
        let raw = doc! { "_id": oid, "name": "Ada", "salary": 1200.0, "age": 31.0 };
        let document: EmployeeDocument = bson::from_document(raw).unwrap();
        let employee = Employee::from(document);
        assert_eq!(employee.id, Some(EmployeeId::from_bytes([7; EMPLOYEE_ID_LEN])));
        assert_eq!(employee.name, "Ada");
        assert_eq!(employee.salary, 1200.0);
    }

    #[rstest]
    #[case(Bson::String("legacy-1".into()))]
    #[case(Bson::Int64(42))]
    fn it_should_decode_documents_with_foreign_ids_without_an_id(#[case] foreign: Bson) {
        let raw = doc! { "_id": foreign, "name": "Ada", "salary": 1000.0, "age": 30.0 };
        let document: EmployeeDocument = bson::from_document(raw).unwrap();
        let employee = Employee::from(document);
        assert_eq!(employee.id, None);
        assert_eq!(employee.name, "Ada");
    }
}
