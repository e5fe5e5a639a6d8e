//! In-memory `ConfigStore` for engine tests, scripted with per-id failures
//! and a call log.
#![allow(dead_code)] // each test binary uses a different slice of this module

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use ent_core::{Entity, EntityStub, ExportBundle, ExportMeta, entity_type};
use ent_engine::ProgressSink;
use ent_store::{ConfigStore, StoreError};
use indexmap::IndexMap;

pub const ORIGIN: &str = "https://store.test";

#[derive(Clone)]
pub struct FailSpec {
    status: u16,
    reason: String,
    message: String,
}

impl FailSpec {
    fn to_error(&self) -> StoreError {
        StoreError::Api {
            status: self.status,
            reason: self.reason.clone(),
            message: self.message.clone(),
        }
    }
}

fn spec(status: u16, reason: &str, message: &str) -> FailSpec {
    FailSpec {
        status,
        reason: reason.to_string(),
        message: message.to_string(),
    }
}

/// Scripted in-memory store. Entity state lives behind a mutex; failure
/// specs are fixed at construction.
#[derive(Default)]
pub struct MockStore {
    entities: Mutex<IndexMap<String, Entity>>,
    fail_get: HashMap<String, FailSpec>,
    fail_put: HashMap<String, FailSpec>,
    fail_delete: HashMap<String, FailSpec>,
    fail_listing: Option<FailSpec>,
    calls: Mutex<Vec<String>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(self, id: &str, body: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut map) = body else {
            panic!("entity body must be a JSON object");
        };
        map.insert("_id".to_string(), serde_json::Value::String(id.to_string()));
        self.entities
            .lock()
            .unwrap()
            .insert(id.to_string(), Entity(map));
        self
    }

    pub fn fail_get(mut self, id: &str, status: u16, reason: &str, message: &str) -> Self {
        self.fail_get.insert(id.to_string(), spec(status, reason, message));
        self
    }

    pub fn fail_put(mut self, id: &str, status: u16, reason: &str, message: &str) -> Self {
        self.fail_put.insert(id.to_string(), spec(status, reason, message));
        self
    }

    pub fn fail_delete(mut self, id: &str, status: u16, reason: &str, message: &str) -> Self {
        self.fail_delete
            .insert(id.to_string(), spec(status, reason, message));
        self
    }

    pub fn fail_listing(mut self, status: u16, reason: &str, message: &str) -> Self {
        self.fail_listing = Some(spec(status, reason, message));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn ids(&self) -> Vec<String> {
        self.entities.lock().unwrap().keys().cloned().collect()
    }

    pub fn entity(&self, id: &str) -> Option<Entity> {
        self.entities.lock().unwrap().get(id).cloned()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn not_found(id: &str) -> StoreError {
        StoreError::Api {
            status: 404,
            reason: "Not Found".to_string(),
            message: format!("No configuration exists for id {id}"),
        }
    }
}

#[async_trait]
impl ConfigStore for MockStore {
    async fn list_stubs(&self) -> Result<Vec<EntityStub>, StoreError> {
        self.record("list_stubs".to_string());
        if let Some(fail) = &self.fail_listing {
            return Err(fail.to_error());
        }
        Ok(self
            .entities
            .lock()
            .unwrap()
            .keys()
            .map(|id| EntityStub {
                id: id.clone(),
                pid: id.replace('/', "."),
                factory_pid: id.contains('/').then(|| entity_type(id).to_string()),
            })
            .collect())
    }

    async fn list_entities(&self) -> Result<Vec<Entity>, StoreError> {
        self.record("list_entities".to_string());
        if let Some(fail) = &self.fail_listing {
            return Err(fail.to_error());
        }
        Ok(self.entities.lock().unwrap().values().cloned().collect())
    }

    async fn list_entities_by_type(&self, ty: &str) -> Result<Vec<Entity>, StoreError> {
        self.record(format!("list_by_type {ty}"));
        if let Some(fail) = &self.fail_listing {
            return Err(fail.to_error());
        }
        Ok(self
            .entities
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| entity_type(id) == ty)
            .map(|(_, entity)| entity.clone())
            .collect())
    }

    async fn get_entity(&self, id: &str) -> Result<Entity, StoreError> {
        self.record(format!("get {id}"));
        if let Some(fail) = self.fail_get.get(id) {
            return Err(fail.to_error());
        }
        self.entities
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn put_entity(&self, id: &str, body: &Entity, _wait: bool) -> Result<Entity, StoreError> {
        self.record(format!("put {id}"));
        if let Some(fail) = self.fail_put.get(id) {
            return Err(fail.to_error());
        }
        self.entities
            .lock()
            .unwrap()
            .insert(id.to_string(), body.clone());
        Ok(body.clone())
    }

    async fn delete_entity(&self, id: &str) -> Result<Entity, StoreError> {
        self.record(format!("delete {id}"));
        if let Some(fail) = self.fail_delete.get(id) {
            return Err(fail.to_error());
        }
        self.entities
            .lock()
            .unwrap()
            .shift_remove(id)
            .ok_or_else(|| Self::not_found(id))
    }
}

/// Records progress events for assertions.
#[derive(Default)]
pub struct RecordingProgress {
    pub started_total: Mutex<Option<u64>>,
    pub advanced: Mutex<u64>,
    pub finished: Mutex<Option<String>>,
}

impl ProgressSink for RecordingProgress {
    fn start(&self, total: u64, _message: &str) {
        *self.started_total.lock().unwrap() = Some(total);
    }

    fn advance(&self, _message: &str) {
        *self.advanced.lock().unwrap() += 1;
    }

    fn finish_ok(&self, message: &str) {
        *self.finished.lock().unwrap() = Some(message.to_string());
    }

    fn finish_err(&self, message: &str) {
        *self.finished.lock().unwrap() = Some(message.to_string());
    }
}

/// Build a bundle from literal `(id, body)` pairs, in order. Bodies get an
/// `_id` field, matching what a real export captures.
pub fn bundle(entries: &[(&str, serde_json::Value)]) -> ExportBundle {
    let mut bundle = ExportBundle::new(ExportMeta::now(ORIGIN, "tester"));
    for (id, body) in entries {
        let serde_json::Value::Object(mut map) = body.clone() else {
            panic!("entity body must be a JSON object");
        };
        map.insert("_id".to_string(), serde_json::Value::String((*id).to_string()));
        bundle.insert(*id, Entity(map));
    }
    bundle
}
