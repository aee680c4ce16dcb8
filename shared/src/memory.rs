//! Process-local stand-in for the REST backend, used by tests and by the
//! frontend's `mock` build.

use std::{cell::RefCell, collections::BTreeMap};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::{
    auth::{CredentialVerifier, VerifiedIdentity},
    contact::ContactInfo,
    crud::{ResourceApi, UploadedImage},
    error::ApiError,
    resource::{Layout, Record, ResourceKind},
    session::UserIdentity,
};

/// A request the backend received, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Verify(String),
    List(ResourceKind),
    FetchSingleton(ResourceKind),
    Create(ResourceKind),
    Update(ResourceKind, Option<String>),
    Delete(ResourceKind, String),
    Upload(String),
    FetchContactInfo,
    UpdateContactInfo,
}

#[derive(Debug, Default)]
struct State {
    collections: BTreeMap<ResourceKind, Vec<Record>>,
    singletons: BTreeMap<ResourceKind, Record>,
    contact_info: Option<ContactInfo>,
    calls: Vec<Call>,
    /// Calls to let through before failing, and the failure to return.
    pending_failure: Option<(usize, ApiError)>,
    next_id: u64,
}

impl State {
    fn record_call(&mut self, call: Call) -> Result<(), ApiError> {
        self.calls.push(call);
        match self.pending_failure.take() {
            Some((0, error)) => Err(error),
            Some((skip, error)) => {
                self.pending_failure = Some((skip - 1, error));
                Ok(())
            },
            None => Ok(()),
        }
    }

    fn allocate_id(&mut self, kind: ResourceKind) -> String {
        self.next_id += 1;
        format!("{}-{}", kind.key(), self.next_id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: RefCell<State>,
}

fn object(body: &Value) -> Map<String, Value> {
    match body {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}

fn not_found() -> ApiError {
    ApiError::Rejected("Not found".to_string())
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with one admin (`admin@example.org`) and a little content in
    /// every collection.
    pub fn seeded() -> Self {
        let backend = Self::new();
        backend.insert(
            ResourceKind::Admins,
            json!({"email": "admin@example.org", "name": "מנהל ראשי", "picture": "", "addedBy": "system"}),
        );
        backend.insert(
            ResourceKind::Gallery,
            json!({"title": "תרגיל הצלה", "category": "הכשרה", "imageUrl": ""}),
        );
        backend.insert(
            ResourceKind::Stories,
            json!({"title": "הצלה במטבח", "description": "המתנדבים הגיעו תוך 4 דקות.", "date": "2024-01-15"}),
        );
        backend.insert(
            ResourceKind::Sponsors,
            json!({"name": "תורם אחד", "category": "תורם ראשי"}),
        );
        backend.insert(
            ResourceKind::Donations,
            json!({"donorName": "דנה", "donorEmail": "dana@example.org", "amount": 100, "status": "pending", "createdAt": "2024-02-01"}),
        );
        backend.insert(
            ResourceKind::Contact,
            json!({"name": "יוסי", "email": "yossi@example.org", "message": "איך מצטרפים?", "status": "pending"}),
        );
        backend.set_singleton(
            ResourceKind::Statistics,
            json!({"volunteersCount": 120, "emergencyCalls": 3400, "averageResponseTime": "3.5", "uptime": 99}),
        );
        backend.set_contact_info(ContactInfo::fallback());
        backend
    }

    /// Add a record directly, bypassing the call log. Returns its id.
    pub fn insert(&self, kind: ResourceKind, body: Value) -> String {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id(kind);
        let mut map = object(&body);
        map.insert("id".to_string(), Value::String(id.clone()));
        state
            .collections
            .entry(kind)
            .or_default()
            .push(Record(map));
        id
    }

    pub fn set_singleton(&self, kind: ResourceKind, body: Value) {
        self.state
            .borrow_mut()
            .singletons
            .insert(kind, Record::from(body));
    }

    pub fn set_contact_info(&self, info: ContactInfo) {
        self.state.borrow_mut().contact_info = Some(info);
    }

    pub fn contact_info(&self) -> Option<ContactInfo> {
        self.state.borrow().contact_info.clone()
    }

    pub fn records(&self, kind: ResourceKind) -> Vec<Record> {
        self.state
            .borrow()
            .collections
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    pub fn singleton(&self, kind: ResourceKind) -> Option<Record> {
        self.state.borrow().singletons.get(&kind).cloned()
    }

    /// Make the next request fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        self.fail_after(0, error);
    }

    /// Let `skip` requests succeed, then fail the one after with `error`.
    pub fn fail_after(&self, skip: usize, error: ApiError) {
        self.state.borrow_mut().pending_failure = Some((skip, error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    fn admin_named(&self, email: &str) -> Option<Record> {
        self.state
            .borrow()
            .collections
            .get(&ResourceKind::Admins)?
            .iter()
            .find(|admin| admin.text("email").eq_ignore_ascii_case(email))
            .cloned()
    }
}

#[async_trait(?Send)]
impl ResourceApi for InMemoryBackend {
    /// File name of the picked image.
    type Upload = String;

    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, ApiError> {
        self.state.borrow_mut().record_call(Call::List(kind))?;
        Ok(self.records(kind))
    }

    async fn fetch_singleton(&self, kind: ResourceKind) -> Result<Option<Record>, ApiError> {
        self.state
            .borrow_mut()
            .record_call(Call::FetchSingleton(kind))?;
        Ok(self.singleton(kind))
    }

    async fn create(&self, kind: ResourceKind, body: &Value) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.record_call(Call::Create(kind))?;
        if kind == ResourceKind::Admins {
            let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
            let duplicate = state
                .collections
                .get(&kind)
                .is_some_and(|admins| admins.iter().any(|a| a.text("email").eq_ignore_ascii_case(email)));
            if duplicate {
                return Err(ApiError::Rejected("Admin already exists".to_string()));
            }
        }
        let id = state.allocate_id(kind);
        let mut map = object(body);
        map.insert("id".to_string(), Value::String(id));
        state.collections.entry(kind).or_default().push(Record(map));
        Ok(())
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: Option<&str>,
        body: &Value,
    ) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.record_call(Call::Update(kind, id.map(str::to_string)))?;
        let target = match (kind.layout(), id) {
            (Layout::Singleton, _) => state.singletons.entry(kind).or_default(),
            (Layout::List, Some(id)) => state
                .collections
                .get_mut(&kind)
                .and_then(|records| records.iter_mut().find(|r| r.id().as_deref() == Some(id)))
                .ok_or_else(not_found)?,
            (Layout::List, None) => return Err(not_found()),
        };
        for (key, value) in object(body) {
            if key != "id" {
                target.0.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.record_call(Call::Delete(kind, id.to_string()))?;
        let records = state.collections.entry(kind).or_default();
        let before = records.len();
        records.retain(|record| record.id().as_deref() != Some(id));
        if records.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn upload_image(
        &self,
        folder: &str,
        upload: Self::Upload,
    ) -> Result<UploadedImage, ApiError> {
        self.state
            .borrow_mut()
            .record_call(Call::Upload(folder.to_string()))?;
        let public_id = format!("{folder}/{}", upload.trim_start_matches('/'));
        Ok(UploadedImage {
            url: format!("https://images.example.org/{public_id}"),
            public_id,
        })
    }

    async fn fetch_contact_info(&self) -> Result<Option<ContactInfo>, ApiError> {
        self.state
            .borrow_mut()
            .record_call(Call::FetchContactInfo)?;
        Ok(self.contact_info())
    }

    async fn update_contact_info(&self, info: &ContactInfo) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.record_call(Call::UpdateContactInfo)?;
        state.contact_info = Some(info.clone());
        Ok(())
    }
}

/// Treats the credential as the visitor's email: listed admins verify as
/// admins, anyone else as a plain user.
#[async_trait(?Send)]
impl CredentialVerifier for InMemoryBackend {
    async fn verify(&self, credential: &str) -> Result<VerifiedIdentity, ApiError> {
        self.state
            .borrow_mut()
            .record_call(Call::Verify(credential.to_string()))?;
        let email = credential.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::Rejected("Invalid credential".to_string()));
        }
        let admin = self.admin_named(email);
        let user = UserIdentity {
            email: email.to_string(),
            name: admin
                .as_ref()
                .map(|record| record.text("name"))
                .unwrap_or_default(),
            picture: admin
                .as_ref()
                .map(|record| record.text("picture"))
                .unwrap_or_default(),
            is_admin: admin.is_some(),
        };
        let token = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            format!("session-{}", state.next_id)
        };
        Ok(VerifiedIdentity {
            user,
            token: Some(token),
        })
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[tokio::test]
    async fn verify_marks_listed_admins() -> Result<()> {
        let backend = InMemoryBackend::seeded();
        let admin = backend.verify("Admin@Example.org").await?;
        assert!(admin.user.is_admin);
        assert!(admin.token.is_some());

        let visitor = backend.verify("visitor@example.org").await?;
        assert!(!visitor.user.is_admin);

        assert!(matches!(backend.verify("  ").await, Err(ApiError::Rejected(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_record_is_rejected() {
        let backend = InMemoryBackend::new();
        let err = backend
            .update(ResourceKind::Stories, Some("nope"), &json!({"title": "x"}))
            .await
            .expect_err("missing");
        assert_eq!(err.user_message(), "Not found");
    }

    #[tokio::test]
    async fn fail_next_applies_once() -> Result<()> {
        let backend = InMemoryBackend::new();
        backend.fail_next(ApiError::Network("down".into()));
        assert!(backend.list(ResourceKind::Gallery).await.is_err());
        assert!(backend.list(ResourceKind::Gallery).await?.is_empty());
        assert_eq!(backend.calls().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn fail_after_skips_earlier_requests() -> Result<()> {
        let backend = InMemoryBackend::new();
        backend.fail_after(1, ApiError::Network("down".into()));
        assert!(backend.list(ResourceKind::Gallery).await.is_ok());
        assert!(backend.list(ResourceKind::Gallery).await.is_err());
        assert!(backend.list(ResourceKind::Gallery).await.is_ok());
        Ok(())
    }
}
