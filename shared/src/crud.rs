//! Generic list/edit/save/delete cycle shared by every admin tab.
//!
//! [`TabState`] is a plain state machine fed with [`TabEvent`]s; the step
//! functions ([`load`], [`save`], [`remove`], [`upload`]) each perform one
//! network action. A UI reducer wires the two together itself, while
//! [`CrudController`] does it for headless callers.

use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    contact::ContactInfo,
    error::ApiError,
    resource::{Editing, Layout, Record, ResourceKind},
};

/// Hosted location of an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
    #[serde(default)]
    pub public_id: String,
}

/// The admin REST surface. Implementations attach the bearer token to every
/// call.
#[async_trait(?Send)]
pub trait ResourceApi {
    /// Whatever the platform hands over for a picked file.
    type Upload;

    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, ApiError>;
    async fn fetch_singleton(&self, kind: ResourceKind) -> Result<Option<Record>, ApiError>;
    async fn create(&self, kind: ResourceKind, body: &Value) -> Result<(), ApiError>;
    /// `id` is `None` for singleton resources updated in place.
    async fn update(&self, kind: ResourceKind, id: Option<&str>, body: &Value)
        -> Result<(), ApiError>;
    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), ApiError>;
    async fn upload_image(&self, folder: &str, upload: Self::Upload)
        -> Result<UploadedImage, ApiError>;
    async fn fetch_contact_info(&self) -> Result<Option<ContactInfo>, ApiError>;
    async fn update_contact_info(&self, info: &ContactInfo) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl<A: ResourceApi + ?Sized> ResourceApi for Rc<A> {
    type Upload = A::Upload;

    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, ApiError> {
        (**self).list(kind).await
    }

    async fn fetch_singleton(&self, kind: ResourceKind) -> Result<Option<Record>, ApiError> {
        (**self).fetch_singleton(kind).await
    }

    async fn create(&self, kind: ResourceKind, body: &Value) -> Result<(), ApiError> {
        (**self).create(kind, body).await
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: Option<&str>,
        body: &Value,
    ) -> Result<(), ApiError> {
        (**self).update(kind, id, body).await
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), ApiError> {
        (**self).delete(kind, id).await
    }

    async fn upload_image(
        &self,
        folder: &str,
        upload: Self::Upload,
    ) -> Result<UploadedImage, ApiError> {
        (**self).upload_image(folder, upload).await
    }

    async fn fetch_contact_info(&self) -> Result<Option<ContactInfo>, ApiError> {
        (**self).fetch_contact_info().await
    }

    async fn update_contact_info(&self, info: &ContactInfo) -> Result<(), ApiError> {
        (**self).update_contact_info(info).await
    }
}

/// Which write a save turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update(Option<String>),
}

/// Create when the edited item has no identifier, update it otherwise.
/// Singletons are always updated in place.
pub fn plan_save(kind: ResourceKind, editing: &Editing) -> Result<WriteOp, ApiError> {
    let caps = kind.capabilities();
    if kind.layout() == Layout::Singleton {
        return if caps.edit {
            Ok(WriteOp::Update(None))
        } else {
            Err(ApiError::NotAllowed {
                kind,
                action: "update",
            })
        };
    }
    match &editing.target_id {
        Some(id) if caps.edit => Ok(WriteOp::Update(Some(id.clone()))),
        Some(_) => Err(ApiError::NotAllowed {
            kind,
            action: "update",
        }),
        None if caps.create => Ok(WriteOp::Create),
        None => Err(ApiError::NotAllowed {
            kind,
            action: "create",
        }),
    }
}

/// Fetch the tab's data; a singleton comes back as a zero- or one-element
/// list.
pub async fn load<A: ResourceApi + ?Sized>(
    api: &A,
    kind: ResourceKind,
) -> Result<Vec<Record>, ApiError> {
    match kind.layout() {
        Layout::List => api.list(kind).await,
        Layout::Singleton => Ok(api.fetch_singleton(kind).await?.into_iter().collect()),
    }
}

pub async fn save<A: ResourceApi + ?Sized>(
    api: &A,
    kind: ResourceKind,
    editing: &Editing,
) -> Result<WriteOp, ApiError> {
    let op = plan_save(kind, editing)?;
    let body = editing.form.payload(kind);
    tracing::debug!(kind = kind.key(), op = ?op, "saving record");
    match &op {
        WriteOp::Create => api.create(kind, &body).await?,
        WriteOp::Update(id) => api.update(kind, id.as_deref(), &body).await?,
    }
    Ok(op)
}

pub async fn remove<A: ResourceApi + ?Sized>(
    api: &A,
    kind: ResourceKind,
    id: &str,
) -> Result<(), ApiError> {
    if !kind.capabilities().delete {
        return Err(ApiError::NotAllowed {
            kind,
            action: "delete",
        });
    }
    api.delete(kind, id).await
}

pub async fn upload<A: ResourceApi + ?Sized>(
    api: &A,
    kind: ResourceKind,
    file: A::Upload,
) -> Result<UploadedImage, ApiError> {
    if !kind.capabilities().upload_image {
        return Err(ApiError::NotAllowed {
            kind,
            action: "upload",
        });
    }
    api.upload_image(kind.key(), file).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
    Editing,
    Saving,
}

/// Confirmation shown after a successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    Deleted,
    Uploaded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabEvent {
    /// `seq` identifies the request; only its own response is accepted.
    LoadStarted {
        seq: u64,
    },
    Loaded {
        seq: u64,
        records: Vec<Record>,
    },
    LoadFailed {
        seq: u64,
        error: ApiError,
    },
    BeginCreate,
    BeginEdit(Record),
    FieldChanged {
        field: String,
        value: String,
    },
    Cancel,
    SaveStarted,
    Saved,
    SaveFailed(ApiError),
    DeleteStarted(String),
    Deleted,
    DeleteFailed(ApiError),
    UploadStarted,
    Uploaded(UploadedImage),
    UploadFailed(ApiError),
    DismissMessages,
}

/// Client-side state of one admin tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabState {
    pub kind: ResourceKind,
    pub phase: TabPhase,
    pub records: Vec<Record>,
    pub editing: Option<Editing>,
    pub error: Option<String>,
    pub notice: Option<Notice>,
    pub uploading: bool,
    pub deleting: Option<String>,
    pending_load: Option<u64>,
}

impl TabState {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            phase: TabPhase::Idle,
            records: Vec::new(),
            editing: None,
            error: None,
            notice: None,
            uploading: false,
            deleting: None,
            pending_load: None,
        }
    }

    pub fn singleton(&self) -> Option<&Record> {
        match self.kind.layout() {
            Layout::Singleton => self.records.first(),
            Layout::List => None,
        }
    }

    /// Save button enabled.
    pub fn can_save(&self) -> bool {
        self.phase == TabPhase::Editing && self.editing.is_some() && !self.uploading
    }

    pub fn is_busy(&self) -> bool {
        self.phase == TabPhase::Saving || self.uploading || self.deleting.is_some()
    }

    fn settle_phase(&mut self) {
        self.phase = if self.editing.is_some() { TabPhase::Editing } else { TabPhase::Loaded };
    }

    fn reset_singleton_form(&mut self) {
        self.editing = self
            .records
            .first()
            .map(|record| Editing::of_record(self.kind, record));
    }

    pub fn apply(&mut self, event: TabEvent) {
        let caps = self.kind.capabilities();
        match event {
            TabEvent::LoadStarted {
                seq,
            } => {
                self.pending_load = Some(seq);
                if !matches!(self.phase, TabPhase::Editing | TabPhase::Saving) {
                    self.phase = TabPhase::Loading;
                }
            },
            TabEvent::Loaded {
                seq,
                records,
            } => {
                if self.pending_load != Some(seq) {
                    tracing::debug!(kind = self.kind.key(), seq, "dropping stale list response");
                    return;
                }
                self.pending_load = None;
                self.records = records;
                if self.phase == TabPhase::Saving {
                    return;
                }
                if matches!(self.phase, TabPhase::Loading | TabPhase::Errored) {
                    self.error = None;
                }
                if self.kind.layout() == Layout::Singleton {
                    self.reset_singleton_form();
                }
                self.settle_phase();
            },
            TabEvent::LoadFailed {
                seq,
                error,
            } => {
                if self.pending_load != Some(seq) {
                    return;
                }
                self.pending_load = None;
                self.error = Some(error.user_message());
                if self.phase == TabPhase::Loading {
                    self.phase = TabPhase::Errored;
                }
            },
            TabEvent::BeginCreate => {
                if !caps.create || self.phase == TabPhase::Saving {
                    return;
                }
                self.editing = Some(Editing::draft());
                self.error = None;
                self.notice = None;
                self.phase = TabPhase::Editing;
            },
            TabEvent::BeginEdit(record) => {
                if !caps.edit || self.phase == TabPhase::Saving {
                    return;
                }
                self.editing = Some(Editing::of_record(self.kind, &record));
                self.error = None;
                self.notice = None;
                self.phase = TabPhase::Editing;
            },
            TabEvent::FieldChanged {
                field,
                value,
            } => {
                if self.phase == TabPhase::Saving {
                    return;
                }
                if let Some(editing) = self.editing.as_mut() {
                    editing.form.set(field, value);
                }
            },
            TabEvent::Cancel => {
                if self.phase == TabPhase::Saving {
                    return;
                }
                match self.kind.layout() {
                    Layout::Singleton => self.reset_singleton_form(),
                    Layout::List => self.editing = None,
                }
                self.error = None;
                self.settle_phase();
            },
            TabEvent::SaveStarted => {
                if self.can_save() {
                    self.phase = TabPhase::Saving;
                    self.error = None;
                    self.notice = None;
                }
            },
            TabEvent::Saved => {
                self.editing = None;
                self.notice = Some(Notice::Saved);
                self.phase = TabPhase::Loaded;
            },
            TabEvent::SaveFailed(error) => {
                self.error = Some(error.user_message());
                self.settle_phase();
            },
            TabEvent::DeleteStarted(id) => {
                self.deleting = Some(id);
                self.notice = None;
            },
            TabEvent::Deleted => {
                let deleted = self.deleting.take();
                let editing_deleted = self
                    .editing
                    .as_ref()
                    .is_some_and(|editing| editing.target_id.is_some() && editing.target_id == deleted);
                if editing_deleted && self.phase != TabPhase::Saving {
                    self.editing = None;
                    self.settle_phase();
                }
                self.notice = Some(Notice::Deleted);
            },
            TabEvent::DeleteFailed(error) => {
                self.deleting = None;
                self.error = Some(error.user_message());
            },
            TabEvent::UploadStarted => {
                self.uploading = true;
                self.error = None;
            },
            TabEvent::Uploaded(image) => {
                self.uploading = false;
                if let Some(editing) = self.editing.as_mut() {
                    editing.form.set("imageUrl", image.url);
                    if !image.public_id.is_empty() {
                        editing.form.set("cloudinaryId", image.public_id);
                    }
                    self.notice = Some(Notice::Uploaded);
                }
            },
            TabEvent::UploadFailed(error) => {
                self.uploading = false;
                self.error = Some(error.user_message());
            },
            TabEvent::DismissMessages => {
                self.error = None;
                self.notice = None;
            },
        }
    }
}

/// Drives one tab end to end: every successful mutation is followed by a
/// fresh fetch so the list never keeps pre-mutation entries.
pub struct CrudController<A> {
    api: A,
    state: TabState,
    seq: u64,
}

impl<A: ResourceApi> CrudController<A> {
    pub fn new(api: A, kind: ResourceKind) -> Self {
        Self {
            api,
            state: TabState::new(kind),
            seq: 0,
        }
    }

    pub fn state(&self) -> &TabState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dispatch(&mut self, event: TabEvent) {
        self.state.apply(event);
    }

    pub fn begin_create(&mut self) {
        self.dispatch(TabEvent::BeginCreate);
    }

    pub fn begin_edit(&mut self, record: Record) {
        self.dispatch(TabEvent::BeginEdit(record));
    }

    pub fn edit_field(&mut self, field: &str, value: &str) {
        self.dispatch(TabEvent::FieldChanged {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    pub fn cancel(&mut self) {
        self.dispatch(TabEvent::Cancel);
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.seq += 1;
        let seq = self.seq;
        self.state.apply(TabEvent::LoadStarted {
            seq,
        });
        match load(&self.api, self.state.kind).await {
            Ok(records) => {
                self.state.apply(TabEvent::Loaded {
                    seq,
                    records,
                });
                Ok(())
            },
            Err(error) => {
                self.state.apply(TabEvent::LoadFailed {
                    seq,
                    error: error.clone(),
                });
                Err(error)
            },
        }
    }

    /// Re-list after a committed write. Failure stays in the tab state.
    async fn refresh_after_write(&mut self) {
        if let Err(error) = self.refresh().await {
            tracing::warn!(kind = self.state.kind.key(), %error, "re-list after write failed");
        }
    }

    /// Save the open form. `Ok(None)` when no form is open.
    /// A failed re-list afterwards is reported through [`TabState`] only.
    pub async fn save(&mut self) -> Result<Option<WriteOp>, ApiError> {
        let Some(editing) = self.state.editing.clone() else {
            return Ok(None);
        };
        self.state.apply(TabEvent::SaveStarted);
        match save(&self.api, self.state.kind, &editing).await {
            Ok(op) => {
                self.state.apply(TabEvent::Saved);
                self.refresh_after_write().await;
                Ok(Some(op))
            },
            Err(error) => {
                self.state.apply(TabEvent::SaveFailed(error.clone()));
                Err(error)
            },
        }
    }

    /// Delete `id` once `confirm` agrees. Returns whether a delete was issued.
    pub async fn delete(&mut self, id: &str, confirm: impl FnOnce() -> bool) -> Result<bool, ApiError> {
        if !confirm() {
            return Ok(false);
        }
        self.state.apply(TabEvent::DeleteStarted(id.to_string()));
        match remove(&self.api, self.state.kind, id).await {
            Ok(()) => {
                self.state.apply(TabEvent::Deleted);
                self.refresh_after_write().await;
                Ok(true)
            },
            Err(error) => {
                self.state.apply(TabEvent::DeleteFailed(error.clone()));
                Err(error)
            },
        }
    }

    pub async fn upload(&mut self, file: A::Upload) -> Result<UploadedImage, ApiError> {
        self.state.apply(TabEvent::UploadStarted);
        match upload(&self.api, self.state.kind, file).await {
            Ok(image) => {
                self.state.apply(TabEvent::Uploaded(image.clone()));
                Ok(image)
            },
            Err(error) => {
                self.state.apply(TabEvent::UploadFailed(error.clone()));
                Err(error)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, Result};
    use serde_json::json;

    use super::*;
    use crate::memory::{Call, InMemoryBackend};

    fn record(value: Value) -> Record {
        Record::from(value)
    }

    #[test]
    fn save_plan_depends_on_identifier() {
        let draft = Editing::draft();
        let existing = Editing::of_record(ResourceKind::Stories, &record(json!({"id": "s9"})));
        assert_eq!(plan_save(ResourceKind::Stories, &draft), Ok(WriteOp::Create));
        assert_eq!(
            plan_save(ResourceKind::Stories, &existing),
            Ok(WriteOp::Update(Some("s9".to_string())))
        );
        assert_eq!(plan_save(ResourceKind::Statistics, &draft), Ok(WriteOp::Update(None)));
        assert!(matches!(
            plan_save(ResourceKind::Donations, &draft),
            Err(ApiError::NotAllowed {
                action: "create",
                ..
            })
        ));
    }

    #[test]
    fn stale_load_response_is_ignored() {
        let mut state = TabState::new(ResourceKind::Gallery);
        state.apply(TabEvent::LoadStarted {
            seq: 1,
        });
        state.apply(TabEvent::LoadStarted {
            seq: 2,
        });
        state.apply(TabEvent::Loaded {
            seq: 1,
            records: vec![record(json!({"id": "old"}))],
        });
        assert_eq!(state.phase, TabPhase::Loading);
        assert!(state.records.is_empty());

        state.apply(TabEvent::Loaded {
            seq: 2,
            records: vec![record(json!({"id": "new"}))],
        });
        assert_eq!(state.phase, TabPhase::Loaded);
        assert_eq!(state.records[0].id().as_deref(), Some("new"));
    }

    #[test]
    fn load_failure_moves_to_errored() {
        let mut state = TabState::new(ResourceKind::Admins);
        state.apply(TabEvent::LoadStarted {
            seq: 1,
        });
        state.apply(TabEvent::LoadFailed {
            seq: 1,
            error: ApiError::Network("offline".to_string()),
        });
        assert_eq!(state.phase, TabPhase::Errored);
        assert_eq!(state.error.as_deref(), Some("network error: offline"));
    }

    #[test]
    fn field_edits_are_independent_per_keystroke() {
        let mut state = TabState::new(ResourceKind::Sponsors);
        state.apply(TabEvent::BeginCreate);
        for (field, value) in [("name", "M"), ("name", "Ma"), ("category", "Gold"), ("name", "Max")] {
            state.apply(TabEvent::FieldChanged {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        let form = &state.editing.as_ref().expect("editing").form;
        assert_eq!(form.get("name"), Some("Max"));
        assert_eq!(form.get("category"), Some("Gold"));
    }

    #[test]
    fn read_only_tab_refuses_forms() {
        let mut state = TabState::new(ResourceKind::Contact);
        state.apply(TabEvent::BeginCreate);
        state.apply(TabEvent::BeginEdit(record(json!({"id": "m1"}))));
        assert!(state.editing.is_none());
        assert_eq!(state.phase, TabPhase::Idle);
    }

    #[tokio::test]
    async fn create_then_update_hit_the_right_calls() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::new());
        let mut tab = CrudController::new(backend.clone(), ResourceKind::Stories);
        tab.refresh().await?;
        assert_eq!(tab.state().phase, TabPhase::Loaded);

        tab.begin_create();
        tab.edit_field("title", "Choking child");
        tab.edit_field("description", "Heimlich on scene");
        let op = tab.save().await?.context("form was open")?;
        assert_eq!(op, WriteOp::Create);
        assert!(tab.state().editing.is_none());
        assert_eq!(tab.state().notice, Some(Notice::Saved));
        assert_eq!(tab.state().records.len(), 1);

        let created = tab.state().records[0].clone();
        let id = created.id().context("backend assigned id")?;
        tab.begin_edit(created);
        tab.edit_field("title", "Choking child saved");
        let op = tab.save().await?.context("form was open")?;
        assert_eq!(op, WriteOp::Update(Some(id.clone())));
        assert_eq!(tab.state().records[0].text("title"), "Choking child saved");

        let calls = backend.calls();
        assert!(calls.contains(&Call::Create(ResourceKind::Stories)));
        assert!(calls.contains(&Call::Update(ResourceKind::Stories, Some(id))));
        Ok(())
    }

    #[tokio::test]
    async fn every_mutation_is_followed_by_a_fresh_list() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::new());
        let id = backend.insert(ResourceKind::Sponsors, json!({"name": "Old Co", "category": "partner"}));
        let mut tab = CrudController::new(backend.clone(), ResourceKind::Sponsors);
        tab.refresh().await?;

        // Change the backend behind the tab's back; the next mutation must
        // not keep the stale entry.
        backend.insert(ResourceKind::Sponsors, json!({"name": "Sneaky", "category": "donor"}));
        let deleted = tab.delete(&id, || true).await?;
        assert!(deleted);

        let names: Vec<_> = tab.state().records.iter().map(|r| r.text("name")).collect();
        assert_eq!(names, vec!["Sneaky".to_string()]);
        assert_eq!(
            backend.calls().last(),
            Some(&Call::List(ResourceKind::Sponsors))
        );
        Ok(())
    }

    #[tokio::test]
    async fn write_succeeds_even_when_the_relist_fails() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::new());
        let mut tab = CrudController::new(backend.clone(), ResourceKind::Gallery);
        tab.refresh().await?;

        tab.begin_create();
        tab.edit_field("title", "Night drill");
        // The create goes through, the list right after it does not.
        backend.fail_after(1, ApiError::Network("offline".to_string()));
        assert_eq!(tab.save().await?, Some(WriteOp::Create));

        assert_eq!(backend.records(ResourceKind::Gallery).len(), 1);
        assert_eq!(tab.state().phase, TabPhase::Errored);
        assert_eq!(tab.state().notice, Some(Notice::Saved));
        assert!(tab.state().editing.is_none());

        let id = backend.records(ResourceKind::Gallery)[0]
            .id()
            .context("created record id")?;
        backend.fail_after(1, ApiError::Network("offline".to_string()));
        assert!(tab.delete(&id, || true).await?);
        assert!(backend.records(ResourceKind::Gallery).is_empty());
        assert_eq!(tab.state().phase, TabPhase::Errored);
        Ok(())
    }

    #[tokio::test]
    async fn declined_confirmation_issues_no_delete() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::new());
        let id = backend.insert(ResourceKind::Gallery, json!({"title": "Drill"}));
        let mut tab = CrudController::new(backend.clone(), ResourceKind::Gallery);
        tab.refresh().await?;

        assert!(!tab.delete(&id, || false).await?);
        assert!(!backend
            .calls()
            .iter()
            .any(|call| matches!(call, Call::Delete(..))));
        assert_eq!(tab.state().records.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn failed_save_keeps_form_open_with_backend_message() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::new());
        let mut tab = CrudController::new(backend.clone(), ResourceKind::Admins);
        tab.refresh().await?;
        tab.begin_create();
        tab.edit_field("email", "dup@example.org");

        backend.fail_next(ApiError::Rejected("Admin already exists".to_string()));
        let err = tab.save().await.expect_err("save must fail");
        assert_eq!(err.user_message(), "Admin already exists");

        let state = tab.state();
        assert_eq!(state.phase, TabPhase::Editing);
        assert_eq!(state.error.as_deref(), Some("Admin already exists"));
        let form = &state.editing.as_ref().context("form stays open")?.form;
        assert_eq!(form.get("email"), Some("dup@example.org"));
        Ok(())
    }

    #[tokio::test]
    async fn singleton_tab_loads_straight_into_prefilled_form() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::new());
        backend.set_singleton(
            ResourceKind::Statistics,
            json!({"volunteersCount": 80, "emergencyCalls": 1200, "averageResponseTime": "3", "uptime": 99}),
        );
        let mut tab = CrudController::new(backend.clone(), ResourceKind::Statistics);
        tab.refresh().await?;

        assert_eq!(tab.state().phase, TabPhase::Editing);
        tab.edit_field("volunteersCount", "85");
        assert_eq!(tab.save().await?, Some(WriteOp::Update(None)));
        assert_eq!(tab.state().phase, TabPhase::Editing);
        let stats = tab.state().singleton().context("statistics")?;
        assert_eq!(stats.get("volunteersCount"), Some(&json!(85)));
        Ok(())
    }

    #[tokio::test]
    async fn upload_writes_hosted_url_into_form() -> Result<()> {
        let backend = Rc::new(InMemoryBackend::new());
        let mut tab = CrudController::new(backend.clone(), ResourceKind::Gallery);
        tab.begin_create();
        let image = tab.upload("ambulance.jpg".to_string()).await?;

        let form = &tab.state().editing.as_ref().context("editing")?.form;
        assert_eq!(form.get("imageUrl"), Some(image.url.as_str()));
        assert!(!tab.state().uploading);
        assert!(backend.calls().contains(&Call::Upload("gallery".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn upload_is_rejected_outside_gallery() {
        let backend = Rc::new(InMemoryBackend::new());
        let mut tab = CrudController::new(backend, ResourceKind::Stories);
        tab.begin_create();
        let err = tab.upload("x.png".to_string()).await.expect_err("not allowed");
        assert!(matches!(err, ApiError::NotAllowed { .. }));
        assert!(tab.state().error.is_some());
    }
}
