//! In-browser backend for the `mock` build: a seeded `InMemoryBackend`
//! shared by the public pages and the admin console.

use std::rc::Rc;

use async_trait::async_trait;
use rescue_site_shared::{
    crud::{ResourceApi, UploadedImage},
    memory::InMemoryBackend,
    models::{ContactDraft, DonationRequest, StatItem},
    resource::{Record, ResourceKind},
    ApiError, ContactInfo, CredentialVerifier, VerifiedIdentity,
};
use serde_json::{json, Value};

thread_local! {
    static BACKEND: Rc<InMemoryBackend> = Rc::new(InMemoryBackend::seeded());
}

/// Email the mock sign-in button logs in with; seeded as an admin.
pub const MOCK_ADMIN_EMAIL: &str = "admin@example.org";

#[derive(Debug, Clone)]
pub struct MockAdminApi {
    backend: Rc<InMemoryBackend>,
}

impl PartialEq for MockAdminApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl MockAdminApi {
    pub fn shared() -> Self {
        Self {
            backend: BACKEND.with(Rc::clone),
        }
    }

    pub fn backend(&self) -> &InMemoryBackend {
        &self.backend
    }
}

#[async_trait(?Send)]
impl ResourceApi for MockAdminApi {
    type Upload = web_sys::File;

    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, ApiError> {
        self.backend.list(kind).await
    }

    async fn fetch_singleton(&self, kind: ResourceKind) -> Result<Option<Record>, ApiError> {
        self.backend.fetch_singleton(kind).await
    }

    async fn create(&self, kind: ResourceKind, body: &Value) -> Result<(), ApiError> {
        self.backend.create(kind, body).await
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: Option<&str>,
        body: &Value,
    ) -> Result<(), ApiError> {
        self.backend.update(kind, id, body).await
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), ApiError> {
        self.backend.delete(kind, id).await
    }

    async fn upload_image(
        &self,
        folder: &str,
        upload: Self::Upload,
    ) -> Result<UploadedImage, ApiError> {
        self.backend.upload_image(folder, upload.name()).await
    }

    async fn fetch_contact_info(&self) -> Result<Option<ContactInfo>, ApiError> {
        self.backend.fetch_contact_info().await
    }

    async fn update_contact_info(&self, info: &ContactInfo) -> Result<(), ApiError> {
        self.backend.update_contact_info(info).await
    }
}

#[async_trait(?Send)]
impl CredentialVerifier for MockAdminApi {
    async fn verify(&self, credential: &str) -> Result<VerifiedIdentity, ApiError> {
        self.backend.verify(credential).await
    }
}

/// Public statistics derived from the admin-edited record.
pub fn statistics() -> Vec<StatItem> {
    let record = BACKEND.with(|backend| backend.singleton(ResourceKind::Statistics));
    let Some(record) = record else {
        return Vec::new();
    };
    let number = |field: &str| record.get(field).and_then(Value::as_f64).unwrap_or(0.0);
    vec![
        StatItem {
            id: "volunteers".into(),
            title: "מתנדבים פעילים".into(),
            value: number("volunteersCount"),
            unit: None,
            order: Some(1),
        },
        StatItem {
            id: "calls".into(),
            title: "קריאות חירום שטופלו".into(),
            value: number("emergencyCalls"),
            unit: None,
            order: Some(2),
        },
        StatItem {
            id: "uptime".into(),
            title: "זמינות".into(),
            value: number("uptime"),
            unit: Some("%".into()),
            order: Some(3),
        },
    ]
}

pub fn record_contact(draft: &ContactDraft) {
    BACKEND.with(|backend| {
        backend.insert(
            ResourceKind::Contact,
            json!({
                "name": draft.name,
                "email": draft.email,
                "message": draft.message,
                "status": "pending",
                "createdAt": js_sys::Date::new_0().to_iso_string().as_string(),
            }),
        );
    });
}

pub fn record_donation(request: &DonationRequest) {
    BACKEND.with(|backend| {
        backend.insert(
            ResourceKind::Donations,
            json!({
                "donorName": request.donor_name,
                "donorEmail": request.donor_email,
                "amount": request.amount,
                "message": request.message,
                "status": "pending",
                "createdAt": js_sys::Date::new_0().to_iso_string().as_string(),
            }),
        );
    });
}
