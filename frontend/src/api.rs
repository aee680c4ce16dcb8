#[cfg(not(feature = "mock"))]
use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(not(feature = "mock"))]
use rescue_site_shared::{
    crud::{ResourceApi, UploadedImage},
    endpoints::bearer,
    envelope::{decode_envelope, decode_required},
    resource::{Record, ResourceKind},
    CredentialVerifier, Endpoints, VerifiedIdentity,
};
use rescue_site_shared::{
    models::{ContactDraft, DonationRequest, GalleryItem, Sponsor, StatItem, Story},
    ApiError, ContactInfo,
};
#[cfg(not(feature = "mock"))]
use serde::de::{DeserializeOwned, IgnoredAny};
#[cfg(not(feature = "mock"))]
use serde_json::{json, Value};

#[cfg(feature = "mock")]
pub use crate::mock::{MockAdminApi as AdminApi, MockAdminApi as Verifier};

#[cfg(not(feature = "mock"))]
pub type AdminApi = HttpResourceApi;
#[cfg(not(feature = "mock"))]
pub type Verifier = HttpVerifier;

/// Admin client carrying the session's bearer token.
pub fn admin_api(token: Option<String>) -> AdminApi {
    #[cfg(feature = "mock")]
    {
        let _ = token;
        return crate::mock::MockAdminApi::shared();
    }

    #[cfg(not(feature = "mock"))]
    {
        HttpResourceApi::new(crate::config::endpoints(), token)
    }
}

pub fn verifier() -> Verifier {
    #[cfg(feature = "mock")]
    {
        return crate::mock::MockAdminApi::shared();
    }

    #[cfg(not(feature = "mock"))]
    {
        HttpVerifier::new(crate::config::endpoints())
    }
}

#[cfg(not(feature = "mock"))]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "mock"))]
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    decode_envelope(status, &body)
}

#[cfg(not(feature = "mock"))]
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<Option<T>, ApiError> {
    let response = request.send().await.map_err(network)?;
    read_envelope(response).await
}

#[cfg(not(feature = "mock"))]
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    body: &impl serde::Serialize,
) -> Result<Option<T>, ApiError> {
    let response = request
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Serialize error: {e}")))?
        .send()
        .await
        .map_err(network)?;
    read_envelope(response).await
}

/// `ResourceApi` over the backend's `/api/admin/*` routes.
#[cfg(not(feature = "mock"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResourceApi {
    endpoints: Endpoints,
    token: Option<String>,
}

#[cfg(not(feature = "mock"))]
impl HttpResourceApi {
    pub fn new(endpoints: Endpoints, token: Option<String>) -> Self {
        Self {
            endpoints,
            token,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::MissingToken)?;
        Ok(request.header("Authorization", &bearer(token)))
    }
}

#[cfg(not(feature = "mock"))]
#[async_trait(?Send)]
impl ResourceApi for HttpResourceApi {
    type Upload = web_sys::File;

    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>, ApiError> {
        let request = self.authorized(Request::get(&self.endpoints.admin_collection(kind)))?;
        Ok(send::<Vec<Record>>(request).await?.unwrap_or_default())
    }

    async fn fetch_singleton(&self, kind: ResourceKind) -> Result<Option<Record>, ApiError> {
        let request = self.authorized(Request::get(&self.endpoints.admin_collection(kind)))?;
        send(request).await
    }

    async fn create(&self, kind: ResourceKind, body: &Value) -> Result<(), ApiError> {
        let request = self.authorized(Request::post(&self.endpoints.admin_collection(kind)))?;
        send_json::<IgnoredAny>(request, body).await.map(|_| ())
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: Option<&str>,
        body: &Value,
    ) -> Result<(), ApiError> {
        let url = match id {
            Some(id) => self.endpoints.admin_item(kind, id),
            None => self.endpoints.admin_collection(kind),
        };
        let request = self.authorized(Request::put(&url))?;
        send_json::<IgnoredAny>(request, body).await.map(|_| ())
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), ApiError> {
        let request = self.authorized(Request::delete(&self.endpoints.admin_item(kind, id)))?;
        send::<IgnoredAny>(request).await.map(|_| ())
    }

    async fn upload_image(
        &self,
        folder: &str,
        upload: Self::Upload,
    ) -> Result<UploadedImage, ApiError> {
        let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob("image", &upload).map_err(js_error)?;
        form.append_with_str("folder", folder).map_err(js_error)?;

        // No Content-Type: the browser sets the multipart boundary itself.
        let request = self.authorized(Request::post(&self.endpoints.admin_upload_image()))?;
        let response = request
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        decode_required(status, &body)
    }

    async fn fetch_contact_info(&self) -> Result<Option<ContactInfo>, ApiError> {
        let request = self.authorized(Request::get(&self.endpoints.admin_contact_info()))?;
        send(request).await
    }

    async fn update_contact_info(&self, info: &ContactInfo) -> Result<(), ApiError> {
        let request = self.authorized(Request::put(&self.endpoints.admin_contact_info()))?;
        send_json::<IgnoredAny>(request, info).await.map(|_| ())
    }
}

/// Posts the sign-in credential to the backend, which owns verification.
#[cfg(not(feature = "mock"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HttpVerifier {
    endpoints: Endpoints,
}

#[cfg(not(feature = "mock"))]
impl HttpVerifier {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
        }
    }
}

#[cfg(not(feature = "mock"))]
#[async_trait(?Send)]
impl CredentialVerifier for HttpVerifier {
    async fn verify(&self, credential: &str) -> Result<VerifiedIdentity, ApiError> {
        let response = Request::post(&self.endpoints.auth_verify())
            .header("Content-Type", "application/json")
            .json(&json!({ "credential": credential }))
            .map_err(|e| ApiError::Decode(format!("Serialize error: {e}")))?
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        decode_required(status, &body)
    }
}

/// Public statistics, sorted for display.
pub async fn fetch_statistics() -> Result<Vec<StatItem>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(crate::mock::statistics());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = crate::config::endpoints().public_statistics();
        let mut items: Vec<StatItem> = send(Request::get(&url)).await?.unwrap_or_default();
        rescue_site_shared::site::sort_stat_items(&mut items);
        Ok(items)
    }
}

pub async fn fetch_gallery() -> Result<Vec<GalleryItem>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(Vec::new());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = crate::config::endpoints().public_gallery();
        Ok(send(Request::get(&url)).await?.unwrap_or_default())
    }
}

pub async fn fetch_stories() -> Result<Vec<Story>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(Vec::new());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = crate::config::endpoints().public_stories();
        Ok(send(Request::get(&url)).await?.unwrap_or_default())
    }
}

pub async fn fetch_sponsors() -> Result<Vec<Sponsor>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(Vec::new());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = crate::config::endpoints().public_donors();
        Ok(send(Request::get(&url)).await?.unwrap_or_default())
    }
}

pub async fn fetch_contact_info() -> Result<Option<ContactInfo>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(crate::mock::MockAdminApi::shared().backend().contact_info());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = crate::config::endpoints().public_contact_info();
        send(Request::get(&url)).await
    }
}

pub async fn submit_contact(draft: &ContactDraft) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        crate::mock::record_contact(draft);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = crate::config::endpoints().public_contact();
        send_json::<IgnoredAny>(Request::post(&url), draft)
            .await
            .map(|_| ())
    }
}

pub async fn submit_donation(request: &DonationRequest) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        crate::mock::record_donation(request);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = crate::config::endpoints().public_donations();
        send_json::<IgnoredAny>(Request::post(&url), request)
            .await
            .map(|_| ())
    }
}
