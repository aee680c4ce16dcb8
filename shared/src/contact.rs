//! Branch contact details, edited as a single record beside the message
//! list.

use serde::{Deserialize, Serialize};

use crate::{crud::ResourceApi, error::ApiError, resource::FormState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub whatsapp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(default)]
    pub weekday: String,
    #[serde(default)]
    pub weekend: String,
}

/// Branch contact details shown on the public site; a singleton edited from
/// the contact tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_number: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub business_hours: BusinessHours,
}

/// Flat form fields of the contact-info editor.
pub const CONTACT_INFO_FIELDS: &[&str] = &[
    "phone",
    "email",
    "address",
    "emergencyNumber",
    "facebook",
    "instagram",
    "whatsapp",
];

impl ContactInfo {
    /// Built-in details used when the backend has none.
    pub fn fallback() -> Self {
        Self {
            phone: "+972 1-234-567-89".to_string(),
            email: "info@shoham.united-hatzalah.org".to_string(),
            address: "שוהם, ישראל".to_string(),
            emergency_number: "1221".to_string(),
            social_links: SocialLinks::default(),
            business_hours: BusinessHours::default(),
        }
    }

    /// Current value of one flat form field.
    pub fn field(&self, name: &str) -> &str {
        match name {
            "phone" => &self.phone,
            "email" => &self.email,
            "address" => &self.address,
            "emergencyNumber" => &self.emergency_number,
            "facebook" => &self.social_links.facebook,
            "instagram" => &self.social_links.instagram,
            "whatsapp" => &self.social_links.whatsapp,
            _ => "",
        }
    }

    /// `tel:` link target with separators stripped.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// Overlay the edited fields onto `current`. A field left blank in the form
/// keeps its current value; business hours are not part of the form and are
/// always preserved.
pub fn merge_contact_form(current: &ContactInfo, form: &FormState) -> ContactInfo {
    let pick = |name: &str| match form.get(name) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => current.field(name).to_string(),
    };
    ContactInfo {
        phone: pick("phone"),
        email: pick("email"),
        address: pick("address"),
        emergency_number: pick("emergencyNumber"),
        social_links: SocialLinks {
            facebook: pick("facebook"),
            instagram: pick("instagram"),
            whatsapp: pick("whatsapp"),
        },
        business_hours: current.business_hours.clone(),
    }
}

/// What an input shows: the typed value, or the current one while blank.
pub fn shown_value<'a>(current: &'a ContactInfo, form: &'a FormState, name: &str) -> &'a str {
    match form.get(name) {
        Some(value) if !value.is_empty() => value,
        _ => current.field(name),
    }
}

/// Current details; a backend with none yields the empty record.
pub async fn load_contact_info<A: ResourceApi + ?Sized>(api: &A) -> Result<ContactInfo, ApiError> {
    Ok(api.fetch_contact_info().await?.unwrap_or_default())
}

/// Merge `form` onto `current`, write it and return what was written.
pub async fn save_contact_info<A: ResourceApi + ?Sized>(
    api: &A,
    current: &ContactInfo,
    form: &FormState,
) -> Result<ContactInfo, ApiError> {
    let merged = merge_contact_form(current, form);
    tracing::debug!(fields = form.iter().count(), "saving contact info");
    api.update_contact_info(&merged).await?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use crate::memory::{Call, InMemoryBackend};

    use super::*;

    fn current() -> ContactInfo {
        serde_json::from_value(json!({
            "phone": "03-1111111",
            "email": "old@example.org",
            "address": "Shoham",
            "emergencyNumber": "1221",
            "socialLinks": {"facebook": "fb/old", "instagram": "", "whatsapp": "wa/old"},
            "businessHours": {"weekday": "08-20", "weekend": "closed"}
        }))
        .expect("parse contact info")
    }

    #[test]
    fn blank_form_fields_keep_current_values() {
        let mut form = FormState::new();
        form.set("email", "new@example.org");
        form.set("instagram", "ig/new");
        form.set("phone", "");

        let merged = merge_contact_form(&current(), &form);
        assert_eq!(merged.email, "new@example.org");
        assert_eq!(merged.phone, "03-1111111");
        assert_eq!(merged.social_links.instagram, "ig/new");
        assert_eq!(merged.social_links.facebook, "fb/old");
        assert_eq!(merged.business_hours.weekend, "closed");
    }

    #[test]
    fn serialises_with_backend_field_names() {
        let value = serde_json::to_value(current()).expect("encode");
        assert_eq!(value["emergencyNumber"], "1221");
        assert_eq!(value["socialLinks"]["whatsapp"], "wa/old");
    }

    #[test]
    fn inputs_show_current_value_until_typed() {
        let info = current();
        let mut form = FormState::new();
        assert_eq!(shown_value(&info, &form, "address"), "Shoham");
        form.set("address", "Modiin");
        assert_eq!(shown_value(&info, &form, "address"), "Modiin");
    }

    #[tokio::test]
    async fn save_writes_merged_record() -> Result<()> {
        let backend = InMemoryBackend::new();
        backend.set_contact_info(current());
        let loaded = load_contact_info(&backend).await?;

        let mut form = FormState::new();
        form.set("whatsapp", "wa/new");
        let saved = save_contact_info(&backend, &loaded, &form).await?;

        assert_eq!(backend.contact_info(), Some(saved.clone()));
        assert_eq!(saved.social_links.whatsapp, "wa/new");
        assert_eq!(saved.phone, "03-1111111");
        assert_eq!(backend.calls(), vec![Call::FetchContactInfo, Call::UpdateContactInfo]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_info_loads_as_empty() -> Result<()> {
        let backend = InMemoryBackend::new();
        assert_eq!(load_contact_info(&backend).await?, ContactInfo::default());
        Ok(())
    }

    #[test]
    fn phone_href_strips_formatting() {
        assert_eq!(ContactInfo::fallback().phone_href(), "tel:+972123456789");
    }
}
