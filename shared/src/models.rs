//! Public-site wire types.

use serde::{Deserialize, Serialize};

/// One public statistic (`GET /api/statistics`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub date: String,
}

/// A donor or sponsor shown in the public grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Sponsor {
    /// Placeholder mark when there is no logo: the first letter of the name.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Body of `POST /api/donations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub donor_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub donor_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!("unsupported id: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_and_string_ids_both_parse() {
        let items: Vec<StatItem> = serde_json::from_value(json!([
            {"id": 3, "title": "Calls", "value": 1200, "unit": null},
            {"id": "v", "title": "Volunteers", "value": 80.5, "order": 1}
        ]))
        .expect("parse stats");
        assert_eq!(items[0].id, "3");
        assert_eq!(items[0].order, None);
        assert_eq!(items[1].value, 80.5);
    }

    #[test]
    fn donation_request_omits_blank_donor() {
        let body = serde_json::to_value(DonationRequest {
            amount: 100.0,
            donor_name: String::new(),
            donor_email: String::new(),
            message: None,
        })
        .expect("encode");
        assert_eq!(body, json!({"amount": 100.0}));
    }

    #[test]
    fn sponsor_initial_handles_hebrew_and_empty() {
        let sponsor = Sponsor {
            id: "1".into(),
            name: "תורם אחד".into(),
            category: String::new(),
            logo: None,
        };
        assert_eq!(sponsor.initial(), "ת");
        assert_eq!(
            Sponsor {
                name: String::new(),
                ..sponsor
            }
            .initial(),
            ""
        );
    }
}
