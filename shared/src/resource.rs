//! The seven admin-managed collections and the flat form model used to edit
//! them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Gallery,
    Stories,
    Statistics,
    /// Contact messages; the branch contact info is edited alongside.
    Contact,
    Admins,
    Donations,
    Sponsors,
}

/// How a tab presents its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A list of records plus an inline add/edit form.
    List,
    /// One record, always shown in an edit form.
    Singleton,
}

/// Which admin actions a tab offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// "Add new" button and `POST` to the collection.
    pub create: bool,
    /// Opening an existing record in the form.
    pub edit: bool,
    /// Per-entry delete button, behind a confirmation.
    pub delete: bool,
    /// File picker that posts to the image upload endpoint.
    pub upload_image: bool,
}

/// How a form field is rendered and serialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered as a textarea.
    LongText,
    /// Sent as a JSON number when it parses.
    Number,
    Email,
    Url,
    /// Closed set of values; a blank entry falls back to the field default.
    Select(&'static [&'static str]),
}

/// One editable field of a resource form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key on the wire.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Marked required in the form.
    pub required: bool,
    /// Sent when the form leaves the field blank.
    pub default: Option<&'static str>,
}

impl FieldSpec {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: false,
            default: None,
        }
    }

    const fn of(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }
}

pub const DONATION_STATUSES: &[&str] = &["pending", "completed", "failed"];
pub const MESSAGE_STATUSES: &[&str] = &["pending", "read", "replied"];

const GALLERY_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("category"),
    FieldSpec::of("imageUrl", FieldKind::Url),
];
const STORY_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::of("description", FieldKind::LongText),
    FieldSpec::text("date"),
];
const STATISTICS_FIELDS: &[FieldSpec] = &[
    FieldSpec::of("volunteersCount", FieldKind::Number),
    FieldSpec::of("emergencyCalls", FieldKind::Number),
    FieldSpec::text("averageResponseTime"),
    FieldSpec::of("uptime", FieldKind::Number),
];
const ADMIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::of("email", FieldKind::Email).required(),
    FieldSpec::text("name").required(),
    FieldSpec::of("picture", FieldKind::Url),
];
const DONATION_FIELDS: &[FieldSpec] =
    &[FieldSpec::of("status", FieldKind::Select(DONATION_STATUSES)).with_default("completed")];
const SPONSOR_FIELDS: &[FieldSpec] = &[FieldSpec::text("name"), FieldSpec::text("category")];

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Gallery,
        ResourceKind::Stories,
        ResourceKind::Statistics,
        ResourceKind::Contact,
        ResourceKind::Admins,
        ResourceKind::Donations,
        ResourceKind::Sponsors,
    ];

    /// Stable identifier, also used as the upload folder.
    pub fn key(self) -> &'static str {
        match self {
            ResourceKind::Gallery => "gallery",
            ResourceKind::Stories => "stories",
            ResourceKind::Statistics => "statistics",
            ResourceKind::Contact => "contact",
            ResourceKind::Admins => "admins",
            ResourceKind::Donations => "donations",
            ResourceKind::Sponsors => "sponsors",
        }
    }

    /// Path segment under `/api/admin/`.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Contact => "contact-messages",
            ResourceKind::Sponsors => "donors",
            other => other.key(),
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            ResourceKind::Statistics => Layout::Singleton,
            _ => Layout::List,
        }
    }

    pub fn capabilities(self) -> Capabilities {
        let full = Capabilities {
            create: true,
            edit: true,
            delete: true,
            upload_image: false,
        };
        match self {
            ResourceKind::Gallery => Capabilities {
                upload_image: true,
                ..full
            },
            ResourceKind::Stories | ResourceKind::Admins | ResourceKind::Sponsors => full,
            ResourceKind::Statistics => Capabilities {
                create: false,
                delete: false,
                ..full
            },
            ResourceKind::Contact => Capabilities {
                create: false,
                edit: false,
                delete: false,
                upload_image: false,
            },
            ResourceKind::Donations => Capabilities {
                create: false,
                ..full
            },
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            ResourceKind::Gallery => GALLERY_FIELDS,
            ResourceKind::Stories => STORY_FIELDS,
            ResourceKind::Statistics => STATISTICS_FIELDS,
            ResourceKind::Contact => &[],
            ResourceKind::Admins => ADMIN_FIELDS,
            ResourceKind::Donations => DONATION_FIELDS,
            ResourceKind::Sponsors => SPONSOR_FIELDS,
        }
    }

    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// Field rendered as the heading of a list entry.
    pub fn title_field(self) -> &'static str {
        match self {
            ResourceKind::Donations => "donorName",
            ResourceKind::Contact | ResourceKind::Admins | ResourceKind::Sponsors => "name",
            _ => "title",
        }
    }

    /// Secondary lines rendered under the heading of a list entry.
    pub fn summary_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Gallery => &["category"],
            ResourceKind::Stories => &["description", "date"],
            ResourceKind::Statistics => &[],
            ResourceKind::Contact => &["email", "phone", "subject", "message", "createdAt"],
            ResourceKind::Admins => &["email", "addedAt", "addedBy"],
            ResourceKind::Donations => &["donorEmail", "amount", "createdAt", "message", "status"],
            ResourceKind::Sponsors => &["category"],
        }
    }

    /// Image shown next to a list entry, if the kind has one.
    pub fn image_field(self) -> Option<&'static str> {
        match self {
            ResourceKind::Gallery => Some("imageUrl"),
            ResourceKind::Admins => Some("picture"),
            ResourceKind::Sponsors => Some("logo"),
            _ => None,
        }
    }
}

/// One server record, kept as the JSON object the backend sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Server-assigned identifier; numeric ids are accepted and rendered as
    /// strings.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(id) if !id.trim().is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Field as display text; `null` and missing fields are empty.
    pub fn text(&self, field: &str) -> String {
        self.0.get(field).map(value_text).unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Record(map),
            _ => Record::default(),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

/// Flat `field -> text` form state, updated one keystroke at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from `record` using the kind's schema.
    pub fn from_record(kind: ResourceKind, record: &Record) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|field| (field.name.to_string(), record.text(field.name)))
            .collect();
        Self {
            values,
        }
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Current value, falling back to the schema default.
    pub fn value(&self, kind: ResourceKind, field: &str) -> String {
        match self.get(field) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => kind
                .field(field)
                .and_then(|spec| spec.default)
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// JSON body for a create/update call.
    ///
    /// Every entered field is sent (including extras such as the uploaded
    /// image's public id). Numeric schema fields go out as numbers when they
    /// parse; select fields left blank get their default.
    pub fn payload(&self, kind: ResourceKind) -> Value {
        let mut body: Map<String, Value> = self
            .values
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();

        for field in kind.fields() {
            match field.kind {
                FieldKind::Number => {
                    if let Some(number) = self.get(field.name).and_then(parse_number) {
                        body.insert(field.name.to_string(), Value::Number(number));
                    }
                },
                FieldKind::Select(_) => {
                    body.insert(
                        field.name.to_string(),
                        Value::String(self.value(kind, field.name)),
                    );
                },
                _ => {},
            }
        }
        Value::Object(body)
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    let raw = raw.trim();
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Number::from(int));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}

/// A form opened for one record (`target_id` set) or a new draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editing {
    pub target_id: Option<String>,
    pub form: FormState,
}

impl Editing {
    pub fn draft() -> Self {
        Self::default()
    }

    pub fn of_record(kind: ResourceKind, record: &Record) -> Self {
        Self {
            target_id: record.id(),
            form: FormState::from_record(kind, record),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.target_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        Record::from(value)
    }

    #[test]
    fn collections_match_backend_routes() {
        let paths: Vec<_> = ResourceKind::ALL
            .iter()
            .map(|kind| kind.collection())
            .collect();
        assert_eq!(
            paths,
            vec![
                "gallery",
                "stories",
                "statistics",
                "contact-messages",
                "admins",
                "donations",
                "donors"
            ]
        );
    }

    #[test]
    fn only_gallery_uploads_and_only_statistics_is_singleton() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.capabilities().upload_image, kind == ResourceKind::Gallery);
            assert_eq!(kind.layout() == Layout::Singleton, kind == ResourceKind::Statistics);
        }
        assert!(!ResourceKind::Donations.capabilities().create);
        assert!(ResourceKind::Donations.capabilities().delete);
    }

    #[test]
    fn donation_entries_show_donor_email_under_the_name() {
        let kind = ResourceKind::Donations;
        assert_eq!(kind.title_field(), "donorName");
        assert_eq!(kind.summary_fields().first(), Some(&"donorEmail"));
    }

    #[test]
    fn record_id_accepts_strings_and_numbers() {
        assert_eq!(record(json!({"id": "abc"})).id().as_deref(), Some("abc"));
        assert_eq!(record(json!({"id": 42})).id().as_deref(), Some("42"));
        assert_eq!(record(json!({"id": ""})).id(), None);
        assert_eq!(record(json!({"title": "x"})).id(), None);
    }

    #[test]
    fn form_prefills_schema_fields_from_record() {
        let story = record(json!({
            "id": "s1",
            "title": "Night call",
            "description": "CPR on scene",
            "date": "2024-01-15",
            "image": null,
        }));
        let editing = Editing::of_record(ResourceKind::Stories, &story);
        assert_eq!(editing.target_id.as_deref(), Some("s1"));
        assert_eq!(editing.form.get("title"), Some("Night call"));
        assert_eq!(editing.form.get("date"), Some("2024-01-15"));
        assert_eq!(editing.form.get("image"), None);
    }

    #[test]
    fn payload_converts_numbers_and_keeps_extras() {
        let mut form = FormState::new();
        form.set("volunteersCount", "120");
        form.set("uptime", "99.5");
        form.set("averageResponseTime", "4 min");
        form.set("emergencyCalls", "many");
        let body = form.payload(ResourceKind::Statistics);
        assert_eq!(
            body,
            json!({
                "volunteersCount": 120,
                "uptime": 99.5,
                "averageResponseTime": "4 min",
                "emergencyCalls": "many",
            })
        );
    }

    #[test]
    fn select_default_is_sent_when_blank() {
        let form = FormState::new();
        assert_eq!(form.value(ResourceKind::Donations, "status"), "completed");
        assert_eq!(form.payload(ResourceKind::Donations), json!({"status": "completed"}));
    }
}
