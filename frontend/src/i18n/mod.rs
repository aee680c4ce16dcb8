pub mod he_il;

pub use he_il as current;

use rescue_site_shared::ResourceKind;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub fn tab_label(kind: ResourceKind) -> &'static str {
    use current::tabs;

    match kind {
        ResourceKind::Gallery => tabs::GALLERY,
        ResourceKind::Stories => tabs::STORIES,
        ResourceKind::Statistics => tabs::STATISTICS,
        ResourceKind::Contact => tabs::CONTACT,
        ResourceKind::Admins => tabs::ADMINS,
        ResourceKind::Donations => tabs::DONATIONS,
        ResourceKind::Sponsors => tabs::SPONSORS,
    }
}

/// Field label, falling back to the raw field name.
pub fn field_label(name: &str) -> String {
    match current::fields::label(name) {
        "" => name.to_string(),
        label => label.to_string(),
    }
}

/// Status badge text, falling back to the raw value.
pub fn status_label(value: &str) -> String {
    match current::fields::status(value) {
        "" => value.to_string(),
        label => label.to_string(),
    }
}
