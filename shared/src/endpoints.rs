use crate::resource::ResourceKind;

/// Route map of the REST backend, rooted at its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// `base` is the backend origin, e.g. `http://localhost:5000`. A trailing
    /// slash or `/api` suffix is tolerated.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
        Self {
            base: trimmed.to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn api(&self, path: &str) -> String {
        format!("{}/api/{}", self.base, path)
    }

    pub fn auth_verify(&self) -> String {
        self.api("auth/google-verify")
    }

    pub fn admin_collection(&self, kind: ResourceKind) -> String {
        self.api(&format!("admin/{}", kind.collection()))
    }

    pub fn admin_item(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/{}", self.admin_collection(kind), urlencoding::encode(id))
    }

    pub fn admin_contact_info(&self) -> String {
        self.api("admin/contact-info")
    }

    pub fn admin_upload_image(&self) -> String {
        self.api("admin/upload-image")
    }

    pub fn public_statistics(&self) -> String {
        self.api("statistics")
    }

    pub fn public_gallery(&self) -> String {
        self.api("gallery")
    }

    pub fn public_stories(&self) -> String {
        self.api("stories")
    }

    pub fn public_donors(&self) -> String {
        self.api("donors")
    }

    pub fn public_contact_info(&self) -> String {
        self.api("contact-info")
    }

    pub fn public_contact(&self) -> String {
        self.api("contact")
    }

    pub fn public_donations(&self) -> String {
        self.api("donations")
    }
}

/// Value of the `Authorization` header for admin calls.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_normalised() {
        for raw in ["http://localhost:5000", "http://localhost:5000/", "http://localhost:5000/api"] {
            assert_eq!(Endpoints::new(raw).base(), "http://localhost:5000");
        }
    }

    #[test]
    fn admin_routes_follow_collection_names() {
        let endpoints = Endpoints::new("https://api.example.org");
        assert_eq!(
            endpoints.admin_collection(ResourceKind::Sponsors),
            "https://api.example.org/api/admin/donors"
        );
        assert_eq!(
            endpoints.admin_item(ResourceKind::Gallery, "a/b c"),
            "https://api.example.org/api/admin/gallery/a%2Fb%20c"
        );
        assert_eq!(
            endpoints.auth_verify(),
            "https://api.example.org/api/auth/google-verify"
        );
        assert_eq!(
            endpoints.admin_upload_image(),
            "https://api.example.org/api/admin/upload-image"
        );
    }

    #[test]
    fn bearer_header_format() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
