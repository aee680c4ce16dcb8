//! Compile-time configuration of the frontend.

use rescue_site_shared::Endpoints;

/// Backend origin, read from `RESCUE_API_BASE` at build time.
pub const API_BASE: &str = match option_env!("RESCUE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Google Identity Services client id. Empty disables the Google button.
pub const GOOGLE_CLIENT_ID: &str = match option_env!("RESCUE_GOOGLE_CLIENT_ID") {
    Some(id) => id,
    None => "",
};

/// Base URL the app is served from
/// - For local development: "/"
/// - For the static demo build: "/rescue-site/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/rescue-site/";

pub fn endpoints() -> Endpoints {
    Endpoints::new(API_BASE)
}

pub fn google_sign_in_enabled() -> bool {
    !GOOGLE_CLIENT_ID.trim().is_empty()
}

/// Prefix an in-app path with [`BASE_URL`].
pub fn route_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
