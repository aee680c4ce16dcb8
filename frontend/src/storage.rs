use rescue_site_shared::SessionStore;
use web_sys::{window, Storage};

/// `localStorage`-backed session store. Missing or disabled storage behaves
/// as an empty store that forgets every write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                web_sys::console::warn_1(&format!("Failed to persist `{key}`").into());
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
