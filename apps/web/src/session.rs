use gloo_storage::{SessionStorage, Storage};
use site_core::intro::SessionStore;

/// Session-flag storage backed by the browser's session storage, so the flag
/// lives exactly as long as the tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get_flag(&self, key: &str) -> bool {
        SessionStorage::get::<bool>(key).unwrap_or(false)
    }

    fn set_flag(&self, key: &str) {
        if let Err(err) = SessionStorage::set(key, true) {
            tracing::warn!(%err, key, "failed to persist session flag");
        }
    }
}
