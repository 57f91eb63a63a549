use shared::store::{KeyValueStore, WheelStore};
use web_sys::window;

/// localStorage-backed implementation of the widget's store seam.
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage write failed for {key}: {err:?}");
            }
        }
    }
}

pub fn browser_store() -> WheelStore<BrowserStore> {
    WheelStore::new(BrowserStore)
}
