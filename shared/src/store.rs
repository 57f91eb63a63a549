use std::cell::RefCell;
use std::collections::HashMap;

use crate::constants::{HAS_SPUN_KEY, LEADS_KEY, SEGMENTS_KEY};
use crate::leads::Lead;
use crate::wheel::{default_segments, Segment};

/// The persistent key-value surface the widget runs against. The browser
/// build backs this with `window.localStorage`; tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Typed access to the three entries the widget persists. The entries are
/// independent: each is read and written whole, and no transactional
/// guarantee spans them.
pub struct WheelStore<S> {
    store: S,
}

impl<S: KeyValueStore> WheelStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The saved segment configuration, or the default wheel when nothing
    /// was saved yet. Unreadable JSON also degrades to the default.
    pub fn load_segments(&self) -> Vec<Segment> {
        match self.store.get(SEGMENTS_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("stored segments unreadable, using defaults: {err}");
                default_segments()
            }),
            None => default_segments(),
        }
    }

    pub fn save_segments(&self, segments: &[Segment]) {
        match serde_json::to_string(segments) {
            Ok(raw) => self.store.set(SEGMENTS_KEY, &raw),
            Err(err) => log::warn!("failed to serialize segments: {err}"),
        }
    }

    pub fn load_leads(&self) -> Vec<Lead> {
        match self.store.get(LEADS_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("stored leads unreadable, starting empty: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    pub fn append_lead(&self, lead: Lead) {
        let mut leads = self.load_leads();
        leads.push(lead);
        match serde_json::to_string(&leads) {
            Ok(raw) => self.store.set(LEADS_KEY, &raw),
            Err(err) => log::warn!("failed to serialize leads: {err}"),
        }
    }

    pub fn has_played(&self) -> bool {
        self.store
            .get(HAS_SPUN_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(false)
    }

    pub fn mark_played(&self) {
        self.store.set(HAS_SPUN_KEY, "true");
    }
}

/// HashMap-backed store used by unit tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::LeadDraft;

    fn store() -> WheelStore<MemoryStore> {
        WheelStore::new(MemoryStore::default())
    }

    fn lead(id: &str) -> Lead {
        Lead::from_draft(
            id.to_string(),
            LeadDraft {
                name: "Jo Smith".to_string(),
                phone: "12345678".to_string(),
                email: "jo@example.com".to_string(),
            },
            "Free Coffee".to_string(),
            "2024-03-01T12:00:00Z".to_string(),
        )
    }

    #[test]
    fn test_empty_store_yields_defaults() {
        let store = store();
        assert_eq!(store.load_segments(), default_segments());
        assert!(store.load_leads().is_empty());
        assert!(!store.has_played());
    }

    #[test]
    fn test_segments_round_trip() {
        let store = store();
        let mut segments = default_segments();
        segments[0].name = "50% Off".to_string();
        store.save_segments(&segments);
        assert_eq!(store.load_segments(), segments);
    }

    #[test]
    fn test_leads_append_preserves_order() {
        let store = store();
        store.append_lead(lead("a"));
        store.append_lead(lead("b"));
        let loaded = store.load_leads();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "a");
        assert_eq!(loaded[1].id, "b");
    }

    #[test]
    fn test_corrupt_entries_degrade_independently() {
        let backing = MemoryStore::default();
        backing.set(SEGMENTS_KEY, "{not json");
        backing.set(LEADS_KEY, "[1, 2, 3]");
        let store = WheelStore::new(backing);

        assert_eq!(store.load_segments(), default_segments());
        assert!(store.load_leads().is_empty());
        assert!(!store.has_played());
    }

    #[test]
    fn test_played_flag_round_trip() {
        let store = store();
        store.mark_played();
        assert!(store.has_played());
        // The flag lives in its own entry; the others are untouched.
        assert!(store.load_leads().is_empty());
    }
}
