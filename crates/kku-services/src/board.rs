//! Versioned persistence of a task list in a client's local storage.
//!
//! A snapshot is `{"version": 1, "items": [...]}`. Anything else under the
//! key (absent, unparsable, other version) is replaced by a fresh seed.

use std::sync::Arc;

use kku_core::error::GatewayError;
use kku_core::traits::LocalStorage;
use kku_i18n::Translator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::checklist::{self, ChecklistItem, ListKind};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub items: Vec<ChecklistItem>,
}

fn decode(raw: &str) -> Option<Vec<ChecklistItem>> {
    match serde_json::from_str::<Snapshot>(raw) {
        Ok(snapshot) if snapshot.version == SCHEMA_VERSION => Some(snapshot.items),
        Ok(snapshot) => {
            warn!("discarding snapshot with version {}", snapshot.version);
            None
        }
        Err(e) => {
            warn!("discarding unreadable snapshot: {e}");
            None
        }
    }
}

/// Stored list, or a fresh seed when nothing usable is stored.
///
/// Storage read errors are logged and treated like an empty slot.
pub async fn load(
    storage: &dyn LocalStorage,
    client: &str,
    kind: ListKind,
    t: &Translator,
) -> Vec<ChecklistItem> {
    let raw = match storage.get_item(client, kind.storage_key()).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("{}: read of {} failed: {e}", storage.name(), kind.storage_key());
            None
        }
    };
    match raw.as_deref().and_then(decode) {
        Some(items) => items,
        None => {
            debug!("seeding {} for {client}", kind.storage_key());
            kind.seed(t)
        }
    }
}

/// Persist `items`. Failures are logged; the in-memory list stays authoritative.
pub async fn save(
    storage: &dyn LocalStorage,
    client: &str,
    kind: ListKind,
    items: &[ChecklistItem],
) {
    let snapshot = Snapshot {
        version: SCHEMA_VERSION,
        items: items.to_vec(),
    };
    let raw = match serde_json::to_string(&snapshot) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("failed to encode {}: {e}", kind.storage_key());
            return;
        }
    };
    if let Err(e) = storage.set_item(client, kind.storage_key(), &raw).await {
        warn!("{}: write of {} failed: {e}", storage.name(), kind.storage_key());
    }
}

/// One client's view of one list, backed by local storage.
pub struct Board {
    storage: Arc<dyn LocalStorage>,
    client: String,
    kind: ListKind,
    translator: Translator,
}

impl Board {
    pub fn new(
        storage: Arc<dyn LocalStorage>,
        client: &str,
        kind: ListKind,
        translator: Translator,
    ) -> Self {
        Self {
            storage,
            client: client.to_string(),
            kind,
            translator,
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Current items; seeds (and persists the seed) on first use.
    pub async fn items(&self) -> Vec<ChecklistItem> {
        let items = load(self.storage.as_ref(), &self.client, self.kind, &self.translator).await;
        save(self.storage.as_ref(), &self.client, self.kind, &items).await;
        items
    }

    /// Toggle `id` and persist. Unknown ids are rejected.
    pub async fn toggle(&self, id: &str) -> Result<Vec<ChecklistItem>, GatewayError> {
        let items = load(self.storage.as_ref(), &self.client, self.kind, &self.translator).await;
        if !items.iter().any(|item| item.id == id) {
            return Err(GatewayError::NotFound(format!(
                "no item {id} in {}",
                self.kind.storage_key()
            )));
        }
        let items = checklist::toggle(&items, id);
        save(self.storage.as_ref(), &self.client, self.kind, &items).await;
        Ok(items)
    }

    /// Checklist: reseed in the current locale. Tracker: mark everything incomplete.
    pub async fn reset(&self) -> Vec<ChecklistItem> {
        let items = match self.kind {
            ListKind::Checklist => checklist::reset(self.kind, &self.translator),
            ListKind::Progress => {
                let current =
                    load(self.storage.as_ref(), &self.client, self.kind, &self.translator).await;
                checklist::clear_all(&current)
            }
        };
        save(self.storage.as_ref(), &self.client, self.kind, &items).await;
        items
    }
}
