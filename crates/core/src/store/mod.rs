use uuid::Uuid;

use crate::models::chart::{ChartConfig, ChartConfigUpdate, ChartDraft};

/// Handle returned by [`ChartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[ChartConfig])>;

/// Sole source of truth for the set of chart configurations.
///
/// An explicit owned state object: the dashboard holds one `ChartStore` and
/// threads it to its collaborators, with subscribe/notify replacing the
/// automatic reactivity of a UI framework. Entries keep insertion order;
/// identity is assigned here and only here.
///
/// The store performs no validation — required-field policy lives in the
/// form collaborator, before `add`/`update` is ever invoked.
pub struct ChartStore {
    charts: Vec<ChartConfig>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ChartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartStore")
            .field("charts", &self.charts.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ChartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            charts: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Add a new chart configuration, assigning it a fresh identifier.
    /// The entry is appended at the end; insertion order is preserved.
    /// Subscribers are notified before this returns.
    pub fn add(&mut self, draft: ChartDraft) -> Uuid {
        let id = Uuid::new_v4();
        self.charts.push(draft.into_config(id));
        self.notify();
        id
    }

    /// Shallow-merge `update` into the entry matching `id`: supplied fields
    /// override, all others are retained, and the id itself is untouched.
    ///
    /// Returns `true` if an entry was updated. An unknown id leaves the
    /// collection unchanged and returns `false` — logged rather than
    /// silently swallowed, but not an error.
    pub fn update(&mut self, id: Uuid, update: &ChartConfigUpdate) -> bool {
        match self.charts.iter_mut().find(|c| c.id == id) {
            Some(chart) => {
                update.apply(chart);
                self.notify();
                true
            }
            None => {
                tracing::warn!(%id, "update ignored: no chart with this id");
                false
            }
        }
    }

    /// Remove the entry matching `id`, preserving the relative order of the
    /// remaining entries. Unknown id is a logged no-op returning `false`.
    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.charts.iter().position(|c| c.id == id) {
            Some(idx) => {
                self.charts.remove(idx);
                self.notify();
                true
            }
            None => {
                tracing::warn!(%id, "remove ignored: no chart with this id");
                false
            }
        }
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// The full ordered collection.
    #[must_use]
    pub fn charts(&self) -> &[ChartConfig] {
        &self.charts
    }

    /// Look up one configuration by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&ChartConfig> {
        self.charts.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    // ── Observers ───────────────────────────────────────────────────

    /// Register a listener invoked synchronously with the full collection
    /// snapshot after every successful mutation. By the time `add`,
    /// `update`, or `remove` returns, every listener has already run.
    pub fn subscribe(&mut self, listener: impl FnMut(&[ChartConfig]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if the subscription was unknown.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.charts);
        }
    }
}

impl Default for ChartStore {
    fn default() -> Self {
        Self::new()
    }
}
