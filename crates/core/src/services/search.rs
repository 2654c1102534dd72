use std::time::{Duration, Instant};

use crate::models::series::SeriesInfo;

/// Delay between the last keystroke and the search actually firing.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Queries shorter than this are never searched.
pub const MIN_QUERY_LEN: usize = 2;

/// Debounces search-as-you-type input.
///
/// Deterministic and clock-driven: the caller feeds keystrokes via
/// [`input`](Self::input) and polls with the current time; a query is
/// released only once the debounce delay has elapsed with no newer input.
/// No timers, so the behavior is fully testable with synthetic `Instant`s.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DEBOUNCE)
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a keystroke. Replaces any pending query and restarts the
    /// debounce window.
    pub fn input(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into(), now));
    }

    /// Release the pending query if its debounce window has elapsed.
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] are discarded instead of
    /// released. Returns `None` while the window is still open or when
    /// nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (_, entered_at) = self.pending.as_ref()?;
        if now.duration_since(*entered_at) < self.delay {
            return None;
        }
        let (query, _) = self.pending.take()?;
        if query.chars().count() < MIN_QUERY_LEN {
            return None;
        }
        Some(query)
    }

    /// Whether a keystroke is waiting out its debounce window.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending input, e.g. when the form closes.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Token identifying one in-flight search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchToken(u64);

/// Observable state of the current search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    /// A request for this query is in flight.
    Searching { query: String },
    Results(Vec<SeriesInfo>),
    /// The request failed; the message is shown inline, never retried
    /// automatically.
    Failed(String),
}

/// Tracks the latest search request and suppresses stale responses.
///
/// Each [`begin`](Self::begin) bumps a generation counter and hands back a
/// token; a response may only be applied with the token of the request that
/// produced it. A response arriving after a newer request began no longer
/// matches the current generation and is discarded — the explicit form of
/// the original's rely-on-unmount cancellation.
#[derive(Debug)]
pub struct SearchSession {
    generation: u64,
    state: SearchState,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: SearchState::Idle,
        }
    }

    /// Start a new search, invalidating every outstanding token.
    pub fn begin(&mut self, query: impl Into<String>) -> SearchToken {
        self.generation += 1;
        self.state = SearchState::Searching {
            query: query.into(),
        };
        SearchToken(self.generation)
    }

    /// Install results for the request identified by `token`.
    /// Returns `false` (leaving state untouched) when the token is stale.
    pub fn apply(&mut self, token: SearchToken, results: Vec<SeriesInfo>) -> bool {
        if token.0 != self.generation {
            tracing::debug!(token = token.0, current = self.generation, "stale search response discarded");
            return false;
        }
        self.state = SearchState::Results(results);
        true
    }

    /// Record a failure for the request identified by `token`.
    /// Stale tokens are discarded exactly like stale results.
    pub fn fail(&mut self, token: SearchToken, message: impl Into<String>) -> bool {
        if token.0 != self.generation {
            tracing::debug!(token = token.0, current = self.generation, "stale search failure discarded");
            return false;
        }
        self.state = SearchState::Failed(message.into());
        true
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Back to idle; outstanding tokens are invalidated.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SearchState::Idle;
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
