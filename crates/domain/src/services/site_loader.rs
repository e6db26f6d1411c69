//! Superseding site loader.
//!
//! A navigation-shaped state container over [`load_site`]: every call to
//! [`SiteLoader::load`] starts a new load and invalidates any load still
//! in flight. A completed load applies its result only if no newer load
//! has started since; stale results are discarded, so the state can never
//! be clobbered by a response that arrived late.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::debug;

use crate::models::SiteData;

use super::site::{load_site, SiteSource};

/// Observable load state. A loader is born `Loading` and every new load
/// re-enters `Loading` before settling.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Succeeded(SiteData),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Load coordinator keyed by generation.
///
/// Share via `Arc` and call [`load`](Self::load) from any task; the last
/// *started* load wins regardless of completion order.
pub struct SiteLoader<S> {
    source: S,
    generation: AtomicU64,
    state: Mutex<LoadState>,
}

impl<S: SiteSource> SiteLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
            state: Mutex::new(LoadState::Loading),
        }
    }

    /// Runs one load to completion.
    ///
    /// Bumps the generation, re-enters `Loading`, and applies the result
    /// only if this load is still the newest when it finishes.
    pub async fn load(&self, slug: Option<String>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock().unwrap() = LoadState::Loading;

        let result = load_site(&self.source, slug.as_deref()).await;

        let mut state = self.state.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(?slug, generation, "Discarding superseded site load");
            return;
        }
        *state = match result {
            Ok(data) => LoadState::Succeeded(data),
            Err(err) => LoadState::Failed(err.to_string()),
        };
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.state.lock().unwrap().clone()
    }
}
