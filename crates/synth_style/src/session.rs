//! Per-session style state
//!
//! A session owns everything that would otherwise be process-global: the
//! region table and the selected-UI scope. Engines hold an
//! `Arc<SynthSession>`, so two sessions never observe each other's regions
//! or selections.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use synth_core::{ComponentState, WidgetId};

use crate::region::RegionRegistry;

#[derive(Debug)]
struct SelectedEntry {
    token: u64,
    widget: WidgetId,
    state: ComponentState,
}

/// Region table and selected-UI scope for one UI session
#[derive(Debug, Default)]
pub struct SynthSession {
    regions: RegionRegistry,
    selected: Mutex<Vec<SelectedEntry>>,
    next_token: AtomicU64,
}

impl SynthSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }

    /// Mark `widget` as the selected UI for the lifetime of the guard
    ///
    /// While the guard lives, the component state the engine derives for
    /// `widget` is `state` instead of the enabled/focused default. Scopes may
    /// nest; the innermost live one wins.
    pub fn select_ui(&self, widget: WidgetId, state: ComponentState) -> SelectedUiGuard<'_> {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        self.selected.lock().push(SelectedEntry {
            token,
            widget,
            state,
        });
        tracing::trace!(?widget, ?state, "selected ui pushed");
        SelectedUiGuard {
            session: self,
            token,
        }
    }

    /// State of the innermost live selection for `widget`
    pub fn selected_state(&self, widget: WidgetId) -> Option<ComponentState> {
        self.selected
            .lock()
            .iter()
            .rev()
            .find(|entry| entry.widget == widget)
            .map(|entry| entry.state)
    }

    fn release(&self, token: u64) {
        let mut selected = self.selected.lock();
        if let Some(pos) = selected.iter().rposition(|entry| entry.token == token) {
            selected.remove(pos);
        }
    }
}

/// Ends a selected-UI scope when dropped
#[must_use = "the selection ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SelectedUiGuard<'a> {
    session: &'a SynthSession,
    token: u64,
}

impl Drop for SelectedUiGuard<'_> {
    fn drop(&mut self) {
        self.session.release(self.token);
    }
}
