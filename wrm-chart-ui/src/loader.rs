//! Simulated asynchronous data loading.
//!
//! Pages do not fetch anything; they call a generator after a short timer so
//! the loading skeletons get a chance to show. The timer runs in a task owned
//! by the calling component, so unmounting the page cancels it. Starting a
//! refresh cancels whatever load is still pending.
//!
//! The bookkeeping (tickets, loading flag, delay per load kind) lives in
//! [`LoadTracker`], which has no Dioxus dependency and is tested natively.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::info;

/// Delay before the first load after a page mounts.
pub const INITIAL_LOAD_DELAY_MS: u32 = 1000;
/// Delay for a manual refresh.
pub const REFRESH_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Initial,
    Refresh,
}

impl LoadKind {
    pub fn delay_ms(self) -> u32 {
        match self {
            LoadKind::Initial => INITIAL_LOAD_DELAY_MS,
            LoadKind::Refresh => REFRESH_DELAY_MS,
        }
    }
}

/// Which load is current and whether the page should show skeletons.
///
/// Every [`begin`](LoadTracker::begin) issues a new ticket. Only the
/// completion carrying the latest ticket is accepted, so a superseded load
/// can never overwrite newer data even if its task was not cancelled in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTracker {
    ticket: u64,
    loading: bool,
}

impl LoadTracker {
    /// Tracker with the mount-time load already in flight.
    pub fn initial() -> Self {
        let mut tracker = LoadTracker::default();
        tracker.begin(LoadKind::Initial);
        tracker
    }

    /// Start a load, superseding any pending one. Returns the ticket the
    /// completion must present and the delay to wait.
    pub fn begin(&mut self, kind: LoadKind) -> (u64, u32) {
        self.ticket += 1;
        self.loading = true;
        (self.ticket, kind.delay_ms())
    }

    /// Record a finished load. Returns `true` when the result should be
    /// stored, `false` for a stale or duplicate completion.
    pub fn complete(&mut self, ticket: u64) -> bool {
        if !self.loading || ticket != self.ticket {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Ticket of the load in flight, if any.
    pub fn pending_ticket(&self) -> Option<u64> {
        self.loading.then_some(self.ticket)
    }
}

/// Handle returned by [`use_simulated_load`].
pub struct SimulatedLoad<T: 'static> {
    data: Signal<Option<T>>,
    tracker: Signal<LoadTracker>,
    pending: Signal<Option<Task>>,
    generate: fn() -> T,
}

impl<T: 'static> Clone for SimulatedLoad<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SimulatedLoad<T> {}

impl<T: 'static> SimulatedLoad<T> {
    /// Latest generated value, `None` until the first load completes.
    pub fn data(&self) -> Option<T>
    where
        T: Clone,
    {
        self.data.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.read().is_loading()
    }

    /// Regenerate after [`REFRESH_DELAY_MS`].
    pub fn refresh(&self) {
        info!("Refreshing data");
        let mut tracker = self.tracker;
        let (ticket, delay_ms) = tracker.write().begin(LoadKind::Refresh);
        self.spawn_load(ticket, delay_ms);
    }

    fn spawn_load(self, ticket: u64, delay_ms: u32) {
        let SimulatedLoad {
            mut data,
            mut tracker,
            mut pending,
            generate,
        } = self;

        if let Some(task) = pending.write().take() {
            task.cancel();
        }

        let task = spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            let value = generate();
            if tracker.write().complete(ticket) {
                data.set(Some(value));
            }
            pending.set(None);
        });
        pending.set(Some(task));
    }
}

/// Schedule `generate` once on mount and expose the result with a loading flag.
pub fn use_simulated_load<T: 'static>(generate: fn() -> T) -> SimulatedLoad<T> {
    let data = use_signal(|| None::<T>);
    // Starts in the loading state so the first render shows skeletons
    let tracker = use_signal(LoadTracker::initial);
    let pending = use_signal(|| None::<Task>);
    let load = SimulatedLoad {
        data,
        tracker,
        pending,
        generate,
    };
    use_hook(move || {
        if let Some(ticket) = tracker.peek().pending_ticket() {
            load.spawn_load(ticket, LoadKind::Initial.delay_ms());
        }
    });
    load
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_load_is_pending_on_mount() {
        let tracker = LoadTracker::initial();
        assert!(tracker.is_loading());
        assert_eq!(tracker.pending_ticket(), Some(1));
        assert_eq!(LoadKind::Initial.delay_ms(), 1000);
    }

    #[test]
    fn test_completion_clears_loading_flag() {
        let mut tracker = LoadTracker::initial();
        assert!(tracker.complete(1));
        assert!(!tracker.is_loading());
        assert_eq!(tracker.pending_ticket(), None);
        // a second completion for the same ticket is ignored
        assert!(!tracker.complete(1));
    }

    #[test]
    fn test_refresh_supersedes_pending_load() {
        let mut tracker = LoadTracker::initial();
        let (ticket, delay_ms) = tracker.begin(LoadKind::Refresh);
        assert_eq!(ticket, 2);
        assert_eq!(delay_ms, 800);

        // the mount-time load finishing late must not clear the flag
        assert!(!tracker.complete(1));
        assert!(tracker.is_loading());

        assert!(tracker.complete(ticket));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_refresh_after_completion_sets_loading_again() {
        let mut tracker = LoadTracker::initial();
        tracker.complete(1);
        let (ticket, _) = tracker.begin(LoadKind::Refresh);
        assert!(tracker.is_loading());
        assert_eq!(tracker.pending_ticket(), Some(ticket));
    }

    #[test]
    fn test_default_tracker_is_idle() {
        let mut tracker = LoadTracker::default();
        assert!(!tracker.is_loading());
        assert!(!tracker.complete(0));
    }
}
