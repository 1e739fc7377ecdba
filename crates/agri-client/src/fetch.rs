//! # Fetch State
//!
//! Adapts one asynchronous read into observable state.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Resource Lifecycle                               │
//! │                                                                         │
//! │   ┌──────┐  attach   ┌─────────┐   Ok(value)   ┌───────┐              │
//! │   │ Idle │──────────►│ Loading │──────────────►│ Ready │              │
//! │   └──────┘           └────┬────┘               └───┬───┘              │
//! │                           │  Err(message)          │                   │
//! │                           ▼                        │ refetch /         │
//! │                      ┌────────┐                    │ set_params        │
//! │                      │ Failed │────────────────────┤                   │
//! │                      └────────┘                    ▼                   │
//! │                                               ┌─────────┐              │
//! │                                               │ Loading │              │
//! │                                               └─────────┘              │
//! │                                                                         │
//! │  refetch:     data cleared while loading                               │
//! │  set_params:  data kept while loading                                  │
//! │  Failed:      data cleared, error set                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale Results
//! Every fetch carries a generation number. Starting a fetch bumps the
//! generation, so a slower earlier fetch finds it out of date when it
//! resolves and is dropped as [`FetchOutcome::Superseded`]. After
//! [`Resource::detach`] nothing is published at all.
//!
//! The check and the publish happen under one lock, so at most one result
//! per generation is ever applied.

use std::future::{Future, IntoFuture};
use std::sync::{Arc, Mutex, MutexGuard};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Type-erased read. Receives the current parameters.
pub type Fetcher<P, T> = Arc<dyn Fn(P) -> BoxFuture<'static, Result<T, String>> + Send + Sync>;

/// Wraps a closure as a [`Fetcher`].
///
/// ## Example
/// ```rust
/// use agri_client::fetch::{fetcher, Fetcher};
///
/// let double: Fetcher<u32, u32> = fetcher(|n: u32| async move { Ok(n * 2) });
/// ```
pub fn fetcher<P, T, F, Fut>(f: F) -> Fetcher<P, T>
where
    F: Fn(P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + Send + 'static,
{
    Arc::new(move |params| f(params).boxed())
}

// =============================================================================
// State
// =============================================================================

/// Where a resource is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Not attached yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last applied fetch succeeded.
    Ready,
    /// The last applied fetch failed.
    Failed,
}

impl FetchStatus {
    /// Returns true once a fetch has been applied.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchStatus::Ready | FetchStatus::Failed)
    }
}

/// Snapshot of a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub status: FetchStatus,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState {
            status: FetchStatus::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Returns true while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

/// What happened to one fetch's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result was published.
    Applied,
    /// A newer fetch started first; the result was dropped.
    Superseded,
    /// The resource was detached; the result was dropped.
    Detached,
}

// =============================================================================
// Pending Fetch
// =============================================================================

/// A fetch running in the background.
///
/// Dropping it does not cancel the fetch. Awaiting it yields the outcome.
#[derive(Debug)]
pub struct PendingFetch {
    handle: Option<JoinHandle<FetchOutcome>>,
}

impl PendingFetch {
    fn detached() -> Self {
        PendingFetch { handle: None }
    }

    /// Waits for the fetch and reports what happened to its result.
    pub async fn outcome(self) -> FetchOutcome {
        let Some(handle) = self.handle else {
            return FetchOutcome::Detached;
        };

        match handle.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            // The runtime is shutting down.
            Err(_) => FetchOutcome::Detached,
        }
    }
}

impl IntoFuture for PendingFetch {
    type Output = FetchOutcome;
    type IntoFuture = BoxFuture<'static, FetchOutcome>;

    fn into_future(self) -> Self::IntoFuture {
        self.outcome().boxed()
    }
}

// =============================================================================
// Resource
// =============================================================================

struct Control<P, T> {
    params: Option<P>,
    fetcher: Option<Fetcher<P, T>>,
    generation: u64,
    attached: bool,
}

struct Shared<P, T> {
    control: Mutex<Control<P, T>>,
    state_tx: watch::Sender<FetchState<T>>,
}

impl<P, T> Shared<P, T> {
    fn lock(&self) -> MutexGuard<'_, Control<P, T>> {
        self.control.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Publishes `result` if `generation` is still the latest fetch.
    fn settle(&self, generation: u64, result: Result<T, String>) -> FetchOutcome {
        let control = self.lock();

        if !control.attached {
            debug!(generation, "Dropping fetch result after detach");
            return FetchOutcome::Detached;
        }
        if control.generation != generation {
            debug!(generation, latest = control.generation, "Dropping superseded fetch result");
            return FetchOutcome::Superseded;
        }

        self.state_tx.send_modify(|state| match result {
            Ok(value) => {
                state.status = FetchStatus::Ready;
                state.data = Some(value);
                state.error = None;
            }
            Err(message) => {
                state.status = FetchStatus::Failed;
                state.data = None;
                state.error = Some(message);
            }
        });
        FetchOutcome::Applied
    }
}

struct Ticket<P, T> {
    generation: u64,
    params: P,
    fetcher: Fetcher<P, T>,
}

/// Observable state for one read.
///
/// `P` is the parameter the read depends on (`()` for a whole collection,
/// an optional id for a single record). Clones share the same state.
///
/// All methods that start a fetch spawn it on the current tokio runtime.
///
/// ## Usage
/// ```rust
/// use agri_client::fetch::{fetcher, FetchStatus, Resource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let resource: Resource<(), Vec<u32>> = Resource::new();
/// resource.attach((), fetcher(|()| async { Ok(vec![1, 2, 3]) }));
///
/// let state = resource.settled().await;
/// assert_eq!(state.status, FetchStatus::Ready);
/// assert_eq!(state.data, Some(vec![1, 2, 3]));
/// # }
/// ```
pub struct Resource<P, T> {
    shared: Arc<Shared<P, T>>,
}

impl<P, T> Clone for Resource<P, T> {
    fn clone(&self) -> Self {
        Resource {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P, T> Default for Resource<P, T> {
    fn default() -> Self {
        let (state_tx, _) = watch::channel(FetchState::default());

        Resource {
            shared: Arc::new(Shared {
                control: Mutex::new(Control {
                    params: None,
                    fetcher: None,
                    generation: 0,
                    attached: false,
                }),
                state_tx,
            }),
        }
    }
}

impl<P, T> Resource<P, T> {
    /// Stops publishing. In-flight fetches run to completion and are dropped.
    pub fn detach(&self) {
        let mut control = self.shared.lock();
        if control.attached {
            control.attached = false;
            debug!(generation = control.generation, "Resource detached");
        }
    }

    /// Returns true between [`attach`](Self::attach) and [`detach`](Self::detach).
    pub fn is_attached(&self) -> bool {
        self.shared.lock().attached
    }
}

impl<P, T> Resource<P, T>
where
    P: Clone + PartialEq + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Creates an idle resource.
    pub fn new() -> Self {
        Resource::default()
    }

    /// Installs the fetcher and starts the first fetch.
    ///
    /// Publishes `Loading` before returning. Attaching again replaces the
    /// fetcher and the parameters and starts over.
    pub fn attach(&self, params: P, fetcher: Fetcher<P, T>) -> PendingFetch {
        let ticket = {
            let mut control = self.shared.lock();
            control.params = Some(params);
            control.fetcher = Some(fetcher);
            control.attached = true;
            self.begin(&mut control, true)
        };
        self.spawn(ticket)
    }

    /// Clears the data and fetches again with the current parameters.
    ///
    /// ## Example
    /// ```rust,ignore
    /// // Wait for the fresh list
    /// resource.refetch().await;
    ///
    /// // Or let it load in the background
    /// resource.refetch();
    /// ```
    pub fn refetch(&self) -> PendingFetch {
        let ticket = {
            let mut control = self.shared.lock();
            self.begin(&mut control, true)
        };
        self.spawn(ticket)
    }

    /// Switches to new parameters.
    ///
    /// Returns `None` when `params` equals the current parameters or the
    /// resource is detached; a detached resource keeps its old parameters.
    /// The data of the previous parameters stays visible while the new
    /// fetch is loading.
    pub fn set_params(&self, params: P) -> Option<PendingFetch> {
        let ticket = {
            let mut control = self.shared.lock();
            if !control.attached || control.params.as_ref() == Some(&params) {
                return None;
            }
            control.params = Some(params);
            self.begin(&mut control, false)
        };
        ticket.map(|ticket| self.spawn(Some(ticket)))
    }

    /// Current parameters.
    pub fn params(&self) -> Option<P> {
        self.shared.lock().params.clone()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.shared.state_tx.borrow().clone()
    }

    /// Receiver that sees every published state.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.shared.state_tx.subscribe()
    }

    /// Waits until the state is `Ready` or `Failed` and returns it.
    ///
    /// Returns at once if it already is. Never returns for a resource that
    /// is never attached.
    pub async fn settled(&self) -> FetchState<T> {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| state.status.is_settled()).await {
            Ok(state) => state.clone(),
            // The sender lives as long as `self`.
            Err(_) => self.state(),
        };
        settled
    }

    /// Publishes `Loading` and hands out a ticket for the next generation.
    fn begin(&self, control: &mut Control<P, T>, clear_data: bool) -> Option<Ticket<P, T>> {
        if !control.attached {
            return None;
        }
        let params = control.params.clone()?;
        let fetcher = control.fetcher.clone()?;

        control.generation += 1;
        self.shared.state_tx.send_modify(|state| {
            state.status = FetchStatus::Loading;
            state.error = None;
            if clear_data {
                state.data = None;
            }
        });

        debug!(generation = control.generation, "Fetch started");
        Some(Ticket {
            generation: control.generation,
            params,
            fetcher,
        })
    }

    fn spawn(&self, ticket: Option<Ticket<P, T>>) -> PendingFetch {
        let Some(ticket) = ticket else {
            return PendingFetch::detached();
        };

        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let result = (ticket.fetcher)(ticket.params).await;
            shared.settle(ticket.generation, result)
        });

        PendingFetch {
            handle: Some(handle),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    /// Resolves to its parameter after that many milliseconds.
    fn delayed() -> Fetcher<u64, u64> {
        fetcher(|ms: u64| async move {
            sleep(Duration::from_millis(ms)).await;
            Ok(ms)
        })
    }

    /// Succeeds with 1 or fails, depending on the parameter.
    fn fallible() -> Fetcher<bool, u32> {
        fetcher(|ok: bool| async move {
            sleep(Duration::from_millis(10)).await;
            if ok {
                Ok(1)
            } else {
                Err("store unavailable".to_string())
            }
        })
    }

    #[tokio::test]
    async fn test_idle_before_attach() {
        let resource: Resource<u64, u64> = Resource::new();
        assert_eq!(resource.state(), FetchState::default());
        assert!(!resource.is_attached());

        assert_eq!(resource.refetch().await, FetchOutcome::Detached);
        assert_eq!(resource.state().status, FetchStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_then_ready() {
        let resource = Resource::new();

        let pending = resource.attach(50, delayed());
        let state = resource.state();
        assert!(state.is_loading());
        assert_eq!(state.data, None);

        assert_eq!(pending.await, FetchOutcome::Applied);
        let state = resource.state();
        assert_eq!(state.status, FetchStatus::Ready);
        assert_eq!(state.data, Some(50));
        assert_eq!(state.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_sets_error_and_clears_data() {
        let resource = Resource::new();
        resource.attach(true, fallible()).await;
        assert_eq!(resource.state().data, Some(1));

        let pending = resource.set_params(false).unwrap();
        let loading = resource.state();
        assert!(loading.is_loading());
        assert_eq!(loading.data, Some(1));

        assert_eq!(pending.await, FetchOutcome::Applied);
        let state = resource.state();
        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.data, None);
        assert_eq!(state.error.as_deref(), Some("store unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_clears_previous_error() {
        let resource = Resource::new();
        resource.attach(false, fallible()).await;
        assert!(resource.state().error.is_some());

        resource.set_params(true);
        assert_eq!(resource.state().error, None);

        let state = resource.settled().await;
        assert_eq!(state.status, FetchStatus::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetch_clears_data_while_loading() {
        let resource = Resource::new();
        resource.attach(20, delayed()).await;
        assert_eq!(resource.state().data, Some(20));

        let pending = resource.refetch();
        let state = resource.state();
        assert!(state.is_loading());
        assert_eq!(state.data, None);

        assert_eq!(pending.await, FetchOutcome::Applied);
        assert_eq!(resource.state().data, Some(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_result_is_dropped() {
        let resource = Resource::new();

        let slow = resource.attach(100, delayed());
        let fast = resource.set_params(10).unwrap();

        assert_eq!(fast.await, FetchOutcome::Applied);
        assert_eq!(resource.state().data, Some(10));

        assert_eq!(slow.await, FetchOutcome::Superseded);
        assert_eq!(resource.state().data, Some(10));
        assert_eq!(resource.state().status, FetchStatus::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_params_do_not_refetch() {
        let resource = Resource::new();
        resource.attach(10, delayed()).await;

        assert!(resource.set_params(10).is_none());
        assert_eq!(resource.state().status, FetchStatus::Ready);
        assert_eq!(resource.params(), Some(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_after_detach_is_dropped() {
        let resource = Resource::new();
        let mut rx = resource.subscribe();

        let pending = resource.attach(100, delayed());
        let _ = rx.borrow_and_update();
        resource.detach();

        assert_eq!(pending.await, FetchOutcome::Detached);
        assert!(!rx.has_changed().unwrap());
        assert!(resource.state().is_loading());
        assert_eq!(resource.state().data, None);

        assert!(resource.set_params(5).is_none());
        assert_eq!(resource.params(), Some(100));
        assert_eq!(resource.refetch().await, FetchOutcome::Detached);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_each_transition() {
        let resource = Resource::new();
        let mut rx = resource.subscribe();

        resource.attach(30, delayed());
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_loading());

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().data, Some(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_waits_for_result() {
        let resource = Resource::new();
        resource.attach(40, delayed());

        let state = resource.settled().await;
        assert_eq!(state.status, FetchStatus::Ready);
        assert_eq!(state.data, Some(40));
    }
}
