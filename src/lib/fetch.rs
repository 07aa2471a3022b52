//! Fetch lifecycle shared by views: a tagged [`FetchState`] and a stale-response
//! guard. A view owns one [`RequestGuard`], hands a [`RequestTicket`] to each
//! request it starts, and invalidates the guard on cleanup. Results that come
//! back for a ticket that is no longer current are dropped before they reach
//! view state.

use super::errors::AppError;
use leptos::prelude::on_cleanup;
use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tracing::{debug, warn};

/// State of a single fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            FetchState::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, AppError>> for FetchState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(payload) => FetchState::Succeeded(payload),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }
}

/// Generation counter shared by a view and the requests it starts.
///
/// Atomic so cleanup closures stay `Send + Sync`; all access still happens on
/// the UI thread.
#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every ticket issued before.
    pub fn begin(&self) -> RequestTicket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            id,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Marks every outstanding ticket as stale, typically when the view is torn down.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Invalidates the guard when the current reactive owner is cleaned up.
    pub fn invalidate_on_cleanup(&self) {
        let guard = self.clone();
        on_cleanup(move || guard.invalidate());
    }
}

/// Handle for one request started through a [`RequestGuard`].
#[derive(Clone, Debug)]
pub struct RequestTicket {
    id: u64,
    generation: Arc<AtomicU64>,
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}

/// Drives `request` and reports its lifecycle through `apply`.
///
/// `apply` receives `Pending` before the request is awaited and exactly one
/// settled state afterwards, unless the ticket went stale first; then nothing
/// more is written. Returns whether the settled state was applied.
pub async fn run_guarded<T, Fut>(
    label: &str,
    ticket: RequestTicket,
    request: Fut,
    mut apply: impl FnMut(FetchState<T>),
) -> bool
where
    Fut: Future<Output = Result<T, AppError>>,
{
    if !ticket.is_current() {
        debug!(label, "request superseded before start");
        return false;
    }

    debug!(label, "request started");
    apply(FetchState::Pending);

    let result = request.await;

    if !ticket.is_current() {
        debug!(label, "dropping stale response");
        return false;
    }

    if let Err(err) = &result {
        warn!(label, error = %err, "request failed");
    }
    apply(FetchState::from(result));
    true
}

#[cfg(test)]
mod tests {
    use super::{FetchState, RequestGuard, run_guarded};
    use crate::app_lib::AppError;
    use leptos::prelude::Owner;
    use std::cell::RefCell;
    use tokio::sync::oneshot;

    #[test]
    fn newer_ticket_supersedes_older() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());

        guard.invalidate();
        assert!(!second.is_current());
    }

    #[test]
    fn owner_cleanup_invalidates_outstanding_ticket() {
        let guard = RequestGuard::new();
        let owner = Owner::new();
        let ticket = owner.with(|| {
            guard.invalidate_on_cleanup();
            guard.begin()
        });
        assert!(ticket.is_current());

        owner.cleanup();
        assert!(!ticket.is_current());
    }

    #[test]
    fn fetch_state_from_result() {
        let ok: FetchState<u8> = Ok(3).into();
        assert_eq!(ok.payload(), Some(&3));
        assert!(!ok.is_pending());

        let failed: FetchState<u8> = Err(AppError::Timeout("slow".to_string())).into();
        assert_eq!(failed.error(), Some("Timeout: slow"));
        assert_eq!(failed.payload(), None);
    }

    #[tokio::test]
    async fn success_goes_pending_then_succeeded() {
        let guard = RequestGuard::new();
        let states = RefCell::new(Vec::new());

        let applied = run_guarded("test", guard.begin(), async { Ok(vec![1, 2]) }, |state| {
            states.borrow_mut().push(state)
        })
        .await;

        assert!(applied);
        assert_eq!(
            states.into_inner(),
            vec![FetchState::Pending, FetchState::Succeeded(vec![1, 2])]
        );
    }

    #[tokio::test]
    async fn failure_clears_pending_with_message() {
        let guard = RequestGuard::new();
        let states = RefCell::new(Vec::new());

        run_guarded(
            "test",
            guard.begin(),
            async { Err::<(), _>(AppError::Network("offline".to_string())) },
            |state| states.borrow_mut().push(state),
        )
        .await;

        let states = states.into_inner();
        assert_eq!(states.len(), 2);
        assert_eq!(
            states.last(),
            Some(&FetchState::Failed("Network error: offline".to_string()))
        );
    }

    #[tokio::test]
    async fn late_response_after_invalidate_is_dropped() {
        let guard = RequestGuard::new();
        let states = RefCell::new(Vec::new());
        let (sender, receiver) = oneshot::channel::<Result<u32, AppError>>();

        let request = async move {
            receiver
                .await
                .unwrap_or_else(|_| Err(AppError::Network("closed".to_string())))
        };
        let load = run_guarded("test", guard.begin(), request, |state| {
            states.borrow_mut().push(state)
        });
        let teardown = async {
            guard.invalidate();
            let _ = sender.send(Ok(7));
        };

        let (applied, ()) = tokio::join!(load, teardown);

        assert!(!applied);
        assert_eq!(states.into_inner(), vec![FetchState::Pending]);
    }

    #[tokio::test]
    async fn superseded_request_never_overwrites_newer_state() {
        let guard = RequestGuard::new();
        let states = RefCell::new(Vec::new());
        let (slow_tx, slow_rx) = oneshot::channel::<Result<&str, AppError>>();

        let stale_ticket = guard.begin();
        let slow = run_guarded(
            "slow",
            stale_ticket,
            async move { slow_rx.await.unwrap_or(Ok("closed")) },
            |state| states.borrow_mut().push(state),
        );
        let fresh = async {
            let applied = run_guarded("fresh", guard.begin(), async { Ok("fresh") }, |state| {
                states.borrow_mut().push(state)
            })
            .await;
            let _ = slow_tx.send(Ok("stale"));
            applied
        };

        let (slow_applied, fresh_applied) = tokio::join!(slow, fresh);

        assert!(!slow_applied);
        assert!(fresh_applied);
        assert_eq!(
            states.into_inner().last(),
            Some(&FetchState::Succeeded("fresh"))
        );
    }

    #[tokio::test]
    async fn stale_ticket_skips_even_the_pending_write() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.invalidate();
        let mut writes = 0;

        let applied = run_guarded("test", ticket, async { Ok(()) }, |_| writes += 1).await;

        assert!(!applied);
        assert_eq!(writes, 0);
    }
}
