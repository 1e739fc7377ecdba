//! A whole-collection resource.

use std::future::Future;

use tokio::sync::watch;

use crate::fetch::{fetcher, FetchState, PendingFetch, Resource};

/// Observable copy of one collection.
///
/// Detaches when dropped, so a result that arrives afterwards is discarded.
pub struct ListResource<T> {
    resource: Resource<(), Vec<T>>,
}

impl<T> ListResource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Attaches to `list` and starts the first fetch.
    ///
    /// The read cannot fail, so the resource only ever becomes `Ready`.
    pub(crate) fn attach<F, Fut>(list: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Vec<T>> + Send + 'static,
    {
        let resource = Resource::new();
        resource.attach(
            (),
            fetcher(move |()| {
                let rows = list();
                async move { Ok(rows.await) }
            }),
        );
        ListResource { resource }
    }

    /// The fetched records, or an empty list while nothing is loaded.
    pub fn items(&self) -> Vec<T> {
        self.resource.state().data.unwrap_or_default()
    }

    /// Returns true while a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.resource.state().is_loading()
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<String> {
        self.resource.state().error
    }

    /// Clears the items and fetches them again.
    pub fn refetch(&self) -> PendingFetch {
        self.resource.refetch()
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> FetchState<Vec<T>> {
        self.resource.state()
    }

    /// Receiver that sees every published state.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Vec<T>>> {
        self.resource.subscribe()
    }

    /// Waits until the list is loaded.
    pub async fn settled(&self) -> FetchState<Vec<T>> {
        self.resource.settled().await
    }
}

impl<T> Drop for ListResource<T> {
    fn drop(&mut self) {
        self.resource.detach();
    }
}
