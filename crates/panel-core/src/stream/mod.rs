// ── Reactive slice streams ──
//
// Subscription handles vended by `ServerStore` slices.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to one store slice.
///
/// Offers point-in-time snapshot access plus change notification through
/// `changed()` or by converting into a `Stream`. Ends once the owning
/// store is disposed.
pub struct SliceStream<V: Clone + Send + Sync + 'static> {
    current: V,
    receiver: watch::Receiver<V>,
}

impl<V: Clone + Send + Sync + 'static> SliceStream<V> {
    pub(crate) fn new(receiver: watch::Receiver<V>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Snapshot as of creation or the last `changed()`.
    pub fn current(&self) -> &V {
        &self.current
    }

    /// Latest snapshot (may have changed since `current`).
    pub fn latest(&self) -> V {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once the store has been disposed.
    pub async fn changed(&mut self) -> Option<V> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    /// Yields the current snapshot first, then every change.
    pub fn into_stream(self) -> SliceWatchStream<V> {
        SliceWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct SliceWatchStream<V: Clone + Send + Sync + 'static> {
    inner: WatchStream<V>,
}

impl<V: Clone + Send + Sync + 'static> Stream for SliceWatchStream<V> {
    type Item = V;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
