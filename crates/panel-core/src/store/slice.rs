// ── Watch-backed slice cell ──
//
// One `watch` channel per slice. Mutations build a fresh value and swap it
// in, so subscribers can detect change with `Arc::ptr_eq`. A generation
// counter sequences fetches against each other.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::stream::SliceStream;

/// Proof that a fetch was started at a given generation.
///
/// A result may only be committed while its ticket is still the newest one
/// issued for that slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    slice: &'static str,
    generation: u64,
}

impl FetchTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

pub(crate) struct SliceCell<V: Clone + Send + Sync + 'static> {
    name: &'static str,
    sender: watch::Sender<V>,
    generation: AtomicU64,
}

impl<V: Clone + Send + Sync + 'static> SliceCell<V> {
    pub(crate) fn new(name: &'static str, initial: V) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            name,
            sender,
            generation: AtomicU64::new(0),
        }
    }

    pub(crate) fn get(&self) -> V {
        self.sender.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> SliceStream<V> {
        SliceStream::new(self.sender.subscribe())
    }

    /// Replace the value unconditionally.
    pub(crate) fn replace(&self, value: V) {
        // `send_replace` updates even with zero receivers.
        self.sender.send_replace(value);
        tracing::trace!(slice = self.name, "slice replaced");
    }

    // ── Sequencing ───────────────────────────────────────────────────

    /// Start a fetch. Any ticket issued earlier becomes stale.
    pub(crate) fn begin_fetch(&self) -> FetchTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        FetchTicket {
            slice: self.name,
            generation,
        }
    }

    /// Invalidate outstanding tickets without starting a fetch.
    pub(crate) fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.slice == self.name && self.generation.load(Ordering::Acquire) == ticket.generation
    }

    /// Apply `commit` only if `ticket` is still the newest. Returns whether
    /// it was applied.
    pub(crate) fn commit_with(&self, ticket: FetchTicket, commit: impl FnOnce(&Self)) -> bool {
        if !self.is_current(ticket) {
            debug!(
                slice = self.name,
                ticket = ticket.generation,
                current = self.generation.load(Ordering::Acquire),
                "discarding stale fetch result"
            );
            return false;
        }
        commit(self);
        true
    }
}

impl<S: Clone + Send + Sync + 'static> SliceCell<Arc<S>> {
    /// Clone the state, let `f` edit the copy, and publish it if `f`
    /// reports a change. A `false` return leaves the old snapshot (and its
    /// pointer identity) in place.
    pub(crate) fn modify(&self, f: impl FnOnce(&mut S) -> bool) -> bool {
        let changed = self.sender.send_if_modified(|snap| {
            let mut next = S::clone(snap);
            if f(&mut next) {
                *snap = Arc::new(next);
                true
            } else {
                false
            }
        });
        if changed {
            tracing::trace!(slice = self.name, "slice updated");
        }
        changed
    }
}
