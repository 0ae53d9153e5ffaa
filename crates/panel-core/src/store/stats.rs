// ── Live stats slice ──
//
// Written on every telemetry tick, so the value is `Copy` and stored
// inline: a write is one channel swap with no allocation.

use crate::model::ServerStats;
use crate::stream::SliceStream;

use super::slice::{FetchTicket, SliceCell};

pub struct StatsSlice {
    cell: SliceCell<Option<ServerStats>>,
}

impl StatsSlice {
    pub(crate) fn new(initial: Option<ServerStats>) -> Self {
        Self {
            cell: SliceCell::new("stats", initial),
        }
    }

    pub fn stats(&self) -> Option<ServerStats> {
        self.cell.get()
    }

    pub fn subscribe(&self) -> SliceStream<Option<ServerStats>> {
        self.cell.subscribe()
    }

    /// Replace the current sample wholesale. A pushed sample is newer than
    /// any fetch still in flight, so those are dropped.
    pub fn set_stats(&self, stats: ServerStats) {
        self.cell.invalidate();
        self.cell.replace(Some(stats));
    }

    pub fn clear_stats(&self) {
        self.cell.invalidate();
        self.cell.replace(None);
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        self.cell.begin_fetch()
    }

    pub fn commit_stats(&self, ticket: FetchTicket, stats: ServerStats) -> bool {
        self.cell
            .commit_with(ticket, |cell| cell.replace(Some(stats)))
    }
}
