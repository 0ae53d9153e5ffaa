// ── Server identity slice ──

use std::sync::Arc;

use crate::model::{Allocation, Server};
use crate::stream::SliceStream;

use super::slice::{FetchTicket, SliceCell};

pub struct ServerSlice {
    cell: SliceCell<Option<Arc<Server>>>,
}

impl ServerSlice {
    pub(crate) fn new(initial: Option<Server>) -> Self {
        Self {
            cell: SliceCell::new("server", initial.map(Arc::new)),
        }
    }

    pub fn server(&self) -> Option<Arc<Server>> {
        self.cell.get()
    }

    pub fn subscribe(&self) -> SliceStream<Option<Arc<Server>>> {
        self.cell.subscribe()
    }

    /// UUID of the loaded server.
    pub fn uuid(&self) -> Option<String> {
        self.server().map(|s| s.uuid.clone())
    }

    pub fn set_server(&self, server: Server) {
        self.cell.replace(Some(Arc::new(server)));
    }

    pub fn clear_server(&self) {
        self.cell.invalidate();
        self.cell.replace(None);
    }

    /// Default-flagged allocation, else the first listed, else `None`.
    pub fn primary_allocation(&self) -> Option<Allocation> {
        self.server()
            .and_then(|s| s.primary_allocation().cloned())
    }

    /// Replace the loaded server's allocations. No-op without a server.
    pub fn set_allocations(&self, allocations: Vec<Allocation>) {
        let Some(current) = self.server() else {
            return;
        };
        let mut next = Server::clone(&current);
        next.allocations = allocations;
        self.set_server(next);
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        self.cell.begin_fetch()
    }

    pub fn commit_server(&self, ticket: FetchTicket, server: Server) -> bool {
        self.cell.commit_with(ticket, |_| self.set_server(server))
    }
}
