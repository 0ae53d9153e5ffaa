// ── Backups slice ──

use std::sync::Arc;

use crate::model::ServerBackup;
use crate::pagination::PaginatedResult;
use crate::stream::SliceStream;

use super::slice::{FetchTicket, SliceCell};

pub struct BackupsSlice {
    cell: SliceCell<Arc<PaginatedResult<ServerBackup>>>,
}

impl BackupsSlice {
    pub(crate) fn new(initial: PaginatedResult<ServerBackup>) -> Self {
        Self {
            cell: SliceCell::new("backups", Arc::new(initial)),
        }
    }

    pub fn backups(&self) -> Arc<PaginatedResult<ServerBackup>> {
        self.cell.get()
    }

    pub fn subscribe(&self) -> SliceStream<Arc<PaginatedResult<ServerBackup>>> {
        self.cell.subscribe()
    }

    pub fn set_backups(&self, backups: PaginatedResult<ServerBackup>) {
        self.cell.replace(Arc::new(backups));
    }

    /// Append; `total_items` +1.
    pub fn add_backup(&self, backup: ServerBackup) {
        self.cell.modify(|page| {
            page.push(backup);
            true
        });
    }

    /// Replace the backup with the same uuid in place. No-op when absent.
    pub fn update_backup(&self, backup: ServerBackup) {
        self.cell.modify(|page| {
            match page.items.iter_mut().find(|b| b.uuid == backup.uuid) {
                Some(slot) => {
                    *slot = backup;
                    true
                }
                None => false,
            }
        });
    }

    /// Remove by uuid; `total_items` −1 when one was removed.
    pub fn remove_backup(&self, uuid: &str) {
        self.cell.modify(|page| page.retain(|b| b.uuid != uuid) > 0);
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        self.cell.begin_fetch()
    }

    pub fn commit_backups(
        &self,
        ticket: FetchTicket,
        backups: PaginatedResult<ServerBackup>,
    ) -> bool {
        self.cell.commit_with(ticket, |_| self.set_backups(backups))
    }

    pub(crate) fn reset(&self) {
        self.cell.invalidate();
        self.cell.replace(Arc::new(PaginatedResult::empty()));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn backup(uuid: &str) -> ServerBackup {
        ServerBackup {
            uuid: uuid.into(),
            name: uuid.into(),
            ..ServerBackup::default()
        }
    }

    #[test]
    fn add_update_remove_track_total() {
        let slice = BackupsSlice::new(PaginatedResult::from_list(vec![backup("a")], None));
        slice.add_backup(backup("b"));
        assert_eq!(slice.backups().pagination.total_items, 2);

        let mut done = backup("b");
        done.is_successful = true;
        slice.update_backup(done);
        let page = slice.backups();
        assert_eq!(page.items[1].uuid, "b");
        assert!(page.items[1].is_successful);

        slice.remove_backup("a");
        slice.remove_backup("a");
        assert_eq!(slice.backups().pagination.total_items, 1);
        assert_eq!(slice.backups().items.len(), 1);
        assert_eq!(slice.backups().pagination.total_pages, 1);
        assert_eq!(slice.backups().pagination.per_page, 2);
    }
}
