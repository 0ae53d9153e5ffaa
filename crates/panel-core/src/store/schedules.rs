// ── Schedules slice ──

use std::sync::Arc;

use crate::model::Schedule;
use crate::stream::SliceStream;

use super::slice::{FetchTicket, SliceCell};

pub struct SchedulesSlice {
    cell: SliceCell<Arc<Vec<Schedule>>>,
}

impl SchedulesSlice {
    pub(crate) fn new(initial: Vec<Schedule>) -> Self {
        Self {
            cell: SliceCell::new("schedules", Arc::new(initial)),
        }
    }

    pub fn schedules(&self) -> Arc<Vec<Schedule>> {
        self.cell.get()
    }

    pub fn subscribe(&self) -> SliceStream<Arc<Vec<Schedule>>> {
        self.cell.subscribe()
    }

    pub fn get(&self, id: i64) -> Option<Schedule> {
        self.schedules().iter().find(|s| s.id == id).cloned()
    }

    pub fn set_schedules(&self, schedules: Vec<Schedule>) {
        self.cell.replace(Arc::new(schedules));
    }

    /// Append, keeping existing order.
    pub fn add_schedule(&self, schedule: Schedule) {
        self.cell.modify(|list| {
            list.push(schedule);
            true
        });
    }

    /// Replace the schedule with the same id in place. No-op when absent.
    pub fn update_schedule(&self, schedule: Schedule) {
        self.cell.modify(|list| {
            match list.iter_mut().find(|s| s.id == schedule.id) {
                Some(slot) => {
                    *slot = schedule;
                    true
                }
                None => false,
            }
        });
    }

    /// Update in place when present, append otherwise.
    pub fn upsert_schedule(&self, schedule: Schedule) {
        self.cell.modify(|list| {
            match list.iter_mut().find(|s| s.id == schedule.id) {
                Some(slot) => *slot = schedule,
                None => list.push(schedule),
            }
            true
        });
    }

    pub fn remove_schedule(&self, id: i64) {
        self.cell.modify(|list| {
            let before = list.len();
            list.retain(|s| s.id != id);
            list.len() != before
        });
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        self.cell.begin_fetch()
    }

    pub fn commit_schedules(&self, ticket: FetchTicket, schedules: Vec<Schedule>) -> bool {
        self.cell
            .commit_with(ticket, |_| self.set_schedules(schedules))
    }

    pub(crate) fn reset(&self) {
        self.cell.invalidate();
        self.cell.replace(Arc::new(Vec::new()));
    }
}
