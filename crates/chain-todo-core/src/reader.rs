//! Task Reader
//!
//! Full re-read of the contract's task list. A pass reads the count, then
//! every task concurrently, and publishes the assembled list in one step. A
//! failed pass publishes nothing.
//!
//! At most one pass runs at a time. Triggers that arrive meanwhile collapse
//! into a single deferred pass that runs as soon as the current one ends.

use std::cell::{Cell, RefCell};

use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::domain::{ReadError, Task, TaskSnapshot};
use crate::endpoint::ReadEndpoint;
use crate::flight::InFlight;

/// What happened to a refresh trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A pass completed and its list is now the snapshot
    Published { generation: u64, count: u64 },
    /// A read failed; the previous snapshot is untouched
    Abandoned(ReadError),
    /// The snapshot was reset while the pass was in flight
    Discarded,
    /// A pass was already running; one more will follow it
    Deferred,
    /// The session is not ready, nothing was read
    Gated,
}

pub struct TaskReader<R> {
    endpoint: R,
    snapshot: RefCell<TaskSnapshot>,
    refreshing: Cell<bool>,
    /// Caller for the deferred pass, if one is owed
    rerun: RefCell<Option<Option<String>>>,
    /// Bumped by `reset`; passes begun under an older epoch are not published
    epoch: Cell<u64>,
}

impl<R: ReadEndpoint> TaskReader<R> {
    pub fn new(endpoint: R) -> Self {
        Self {
            endpoint,
            snapshot: RefCell::new(TaskSnapshot::default()),
            refreshing: Cell::new(false),
            rerun: RefCell::new(None),
            epoch: Cell::new(0),
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing.get()
    }

    pub fn snapshot(&self) -> TaskSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Forget the published list and any owed pass, e.g. after an account
    /// switch or a disconnect
    pub fn reset(&self) {
        self.epoch.set(self.epoch.get() + 1);
        self.rerun.borrow_mut().take();
        let generation = self.snapshot.borrow().generation;
        *self.snapshot.borrow_mut() = TaskSnapshot {
            generation,
            ..TaskSnapshot::default()
        };
    }

    /// `getTasksCount()`
    pub async fn count(&self, caller: Option<&str>) -> Result<u64, ReadError> {
        self.endpoint.count(caller).await
    }

    /// `n` point reads, assembled in index order; the first failure aborts
    pub async fn fetch_all(&self, caller: Option<&str>, n: u64) -> Result<Vec<Task>, ReadError> {
        try_join_all((0..n).map(|index| self.endpoint.get(caller, index))).await
    }

    /// Run a pass, or defer it if one is already in flight
    pub async fn refresh(&self, caller: Option<&str>) -> RefreshOutcome {
        if self.refreshing.get() {
            debug!("refresh already in flight, deferring");
            *self.rerun.borrow_mut() = Some(caller.map(str::to_string));
            return RefreshOutcome::Deferred;
        }

        let _flight = InFlight::enter(&self.refreshing);
        let mut caller = caller.map(str::to_string);
        loop {
            let outcome = self.pass(caller.as_deref()).await;
            let next = self.rerun.borrow_mut().take();
            match next {
                Some(next_caller) => caller = next_caller,
                None => return outcome,
            }
        }
    }

    async fn pass(&self, caller: Option<&str>) -> RefreshOutcome {
        let epoch = self.epoch.get();
        let read = self.read_all(caller).await;

        match read {
            Err(err) => {
                warn!(error = %err, "refresh abandoned, keeping previous task list");
                RefreshOutcome::Abandoned(err)
            }
            Ok(_) if self.epoch.get() != epoch => {
                debug!("snapshot reset during refresh, discarding pass");
                RefreshOutcome::Discarded
            }
            Ok((count, tasks)) => {
                let mut snapshot = self.snapshot.borrow_mut();
                snapshot.generation += 1;
                snapshot.count = Some(count);
                snapshot.tasks = tasks;
                info!(count, generation = snapshot.generation, "task list published");
                RefreshOutcome::Published {
                    generation: snapshot.generation,
                    count,
                }
            }
        }
    }

    async fn read_all(&self, caller: Option<&str>) -> Result<(u64, Vec<Task>), ReadError> {
        let count = self.count(caller).await?;
        let tasks = self.fetch_all(caller, count).await?;
        Ok((count, tasks))
    }
}
