//! The shared job table. Handlers and
//! workers take a single short-lived lock on the *table* to look up or
//! insert a slot; each slot is its own `RwLock<Job>` so a worker mutates its
//! own job without holding the table lock, and readers only ever take the
//! slot's lock for the duration of a clone.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio_util::sync::CancellationToken;

use settle_core::{Job, JobId};

#[derive(Clone)]
struct JobHandle {
    slot: Arc<RwLock<Job>>,
    cancel: CancellationToken,
}

/// `Arc<RwLock<HashMap<...>>>` so the table itself can be cloned cheaply
/// into every handler and worker task.
#[derive(Clone, Default)]
pub struct JobTable {
    inner: Arc<RwLock<HashMap<JobId, JobHandle>>>,
}

impl JobTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly submitted job and return its slot plus the
    /// cancellation token its worker should poll.
    pub fn insert(&self, job: Job) -> (Arc<RwLock<Job>>, CancellationToken) {
        let slot = Arc::new(RwLock::new(job.clone()));
        let cancel = CancellationToken::new();
        let handle = JobHandle {
            slot: slot.clone(),
            cancel: cancel.clone(),
        };
        self.inner
            .write()
            .expect("job table lock poisoned")
            .insert(job.id, handle);
        (slot, cancel)
    }

    /// Clone of the job's current state, or `None` if unknown.
    pub fn snapshot(&self, id: &JobId) -> Option<Job> {
        let slot = {
            let table = self.inner.read().expect("job table lock poisoned");
            table.get(id)?.slot.clone()
        };
        Some(slot.read().expect("job slot lock poisoned").clone())
    }

    /// The job's own `Arc<RwLock<Job>>`, for a worker to mutate directly.
    pub fn slot(&self, id: &JobId) -> Option<Arc<RwLock<Job>>> {
        self.inner
            .read()
            .expect("job table lock poisoned")
            .get(id)
            .map(|h| h.slot.clone())
    }

    /// Signal cancellation to every outstanding worker, for graceful
    /// shutdown.
    pub fn cancel_all(&self) {
        for handle in self.inner.read().expect("job table lock poisoned").values() {
            handle.cancel.cancel();
        }
    }
}
