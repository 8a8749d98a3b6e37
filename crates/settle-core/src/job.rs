//! Job data model. The coordinator logic that mutates these
//! values lives in `settle-server`; this crate only defines the shape
//! so `settle-parser`/`settle-aggregate`/`settle-report` can all speak
//! the same vocabulary without depending on the server crate.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::channel::{AreaTag, ChannelId};
use crate::model::{Group, ReferenceKey};

/// Opaque job identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a submitted job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    Queued,
    Processing,
    Completed,
    Error,
}

impl JobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Queued => "queued",
            JobState::Processing => "processing",
            JobState::Completed => "completed",
            JobState::Error => "error",
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ingest job: one uploaded file, one declared channel, one
/// area tag, and the groups it has accumulated so far.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub state: JobState,
    pub channel_id: ChannelId,
    pub area_tag: AreaTag,
    pub original_filename: String,
    pub file_bytes: Option<Vec<u8>>,
    /// The file, decoded to text. Populated once parsing completes, so the
    /// status endpoint can hand it back to a client that will echo it into
    /// `/api/generate-report` (see settle-server's stateless report flow).
    pub raw_text: Option<String>,
    /// Keyed by reference key, in first-seen order — the CSV breakdown
    /// and status payloads both report groups in this order, not key order.
    pub groups: IndexMap<ReferenceKey, Group>,
    pub records_parsed: u64,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(
        id: JobId,
        channel_id: ChannelId,
        area_tag: AreaTag,
        original_filename: impl Into<String>,
        file_bytes: Vec<u8>,
    ) -> Self {
        Self {
            id,
            state: JobState::Queued,
            channel_id,
            area_tag,
            original_filename: original_filename.into(),
            file_bytes: Some(file_bytes),
            raw_text: None,
            groups: IndexMap::new(),
            records_parsed: 0,
            error_message: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// `Σ group.count` across every reference group in the job.
    pub fn total_record_count(&self) -> u32 {
        self.groups.values().map(|g| g.count).sum()
    }

    /// Marks the job `Completed` or `Error` and stamps `completed_at`.
    /// Does nothing to `completed_at` if called twice.
    pub fn finish(&mut self, state: JobState) {
        self.state = state;
        self.completed_at.get_or_insert_with(Utc::now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_job_starts_queued_with_no_groups() {
        let job = Job::new(
            JobId::new("job-1"),
            ChannelId::Bdo,
            AreaTag::Epr,
            "settlement.txt",
            b"line1\nline2".to_vec(),
        );
        assert_eq!(job.state, JobState::Queued);
        assert!(job.groups.is_empty());
        assert_eq!(job.total_record_count(), 0);
    }
}
