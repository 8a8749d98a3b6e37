//! Per-job background worker. One is spawned per upload; it owns its job's
//! mutable state for its lifetime and only ever touches the table through
//! the slot it was handed at spawn time.

use std::sync::{Arc, RwLock};

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use settle_core::{Job, JobState};
use settle_aggregate::Aggregator;

/// Parse and aggregate `slot`'s file bytes, mutating it to `completed` or
/// `error` in place. Parsing is CPU-bound, so it runs on the blocking
/// thread pool rather than the async reactor.
pub async fn run(slot: Arc<RwLock<Job>>, cancel: CancellationToken) {
    let (channel_id, bytes, job_id) = {
        let mut job = slot.write().expect("job slot lock poisoned");
        job.state = JobState::Processing;
        let bytes = job
            .file_bytes
            .take()
            .expect("worker started on a job with no file bytes");
        (job.channel_id, bytes, job.id.clone())
    };

    info!(%job_id, %channel_id, "job processing started");

    let result = tokio::task::spawn_blocking(move || {
        let keep_going = {
            let cancel = cancel.clone();
            move || !cancel.is_cancelled()
        };
        let text = settle_parser::decode(&bytes);
        let report = settle_parser::parse_checked(bytes.as_slice(), channel_id, keep_going);
        let cancelled = cancel.is_cancelled();

        let mut aggregator = Aggregator::new(channel_id);
        aggregator.ingest_all(report.outcomes.iter());

        (text, aggregator.into_groups(), report.skips.total(), cancelled)
    })
    .await;

    let mut job = slot.write().expect("job slot lock poisoned");
    match result {
        Ok((text, groups, skipped, cancelled)) => {
            job.records_parsed = groups.values().map(|g| g.count as u64).sum();
            job.raw_text = Some(text);
            job.groups = groups;
            if cancelled {
                warn!(%job_id, "job cancelled mid-parse; partial results retained");
            }
            if skipped > 0 {
                warn!(%job_id, skipped, "lines skipped during parse");
            }
            job.finish(JobState::Completed);
            info!(%job_id, records = job.records_parsed, "job completed");
        }
        Err(join_err) => {
            error!(%job_id, error = %join_err, "worker task panicked");
            job.error_message = Some(format!("internal error: {join_err}"));
            job.finish(JobState::Error);
        }
    }
}
