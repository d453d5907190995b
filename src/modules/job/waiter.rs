use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::model::JobState;
use super::service::JobProvider;
use crate::common::error::WorkflowError;

#[derive(Clone, Copy, Debug)]
pub struct WaitOptions {
    pub poll_interval: Duration,
    /// `None` waits forever (barring cancellation).
    pub timeout: Option<Duration>,
}

/// Polls the job at a fixed interval until it reaches a terminal state.
/// The deadline and the cancellation token both abandon the wait with a
/// `Timeout`, which is distinct from the job itself ending in `Error`:
/// a terminal job state, whatever it is, comes back as `Ok`.
pub async fn await_completion(
    jobs: &dyn JobProvider,
    job_id: &str,
    opts: &WaitOptions,
    cancel: &CancellationToken,
) -> Result<JobState, WorkflowError> {
    let started = Instant::now();
    let deadline = opts.timeout.map(|t| started + t);

    loop {
        let state = jobs.job_state(job_id).await?;
        if state.is_terminal() {
            info!("Job {} reached terminal state {}", job_id, state);
            return Ok(state);
        }
        debug!("Job {} is {}, polling again in {:?}", job_id, state, opts.poll_interval);

        // The deadline races the poll sleep so a short timeout fires at
        // the timeout, not at the next poll tick.
        tokio::select! {
            _ = cancel.cancelled() => {
                return Err(WorkflowError::Timeout {
                    job_id: job_id.to_string(),
                    waited: started.elapsed(),
                });
            }
            _ = deadline_elapsed(deadline) => {
                return Err(WorkflowError::Timeout {
                    job_id: job_id.to_string(),
                    waited: started.elapsed(),
                });
            }
            _ = time::sleep(opts.poll_interval) => {}
        }
    }
}

async fn deadline_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
