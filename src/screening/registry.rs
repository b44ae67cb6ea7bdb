//! In-memory table of screening jobs
//!
//! Each start installs a fresh job under a new generation with its own
//! cancellation token. A driver task only advances the job of its own
//! generation, so restarting a screening never mixes two runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use super::job::{JobStage, ScreeningJob, StageSchedule};
use crate::domain::models::ScreeningStatus;
use crate::shared::logging::{log_stage_driver_cancelled, log_stage_transition};

struct JobSlot {
    job: ScreeningJob,
    generation: u64,
    cancel: CancellationToken,
}

/// Handle to a freshly installed job
#[derive(Debug, Clone)]
pub struct InstalledJob {
    pub generation: u64,
    pub cancel: CancellationToken,
}

pub struct ScreeningRegistry {
    jobs: DashMap<String, JobSlot>,
    schedule: StageSchedule,
    next_generation: AtomicU64,
}

impl ScreeningRegistry {
    pub fn new(schedule: StageSchedule) -> Self {
        Self {
            jobs: DashMap::new(),
            schedule,
            next_generation: AtomicU64::new(1),
        }
    }

    pub fn schedule(&self) -> &StageSchedule {
        &self.schedule
    }

    /// Install a new job in `Initializing`, cancelling any previous run for `nm_id`
    pub fn install(&self, nm_id: &str) -> InstalledJob {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let cancel = CancellationToken::new();
        let slot = JobSlot {
            job: ScreeningJob::new(nm_id),
            generation,
            cancel: cancel.clone(),
        };

        if let Some(previous) = self.jobs.insert(nm_id.to_string(), slot) {
            previous.cancel.cancel();
        }

        InstalledJob { generation, cancel }
    }

    /// Install a job and spawn the task that walks it through its stages
    pub fn start(self: &Arc<Self>, nm_id: &str) -> u64 {
        let installed = self.install(nm_id);
        tokio::spawn(drive_job(
            Arc::clone(self),
            nm_id.to_string(),
            installed.generation,
            installed.cancel,
        ));
        installed.generation
    }

    /// Advance the job for `nm_id` if it still belongs to `generation`
    pub fn advance(&self, nm_id: &str, generation: u64) -> Option<JobStage> {
        let mut slot = self.jobs.get_mut(nm_id)?;
        if slot.generation != generation {
            return None;
        }
        slot.job.advance()
    }

    pub fn status(&self, nm_id: &str) -> Option<ScreeningStatus> {
        self.jobs.get(nm_id).map(|slot| slot.job.snapshot())
    }

    /// Stop every running driver; jobs keep their last stage
    pub fn cancel_all(&self) {
        for slot in self.jobs.iter() {
            slot.cancel.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for ScreeningRegistry {
    fn default() -> Self {
        Self::new(StageSchedule::default())
    }
}

async fn drive_job(
    registry: Arc<ScreeningRegistry>,
    nm_id: String,
    generation: u64,
    cancel: CancellationToken,
) {
    let span = crate::screening_span!(nm_id.as_str(), generation);
    let schedule = *registry.schedule();

    async move {
        for delay in schedule.delays() {
            tokio::select! {
                _ = cancel.cancelled() => {
                    log_stage_driver_cancelled(&nm_id, generation);
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            match registry.advance(&nm_id, generation) {
                Some(stage) => log_stage_transition(&nm_id, generation, stage.label()),
                None => return,
            }
        }
    }
    .instrument(span)
    .await
}
