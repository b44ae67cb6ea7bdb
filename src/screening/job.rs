//! Screening job state machine
//!
//! A job walks a fixed line of stages. Advancing is a plain method call so
//! every transition can be exercised without timers; `StageSchedule` only
//! says how long the driver waits before each call.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::fixtures::screening_results;
use crate::domain::models::{ScreeningResults, ScreeningStatus, COMPLETED_LABEL};
use crate::shared::constants::DEFAULT_STAGE_DELAYS_MS;

/// Stage of a screening job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    Initializing,
    CollectingRecords,
    AnalyzingNews,
    Summarizing,
    Completed,
}

impl JobStage {
    pub const ALL: [JobStage; 5] = [
        JobStage::Initializing,
        JobStage::CollectingRecords,
        JobStage::AnalyzingNews,
        JobStage::Summarizing,
        JobStage::Completed,
    ];

    /// Status label reported to clients
    pub fn label(&self) -> &'static str {
        match self {
            JobStage::Initializing => "Initializing screening process...",
            JobStage::CollectingRecords => "Collecting public records...",
            JobStage::AnalyzingNews => "Analyzing news sources...",
            JobStage::Summarizing => "Summarizing results...",
            JobStage::Completed => COMPLETED_LABEL,
        }
    }

    pub fn next(&self) -> Option<JobStage> {
        match self {
            JobStage::Initializing => Some(JobStage::CollectingRecords),
            JobStage::CollectingRecords => Some(JobStage::AnalyzingNews),
            JobStage::AnalyzingNews => Some(JobStage::Summarizing),
            JobStage::Summarizing => Some(JobStage::Completed),
            JobStage::Completed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

/// Delay before each of the four transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSchedule {
    delays: [Duration; 4],
}

impl StageSchedule {
    pub fn new(delays: [Duration; 4]) -> Self {
        Self { delays }
    }

    pub fn from_millis(millis: [u64; 4]) -> Self {
        Self::new(millis.map(Duration::from_millis))
    }

    /// Parse a comma-separated list of exactly four millisecond delays
    pub fn parse_millis(value: &str) -> Option<Self> {
        let millis: Vec<u64> = value
            .split(',')
            .map(|part| part.trim().parse().ok())
            .collect::<Option<_>>()?;
        let millis: [u64; 4] = millis.try_into().ok()?;
        Some(Self::from_millis(millis))
    }

    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        self.delays.iter().copied()
    }

    /// Time from start to completion
    pub fn total(&self) -> Duration {
        self.delays.iter().sum()
    }
}

impl Default for StageSchedule {
    fn default() -> Self {
        Self::from_millis(DEFAULT_STAGE_DELAYS_MS)
    }
}

/// One screening, owned by the registry slot it was started in
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningJob {
    nm_id: String,
    stage: JobStage,
    started_at: DateTime<Utc>,
    results: Option<ScreeningResults>,
}

impl ScreeningJob {
    pub fn new(nm_id: impl Into<String>) -> Self {
        Self::started_at(nm_id, Utc::now())
    }

    pub fn started_at(nm_id: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            nm_id: nm_id.into(),
            stage: JobStage::Initializing,
            started_at,
            results: None,
        }
    }

    pub fn nm_id(&self) -> &str {
        &self.nm_id
    }

    pub fn stage(&self) -> JobStage {
        self.stage
    }

    pub fn is_complete(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Move to the next stage; results are attached on reaching `Completed`
    pub fn advance(&mut self) -> Option<JobStage> {
        let next = self.stage.next()?;
        self.stage = next;
        if next.is_terminal() {
            self.results = Some(screening_results());
        }
        Some(next)
    }

    /// Wire record for `GET /api/status/{id}`
    pub fn snapshot(&self) -> ScreeningStatus {
        if self.is_complete() {
            ScreeningStatus {
                nm_id: self.nm_id.clone(),
                status: self.stage.label().to_string(),
                start_time: None,
                results: self.results.clone(),
            }
        } else {
            ScreeningStatus {
                nm_id: self.nm_id.clone(),
                status: self.stage.label().to_string(),
                start_time: Some(self.started_at.timestamp_millis()),
                results: None,
            }
        }
    }
}
