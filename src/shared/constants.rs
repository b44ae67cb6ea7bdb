use std::time::Duration;

/// Identifier issued by the service when the caller does not name a known member
pub const DEMO_SCREENING_ID: &str = "6023085";

/// Interval between status polls after the first immediate fetch
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Default delays between successive screening stages (2s, 5s, 8s, 12s after start)
pub const DEFAULT_STAGE_DELAYS_MS: [u64; 4] = [2_000, 3_000, 3_000, 4_000];

/// Artificial latency of the canned chat answer
pub const DEFAULT_ANSWER_DELAY: Duration = Duration::from_millis(1_000);

pub const DEFAULT_PORT: u16 = 3001;

pub const DEFAULT_PING_MESSAGE: &str = "ping";
