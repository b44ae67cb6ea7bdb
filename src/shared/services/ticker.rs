use std::time::Duration;

use async_trait::async_trait;

use crate::domain::workflow::Ticker;

/// Wall-clock ticker pacing the status polling loop
#[derive(Debug, Clone, Copy)]
pub struct IntervalTicker {
    period: Duration,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

#[async_trait(?Send)]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(self.period).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(self.period).await;
    }
}
