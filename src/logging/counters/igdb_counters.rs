use std::time::Instant;

use tracing::info;

use crate::Status;

use super::counters::*;

pub struct IgdbRequestCounter<'a> {
    request: &'a str,
    start: Instant,
}

impl<'a> IgdbRequestCounter<'a> {
    pub fn new(request: &'a str) -> Self {
        Self {
            request,
            start: Instant::now(),
        }
    }

    pub fn log(self) {
        info!(
            labels.log_type = COUNTERS,
            labels.counter = self.request,
            igdb_request.latency = self.start.elapsed().as_millis(),
            "IGDB request: {}",
            self.request,
        );
    }

    pub fn log_error(self, status: &Status) {
        info!(
            labels.log_type = COUNTERS,
            labels.counter = &format!("{}_fail", self.request),
            labels.counter_type = "error",
            labels.status = status.to_string(),
            "IGDB request failed: {}",
            self.request,
        )
    }
}
