use std::time::Instant;

use tracing::info;

use crate::Status;

use super::counters::*;

pub struct TranslateCounter<'a> {
    src: &'a str,
    dest: &'a str,
    start: Instant,
}

impl<'a> TranslateCounter<'a> {
    pub fn new(src: &'a str, dest: &'a str) -> Self {
        Self {
            src,
            dest,
            start: Instant::now(),
        }
    }

    pub fn log(self) {
        info!(
            labels.log_type = COUNTERS,
            labels.counter = "translate",
            translate.latency = self.start.elapsed().as_millis(),
            "Translate: {} -> {}",
            self.src,
            self.dest,
        );
    }

    pub fn log_error(self, status: &Status) {
        info!(
            labels.log_type = COUNTERS,
            labels.counter = "translate_fail",
            labels.counter_type = "error",
            labels.status = status.to_string(),
            "Translate failed: {} -> {}",
            self.src,
            self.dest,
        )
    }
}
