use std::time::{Duration, Instant};

/// RAII timing span. Logs how long it lived, at `debug` level, when dropped.
/// Only constructed in debug builds.
pub struct Tracer {
    label: &'static str,
    started: Instant,
}

impl Tracer {
    pub fn new(label: &'static str) -> Self {
        Tracer { label, started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Tracer {
    fn drop(&mut self) {
        log::debug!("[Trace] {}: {:.2?}", self.label, self.elapsed());
    }
}
