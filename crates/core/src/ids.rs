use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Millisecond-timestamp record ids.
///
/// Ids handed out by one generator are strictly increasing, so two records created in the
/// same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self { last: AtomicI64::new(0) }
    }

    pub fn next_at(&self, now_ms: i64) -> i64 {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(current + 1);
            match self
                .last
                .compare_exchange_weak(current, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }

    pub fn next(&self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }
}

static GLOBAL: IdGenerator = IdGenerator::new();

/// Next id from the process-wide generator.
pub fn next_id() -> i64 {
    GLOBAL.next()
}
