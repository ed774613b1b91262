use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time in unix seconds.
pub trait Clock: Send + Sync {
    fn now_unix(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Manually driven clock for deterministic tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn new(now: i64) -> Self { Self { now: AtomicI64::new(now) } }

    pub fn set(&self, now: i64) { self.now.store(now, Ordering::SeqCst); }

    pub fn advance(&self, secs: i64) { self.now.fetch_add(secs, Ordering::SeqCst); }
}

impl Clock for FixedClock {
    fn now_unix(&self) -> i64 { self.now.load(Ordering::SeqCst) }
}
