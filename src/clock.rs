use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime, Timelike};

/// Source of wall-clock time and of the pause between two scans.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Local wall-clock time, truncated to the second.
    fn now(&self) -> NaiveDateTime;

    async fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
