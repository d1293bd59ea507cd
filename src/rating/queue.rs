//! Estimated matchmaking wait.

use std::time::Duration;

/// Wait for a 0-MMR player.
pub const BASE_QUEUE_MS: u64 = 3_000;

/// Extra wait at and above `QUEUE_MMR_CAP`.
pub const EXTRA_QUEUE_MS: u64 = 17_000;

pub const QUEUE_MMR_CAP: u32 = 1_000;

/// Higher MMR queues longer, linearly up to 20 s at 1000 MMR.
#[must_use]
pub fn estimated_queue_time(mmr: u32) -> Duration {
    let factor = (f64::from(mmr) / f64::from(QUEUE_MMR_CAP)).min(1.0);
    let ms = BASE_QUEUE_MS as f64 + EXTRA_QUEUE_MS as f64 * factor;
    Duration::from_millis(ms as u64)
}
