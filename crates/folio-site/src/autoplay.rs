//! Periodic auto-advance for the picture carousel.
//!
//! The loop never returns; it is cancelled by dropping the future, which the
//! modal does by cancelling the Dioxus `Task` it was spawned on.

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Time between automatic advances.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(2000);

/// Shortest period accepted.
pub const MIN_PERIOD: Duration = Duration::from_millis(50);

/// Calls `on_tick` once per `period`, starting one full period from now.
pub async fn auto_advance<F>(period: Duration, mut on_tick: F)
where
    F: FnMut(),
{
    let period = period.max(MIN_PERIOD);
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        on_tick();
    }
}
