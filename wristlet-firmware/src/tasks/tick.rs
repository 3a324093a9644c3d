//! Refresh tick task
//!
//! Paces the UI task at the configured refresh period.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use crate::channels::TICK_SIGNAL;
use crate::config::WATCH_CONFIG;

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started ({}ms)", WATCH_CONFIG.refresh_period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(
        WATCH_CONFIG.refresh_period_ms,
    )));
    let start = Instant::now();

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(start.elapsed().as_millis() as u32);
    }
}
