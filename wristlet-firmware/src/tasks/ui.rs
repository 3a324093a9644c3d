//! UI task
//!
//! Owns the refresh scheduler, the text surface and the user settings.
//! Every tick refreshes the active screen; every button press is routed to
//! it. The surface is presented only when a screen changed something.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;

use wristlet_core::{Apps, RefreshScheduler, SchedulerState, Settings};
use wristlet_display::TextSurface;

use crate::board::Board;
use crate::channels::{INPUT_CHANNEL, TICK_SIGNAL};
use crate::config::WATCH_CONFIG;
use crate::sh1106::Sh1106;

/// Display type on the watch board
pub type Display = Sh1106<I2c<'static, I2C0, Blocking>>;

#[embassy_executor::task]
pub async fn ui_task(mut display: Display) {
    info!("UI task started");

    if let Err(e) = display.init() {
        error!("Display init failed: {}", e);
    }

    let board = Board::new();
    let mut settings = Settings::from_config(&WATCH_CONFIG);
    let mut surface = TextSurface::new();
    let mut scheduler = RefreshScheduler::new();

    {
        let mut deps = board.controllers(&mut settings);
        if let Err(e) = scheduler.switch_to(Apps::Clock, &mut deps, &mut surface) {
            error!("Failed to open clock: {}", e);
        }
    }

    loop {
        match select(TICK_SIGNAL.wait(), INPUT_CHANNEL.receive()).await {
            Either::First(_) => {
                let mut deps = board.controllers(&mut settings);
                scheduler.tick(&mut deps, &mut surface);
            }
            Either::Second(input) => {
                let mut deps = board.controllers(&mut settings);
                match scheduler.handle_input(input, &mut deps, &mut surface) {
                    Ok(navigation) => trace!("{} -> {}", input, navigation),
                    Err(e) => warn!("Navigation refused: {}", e),
                }
                if let SchedulerState::Active(app) = scheduler.state() {
                    debug!("Active: {}", app.name());
                }
            }
        }

        // No persistent store on this board yet; settings live until reset
        if settings.take_pending_save() {
            info!(
                "Settings changed: face {}, clock {}",
                settings.watch_face().name(),
                settings.clock_type()
            );
        }

        if let Err(e) = surface.present(&mut display) {
            warn!("Display update failed: {}", e);
        }
    }
}
