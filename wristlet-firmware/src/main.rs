//! Wristlet - Watch Firmware
//!
//! Firmware binary for RP2040-based watch boards with a 128x64 SH1106
//! OLED and four buttons. The application core decides what is on screen;
//! this crate wires it to the hardware and drives the refresh loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use {defmt_rtt as _, panic_probe as _};

use crate::config::{INSTALLED_RESOURCES, WATCH_CONFIG};
use crate::sh1106::Sh1106;

mod board;
mod channels;
mod config;
mod sh1106;
mod state;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wristlet firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Config: refresh every {}ms, face {}, {} resources installed",
        WATCH_CONFIG.refresh_period_ms,
        WATCH_CONFIG.watch_face.name(),
        INSTALLED_RESOURCES.len()
    );

    // Display on I2C0 (GPIO5 SCL, GPIO4 SDA)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());
    let display = Sh1106::new(i2c);
    info!("I2C initialized for display");

    // Buttons are active low: next, previous, select, back
    let buttons = [
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
    ];

    // VSYS through the on-board 3:1 divider, VBUS sense on GPIO24
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let vsys = Channel::new_pin(p.PIN_29, Pull::None);
    let vbus = Input::new(p.PIN_24, Pull::None);
    info!("ADC initialized");

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::buttons_task(buttons)).unwrap();
    spawner.spawn(tasks::battery_task(adc, vsys, vbus)).unwrap();
    spawner.spawn(tasks::ui_task(display)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
