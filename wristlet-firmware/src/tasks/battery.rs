//! Battery monitor task
//!
//! Samples VSYS through the ADC and the VBUS sense pin, converts the
//! voltage with the configured calibration and publishes the reading.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use crate::config::WATCH_CONFIG;
use crate::state::{self, BatteryReading};

/// Interval between samples
const SAMPLE_INTERVAL_MS: u64 = 5_000;

/// ADC reference voltage in millivolts
const ADC_VREF_MV: u32 = 3_300;

/// 12-bit ADC full scale
const ADC_MAX: u32 = 4_096;

/// VSYS is measured through a 3:1 divider
const VSYS_DIVIDER: u32 = 3;

/// Convert a raw ADC sample to the VSYS voltage
fn vsys_mv(raw: u16) -> u16 {
    (u32::from(raw) * ADC_VREF_MV * VSYS_DIVIDER / ADC_MAX) as u16
}

#[embassy_executor::task]
pub async fn battery_task(
    mut adc: Adc<'static, Async>,
    mut vsys: Channel<'static>,
    vbus: Input<'static>,
) {
    info!("Battery task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut last_percent = None;

    loop {
        match adc.read(&mut vsys).await {
            Ok(raw) => {
                let voltage_mv = vsys_mv(raw);
                let reading = BatteryReading {
                    voltage_mv,
                    percent: WATCH_CONFIG.battery_percent(voltage_mv),
                    power_present: vbus.is_high(),
                };
                state::store_battery(reading);

                if last_percent != Some(reading.percent) {
                    debug!(
                        "Battery {}mV ({}%), power {}",
                        voltage_mv, reading.percent, reading.power_present
                    );
                    last_percent = Some(reading.percent);
                }
            }
            Err(_) => warn!("VSYS ADC read failed"),
        }

        ticker.next().await;
    }
}
