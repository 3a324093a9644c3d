//! Button task
//!
//! Waits for a press on any of the four buttons, debounces it and queues
//! the matching input for the UI task. A button must be released before it
//! can fire again.

use defmt::*;
use embassy_futures::select::{select4, Either4};
use embassy_rp::gpio::Input as Pin;
use embassy_time::Timer;

use wristlet_hal::Input;

use crate::channels::INPUT_CHANNEL;

/// Time a press must be held to count
const DEBOUNCE_MS: u64 = 20;

/// Input reported by each button, in wiring order
const BUTTON_INPUTS: [Input; 4] = [Input::Next, Input::Previous, Input::Select, Input::Back];

#[embassy_executor::task]
pub async fn buttons_task(mut buttons: [Pin<'static>; 4]) {
    info!("Buttons task started");

    loop {
        let index = {
            let [next, previous, select, back] = &mut buttons;
            match select4(
                next.wait_for_falling_edge(),
                previous.wait_for_falling_edge(),
                select.wait_for_falling_edge(),
                back.wait_for_falling_edge(),
            )
            .await
            {
                Either4::First(_) => 0,
                Either4::Second(_) => 1,
                Either4::Third(_) => 2,
                Either4::Fourth(_) => 3,
            }
        };

        Timer::after_millis(DEBOUNCE_MS).await;
        let button = &mut buttons[index];
        if button.is_high() {
            trace!("Bounce on button {}", index);
            continue;
        }

        let input = BUTTON_INPUTS[index];
        debug!("Button: {}", input);
        INPUT_CHANNEL.send(input).await;

        button.wait_for_high().await;
    }
}
