//! Stopwatch
//!
//! Select starts and pauses, Next resets while paused. Time is measured
//! against the controller's uptime, so the stopwatch keeps counting
//! correctly however irregular the refresh ticks are.

use core::fmt::Write;

use wristlet_hal::{Input, Surface, WidgetId};

use super::{LabelText, Navigation, Screen, Widgets};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};

/// Stopwatch run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    #[default]
    Init,
    Running,
    Paused,
}

impl RunState {
    fn hint(self) -> &'static str {
        match self {
            RunState::Init => "SEL:start",
            RunState::Running => "SEL:pause",
            RunState::Paused => "SEL:resume NXT:reset",
        }
    }
}

pub struct StopWatch {
    widgets: Widgets,
    time_label: WidgetId,
    hint_label: WidgetId,
    /// Time accumulated before the current run
    banked_ms: u64,
    /// Uptime when the current run started
    started_at_ms: u64,
    run_state: RunState,
    centis: ChangeCell<u64>,
    state: ChangeCell<RunState>,
}

impl StopWatch {
    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.run_state {
            RunState::Running => self.banked_ms + now_ms.saturating_sub(self.started_at_ms),
            RunState::Init | RunState::Paused => self.banked_ms,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }
}

impl ScreenTraits<Apps> for StopWatch {
    const ID: Apps = Apps::StopWatch;
    const NAME: &'static str = "Stopwatch";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "==== STOPWATCH ====");

        let mut screen = Self {
            time_label: widgets.label(surface, 3, 6),
            hint_label: widgets.label(surface, 7, 0),
            widgets,
            banked_ms: 0,
            started_at_ms: 0,
            run_state: RunState::Init,
            centis: ChangeCell::new(),
            state: ChangeCell::new(),
        };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for StopWatch {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.centis.set(self.elapsed_ms(deps.clock.uptime_ms()) / 10);
        if self.centis.is_updated() {
            let centis = self.centis.get();
            let mut text = LabelText::new();
            let minutes = centis / 6000;
            if minutes >= 60 {
                let _ = write!(
                    text,
                    "{}:{:02}:{:02}",
                    minutes / 60,
                    minutes % 60,
                    centis / 100 % 60
                );
            } else {
                let _ = write!(text, "{:02}:{:02}.{:02}", minutes, centis / 100 % 60, centis % 100);
            }
            surface.set_text(self.time_label, &text);
        }

        self.state.set(self.run_state);
        if self.state.is_updated() {
            surface.set_text(self.hint_label, self.state.get().hint());
        }
    }

    fn on_input(
        &mut self,
        input: Input,
        deps: &mut Controllers<'_>,
        _surface: &mut dyn Surface,
    ) -> Navigation {
        let now = deps.clock.uptime_ms();
        match (input, self.run_state) {
            (Input::Back, _) => return Navigation::Back,
            (Input::Select, RunState::Init | RunState::Paused) => {
                self.started_at_ms = now;
                self.run_state = RunState::Running;
            }
            (Input::Select, RunState::Running) => {
                self.banked_ms = self.elapsed_ms(now);
                self.run_state = RunState::Paused;
            }
            (Input::Next, RunState::Paused) => {
                self.banked_ms = 0;
                self.run_state = RunState::Init;
            }
            _ => {}
        }
        Navigation::Stay
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::testing::FakeDevice;
    use wristlet_display::TextSurface;

    fn press(
        watch: &mut StopWatch,
        device: &FakeDevice,
        surface: &mut TextSurface,
        input: Input,
    ) -> Navigation {
        let mut settings = Settings::default();
        let nav = watch.on_input(input, &mut device.controllers(&mut settings), surface);
        watch.refresh(&mut device.controllers(&mut settings), surface);
        nav
    }

    #[test]
    fn test_start_pause_resume_reset() {
        let mut device = FakeDevice {
            uptime_ms: 10_000,
            ..FakeDevice::default()
        };
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut watch = StopWatch::create(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(surface.line(3).as_str(), "      00:00.00");
        assert_eq!(surface.line(7).as_str(), "SEL:start");

        press(&mut watch, &device, &mut surface, Input::Select);
        assert_eq!(watch.run_state(), RunState::Running);

        device.uptime_ms += 61_230;
        press(&mut watch, &device, &mut surface, Input::Select);
        assert_eq!(watch.run_state(), RunState::Paused);
        assert_eq!(surface.line(3).as_str(), "      01:01.23");

        // Paused time does not count
        device.uptime_ms += 5_000;
        press(&mut watch, &device, &mut surface, Input::Select);
        device.uptime_ms += 1_000;
        assert_eq!(watch.elapsed_ms(device.uptime_ms), 62_230);

        press(&mut watch, &device, &mut surface, Input::Select);
        press(&mut watch, &device, &mut surface, Input::Next);
        assert_eq!(watch.run_state(), RunState::Init);
        assert_eq!(surface.line(3).as_str(), "      00:00.00");
    }

    #[test]
    fn test_next_ignored_while_running() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut watch = StopWatch::create(&mut device.controllers(&mut settings), &mut surface);
        press(&mut watch, &device, &mut surface, Input::Select);
        assert_eq!(
            press(&mut watch, &device, &mut surface, Input::Next),
            Navigation::Stay
        );
        assert_eq!(watch.run_state(), RunState::Running);
        assert_eq!(
            press(&mut watch, &device, &mut surface, Input::Back),
            Navigation::Back
        );
    }
}
