//! Step counter

use core::fmt::Write;

use wristlet_hal::{Surface, WidgetId};

use super::{LabelText, Screen, Widgets};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};

/// Width of the progress bar in cells
const BAR_WIDTH: u32 = 19;

pub struct Steps {
    widgets: Widgets,
    count_label: WidgetId,
    goal_label: WidgetId,
    bar: WidgetId,
    count: ChangeCell<u32>,
    goal: ChangeCell<u32>,
}

impl ScreenTraits<Apps> for Steps {
    const ID: Apps = Apps::Steps;
    const NAME: &'static str = "Steps";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "====== STEPS ======");

        let mut screen = Self {
            count_label: widgets.label(surface, 2, 0),
            goal_label: widgets.label(surface, 3, 0),
            bar: widgets.label(surface, 5, 0),
            widgets,
            count: ChangeCell::new(),
            goal: ChangeCell::new(),
        };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for Steps {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.count.set(deps.motion.step_count());
        self.goal.set(deps.settings.steps_goal().max(1));
        if !self.count.is_updated() && !self.goal.is_updated() {
            return;
        }

        let count = self.count.get();
        let goal = self.goal.get();

        let mut text = LabelText::new();
        let _ = write!(text, "{} steps", count);
        surface.set_text(self.count_label, &text);

        let mut text = LabelText::new();
        let _ = write!(text, "Goal {}", goal);
        surface.set_text(self.goal_label, &text);

        let filled = (u64::from(count.min(goal)) * u64::from(BAR_WIDTH) / u64::from(goal)) as u32;
        let mut text = LabelText::new();
        let _ = text.push('[');
        for cell in 0..BAR_WIDTH {
            let _ = text.push(if cell < filled { '#' } else { '.' });
        }
        let _ = text.push(']');
        surface.set_text(self.bar, &text);
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}
