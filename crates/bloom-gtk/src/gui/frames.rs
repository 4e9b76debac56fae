use bloom::ChoiceButton;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Monotonic clock shared by pointer events and frame ticks.
pub fn now() -> Duration {
    micros(glib::monotonic_time())
}

fn micros(value: i64) -> Duration {
    Duration::from_micros(u64::try_from(value).unwrap_or_default())
}

/// Ticks the button's animation on the widget's frame clock while one is
/// running.
#[derive(Clone)]
pub struct FrameDriver {
    area: gtk::DrawingArea,
    button: Rc<RefCell<ChoiceButton>>,
    running: Rc<Cell<bool>>,
}

impl FrameDriver {
    pub fn new(area: gtk::DrawingArea, button: Rc<RefCell<ChoiceButton>>) -> Self {
        Self {
            area,
            button,
            running: Rc::new(Cell::new(false)),
        }
    }

    pub fn kick(&self) {
        if self.running.replace(true) {
            return;
        }

        let button = self.button.clone();
        let running = self.running.clone();
        self.area.add_tick_callback(move |area, clock| {
            let mut button = button.borrow_mut();
            if button.tick(micros(clock.frame_time())) {
                area.queue_draw();
            }
            if button.is_animating() {
                glib::ControlFlow::Continue
            } else {
                running.set(false);
                glib::ControlFlow::Break
            }
        });
    }
}
