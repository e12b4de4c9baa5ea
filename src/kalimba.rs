use embedded_graphics::prelude::Point;

use crate::gesture::{Contact, Effects, Gesture, GestureMode, Modifiers};
use crate::layout::Layout;
use crate::tines::TineBank;

/// One touch sample: the first reported point, or `None` when nothing
/// touches the screen.
pub type TouchSample = Option<Point>;

/// Instrument state: geometry, tines and the gesture machine driving them.
pub struct Kalimba {
    layout: Layout,
    tines: TineBank,
    gesture: Gesture,
}

impl Kalimba {
    pub fn new(layout: Layout, tines: TineBank, gesture: Gesture) -> Self {
        Self {
            layout,
            tines,
            gesture,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn tines(&self) -> &TineBank {
        &self.tines
    }

    pub fn mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    /// Advances the gesture machine by one polling tick.
    pub fn tick(&mut self, touch: TouchSample, modifiers: Modifiers) -> Effects {
        let contact = match touch {
            Some(point) => Contact::Pressed(self.layout.hit_test(point)),
            None => Contact::Released,
        };
        self.gesture.step(&mut self.tines, contact, modifiers)
    }

    /// Like [`Kalimba::tick`], for a touch read that may have failed. A
    /// failed read leaves the gesture state alone for this tick.
    pub fn poll(
        &mut self,
        touch: Result<TouchSample, &'static str>,
        modifiers: Modifiers,
    ) -> Effects {
        match touch {
            Ok(sample) => self.tick(sample, modifiers),
            Err(_) => Effects::new(),
        }
    }
}
