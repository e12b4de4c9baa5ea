//! Press / slide / release tracking.
//!
//! A gesture machine is stepped once per polling tick. It updates the pressed
//! flags in the [`TineBank`] it is given and returns the synth effects the
//! tick produced, in the order they have to be sent.

mod shift;
mod slide;

pub use shift::ShiftGesture;
pub use slide::SlideGesture;

use crate::tines::TineBank;

pub const MAX_EFFECTS: usize = 4;

pub type Effects = heapless::Vec<Effect, MAX_EFFECTS>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    NoteOn(u8),
    NoteOff(u8),
    /// Note on followed by a note off after a short, fixed time.
    Pluck(u8),
}

/// Appends `effect`. A step never produces more than [`MAX_EFFECTS`].
pub(crate) fn emit(effects: &mut Effects, effect: Effect) {
    let pushed = effects.push(effect).is_ok();
    debug_assert!(pushed, "effect list full");
}

/// Touch state of one tick, already hit tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Contact {
    Released,
    /// Touching the screen, over the given tine or between/outside tines.
    Pressed(Option<usize>),
}

/// Semitone modifier buttons.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifiers {
    pub flat: bool,
    pub sharp: bool,
}

impl Modifiers {
    pub fn offset(&self) -> i8 {
        if self.flat {
            -1
        } else if self.sharp {
            1
        } else {
            0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureMode {
    /// One sounding tine, flat/sharp buttons shift the pitch.
    Shift,
    /// Short plucks while sliding, last tine sustained on release.
    Slide,
}

impl GestureMode {
    pub fn name(&self) -> &'static str {
        match self {
            GestureMode::Shift => "SHIFT",
            GestureMode::Slide => "SLIDE",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            GestureMode::Shift => GestureMode::Slide,
            GestureMode::Slide => GestureMode::Shift,
        }
    }
}

/// What happens to the note started when a slide ends.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReleasePolicy {
    /// The note is never turned off.
    #[default]
    Sustain,
    /// The note is turned off before the next note starts.
    CutOnNextPress,
}

pub enum Gesture {
    Shift(ShiftGesture),
    Slide(SlideGesture),
}

impl Gesture {
    pub fn new(mode: GestureMode, policy: ReleasePolicy) -> Self {
        match mode {
            GestureMode::Shift => Gesture::Shift(ShiftGesture::new()),
            GestureMode::Slide => Gesture::Slide(SlideGesture::new(policy)),
        }
    }

    pub fn mode(&self) -> GestureMode {
        match self {
            Gesture::Shift(_) => GestureMode::Shift,
            Gesture::Slide(_) => GestureMode::Slide,
        }
    }

    pub fn step(&mut self, tines: &mut TineBank, contact: Contact, modifiers: Modifiers) -> Effects {
        match self {
            Gesture::Shift(g) => g.step(tines, contact, modifiers),
            // modifier buttons are not used while sliding
            Gesture::Slide(g) => g.step(tines, contact),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_offsets() {
        assert_eq!(Modifiers::default().offset(), 0);
        assert_eq!(Modifiers { flat: true, sharp: false }.offset(), -1);
        assert_eq!(Modifiers { flat: false, sharp: true }.offset(), 1);
        assert_eq!(Modifiers { flat: true, sharp: true }.offset(), -1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "effect list full")]
    fn effect_overflow_is_caught() {
        let mut effects = Effects::new();
        for note in 0..=MAX_EFFECTS as u8 {
            emit(&mut effects, Effect::NoteOn(note));
        }
    }

    #[test]
    fn mode_selection() {
        let g = Gesture::new(GestureMode::Slide, ReleasePolicy::Sustain);
        assert_eq!(g.mode(), GestureMode::Slide);
        assert_eq!(GestureMode::Shift.toggled(), GestureMode::Slide);
        assert_eq!(GestureMode::Slide.toggled().name(), "SHIFT");
    }

    #[test]
    fn slide_ignores_modifiers() {
        let mut tines = TineBank::default();
        let mut g = Gesture::new(GestureMode::Slide, ReleasePolicy::Sustain);
        let sharp = Modifiers { flat: false, sharp: true };
        let effects = g.step(&mut tines, Contact::Pressed(Some(8)), sharp);
        assert_eq!(effects.as_slice(), &[Effect::Pluck(60)]);
    }
}
