use super::{emit, Contact, Effect, Effects, ReleasePolicy};
use crate::tines::TineBank;

/// Plucks every tine the finger slides over and starts a full note for the
/// last one when the finger is lifted.
///
/// With [`ReleasePolicy::Sustain`] the note started on release gets no note
/// off at all and keeps sounding on the synth.
#[derive(Default, Debug)]
pub struct SlideGesture {
    selected: Option<usize>,
    last_pressed: Option<usize>,
    was_pressed: bool,
    policy: ReleasePolicy,
    sustaining: Option<u8>,
}

impl SlideGesture {
    pub fn new(policy: ReleasePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Highlighted tine.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Tine to be played when the finger is lifted.
    pub fn last_pressed(&self) -> Option<usize> {
        self.last_pressed
    }

    /// Pitch of the note started on the last release, tracked only with
    /// [`ReleasePolicy::CutOnNextPress`].
    pub fn sustaining(&self) -> Option<u8> {
        self.sustaining
    }

    pub fn step(&mut self, tines: &mut TineBank, contact: Contact) -> Effects {
        let mut effects = Effects::new();
        match contact {
            Contact::Pressed(Some(pos)) => {
                self.was_pressed = true;
                if self.selected == Some(pos) {
                    return effects;
                }
                let Some(pitch) = tines.pitch(pos) else {
                    return effects;
                };
                if let Some(prev) = self.selected {
                    tines.set_pressed(prev, false);
                }
                tines.set_pressed(pos, true);
                self.cut_sustained(&mut effects);
                emit(&mut effects, Effect::Pluck(pitch));
                self.selected = Some(pos);
                self.last_pressed = Some(pos);
            }
            Contact::Pressed(None) => {
                self.was_pressed = true;
                if let Some(prev) = self.selected.take() {
                    tines.set_pressed(prev, false);
                }
            }
            Contact::Released => {
                if !core::mem::replace(&mut self.was_pressed, false) {
                    return effects;
                }
                let Some(last) = self.last_pressed.take() else {
                    return effects;
                };
                if let Some(prev) = self.selected.take() {
                    tines.set_pressed(prev, false);
                }
                if let Some(pitch) = tines.pitch(last) {
                    self.cut_sustained(&mut effects);
                    emit(&mut effects, Effect::NoteOn(pitch));
                    if self.policy == ReleasePolicy::CutOnNextPress {
                        self.sustaining = Some(pitch);
                    }
                }
            }
        }
        effects
    }

    fn cut_sustained(&mut self, effects: &mut Effects) {
        if let Some(pitch) = self.sustaining.take() {
            emit(effects, Effect::NoteOff(pitch));
        }
    }
}
