use super::{emit, Contact, Effect, Effects, Modifiers};
use crate::tines::TineBank;

/// Single active tine. The semitone offset is locked in when the note starts.
#[derive(Default, Debug)]
pub struct ShiftGesture {
    active: Option<(usize, u8)>,
}

impl ShiftGesture {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Active tine and the pitch it sounds.
    pub fn active(&self) -> Option<(usize, u8)> {
        self.active
    }

    pub fn step(&mut self, tines: &mut TineBank, contact: Contact, modifiers: Modifiers) -> Effects {
        let mut effects = Effects::new();
        match contact {
            Contact::Released => {
                if let Some((pos, pitch)) = self.active.take() {
                    tines.set_pressed(pos, false);
                    emit(&mut effects, Effect::NoteOff(pitch));
                }
            }
            Contact::Pressed(None) => {}
            Contact::Pressed(Some(pos)) => {
                if matches!(self.active, Some((active, _)) if active == pos) {
                    return effects;
                }
                let Some(pitch) = tines
                    .pitch(pos)
                    .and_then(|base| base.checked_add_signed(modifiers.offset()))
                    .filter(|pitch| *pitch < 0x80)
                else {
                    return effects;
                };
                if let Some((old, old_pitch)) = self.active.take() {
                    tines.set_pressed(old, false);
                    emit(&mut effects, Effect::NoteOff(old_pitch));
                }
                emit(&mut effects, Effect::NoteOn(pitch));
                tines.set_pressed(pos, true);
                self.active = Some((pos, pitch));
            }
        }
        effects
    }
}
