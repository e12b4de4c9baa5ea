//! Note on / note off gateway to the external synthesizer.
//!
//! Messages are queued on every attached output without waiting; the
//! transport tasks drain the queues. The gateway keeps no note state, pairing
//! note ons with note offs is up to the gesture machine.

use crate::midi::{MidiChannelSender, MidiMsg, CC_ALL_NOTES_OFF, CC_VOLUME};

pub const MAX_OUTPUTS: usize = 2;

#[derive(Default)]
pub struct Synth<'ch> {
    outputs: heapless::Vec<MidiChannelSender<'ch>, MAX_OUTPUTS>,
}

impl<'ch> Synth<'ch> {
    pub fn new() -> Self {
        Self {
            outputs: heapless::Vec::new(),
        }
    }

    /// Attaches an output queue. Outputs beyond [`MAX_OUTPUTS`] are ignored.
    pub fn with_output(mut self, output: MidiChannelSender<'ch>) -> Self {
        let _ = self.outputs.push(output);
        self
    }

    /// Silences the channel, selects the instrument and sets the volume.
    pub fn init(&self, channel: u8, program: u8, volume: u8) {
        self.send(MidiMsg::ControlChange {
            channel,
            control: CC_ALL_NOTES_OFF,
            value: 0,
        });
        self.send(MidiMsg::ProgramChange { channel, program });
        self.send(MidiMsg::ControlChange {
            channel,
            control: CC_VOLUME,
            value: volume,
        });
    }

    pub fn note_on(&self, channel: u8, note: u8, velocity: u8) {
        self.send(MidiMsg::NoteOn {
            channel,
            note,
            velocity,
        });
    }

    pub fn note_off(&self, channel: u8, note: u8, velocity: u8) {
        self.send(MidiMsg::NoteOff {
            channel,
            note,
            velocity,
        });
    }

    /// Returns the number of outputs that accepted the message.
    pub fn send(&self, msg: MidiMsg) -> usize {
        self.outputs
            .iter()
            .filter(|output| output.try_send(msg).is_ok())
            .count()
    }
}
