use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::MIDI_CHANNEL_SIZE;

// controller numbers
pub const CC_VOLUME: u8 = 7;
pub const CC_ALL_NOTES_OFF: u8 = 123;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MidiMsg {
    NoteOn { channel: u8, note: u8, velocity: u8 },
    NoteOff { channel: u8, note: u8, velocity: u8 },
    ProgramChange { channel: u8, program: u8 },
    ControlChange { channel: u8, control: u8, value: u8 },
}

impl MidiMsg {
    fn status(&self) -> u8 {
        match self {
            MidiMsg::NoteOn { channel, .. } => 0x90 | channel,
            MidiMsg::NoteOff { channel, .. } => 0x80 | channel,
            MidiMsg::ProgramChange { channel, .. } => 0xc0 | channel,
            MidiMsg::ControlChange { channel, .. } => 0xb0 | channel,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        let (channel, data) = match *self {
            MidiMsg::NoteOn {
                channel,
                note,
                velocity,
            }
            | MidiMsg::NoteOff {
                channel,
                note,
                velocity,
            } => (channel, [note, velocity]),
            MidiMsg::ProgramChange { channel, program } => (channel, [program, 0]),
            MidiMsg::ControlChange {
                channel,
                control,
                value,
            } => (channel, [control, value]),
        };
        if channel > 0x0f || data.iter().any(|b| *b > 0x7f) {
            return Err("invalid value");
        }
        Ok(())
    }

    /// USB-MIDI code index number, the same as the status high nibble for
    /// channel voice messages.
    pub fn usb_cin(&self) -> u8 {
        self.status() >> 4
    }

    /// Writes the wire bytes into `buf`, returns their count or 0 when the
    /// message is invalid or does not fit.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let status = self.status();
        let (bytes, len) = match *self {
            MidiMsg::NoteOn { note, velocity, .. } | MidiMsg::NoteOff { note, velocity, .. } => {
                ([status, note, velocity], 3)
            }
            MidiMsg::ProgramChange { program, .. } => ([status, program, 0], 2),
            MidiMsg::ControlChange { control, value, .. } => ([status, control, value], 3),
        };
        if buf.len() < len {
            return 0;
        }
        buf[..len].copy_from_slice(&bytes[..len]);
        len
    }

    /// 4-byte USB-MIDI event packet on virtual cable 0.
    pub fn usb_packet(&self) -> Option<[u8; 4]> {
        let mut packet = [0u8; 4];
        packet[0] = self.usb_cin();
        match self.serialize(&mut packet[1..]) {
            0 => None,
            _ => Some(packet),
        }
    }

    pub async fn send_bytes(
        &self,
        writer: &mut impl embedded_io_async::Write,
    ) -> Result<usize, &'static str> {
        let mut bytes = [0u8; 3];
        self.validate()?;
        let len = self.serialize(&mut bytes);
        writer
            .write_all(&bytes[..len])
            .await
            .map_err(|_| "io error")?;
        Ok(len)
    }
}

pub type MidiChannel = Channel<NoopRawMutex, MidiMsg, MIDI_CHANNEL_SIZE>;
pub type MidiChannelReceiver<'ch> = Receiver<'ch, NoopRawMutex, MidiMsg, MIDI_CHANNEL_SIZE>;
pub type MidiChannelSender<'ch> = Sender<'ch, NoopRawMutex, MidiMsg, MIDI_CHANNEL_SIZE>;

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_io_async::{ErrorKind, ErrorType, Write};

    struct Recorder(Vec<u8>);

    impl ErrorType for Recorder {
        type Error = ErrorKind;
    }

    impl Write for Recorder {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }
    }

    struct Broken;

    impl ErrorType for Broken {
        type Error = ErrorKind;
    }

    impl Write for Broken {
        async fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
            Err(ErrorKind::BrokenPipe)
        }
    }

    #[test]
    fn wire_bytes() {
        let mut buf = [0u8; 3];
        let on = MidiMsg::NoteOn {
            channel: 0,
            note: 60,
            velocity: 127,
        };
        assert_eq!(on.serialize(&mut buf), 3);
        assert_eq!(buf, [0x90, 60, 127]);

        let off = MidiMsg::NoteOff {
            channel: 3,
            note: 61,
            velocity: 0,
        };
        assert_eq!(off.serialize(&mut buf), 3);
        assert_eq!(buf, [0x83, 61, 0]);

        let program = MidiMsg::ProgramChange {
            channel: 0,
            program: 108,
        };
        assert_eq!(program.serialize(&mut buf), 2);
        assert_eq!(buf[..2], [0xc0, 108]);
    }

    #[test]
    fn invalid_messages_are_rejected() {
        let mut buf = [0u8; 3];
        let bad_note = MidiMsg::NoteOn {
            channel: 0,
            note: 128,
            velocity: 1,
        };
        assert_eq!(bad_note.validate(), Err("invalid value"));
        assert_eq!(bad_note.serialize(&mut buf), 0);
        assert_eq!(bad_note.usb_packet(), None);

        let bad_channel = MidiMsg::ControlChange {
            channel: 16,
            control: CC_ALL_NOTES_OFF,
            value: 0,
        };
        assert_eq!(bad_channel.validate(), Err("invalid value"));

        let mut short = [0u8; 2];
        let on = MidiMsg::NoteOn {
            channel: 0,
            note: 60,
            velocity: 1,
        };
        assert_eq!(on.serialize(&mut short), 0);
    }

    #[test]
    fn usb_packets() {
        let on = MidiMsg::NoteOn {
            channel: 0,
            note: 64,
            velocity: 100,
        };
        assert_eq!(on.usb_packet(), Some([0x09, 0x90, 64, 100]));

        let program = MidiMsg::ProgramChange {
            channel: 1,
            program: 5,
        };
        assert_eq!(program.usb_packet(), Some([0x0c, 0xc1, 5, 0]));

        let cc = MidiMsg::ControlChange {
            channel: 0,
            control: CC_VOLUME,
            value: 90,
        };
        assert_eq!(cc.usb_cin(), 0x0b);
    }

    #[test]
    fn send_bytes_to_writer() {
        let mut out = Recorder(Vec::new());
        let off = MidiMsg::NoteOff {
            channel: 0,
            note: 62,
            velocity: 127,
        };
        assert_eq!(block_on(off.send_bytes(&mut out)), Ok(3));
        assert_eq!(out.0, vec![0x80, 62, 127]);

        let bad = MidiMsg::NoteOff {
            channel: 0,
            note: 200,
            velocity: 0,
        };
        assert_eq!(block_on(bad.send_bytes(&mut out)), Err("invalid value"));
        assert_eq!(out.0.len(), 3);

        assert_eq!(block_on(off.send_bytes(&mut Broken)), Err("io error"));
    }

    #[test]
    fn channel_round_trip() {
        let ch = MidiChannel::new();
        let msg = MidiMsg::ControlChange {
            channel: 0,
            control: CC_ALL_NOTES_OFF,
            value: 0,
        };
        ch.try_send(msg).unwrap();
        assert_eq!(ch.try_receive(), Ok(msg));
    }
}
