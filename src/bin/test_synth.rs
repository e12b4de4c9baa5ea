//! Plays every tine, left to right, on the synth and over USB MIDI.
//! Useful for checking the serial wiring and the synth voice without the screen.

#![no_std]
#![no_main]

use defmt::{unreachable, *};
use embassy_executor::Spawner;
use embassy_futures::join::join3;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use touch_kalimba::config::{
    LABELS, SYNTH_CHANNEL, SYNTH_PROGRAM, SYNTH_VOLUME, TUNING, VELOCITY,
};
use touch_kalimba::midi::MidiChannel;
use touch_kalimba::serial_midi::SerialMidi;
use touch_kalimba::synth::Synth;
use touch_kalimba::usb_midi::UsbMidi;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let b = touch_kalimba::board::init(p);

    info!("Synth test...");

    info!("led on!");
    let mut led = b.led_out;
    led.set_high();

    let serial_channel = MidiChannel::new();
    let usb_channel = MidiChannel::new();
    let mut serial_midi = SerialMidi::new(b.midi_uart, b.midi_tx_pin, serial_channel.receiver());
    let mut usb_midi = UsbMidi::new(b.midi_usb, usb_channel.receiver());
    let synth = Synth::new()
        .with_output(serial_channel.sender())
        .with_output(usb_channel.sender());

    let send_task = async {
        Timer::after_millis(500).await;
        synth.init(SYNTH_CHANNEL, SYNTH_PROGRAM, SYNTH_VOLUME);
        loop {
            for (note, label) in TUNING.iter().zip(LABELS) {
                info!("{} ({})", label, note);
                synth.note_on(SYNTH_CHANNEL, *note, VELOCITY);
                Timer::after_millis(300).await;
                synth.note_off(SYNTH_CHANNEL, *note, VELOCITY);
                Timer::after_millis(100).await;
            }
            Timer::after_millis(1000).await;
        }
    };

    join3(serial_midi.task(), usb_midi.task(), send_task).await;

    unreachable!();
}
