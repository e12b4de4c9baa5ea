//! Touch kalimba firmware.
//!
//! Polls the touch screen, feeds the kalimba gesture machine, plays the
//! resulting notes on the serial synth (mirrored to USB MIDI) and repaints
//! tines whose state changed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::join::join5;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Timer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use {defmt_rtt as _, panic_probe as _};

use touch_kalimba::board::{self, Irqs};
use touch_kalimba::button::Button;
use touch_kalimba::config::*;
use touch_kalimba::devices::ft6206::Ft6206;
use touch_kalimba::devices::ili9341;
use touch_kalimba::gesture::{Effect, Gesture, Modifiers};
use touch_kalimba::kalimba::Kalimba;
use touch_kalimba::midi::MidiChannel;
use touch_kalimba::render::Renderer;
use touch_kalimba::serial_midi::SerialMidi;
use touch_kalimba::synth::Synth;
use touch_kalimba::tines::TineBank;
use touch_kalimba::usb_midi::UsbMidi;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let b = board::init(p);
    let mut led = b.led_out;

    let serial_channel = MidiChannel::new();
    let usb_channel = MidiChannel::new();
    let mut serial_midi = SerialMidi::new(b.midi_uart, b.midi_tx_pin, serial_channel.receiver());
    let mut usb_midi = UsbMidi::new(b.midi_usb, usb_channel.receiver());
    let synth = Synth::new()
        .with_output(serial_channel.sender())
        .with_output(usb_channel.sender());

    let flat = Button::new(b.flat_in);
    let sharp = Button::new(b.sharp_in);

    // holding 'flat' while powering up picks the other gesture mode
    let mode = if flat.is_pressed() {
        GESTURE_MODE.toggled()
    } else {
        GESTURE_MODE
    };
    info!("Gesture mode: {}", mode);

    let d = b.display;
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_FREQUENCY;
    let spi = Spi::new_blocking_txonly(d.spi, d.sck, d.mosi, spi_config);
    let mut display = unwrap!(ili9341::init(spi, d.cs, d.dc, d.reset, &mut Delay));
    let mut backlight = d.backlight;
    backlight.set_high();

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = TOUCH_I2C_FREQUENCY;
    let t = b.touch;
    let mut i2c = I2c::new_async(t.i2c, t.scl, t.sda, Irqs, i2c_config);
    let mut touch = Ft6206::new(TOUCH_TRANSFORM);
    if let Err(err) = touch.init(&mut i2c, TOUCH_THRESHOLD).await {
        info!("Touch init error: {}", err);
    }

    synth.init(SYNTH_CHANNEL, SYNTH_PROGRAM, SYNTH_VOLUME);

    let kalimba = Kalimba::new(
        LAYOUT,
        TineBank::default(),
        Gesture::new(mode, SLIDE_RELEASE_POLICY),
    );
    let renderer = Renderer::new(LAYOUT);

    info!("led on!");
    led.set_high();

    let play = play_task(
        kalimba,
        renderer,
        &mut display,
        touch,
        &mut i2c,
        &synth,
        (&flat, &sharp),
    );

    join5(
        play,
        flat.task(),
        sharp.task(),
        serial_midi.task(),
        usb_midi.task(),
    )
    .await;
}

async fn play_task<D, I>(
    mut kalimba: Kalimba,
    mut renderer: Renderer,
    display: &mut D,
    mut touch: Ft6206,
    i2c: &mut I,
    synth: &Synth<'_>,
    (flat, sharp): (&Button<'_>, &Button<'_>),
) -> !
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
    I: embedded_hal_async::i2c::I2c,
{
    if let Err(err) = renderer.draw_background(display, kalimba.tines(), kalimba.mode()) {
        info!("Draw error: {}", Debug2Format(&err));
    }

    loop {
        let sample = touch.read(i2c).await;
        if let Err(err) = sample {
            info!("Touch read error: {}", err);
        }
        let modifiers = Modifiers {
            flat: flat.is_pressed(),
            sharp: sharp.is_pressed(),
        };

        let effects = kalimba.poll(sample, modifiers);

        // highlight first, a pluck holds the loop
        if let Err(err) = renderer.refresh(display, kalimba.tines()) {
            info!("Draw error: {}", Debug2Format(&err));
        }

        for effect in effects {
            info!("{}", effect);
            match effect {
                Effect::NoteOn(note) => synth.note_on(SYNTH_CHANNEL, note, VELOCITY),
                Effect::NoteOff(note) => synth.note_off(SYNTH_CHANNEL, note, VELOCITY),
                Effect::Pluck(note) => {
                    synth.note_on(SYNTH_CHANNEL, note, VELOCITY);
                    // stalls the loop, the transport tasks keep running
                    Timer::after(PLUCK_DURATION).await;
                    synth.note_off(SYNTH_CHANNEL, note, VELOCITY);
                }
            }
        }

        Timer::after(TICK_INTERVAL).await;
    }
}
