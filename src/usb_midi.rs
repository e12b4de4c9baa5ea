use defmt::info;

use embassy_futures::join::join;
use embassy_futures::select::{select, Either};
use embassy_usb_driver::EndpointError;
use static_cell::StaticCell;

use crate::board::{Irqs, MidiUsb};
use crate::midi::MidiChannelReceiver;

type Driver<'d> = embassy_rp::usb::Driver<'d, MidiUsb>;

/// USB MIDI device mirroring everything sent to the synth.
pub struct UsbMidi<'d> {
    usb: embassy_usb::UsbDevice<'d, Driver<'d>>,
    midi_rx: MidiChannelReceiver<'d>,
    class_tx: embassy_usb::class::midi::Sender<'d, Driver<'d>>,
}

static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

impl<'d> UsbMidi<'d> {
    pub fn new(usb_per: MidiUsb, midi_rx: MidiChannelReceiver<'d>) -> Self {
        let driver = embassy_rp::usb::Driver::new(usb_per, Irqs);

        let mut config = embassy_usb::Config::new(0x6666, 0x4b4c);
        config.manufacturer = Some("Touch Kalimba");
        config.product = Some("Kalimba MIDI");
        config.serial_number = Some("00000001");
        config.max_power = 100;
        config.max_packet_size_0 = 64;

        let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
        let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
        let control_buf = CONTROL_BUF.init([0; 64]);

        let mut builder = embassy_usb::Builder::new(
            driver,
            config,
            config_descriptor,
            bos_descriptor,
            &mut [], // no msos descriptors
            control_buf,
        );

        let class = embassy_usb::class::midi::MidiClass::new(&mut builder, 1, 1, 64);
        // nothing is read from the host
        let (class_tx, _class_rx) = class.split();

        let usb = builder.build();

        Self {
            usb,
            midi_rx,
            class_tx,
        }
    }
    pub async fn task(&mut self) -> ! {
        let Self {
            usb,
            midi_rx,
            class_tx,
        } = self;

        let usb_task = usb.run();

        let midi_send_task = async {
            loop {
                // drain the queue until a host shows up
                loop {
                    match select(class_tx.wait_connection(), midi_rx.receive()).await {
                        Either::First(_) => break,
                        Either::Second(_) => continue,
                    };
                }
                info!("USB MIDI connected");

                loop {
                    let msg = midi_rx.receive().await;
                    let Some(packet) = msg.usb_packet() else {
                        info!("usb: invalid message: {}", msg);
                        continue;
                    };
                    match class_tx.write_packet(&packet).await {
                        Ok(_) => {}
                        Err(EndpointError::BufferOverflow) => info!("usb: buffer overflow"),
                        Err(EndpointError::Disabled) => break,
                    }
                }
                info!("USB MIDI disconnected");
            }
        };

        join(usb_task, midi_send_task).await;

        unreachable!();
    }
}
