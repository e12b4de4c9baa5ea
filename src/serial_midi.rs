use defmt::info;
use embassy_rp::uart::{self, BufferedUartTx};
use static_cell::StaticCell;

use crate::board::{Irqs, MidiTxPin, MidiUart};
use crate::config::{SERIAL_MIDI_BUF_LEN, SYNTH_BAUDRATE, SYNTH_INVERT_TX};
use crate::midi::MidiChannelReceiver;

/// MIDI DIN framing: 8 data bits, no parity, one stop bit.
fn synth_uart_config() -> uart::Config {
    let mut config = uart::Config::default();
    config.baudrate = SYNTH_BAUDRATE;
    config.data_bits = uart::DataBits::DataBits8;
    config.parity = uart::Parity::ParityNone;
    config.stop_bits = uart::StopBits::STOP1;
    config.invert_tx = SYNTH_INVERT_TX;
    config
}

/// Transmit-only link to the synth module.
pub struct SerialMidi<'d> {
    tx: BufferedUartTx<'d, MidiUart>,
    queue: MidiChannelReceiver<'d>,
}

impl<'d> SerialMidi<'d> {
    pub fn new(uart: MidiUart, tx_pin: MidiTxPin, queue: MidiChannelReceiver<'d>) -> Self {
        static TX_BUF: StaticCell<[u8; SERIAL_MIDI_BUF_LEN]> = StaticCell::new();
        let tx_buf = &mut TX_BUF.init([0; SERIAL_MIDI_BUF_LEN])[..];

        let tx = BufferedUartTx::new(uart, Irqs, tx_pin, tx_buf, synth_uart_config());
        Self { tx, queue }
    }

    /// Forwards queued messages to the synth. A failed write drops the
    /// message, the next one is sent normally.
    pub async fn task(&mut self) -> ! {
        let mut dropped: u32 = 0;
        loop {
            let msg = self.queue.receive().await;
            if let Err(err) = msg.send_bytes(&mut self.tx).await {
                dropped = dropped.wrapping_add(1);
                info!("Synth send error: {} ({}), {} dropped", err, msg, dropped);
            }
        }
    }
}
