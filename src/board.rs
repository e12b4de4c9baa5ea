use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::*;
use embassy_rp::Peripherals;

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => embassy_rp::uart::BufferedInterruptHandler<UART0>;
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
    I2C0_IRQ => embassy_rp::i2c::InterruptHandler<I2C0>;
});

pub type MidiUart = UART0;
pub type MidiTxPin = PIN_0;
pub type MidiUsb = USB;

pub type DisplaySpi = SPI0;
pub type TouchI2c = I2C0;

pub struct DisplayPins {
    pub spi: DisplaySpi,
    pub sck: PIN_18,
    pub mosi: PIN_19,
    pub cs: Output<'static>,
    pub dc: Output<'static>,
    pub reset: Output<'static>,
    pub backlight: Output<'static>,
}

pub struct TouchPins {
    pub i2c: TouchI2c,
    pub sda: PIN_4,
    pub scl: PIN_5,
}

pub struct BoardSetup {
    pub led_out: Output<'static>,
    pub flat_in: Input<'static>,
    pub sharp_in: Input<'static>,

    pub display: DisplayPins,
    pub touch: TouchPins,

    pub midi_uart: MidiUart,
    pub midi_tx_pin: MidiTxPin,
    pub midi_usb: MidiUsb,
}

pub fn init(p: Peripherals) -> BoardSetup {
    BoardSetup {
        led_out: Output::new(p.PIN_25, Level::Low),
        flat_in: Input::new(p.PIN_14, Pull::Up),
        sharp_in: Input::new(p.PIN_15, Pull::Up),

        // GP16 (MISO) is left unconnected, the panel is never read back
        display: DisplayPins {
            spi: p.SPI0,
            sck: p.PIN_18,
            mosi: p.PIN_19,
            cs: Output::new(p.PIN_17, Level::High),
            dc: Output::new(p.PIN_20, Level::High),
            reset: Output::new(p.PIN_21, Level::High),
            backlight: Output::new(p.PIN_22, Level::Low),
        },
        touch: TouchPins {
            i2c: p.I2C0,
            sda: p.PIN_4,
            scl: p.PIN_5,
        },

        // GP1 is reserved for a synth RX line
        midi_uart: p.UART0,
        midi_tx_pin: p.PIN_0,
        midi_usb: p.USB,
    }
}
