//! ILI9341 TFT panel on a write-only SPI bus, landscape 320 x 240, RGB565.

use display_interface_spi::SPIInterface;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{ColorOrder, Orientation, Rotation};

pub type PanelDisplay<SPI, CS, DC, RST> =
    mipidsi::Display<SPIInterface<ExclusiveDevice<SPI, CS, NoDelay>, DC>, ILI9341Rgb565, RST>;

/// Resets and configures the panel. The returned display is an
/// `embedded_graphics` draw target.
pub fn init<SPI, CS, DC, RST>(
    spi: SPI,
    cs: CS,
    dc: DC,
    reset: RST,
    delay: &mut impl DelayNs,
) -> Result<PanelDisplay<SPI, CS, DC, RST>, &'static str>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    let device = ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| "pin error")?;
    let interface = SPIInterface::new(device, dc);
    mipidsi::Builder::new(ILI9341Rgb565, interface)
        .reset_pin(reset)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .color_order(ColorOrder::Bgr)
        .init(delay)
        .map_err(|_| "display init error")
}
