//! FT6206 capacitive touch controller.

use embedded_graphics::prelude::Point;
use embedded_hal_async::i2c::I2c;

const REG_DATA: u8 = 0x00;
const REG_THRESHOLD: u8 = 0x80;
const REG_CHIP_ID: u8 = 0xa3;
const REG_VENDOR_ID: u8 = 0xa8;

const FOCALTECH_ID: u8 = 0x11;
const CHIP_IDS: [u8; 3] = [0x06, 0x36, 0x64];

/// Panel to screen coordinate mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchTransform {
    pub swap_xy: bool,
    pub invert_x: bool,
    pub invert_y: bool,
    /// screen size after the swap
    pub width: i32,
    pub height: i32,
}

impl TouchTransform {
    pub fn apply(&self, raw: Point) -> Point {
        let (x, y) = if self.swap_xy {
            (raw.y, raw.x)
        } else {
            (raw.x, raw.y)
        };
        let x = if self.invert_x { self.width - 1 - x } else { x };
        let y = if self.invert_y { self.height - 1 - y } else { y };
        Point::new(x, y)
    }
}

/// Extracts the first touch point from registers 0x00..0x07.
///
/// `Ok(None)` means nothing touches the panel. More than two points is a
/// glitch and is reported as an error, not as a lift.
pub fn parse_report(regs: &[u8; 7]) -> Result<Option<Point>, &'static str> {
    match regs[2] & 0x0f {
        0 => Ok(None),
        1 | 2 => {
            let x = (((regs[3] & 0x0f) as i32) << 8) | regs[4] as i32;
            let y = (((regs[5] & 0x0f) as i32) << 8) | regs[6] as i32;
            Ok(Some(Point::new(x, y)))
        }
        _ => Err("invalid touch report"),
    }
}

pub struct Ft6206 {
    addr: u8,
    transform: TouchTransform,
}

impl Ft6206 {
    const ADDR: u8 = 0x38;

    pub const fn new(transform: TouchTransform) -> Self {
        Self {
            addr: Self::ADDR,
            transform,
        }
    }

    pub async fn init<I2C: I2c>(&mut self, i2c: &mut I2C, threshold: u8) -> Result<(), &'static str> {
        if self.read_reg(i2c, REG_VENDOR_ID).await? != FOCALTECH_ID {
            return Err("not a FocalTech touch controller");
        }
        if !CHIP_IDS.contains(&self.read_reg(i2c, REG_CHIP_ID).await?) {
            return Err("unknown touch controller chip");
        }
        i2c.write(self.addr, &[REG_THRESHOLD, threshold])
            .await
            .map_err(|_| "i2c error")
    }

    /// First touch point in screen coordinates, `None` when not touched.
    pub async fn read<I2C: I2c>(&mut self, i2c: &mut I2C) -> Result<Option<Point>, &'static str> {
        let mut regs = [0u8; 7];
        i2c.write_read(self.addr, &[REG_DATA], &mut regs)
            .await
            .map_err(|_| "i2c error")?;
        Ok(parse_report(&regs)?.map(|raw| self.transform.apply(raw)))
    }

    async fn read_reg<I2C: I2c>(&mut self, i2c: &mut I2C, reg: u8) -> Result<u8, &'static str> {
        let mut buf = [0u8; 1];
        i2c.write_read(self.addr, &[reg], &mut buf)
            .await
            .map_err(|_| "i2c error")?;
        Ok(buf[0])
    }
}
