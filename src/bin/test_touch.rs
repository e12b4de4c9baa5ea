//! Logs touch points and the tine they hit, the LED is lit while touched.
//! Useful for checking the touch panel orientation against the drawn tines.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use touch_kalimba::board::Irqs;
use touch_kalimba::config::{LABELS, LAYOUT, TOUCH_I2C_FREQUENCY, TOUCH_THRESHOLD, TOUCH_TRANSFORM};
use touch_kalimba::devices::ft6206::Ft6206;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let b = touch_kalimba::board::init(p);
    let mut led = b.led_out;

    let mut config = i2c::Config::default();
    config.frequency = TOUCH_I2C_FREQUENCY;
    let mut i2c = I2c::new_async(b.touch.i2c, b.touch.scl, b.touch.sda, Irqs, config);

    let mut touch = Ft6206::new(TOUCH_TRANSFORM);
    if let Err(err) = touch.init(&mut i2c, TOUCH_THRESHOLD).await {
        info!("Touch init error: {}", err);
    }

    let mut was_touched = false;
    loop {
        match touch.read(&mut i2c).await {
            Ok(Some(point)) => {
                led.set_high();
                was_touched = true;
                match LAYOUT.hit_test(point) {
                    Some(pos) => info!("{},{} -> tine {} ({})", point.x, point.y, pos, LABELS[pos]),
                    None => info!("{},{} -> none", point.x, point.y),
                }
            }
            Ok(None) => {
                led.set_low();
                if was_touched {
                    info!("released");
                    was_touched = false;
                }
            }
            Err(err) => info!("Touch read error: {}", err),
        }
        Timer::after_millis(50).await;
    }
}
