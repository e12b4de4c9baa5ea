// Debounced button

use embassy_rp::gpio::Input;
use embassy_time::Timer;

use core::cell::{Cell, RefCell};

use crate::config::DEBOUNCE_TIME;

pub struct Button<'a> {
    pin: RefCell<Input<'a>>,
    pressed: Cell<bool>,
}

impl<'a> Button<'a> {
    /// `pin` must be configured with a pull-up, the button shorts it to ground.
    pub fn new(mut pin: Input<'a>) -> Self {
        pin.set_schmitt(true);
        let pressed = pin.is_low();
        Self {
            pin: pin.into(),
            pressed: pressed.into(),
        }
    }
    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }
    #[allow(clippy::await_holding_refcell_ref)]
    pub async fn task(&self) -> ! {
        let mut pin = self.pin.borrow_mut();
        let mut pressed = pin.is_low();
        self.pressed.set(pressed);
        loop {
            if pressed {
                pin.wait_for_high().await;
            } else {
                pin.wait_for_low().await;
            }
            Timer::after(DEBOUNCE_TIME).await;
            let now_low = pin.is_low();
            if now_low != pressed {
                pressed = now_low;
                self.pressed.set(pressed);
            }
        }
    }
}
