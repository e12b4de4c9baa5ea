use embassy_time::Duration;
use embedded_graphics::pixelcolor::Rgb565;

use crate::devices::ft6206::TouchTransform;
use crate::gesture::{GestureMode, ReleasePolicy};
use crate::layout::Layout;

// constants used throughout the code

// tines
pub const NUM_TINES: usize = 17;

pub const LAYOUT: Layout = Layout {
    count: NUM_TINES,
    center: 8,
    max_height: 200,
    step_height: 6,
    width: 16,
    gap: 2,
    start_x: 8,
    bridge_y: 28,
};

// standard 17-key kalimba in C, left to right, lowest note in the middle
pub const TUNING: [u8; NUM_TINES] = [
    86, 83, 79, 76, 72, 69, 65, 62, 60, 64, 67, 71, 74, 77, 81, 84, 88,
];

pub const LABELS: [&str; NUM_TINES] = [
    "D6", "B5", "G5", "E5", "C5", "A4", "F4", "D4", "C4", "E4", "G4", "B4", "D5", "F5", "A5", "C6",
    "E6",
];

// gestures
pub const GESTURE_MODE: GestureMode = GestureMode::Shift;
pub const SLIDE_RELEASE_POLICY: ReleasePolicy = ReleasePolicy::Sustain;

// play loop
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);
pub const PLUCK_DURATION: Duration = Duration::from_millis(30);

// synth
pub const SYNTH_CHANNEL: u8 = 0;
pub const VELOCITY: u8 = 127;
// General MIDI "Kalimba", zero based
pub const SYNTH_PROGRAM: u8 = 108;
pub const SYNTH_VOLUME: u8 = 100;
pub const SYNTH_BAUDRATE: u32 = 31250;
pub const SYNTH_INVERT_TX: bool = false;
pub const MIDI_CHANNEL_SIZE: usize = 16;
pub const SERIAL_MIDI_BUF_LEN: usize = 64;

// display
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;
pub const DISPLAY_SPI_FREQUENCY: u32 = 32_000_000;

pub const BACKGROUND_COLOR: Rgb565 = Rgb565::new(2, 4, 2);
pub const BODY_COLOR: Rgb565 = Rgb565::new(17, 26, 6);
pub const BODY_EDGE_COLOR: Rgb565 = Rgb565::new(11, 16, 3);
pub const SOUND_HOLE_COLOR: Rgb565 = Rgb565::new(5, 8, 2);
pub const BRIDGE_COLOR: Rgb565 = Rgb565::new(8, 16, 8);
pub const BRIDGE_SHINE_COLOR: Rgb565 = Rgb565::new(22, 44, 22);
pub const TINE_COLOR: Rgb565 = Rgb565::new(24, 48, 24);
pub const TINE_PRESSED_COLOR: Rgb565 = Rgb565::new(31, 40, 0);
pub const LABEL_COLOR: Rgb565 = Rgb565::new(4, 8, 4);
pub const LABEL_PRESSED_COLOR: Rgb565 = Rgb565::new(31, 63, 31);
pub const HEADER_COLOR: Rgb565 = Rgb565::new(31, 58, 24);

// touch
pub const TOUCH_I2C_FREQUENCY: u32 = 400_000;
// portrait panel, display rotated to landscape
pub const TOUCH_TRANSFORM: TouchTransform = TouchTransform {
    swap_xy: true,
    invert_x: false,
    invert_y: true,
    width: SCREEN_WIDTH as i32,
    height: SCREEN_HEIGHT as i32,
};
pub const TOUCH_THRESHOLD: u8 = 128;

// button
pub const DEBOUNCE_TIME: Duration = Duration::from_millis(2);
