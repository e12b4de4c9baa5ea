#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod devices;
pub mod gesture;
pub mod kalimba;
pub mod layout;
pub mod midi;
pub mod render;
pub mod synth;
pub mod tines;

// RP2040 peripherals, used by the firmware binaries
#[cfg(feature = "firmware")]
pub mod board;
#[cfg(feature = "firmware")]
pub mod button;
#[cfg(feature = "firmware")]
pub mod serial_midi;
#[cfg(feature = "firmware")]
pub mod usb_midi;
