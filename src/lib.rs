//! Driver library for the Sitronix ST7789 TFT LCD controller, as fitted to 240x240 SPI panels.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;

#[macro_use]
mod fmt;

pub mod color;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod interface;
pub mod lcd;

// Re-exports for primary API.
pub use color::Rgb565;
pub use command::{consts, PixelFormat, Rotation, TabColor};
pub use config::Config;
pub use display::Display;
pub use error::Error;
pub use interface::spi::SpiInterface;
pub use interface::{hard_reset, DisplayInterface};
pub use lcd::Lcd;
