//! Panel configuration. These values describe the physical module wired to the controller and are
//! fixed for the lifetime of a `Display`.

use crate::command::TabColor;

/// Width and height of the reference 240x240 panel.
pub const DEFAULT_PANEL_SIZE: (u16, u16) = (240, 240);

/// Offset of the reference panel's viewable area inside the controller's 240x320 RAM.
pub const DEFAULT_PANEL_OFFSET: (u16, u16) = (0, 80);

/// Largest number of bytes the reference host (nRF52 SPIM EasyDMA) moves in one transfer.
pub const DEFAULT_MAX_TRANSFER: usize = 250;

/// A configuration for the display. Builder methods override the reference panel's geometry and
/// the host's transfer ceiling.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) tab_color: TabColor,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) offset_x: u16,
    pub(crate) offset_y: u16,
    pub(crate) max_transfer: usize,
}

impl Config {
    /// Create a new configuration for a panel of variant `tab_color`. The variant is mandatory
    /// because it selects the color order; everything else defaults to the reference 240x240
    /// module.
    pub fn new(tab_color: TabColor) -> Self {
        Config {
            tab_color,
            width: DEFAULT_PANEL_SIZE.0,
            height: DEFAULT_PANEL_SIZE.1,
            offset_x: DEFAULT_PANEL_OFFSET.0,
            offset_y: DEFAULT_PANEL_OFFSET.1,
            max_transfer: DEFAULT_MAX_TRANSFER,
        }
    }

    /// Extend this `Config` with the viewable size of the panel in pixels.
    pub fn size(self, width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Extend this `Config` with the position of the panel's top-left pixel inside the
    /// controller's RAM, which is programmed as the initial window during `Display::init`.
    pub fn offset(self, x: u16, y: u16) -> Self {
        Self {
            offset_x: x,
            offset_y: y,
            ..self
        }
    }

    /// Extend this `Config` with the largest number of bytes the host may move in a single SPI
    /// transfer. Must be at least 2, so that every transfer carries
    /// whole pixels; `Display::new` panics otherwise.
    pub fn max_transfer(self, len: usize) -> Self {
        Self {
            max_transfer: len,
            ..self
        }
    }

    pub fn tab_color(&self) -> TabColor {
        self.tab_color
    }
}
