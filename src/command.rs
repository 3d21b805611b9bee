//! The command set for the ST7789.
//!
//! Note 1: The display RAM of the ST7789 is arranged in 320 rows of 240 columns, with each pixel
//! occupying two bytes in the 16 bit/pixel mode used by this driver. Panels with less than 320
//! rows are mounted somewhere inside that address space, so a fixed row offset shows up when the
//! panel window is programmed at init time.

use crate::interface::DisplayInterface;

pub mod consts {
    //! Opcodes and register bits from the ST7789 datasheet.

    pub const NUM_PIXEL_COLS: u16 = 240;
    pub const NUM_PIXEL_ROWS: u16 = 320;

    pub const NOP: u8 = 0x00;
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;

    /// Row address order: bottom to top.
    pub const MADCTL_MY: u8 = 0x80;
    /// Column address order: right to left.
    pub const MADCTL_MX: u8 = 0x40;
    /// Row/column exchange.
    pub const MADCTL_MV: u8 = 0x20;
    /// Vertical refresh order.
    pub const MADCTL_ML: u8 = 0x10;
    pub const MADCTL_RGB: u8 = 0x00;
    pub const MADCTL_BGR: u8 = 0x08;
    /// Horizontal refresh order.
    pub const MADCTL_MH: u8 = 0x04;
}

use self::consts::*;

/// Vendor classification of physical panel batches. The variants differ in the RGB/BGR order of
/// the subpixels on the glass, which has to be matched by the memory access control register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TabColor {
    GreenTab,
    RedTab,
    BlackTab,
    /// Green tab, 1.44" panel.
    GreenTab144,
}

impl TabColor {
    /// The color order bit of `MADCTL` for this panel variant. Black tab panels are RGB, all
    /// others are BGR.
    pub fn color_order(self) -> u8 {
        match self {
            TabColor::BlackTab => MADCTL_RGB,
            _ => MADCTL_BGR,
        }
    }
}

/// Display orientation, in clockwise degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The `MADCTL` register value which puts a panel of variant `tab_color` in this orientation.
    pub fn madctl(self, tab_color: TabColor) -> u8 {
        let scan = match self {
            Rotation::Deg0 => MADCTL_MX | MADCTL_MY,
            Rotation::Deg90 => MADCTL_MY | MADCTL_MV,
            Rotation::Deg180 => 0x00,
            Rotation::Deg270 => MADCTL_MX | MADCTL_MV,
        };
        scan | tab_color.color_order()
    }
}

/// Interface pixel format, the parameter of `COLMOD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 65K colors, 16 bits/pixel.
    Rgb565,
    /// 262K colors, 18 bits/pixel.
    Rgb666,
}

#[derive(Clone, Copy, Debug)]
pub enum Command {
    /// No operation. Can be used to terminate a memory write.
    Nop,
    /// Reset all registers to their default values. The controller needs 5ms before it accepts
    /// the next command, and 120ms if it was sleeping.
    SoftwareReset,
    /// Enter (`true`) or leave (`false`) sleep mode. Leaving sleep mode requires the power
    /// supply to stabilize before the panel is usable.
    SetSleepMode(bool),
    /// Return from partial mode to normal display mode.
    NormalDisplayOn,
    /// Enable or disable color inversion.
    SetInversion(bool),
    /// Turn the panel output on or off. Display RAM contents are kept.
    SetDisplayOn(bool),
    /// Set the column start and end addresses of the active window. Start must be <= end.
    /// (Note 1)
    SetColumnAddress(u16, u16),
    /// Set the row start and end addresses of the active window. Start must be <= end. (Note 1)
    SetRowAddress(u16, u16),
    /// Arm the controller to accept pixel data for the active window. Pixel data follows as a
    /// data run, left to right and top to bottom.
    WriteMemoryStart,
    /// Set the interface pixel format.
    SetPixelFormat(PixelFormat),
    /// Set the memory access control register (scan direction and color order). See the
    /// `MADCTL_*` constants and `Rotation::madctl`.
    SetMemoryAccess(u8),
}

macro_rules! ok_command {
    ($buf:ident, $cmd:expr,[]) => {
        ($cmd, &$buf[..0])
    };
    ($buf:ident, $cmd:expr,[$arg0:expr]) => {{
        $buf[0] = $arg0;
        ($cmd, &$buf[..1])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr]) => {{
        let [hi0, lo0] = u16::to_be_bytes($arg0);
        let [hi1, lo1] = u16::to_be_bytes($arg1);
        $buf = [hi0, lo0, hi1, lo1];
        ($cmd, &$buf[..4])
    }};
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 4];
        let (cmd, data) = match self {
            Command::Nop => ok_command!(arg_buf, NOP, []),
            Command::SoftwareReset => ok_command!(arg_buf, SWRESET, []),
            Command::SetSleepMode(ena) => ok_command!(
                arg_buf,
                match ena {
                    true => SLPIN,
                    false => SLPOUT,
                },
                []
            ),
            Command::NormalDisplayOn => ok_command!(arg_buf, NORON, []),
            Command::SetInversion(ena) => ok_command!(
                arg_buf,
                match ena {
                    true => INVON,
                    false => INVOFF,
                },
                []
            ),
            Command::SetDisplayOn(ena) => ok_command!(
                arg_buf,
                match ena {
                    true => DISPON,
                    false => DISPOFF,
                },
                []
            ),
            Command::SetColumnAddress(start, end) => {
                debug_assert!(start <= end, "column window start after end");
                ok_command!(arg_buf, CASET, [start, end])
            }
            Command::SetRowAddress(start, end) => {
                debug_assert!(start <= end, "row window start after end");
                ok_command!(arg_buf, RASET, [start, end])
            }
            Command::WriteMemoryStart => ok_command!(arg_buf, RAMWR, []),
            Command::SetPixelFormat(format) => {
                let f = match format {
                    PixelFormat::Rgb565 => 0x55,
                    PixelFormat::Rgb666 => 0x66,
                };
                ok_command!(arg_buf, COLMOD, [f])
            }
            Command::SetMemoryAccess(madctl) => ok_command!(arg_buf, MADCTL, [madctl]),
        };
        iface.send_command(cmd)?;
        if data.is_empty() {
            Ok(())
        } else {
            iface.send_data(data)
        }
    }
}
