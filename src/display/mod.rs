//! The main API to the display driver. It runs the power-up sequence, and provides the drawing
//! primitives: each one programs the active window and then streams pixel data into it.

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
pub mod testing {
    use crate::interface::test_spy::Sent;

    macro_rules! send {
        ([$($d:tt),*]) => {Sent::Data(vec![$($d,)*])};
        ((delay $ms:tt)) => {Sent::Delay($ms)};
        ($c:tt) => {Sent::Cmd($c)};
    }
    macro_rules! sends {
        ($($e:tt),*) => {&[$(send!($e),)*]};
    }

    /// Lengths of the data transfers in `sent`, in order.
    pub fn data_lens(sent: &[Sent]) -> Vec<usize> {
        sent.iter()
            .filter_map(|s| match s {
                Sent::Data(d) => Some(d.len()),
                _ => None,
            })
            .collect()
    }
}

pub mod transfer;

use hal::blocking::delay::DelayMs;

use crate::color::Rgb565;
use crate::command::consts::*;
use crate::command::*;
use crate::config::Config;
use crate::error::Error;
use crate::interface;

/// Wait after `SoftwareReset` for the controller to finish resetting.
const RESET_DELAY_MS: u16 = 150;
/// Wait after leaving sleep for the panel power supply to stabilize.
const SLEEP_OUT_DELAY_MS: u16 = 500;
/// Settle time after the pixel format, inversion and normal mode commands.
const SETTLE_DELAY_MS: u16 = 10;
/// Wait after turning the panel on.
const DISPLAY_ON_DELAY_MS: u16 = 500;

/// A driver for an ST7789 display.
///
/// The driver owns its interface for its whole life; `release` gives it back. All calls block
/// until their transfers complete. There is no internal locking, and a window setup followed by
/// its pixel data must not be interleaved with any other drawing call, which `&mut self` already
/// guarantees.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    config: Config,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver for the panel described by `config`, which is connected to
    /// the interface `iface`. Nothing is sent until `init`.
    pub fn new(iface: DI, config: Config) -> Self {
        if false
            || config.width == 0
            || config.height == 0
            || config.width.max(config.height) > NUM_PIXEL_ROWS
            || config.width.min(config.height) > NUM_PIXEL_COLS
            || config.max_transfer < 2
        {
            panic!("Display size or transfer ceiling not supported by ST7789.");
        }
        // The power-up window ends at offset + size, which may touch but not pass the RAM edge.
        let end_x = u32::from(config.offset_x) + u32::from(config.width);
        let end_y = u32::from(config.offset_y) + u32::from(config.height);
        if end_x.max(end_y) > u32::from(NUM_PIXEL_ROWS)
            || end_x.min(end_y) > u32::from(NUM_PIXEL_COLS)
        {
            panic!("Display offset places the panel outside ST7789 RAM.");
        }
        Display { iface, config }
    }

    /// Bring up the transport and run the power-up sequence. This takes a bit over a second,
    /// almost all of it in `delay`. It must complete before any drawing call.
    ///
    /// If the transport cannot be acquired, nothing is sent and `Error::Acquire` is returned.
    /// Any transfer failure during the sequence aborts it with `Error::Interface`; the panel is
    /// then in an unknown state and `init` should be run again.
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<DI::Error>>
    where
        D: DelayMs<u16>,
    {
        self.iface.acquire().map_err(Error::Acquire)?;

        debug!("st7789: reset");
        Command::SoftwareReset.send(&mut self.iface)?;
        delay.delay_ms(RESET_DELAY_MS);

        debug!("st7789: wake");
        Command::SetSleepMode(false).send(&mut self.iface)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);

        debug!("st7789: configure");
        Command::SetPixelFormat(PixelFormat::Rgb565).send(&mut self.iface)?;
        delay.delay_ms(SETTLE_DELAY_MS);
        Command::SetMemoryAccess(0x00).send(&mut self.iface)?;

        let Config {
            width,
            height,
            offset_x,
            offset_y,
            ..
        } = self.config;
        Command::SetColumnAddress(offset_x, offset_x + width).send(&mut self.iface)?;
        Command::SetRowAddress(offset_y, offset_y + height).send(&mut self.iface)?;

        // The reference panels show inverted colors unless inversion is on.
        Command::SetInversion(true).send(&mut self.iface)?;
        delay.delay_ms(SETTLE_DELAY_MS);
        Command::NormalDisplayOn.send(&mut self.iface)?;
        delay.delay_ms(SETTLE_DELAY_MS);

        debug!("st7789: display on");
        Command::SetDisplayOn(true).send(&mut self.iface)?;
        delay.delay_ms(DISPLAY_ON_DELAY_MS);
        Ok(())
    }

    /// Consume the driver and give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }

    /// Viewable width of the panel in pixels.
    pub fn width(&self) -> u16 {
        self.config.width
    }

    /// Viewable height of the panel in pixels.
    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// Program the active window to the inclusive rectangle from (`x0`, `y0`) to (`x1`, `y1`)
    /// and arm the controller for pixel data. The next `(x1-x0+1)*(y1-y0+1)*2` data bytes the
    /// controller receives fill the window left to right, top to bottom.
    ///
    /// `x0 <= x1` and `y0 <= y1` are preconditions.
    pub fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error<DI::Error>> {
        debug_assert!(x0 <= x1 && y0 <= y1, "window corners out of order");
        Command::SetColumnAddress(x0, x1).send(&mut self.iface)?;
        Command::SetRowAddress(y0, y1).send(&mut self.iface)?;
        Command::WriteMemoryStart.send(&mut self.iface)?;
        Ok(())
    }

    /// Program the window covering a `width` by `height` rectangle at (`x`, `y`).
    fn set_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), Error<DI::Error>> {
        debug_assert!(width > 0 && height > 0, "empty rectangle");
        debug_assert!(
            u32::from(x) + u32::from(width) <= 0x1_0000
                && u32::from(y) + u32::from(height) <= 0x1_0000,
            "rectangle extends past the 16-bit address range"
        );
        self.set_window(x, y, x + (width - 1), y + (height - 1))
    }

    /// Set a single pixel.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), Error<DI::Error>> {
        self.set_window(x, y, x, y)?;
        transfer::stream(&mut self.iface, &color.to_be_bytes(), self.config.max_transfer)?;
        Ok(())
    }

    /// Fill a `width` by `height` rectangle with its top left corner at (`x`, `y`) with a solid
    /// color. Both dimensions must be at least 1.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), Error<DI::Error>> {
        self.set_rect(x, y, width, height)?;
        let total_len = width as usize * height as usize * 2;
        transfer::fill(&mut self.iface, color, total_len, self.config.max_transfer)?;
        Ok(())
    }

    /// Copy a `width` by `height` image with its top left corner at (`x`, `y`). `buf` holds the
    /// pixels in row-major order, two bytes each, most significant byte first, and must be
    /// exactly `width * height * 2` bytes long.
    pub fn draw_buffer(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        buf: &[u8],
    ) -> Result<(), Error<DI::Error>> {
        debug_assert_eq!(
            buf.len(),
            width as usize * height as usize * 2,
            "buffer does not match window"
        );
        self.set_rect(x, y, width, height)?;
        transfer::stream(&mut self.iface, buf, self.config.max_transfer)?;
        Ok(())
    }

    /// Draw a `width` by `height` rectangle from an iterator of pixels, left to right and top to
    /// bottom, without needing the whole image in memory. Drawing stops when the rectangle is
    /// full or the iterator runs out, whichever comes first.
    pub fn draw_pixels<I>(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: I,
    ) -> Result<(), Error<DI::Error>>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.set_rect(x, y, width, height)?;
        let pixel_count = width as usize * height as usize;
        transfer::stream_pixels(
            &mut self.iface,
            pixels.into_iter(),
            pixel_count,
            self.config.max_transfer,
        )?;
        Ok(())
    }

    /// Fill the whole panel with `color`.
    pub fn clear(&mut self, color: Rgb565) -> Result<(), Error<DI::Error>> {
        let (width, height) = (self.config.width, self.config.height);
        self.fill_rect(0, 0, width, height, color)
    }

    /// Flush drawing to the panel. Every write goes straight to display RAM, so there is nothing
    /// to do.
    pub fn display(&mut self) -> Result<(), Error<DI::Error>> {
        Ok(())
    }

    /// Set the display orientation.
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Error<DI::Error>> {
        let madctl = rotation.madctl(self.config.tab_color);
        debug!("st7789: rotation {} madctl {=u8:#x}", rotation, madctl);
        Command::SetMemoryAccess(madctl).send(&mut self.iface)?;
        Ok(())
    }

    /// Control color inversion.
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<DI::Error>> {
        Command::SetInversion(inverted).send(&mut self.iface)?;
        Ok(())
    }

    /// Control sleep mode. The controller needs 5ms after entering and 120ms after leaving sleep
    /// before it accepts further commands; waiting is up to the caller.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), Error<DI::Error>> {
        Command::SetSleepMode(enabled).send(&mut self.iface)?;
        Ok(())
    }

    /// Turn the panel output on or off. Display RAM is kept while the output is off.
    pub fn display_on(&mut self, on: bool) -> Result<(), Error<DI::Error>> {
        Command::SetDisplayOn(on).send(&mut self.iface)?;
        Ok(())
    }
}
