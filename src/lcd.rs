//! The capability surface a UI toolkit draws through. A toolkit written against `Lcd` can drive
//! any panel driver that implements it; `Display` is the ST7789 implementation.

use hal::blocking::delay::DelayMs;

use crate::color::Rgb565;
use crate::command::Rotation;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

pub trait Lcd {
    type Error;

    /// Bring up the panel. Must succeed before any other call.
    fn init<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    fn pixel_draw(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), Self::Error>;

    fn rect_draw(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Draw a `width` by `height` image of big-endian RGB565 pixels.
    fn buffer_draw(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        buf: &[u8],
    ) -> Result<(), Self::Error>;

    /// Present what has been drawn, for panels that need an explicit flush.
    fn display(&mut self) -> Result<(), Self::Error>;

    fn rotation_set(&mut self, rotation: Rotation) -> Result<(), Self::Error>;

    fn display_invert(&mut self, invert: bool) -> Result<(), Self::Error>;

    fn width(&self) -> u16;

    fn height(&self) -> u16;
}

impl<DI> Lcd for Display<DI>
where
    DI: DisplayInterface,
{
    type Error = Error<DI::Error>;

    fn init<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        Display::init(self, delay)
    }

    fn pixel_draw(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), Self::Error> {
        self.draw_pixel(x, y, color)
    }

    fn rect_draw(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.fill_rect(x, y, width, height, color)
    }

    fn buffer_draw(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        buf: &[u8],
    ) -> Result<(), Self::Error> {
        self.draw_buffer(x, y, width, height, buf)
    }

    fn display(&mut self) -> Result<(), Self::Error> {
        Display::display(self)
    }

    fn rotation_set(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        self.set_rotation(rotation)
    }

    fn display_invert(&mut self, invert: bool) -> Result<(), Self::Error> {
        self.invert(invert)
    }

    fn width(&self) -> u16 {
        Display::width(self)
    }

    fn height(&self) -> u16 {
        Display::height(self)
    }
}
