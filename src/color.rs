//! 16-bit RGB565 colors as the controller consumes them in `PixelFormat::Rgb565`.

/// A color packed as 5 bits red, 6 bits green, 5 bits blue, red in the most significant bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const BLUE: Rgb565 = Rgb565(0x001F);
    pub const YELLOW: Rgb565 = Rgb565(0xFFE0);

    /// Truncate a 24-bit `0xRRGGBB` color to RGB565.
    pub const fn from_rgb888(rgb: u32) -> Self {
        let r = (rgb >> 19) & 0x1F;
        let g = (rgb >> 10) & 0x3F;
        let b = (rgb >> 3) & 0x1F;
        Rgb565(((r << 11) | (g << 5) | b) as u16)
    }

    /// Exchange the red and blue fields, for panels wired BGR without a matching `MADCTL`.
    pub const fn swap_red_blue(self) -> Self {
        let c = self.0;
        Rgb565((c << 11) | (c & 0x07E0) | (c >> 11))
    }

    /// The two bytes sent on the wire, most significant first.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Rgb565(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_order_is_msb_first() {
        assert_eq!(Rgb565(0xF800).to_be_bytes(), [0xF8, 0x00]);
        assert_eq!(Rgb565(0x1234).to_be_bytes(), [0x12, 0x34]);
    }

    #[test]
    fn from_rgb888() {
        assert_eq!(Rgb565::from_rgb888(0xFF0000), Rgb565::RED);
        assert_eq!(Rgb565::from_rgb888(0x00FF00), Rgb565::GREEN);
        assert_eq!(Rgb565::from_rgb888(0x0000FF), Rgb565::BLUE);
        assert_eq!(Rgb565::from_rgb888(0xFFFFFF), Rgb565::WHITE);
        // Dodger blue, low bits of each channel dropped.
        assert_eq!(Rgb565::from_rgb888(0x1E90FF), Rgb565(0x1C9F));
    }

    #[test]
    fn swap_red_blue() {
        assert_eq!(Rgb565::RED.swap_red_blue(), Rgb565::BLUE);
        assert_eq!(Rgb565::BLUE.swap_red_blue(), Rgb565::RED);
        assert_eq!(Rgb565::GREEN.swap_red_blue(), Rgb565::GREEN);
    }
}
