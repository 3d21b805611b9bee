//! The transport between the driver and the ST7789: a serial channel plus the D/C (data/command)
//! select line.

use hal::blocking::delay::DelayMs;
use hal::digital::v2::OutputPin;

/// A channel to the display controller which frames each transfer as either command or data.
///
/// Implementations must not toggle D/C inside a single `send_data` or `write_data` call. Between
/// calls, callers must not assume the D/C state persists except inside a `begin_data` /
/// `end_data` run.
pub trait DisplayInterface {
    type Error;

    /// Bring the transport into a known state before the first command is sent. Called once by
    /// `Display::init`.
    fn acquire(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Select command mode and transfer a single command byte.
    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Select data mode.
    fn begin_data(&mut self) -> Result<(), Self::Error>;

    /// Transfer `buf` as one physical transfer without touching D/C. Must only be called between
    /// `begin_data` and `end_data`.
    fn write_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Return D/C to command mode after a data run.
    fn end_data(&mut self) -> Result<(), Self::Error>;

    /// Select data mode and transfer `buf` as one physical transfer. Used for command
    /// parameters.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.begin_data()?;
        self.write_data(buf)
    }
}

/// Pulse the active-low hardware reset line of the controller, then wait for it to come out of
/// reset. Boards that tie /RESET high can skip this and rely on the software reset in
/// `Display::init`.
pub fn hard_reset<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), RST::Error>
where
    RST: OutputPin,
    D: DelayMs<u16>,
{
    rst.set_low()?;
    delay.delay_ms(10);
    rst.set_high()?;
    delay.delay_ms(120);
    Ok(())
}

pub mod spi {
    //! The SPI interface supports the "4-wire" interface of the controller, such that each word
    //! on the SPI bus is 8 bits and a separate GPIO selects between commands and data. The
    //! "3-wire" mode replaces the D/C GPIO with a 9th bit on each word, which seems really
    //! awkward to implement with embedded_hal SPI.

    use super::DisplayInterface;

    /// Errors from either half of the 4-wire interface.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum SpiInterfaceError<SpiE, PinE> {
        /// The SPI transfer failed.
        Spi(SpiE),
        /// Driving the D/C pin failed.
        Pin(PinE),
    }

    pub struct SpiInterface<SPI, DC> {
        /// The SPI master device connected to the ST7789.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the ST7789 (the fourth
        /// "wire" of "4-wire" mode).
        dc: DC,
    }

    impl<SPI, DC> SpiInterface<SPI, DC>
    where
        SPI: hal::blocking::spi::Write<u8>,
        DC: hal::digital::v2::OutputPin,
    {
        /// Create a new SPI interface to communicate with the display driver. `spi` is the SPI
        /// master device, and `dc` is the GPIO output pin connected to the D/C pin of the ST7789.
        pub fn new(spi: SPI, dc: DC) -> Self {
            Self { spi, dc }
        }

        /// Give back the SPI master and the D/C pin.
        pub fn release(self) -> (SPI, DC) {
            (self.spi, self.dc)
        }
    }

    impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
    where
        SPI: hal::blocking::spi::Write<u8>,
        DC: hal::digital::v2::OutputPin,
    {
        type Error = SpiInterfaceError<SPI::Error, DC::Error>;

        fn acquire(&mut self) -> Result<(), Self::Error> {
            self.dc.set_low().map_err(SpiInterfaceError::Pin)
        }

        fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
            self.dc.set_low().map_err(SpiInterfaceError::Pin)?;
            self.spi.write(&[cmd]).map_err(SpiInterfaceError::Spi)
        }

        fn begin_data(&mut self) -> Result<(), Self::Error> {
            self.dc.set_high().map_err(SpiInterfaceError::Pin)
        }

        fn write_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.spi.write(buf).map_err(SpiInterfaceError::Spi)
        }

        fn end_data(&mut self) -> Result<(), Self::Error> {
            self.dc.set_low().map_err(SpiInterfaceError::Pin)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use core::convert::Infallible;
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::vec::Vec;

        #[derive(Debug, PartialEq)]
        enum Wire {
            Dc(bool),
            Spi(Vec<u8>),
        }

        struct Bus(Rc<RefCell<Vec<Wire>>>);

        impl hal::blocking::spi::Write<u8> for Bus {
            type Error = ();
            fn write(&mut self, words: &[u8]) -> Result<(), ()> {
                if words.is_empty() {
                    return Err(());
                }
                self.0.borrow_mut().push(Wire::Spi(words.to_vec()));
                Ok(())
            }
        }

        struct Pin(Rc<RefCell<Vec<Wire>>>);

        impl hal::digital::v2::OutputPin for Pin {
            type Error = Infallible;
            fn set_low(&mut self) -> Result<(), Infallible> {
                self.0.borrow_mut().push(Wire::Dc(false));
                Ok(())
            }
            fn set_high(&mut self) -> Result<(), Infallible> {
                self.0.borrow_mut().push(Wire::Dc(true));
                Ok(())
            }
        }

        fn wired() -> (SpiInterface<Bus, Pin>, Rc<RefCell<Vec<Wire>>>) {
            let log = Rc::new(RefCell::new(Vec::new()));
            (
                SpiInterface::new(Bus(log.clone()), Pin(log.clone())),
                log,
            )
        }

        #[test]
        fn command_then_parameters() {
            let (mut iface, log) = wired();
            iface.acquire().unwrap();
            iface.send_command(0x3A).unwrap();
            iface.send_data(&[0x55]).unwrap();
            assert_eq!(
                *log.borrow(),
                vec![
                    Wire::Dc(false),
                    Wire::Dc(false),
                    Wire::Spi(vec![0x3A]),
                    Wire::Dc(true),
                    Wire::Spi(vec![0x55]),
                ]
            );
        }

        #[test]
        fn data_run_toggles_dc_once() {
            let (mut iface, log) = wired();
            iface.begin_data().unwrap();
            iface.write_data(&[1, 2]).unwrap();
            iface.write_data(&[3]).unwrap();
            iface.end_data().unwrap();
            assert_eq!(
                *log.borrow(),
                vec![
                    Wire::Dc(true),
                    Wire::Spi(vec![1, 2]),
                    Wire::Spi(vec![3]),
                    Wire::Dc(false),
                ]
            );
        }

        #[test]
        fn spi_errors_propagate() {
            let (mut iface, _log) = wired();
            assert_eq!(
                iface.send_data(&[]),
                Err(SpiInterfaceError::Spi(()))
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::hard_reset;
    use super::test_spy::{Sent, TestSpyInterface};
    use core::convert::Infallible;
    use hal::digital::v2::OutputPin;
    use std::vec::Vec;

    struct ResetPin(Vec<bool>);

    impl OutputPin for ResetPin {
        type Error = Infallible;
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.push(true);
            Ok(())
        }
    }

    #[test]
    fn hard_reset_pulses_low() {
        let di = TestSpyInterface::new();
        let mut rst = ResetPin(Vec::new());
        hard_reset(&mut rst, &mut di.delay()).unwrap();
        assert_eq!(rst.0, vec![false, true]);
        di.check_multi(&[Sent::Delay(10), Sent::Delay(120)]);
    }
}
