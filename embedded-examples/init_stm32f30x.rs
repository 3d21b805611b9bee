//! Full example code for setting up an ST7789 display. This runs on an STM32F303RE, using a
//! 240x240 ST7789 module connected to SPI1, PA8 for D/C, and PA9 for /RESET.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate embedded_hal as hal_api;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;
extern crate st7789;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use hal::spi;
use st7789 as lcd;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

// Layout of the two reading boxes: a title strip above a value field, side by side.
const BOX_WIDTH: u16 = 105;
const TITLE_HEIGHT: u16 = 20;
const VALUE_HEIGHT: u16 = 30;
const BOX_LEFT: [u16; 2] = [4, 119];
const BOX_TOP: u16 = 5;
const GAP: u16 = 2;

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO A where the display is connected.
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);

    // Set up SPI1, which is Alternate Function 5 for GPIOs PA5,6,7. The ST7789 samples on the
    // rising edge with the clock idling high.
    let disp_sck = gpioa.pa5.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_miso = gpioa.pa6.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_mosi = gpioa.pa7.into_af5(&mut gpioa.moder, &mut gpioa.afrl);

    let disp_spi = spi::Spi::spi1(
        dp.SPI1,
        (disp_sck, disp_miso, disp_mosi),
        hal_api::spi::Mode {
            polarity: hal_api::spi::Polarity::IdleHigh,
            phase: hal_api::spi::Phase::CaptureOnSecondTransition,
        },
        8.mhz(),
        clocks,
        &mut rcc.apb2,
    );

    // PA8 will be the D/C push-pull output for the 4th wire.
    let disp_dc = gpioa
        .pa8
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // PA9 is the display's /RESET pin.
    let mut disp_rst = gpioa
        .pa9
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // Create the SpiInterface and Display. This is a black tab module with the reference
    // 240x240 geometry. The STM32 SPI has no DMA length limit worth respecting here, so allow
    // larger transfers than the default.
    let mut disp = lcd::Display::new(
        lcd::SpiInterface::new(disp_spi, disp_dc),
        lcd::Config::new(lcd::TabColor::BlackTab).max_transfer(1024),
    );

    lcd::hard_reset(&mut disp_rst, &mut delay).unwrap();
    disp.init(&mut delay).unwrap();
    disp.set_rotation(lcd::Rotation::Deg0).unwrap();

    // Clear the panel, then paint the two reading boxes.
    disp.clear(lcd::Rgb565::BLACK).unwrap();
    for &left in BOX_LEFT.iter() {
        disp.fill_rect(
            left,
            BOX_TOP,
            BOX_WIDTH,
            TITLE_HEIGHT,
            lcd::Rgb565::from_rgb888(0x1E90FF),
        ).unwrap();
        disp.fill_rect(
            left,
            BOX_TOP + TITLE_HEIGHT + GAP,
            BOX_WIDTH,
            VALUE_HEIGHT,
            lcd::Rgb565::from_rgb888(0x0000CD),
        ).unwrap();
    }

    loop {
        asm::wfi();
    }
}
