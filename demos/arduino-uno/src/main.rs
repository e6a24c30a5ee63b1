#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use arduino_hal::spi;
use max7219::Max7219;
use panic_halt as _;

const DEFAULT_INTENSITY: u8 = 3;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let (spi, cs) = arduino_hal::Spi::new(
        dp.SPI,
        pins.d13.into_output(),
        pins.d11.into_output(),
        pins.d12.into_pull_up_input(),
        pins.d10.into_output(),
        spi::Settings::default(),
    );

    let mut display = Max7219::new(spi, cs).unwrap();
    display.set_intensity(DEFAULT_INTENSITY).unwrap();
    display.clear();
    display.show().unwrap();

    ufmt::uwriteln!(&mut serial, "Counting up...").unwrap_infallible();
    let mut i: u32 = 0;
    loop {
        display.write_number(i, false, false).unwrap();
        display.show().unwrap();
        i = if i < 99_999_999 { i + 1 } else { 0 };

        arduino_hal::delay_ms(300);
    }
}
