#![no_std]

mod constants;

pub use constants::*;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use num_traits::ToPrimitive;

pub struct Max7219<SPI, CS> {
    spi: SPI,
    cs: CS,
    buffer: [u8; NUM_DIGITS],
}

impl<SPI, CS, SpiE, PinE> Max7219<SPI, CS>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
{
    pub fn new(spi: SPI, cs: CS) -> Result<Self, Error<SpiE, PinE>> {
        let mut driver = Self {
            spi,
            cs,
            buffer: [BLANK; NUM_DIGITS],
        };
        driver.init()?;
        Ok(driver)
    }

    pub fn destroy(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn init(&mut self) -> Result<(), Error<SpiE, PinE>> {
        // the device must leave test mode and select raw decode before it is
        // taken out of shutdown, so this order is fixed
        for (command, data) in [
            (register::SHUTDOWN, register::shutdown_mode::SHUTDOWN),
            (
                register::DISPLAY_TEST,
                register::display_test_mode::NORMAL_OPERATION,
            ),
            (register::SCAN_LIMIT, (NUM_DIGITS - 1) as u8),
            (register::DECODE_MODE, register::decode_mode::NO_DECODE),
            (register::SHUTDOWN, register::shutdown_mode::NORMAL_OPERATION),
        ] {
            self.register(command, data)?;
        }
        Ok(())
    }

    /// Formats `value` into the 8-character field and stages the segment
    /// encodings in the buffer; nothing reaches the device until `show`.
    pub fn write_number<T>(
        &mut self,
        value: T,
        zero_pad: bool,
        left_justify: bool,
    ) -> Result<(), Error<SpiE, PinE>>
    where
        T: ToPrimitive,
    {
        let value = value.to_i64().ok_or(Error::InvalidValue)?;
        let magnitude = value.unsigned_abs();

        let mut ndigits = 1;
        let mut rest = magnitude / 10;
        while rest > 0 {
            ndigits += 1;
            rest /= 10;
        }
        let sign = usize::from(value < 0);
        let width = ndigits + sign;
        if width > NUM_DIGITS {
            return Err(Error::Overflow(value));
        }

        let mut text = [b' '; NUM_DIGITS];
        let end = if left_justify { width } else { NUM_DIGITS };
        let mut pos = end;
        let mut rest = magnitude;
        loop {
            pos -= 1;
            text[pos] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        // printf semantics: zero padding goes between the sign and the
        // digits, and left justification always pads with spaces
        if zero_pad && !left_justify {
            while pos > sign {
                pos -= 1;
                text[pos] = b'0';
            }
        }
        if value < 0 {
            text[pos - 1] = b'-';
        }

        // stage every encoding first so a failed lookup leaves the buffer
        // untouched; leftmost character lands on digit 7
        let mut staged = [BLANK; NUM_DIGITS];
        for (i, &c) in text.iter().enumerate() {
            staged[NUM_DIGITS - 1 - i] =
                letter(c as char).ok_or(Error::UnsupportedChar(c as char))?;
        }
        self.buffer = staged;
        Ok(())
    }

    /// Flushes the whole buffer, digit 0 through digit 7.
    pub fn show(&mut self) -> Result<(), Error<SpiE, PinE>> {
        for i in 0..NUM_DIGITS {
            let data = self.buffer[i];
            self.register(register::DIGIT_OFFSET + i as u8, data)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer = [BLANK; NUM_DIGITS];
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Error<SpiE, PinE>> {
        if intensity > MAX_INTENSITY {
            return Err(Error::InvalidValue);
        }
        self.register(register::INTENSITY, intensity)
    }

    pub fn display_test(&mut self, enable: bool) -> Result<(), Error<SpiE, PinE>> {
        let mode = if enable {
            register::display_test_mode::DISP_TEST
        } else {
            register::display_test_mode::NORMAL_OPERATION
        };
        self.register(register::DISPLAY_TEST, mode)
    }

    pub fn power_on(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.register(
            register::SHUTDOWN,
            register::shutdown_mode::NORMAL_OPERATION,
        )
    }

    pub fn power_off(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.register(register::SHUTDOWN, register::shutdown_mode::SHUTDOWN)
    }

    fn register(&mut self, command: u8, data: u8) -> Result<(), Error<SpiE, PinE>> {
        self.cs.set_low().map_err(Error::Pin)?;
        let write = self
            .spi
            .write(&[command, data])
            .and_then(|()| self.spi.flush())
            .map_err(Error::Spi);
        // chip select is released even when the burst failed
        let release = self.cs.set_high().map_err(Error::Pin);
        write.and(release)
    }
}

/// Looks up the segment encoding for a single character.
pub fn letter(c: char) -> Option<u8> {
    match c {
        ' ' => Some(BLANK),
        '0'..='9' => Some(NUMBERS[(c as u8 - b'0') as usize]),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<SPI, CS> {
    Spi(SPI),
    Pin(CS),
    Overflow(i64),
    UnsupportedChar(char),
    InvalidValue,
}
