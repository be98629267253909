use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use num_traits::{One, PrimInt, Zero};

pub trait DigitalWrite {
    type Error: embedded_hal::digital::Error;

    fn digital_write(&self, pin: u8, state: PinState) -> Result<(), Self::Error>;
}

pub struct NumberedPin<'a, G> {
    gpio: &'a G,
    pin: u8,
}

impl<'a, G: DigitalWrite> NumberedPin<'a, G> {
    pub fn new(gpio: &'a G, pin: u8) -> Self {
        Self { gpio, pin }
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl<G: DigitalWrite> ErrorType for NumberedPin<'_, G> {
    type Error = G::Error;
}

impl<G: DigitalWrite> OutputPin for NumberedPin<'_, G> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.digital_write(self.pin, PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.digital_write(self.pin, PinState::High)
    }
}

pub trait PortRegister {
    type Word: PrimInt;

    fn read(&self) -> Self::Word;
    fn write(&self, value: Self::Word);
}

impl<W: PrimInt> PortRegister for Cell<W> {
    type Word = W;

    fn read(&self) -> W {
        self.get()
    }

    fn write(&self, value: W) {
        self.set(value)
    }
}

impl<R: PortRegister + ?Sized> PortRegister for &R {
    type Word = R::Word;

    fn read(&self) -> Self::Word {
        (**self).read()
    }

    fn write(&self, value: Self::Word) {
        (**self).write(value)
    }
}

pub struct RegisterPin<R: PortRegister> {
    port: R,
    mask: R::Word,
}

impl<R: PortRegister> RegisterPin<R> {
    pub fn new(port: R, mask: R::Word) -> Self {
        Self { port, mask }
    }

    /// A `bit` past the word width gives an empty mask.
    pub fn from_bit(port: R, bit: u32) -> Self {
        let width = R::Word::zero().count_zeros();
        let mask = if bit < width {
            R::Word::one() << bit as usize
        } else {
            R::Word::zero()
        };
        Self::new(port, mask)
    }

    pub fn mask(&self) -> R::Word {
        self.mask
    }
}

impl<R: PortRegister> ErrorType for RegisterPin<R> {
    type Error = Infallible;
}

impl<R: PortRegister> OutputPin for RegisterPin<R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.port.write(self.port.read() & !self.mask);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.port.write(self.port.read() | self.mask);
        Ok(())
    }
}
