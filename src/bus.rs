use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiDevice;

use crate::constants::{opcode, MAX_DEVICES};

/// One latch worth of bytes for the whole chain, in shift order: furthest
/// device first, opcode byte then data byte. Devices not addressed get a
/// no-op since the chip-select latch is chain-wide.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: [u8; MAX_DEVICES as usize * 2],
    len: usize,
}

impl Frame {
    pub fn new(devices: u8, address: u8, opcode: u8, data: u8) -> Self {
        let devices = devices.clamp(1, MAX_DEVICES);
        let mut bytes = [opcode::NO_OP; MAX_DEVICES as usize * 2];
        if address < devices {
            let offset = (devices - 1 - address) as usize * 2;
            bytes[offset] = opcode;
            bytes[offset + 1] = data;
        }
        Self {
            bytes,
            len: devices as usize * 2,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

pub trait ShiftOut {
    type Error;

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}

pub struct SerialBus<DATA, CLK, CS> {
    data: DATA,
    clk: CLK,
    cs: CS,
}

impl<DATA, CLK, CS, E> SerialBus<DATA, CLK, CS>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    pub fn new(data: DATA, clk: CLK, mut cs: CS) -> Result<Self, E> {
        cs.set_high()?;
        Ok(Self { data, clk, cs })
    }

    pub fn destroy(self) -> (DATA, CLK, CS) {
        (self.data, self.clk, self.cs)
    }

    fn shift_byte(&mut self, byte: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            self.data.set_state(PinState::from(byte & (1 << bit) != 0))?;
            self.clk.set_high()?;
            self.clk.set_low()?;
        }
        Ok(())
    }
}

impl<DATA, CLK, CS, E> ShiftOut for SerialBus<DATA, CLK, CS>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    type Error = E;

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), E> {
        self.cs.set_low()?;
        for byte in frame {
            self.shift_byte(*byte)?;
        }
        // rising edge latches every device at once
        self.cs.set_high()?;
        Ok(())
    }
}

// SpiDevice owns chip-select: mode 0, 10 MHz max
pub struct SpiTransport<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> SpiTransport<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    pub fn destroy(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> ShiftOut for SpiTransport<SPI> {
    type Error = SPI::Error;

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(frame)
    }
}
