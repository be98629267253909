#![no_std]

mod fmt;

mod bus;
mod cache;
mod constants;
mod pin;
mod segment;

pub use bus::{Frame, SerialBus, ShiftOut, SpiTransport};
pub use cache::{NoCache, RowState, ShadowCache};
pub use constants::*;
pub use pin::{DigitalWrite, NumberedPin, PortRegister, RegisterPin};
pub use segment::{encode_char, encode_digit};

use constants::opcode::{decode_mode, display_test, shutdown};
use num_traits::ToPrimitive;

pub struct LedControl<BUS, STATE = ShadowCache> {
    bus: BUS,
    state: STATE,
    devices: u8,
}

impl<BUS: ShiftOut> LedControl<BUS, ShadowCache> {
    pub fn new(bus: BUS, devices: u8) -> Self {
        Self::with_state(bus, ShadowCache::new(), devices)
    }

    pub fn device_count(&self) -> u8 {
        self.devices
    }

    pub fn shadow(&self) -> &ShadowCache {
        &self.state
    }

    pub fn led(&self, address: u8, row: u8, col: u8) -> bool {
        if address >= self.devices || col >= ROWS {
            return false;
        }
        self.state.get(address, row) & (0x80 >> col) != 0
    }

    pub fn set_led(
        &mut self,
        address: u8,
        row: u8,
        col: u8,
        on: bool,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) || row >= ROWS || col >= ROWS {
            return Ok(());
        }
        let mask = 0x80 >> col;
        let current = self.state.get(address, row);
        let value = if on { current | mask } else { current & !mask };
        self.write_row(address, row, value)
    }

    pub fn set_column(
        &mut self,
        address: u8,
        col: u8,
        value: u8,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) || col >= ROWS {
            return Ok(());
        }
        for row in 0..ROWS {
            let on = (value >> (7 - row)) & 0x01 != 0;
            self.set_led(address, row, col, on)?;
        }
        Ok(())
    }
}

impl<BUS: ShiftOut> LedControl<BUS, NoCache> {
    pub fn new_minimal(bus: BUS, devices: u8) -> Self {
        Self::with_state(bus, NoCache, devices)
    }
}

impl<BUS, STATE> LedControl<BUS, STATE>
where
    BUS: ShiftOut,
    STATE: RowState,
{
    fn with_state(bus: BUS, state: STATE, devices: u8) -> Self {
        Self {
            bus,
            state,
            devices: devices.clamp(1, MAX_DEVICES),
        }
    }

    pub fn release(self) -> BUS {
        self.bus
    }

    /// Leaves every device blank and shut down.
    pub fn init(&mut self) -> Result<(), LedControlError<BUS::Error>> {
        trace!("init {=u8} devices", self.devices);
        for device in 0..self.devices {
            self.transfer(
                device,
                opcode::DISPLAY_TEST,
                display_test::NORMAL_OPERATION,
            )?;
            self.set_scan_limit(device, MAX_SCAN_LIMIT)?;
            self.transfer(device, opcode::DECODE_MODE, decode_mode::NO_DECODE)?;
            self.clear_display(device)?;
            self.shutdown(device, true)?;
        }
        Ok(())
    }

    /// `true` puts the device into power-down mode, `false` resumes normal
    /// operation.
    pub fn shutdown(
        &mut self,
        address: u8,
        enable: bool,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) {
            return Ok(());
        }
        let data = if enable {
            shutdown::SHUTDOWN_MODE
        } else {
            shutdown::NORMAL_OPERATION
        };
        self.transfer(address, opcode::SHUTDOWN, data)
    }

    pub fn set_scan_limit(
        &mut self,
        address: u8,
        limit: u8,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) {
            return Ok(());
        }
        self.transfer(address, opcode::SCAN_LIMIT, limit)
    }

    pub fn set_intensity(
        &mut self,
        address: u8,
        intensity: u8,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) {
            return Ok(());
        }
        self.transfer(address, opcode::INTENSITY, intensity)
    }

    pub fn set_display_test(
        &mut self,
        address: u8,
        enabled: bool,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) {
            return Ok(());
        }
        let data = if enabled {
            display_test::ALL_ON
        } else {
            display_test::NORMAL_OPERATION
        };
        self.transfer(address, opcode::DISPLAY_TEST, data)
    }

    pub fn clear_display(&mut self, address: u8) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) {
            return Ok(());
        }
        self.state.clear(address);
        for row in 0..ROWS {
            self.transfer(address, opcode::DIGIT_OFFSET + row, 0)?;
        }
        Ok(())
    }

    pub fn set_row(
        &mut self,
        address: u8,
        row: u8,
        value: u8,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) || row >= ROWS {
            return Ok(());
        }
        self.write_row(address, row, value)
    }

    pub fn set_digit(
        &mut self,
        address: u8,
        digit: u8,
        value: u8,
        decimal_point: bool,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) || digit >= ROWS || value > 0x0F {
            return Ok(());
        }
        let mut pattern = encode_digit(value);
        if decimal_point {
            pattern |= DP_MASK;
        }
        self.write_row(address, digit, pattern)
    }

    pub fn set_char(
        &mut self,
        address: u8,
        digit: u8,
        code: u8,
        decimal_point: bool,
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) || digit >= ROWS {
            return Ok(());
        }
        let mut pattern = encode_char(code);
        if decimal_point {
            pattern |= DP_MASK;
        }
        self.write_row(address, digit, pattern)
    }

    pub fn display_ascii(
        &mut self,
        address: u8,
        bytes: &[u8],
    ) -> Result<(), LedControlError<BUS::Error>> {
        if !self.is_device(address) {
            return Ok(());
        }
        for (index, code) in bytes.iter().take(ROWS as usize).enumerate() {
            self.set_char(address, ROWS - 1 - index as u8, *code, false)?;
        }
        Ok(())
    }

    pub fn display_number<T>(
        &mut self,
        address: u8,
        number: T,
    ) -> Result<(), LedControlError<BUS::Error>>
    where
        T: ToPrimitive,
    {
        if !self.is_device(address) {
            return Ok(());
        }
        let Some(number) = number.to_i64() else {
            trace!("number out of range");
            return Ok(());
        };

        let mut patterns = [0u8; ROWS as usize];
        let mut magnitude = number.unsigned_abs();
        let mut used = 0;
        loop {
            if used == patterns.len() {
                trace!("{=i64} does not fit", number);
                return Ok(());
            }
            patterns[used] = encode_digit((magnitude % 10) as u8);
            magnitude /= 10;
            used += 1;
            if magnitude == 0 {
                break;
            }
        }
        if number < 0 {
            if used == patterns.len() {
                trace!("{=i64} does not fit", number);
                return Ok(());
            }
            patterns[used] = encode_char(b'-');
        }

        for (digit, pattern) in patterns.iter().enumerate() {
            self.write_row(address, digit as u8, *pattern)?;
        }
        Ok(())
    }

    pub fn display_hex_number<T>(
        &mut self,
        address: u8,
        number: T,
    ) -> Result<(), LedControlError<BUS::Error>>
    where
        T: ToPrimitive,
    {
        if !self.is_device(address) {
            return Ok(());
        }
        let Some(number) = number.to_u32() else {
            trace!("hex number out of range");
            return Ok(());
        };
        for digit in 0..ROWS {
            let nibble = (number >> (4 * digit as u32)) & 0x0F;
            self.write_row(address, digit, encode_digit(nibble as u8))?;
        }
        Ok(())
    }

    fn is_device(&self, address: u8) -> bool {
        if address >= self.devices {
            trace!("ignoring device {=u8}, chain has {=u8}", address, self.devices);
            return false;
        }
        true
    }

    // shadow first, then the bus
    fn write_row(
        &mut self,
        address: u8,
        row: u8,
        value: u8,
    ) -> Result<(), LedControlError<BUS::Error>> {
        let value = self.state.store(address, row, value);
        self.transfer(address, opcode::DIGIT_OFFSET + row, value)
    }

    fn transfer(
        &mut self,
        address: u8,
        opcode: u8,
        data: u8,
    ) -> Result<(), LedControlError<BUS::Error>> {
        let frame = Frame::new(self.devices, address, opcode, data);
        trace!(
            "device {=u8} opcode {=u8:#x} data {=u8:#x}",
            address,
            opcode,
            data
        );
        self.bus.write_frame(frame.as_bytes())?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedControlError<E> {
    Bus(E),
}

impl<E> From<E> for LedControlError<E> {
    fn from(error: E) -> Self {
        LedControlError::Bus(error)
    }
}
