use crate::constants::{MAX_DEVICES, ROWS};

// the bus is write-only, partial row updates start from what was last stored
pub trait RowState {
    fn store(&mut self, device: u8, row: u8, value: u8) -> u8;

    fn clear(&mut self, device: u8);
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShadowCache {
    rows: [u8; (MAX_DEVICES * ROWS) as usize],
}

impl ShadowCache {
    pub const fn new() -> Self {
        Self {
            rows: [0; (MAX_DEVICES * ROWS) as usize],
        }
    }

    pub fn get(&self, device: u8, row: u8) -> u8 {
        match Self::index(device, row) {
            Some(index) => self.rows[index],
            None => 0,
        }
    }

    pub fn rows(&self, device: u8) -> Option<&[u8]> {
        let start = Self::index(device, 0)?;
        Some(&self.rows[start..start + ROWS as usize])
    }

    fn index(device: u8, row: u8) -> Option<usize> {
        if device >= MAX_DEVICES || row >= ROWS {
            return None;
        }
        Some(device as usize * ROWS as usize + row as usize)
    }
}

impl Default for ShadowCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RowState for ShadowCache {
    fn store(&mut self, device: u8, row: u8, value: u8) -> u8 {
        if let Some(index) = Self::index(device, row) {
            self.rows[index] = value;
        }
        value
    }

    fn clear(&mut self, device: u8) {
        if let Some(start) = Self::index(device, 0) {
            self.rows[start..start + ROWS as usize].fill(0);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoCache;

impl RowState for NoCache {
    fn store(&mut self, _device: u8, _row: u8, value: u8) -> u8 {
        value
    }

    fn clear(&mut self, _device: u8) {}
}
