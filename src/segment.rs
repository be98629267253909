use crate::constants::{BLANK_CHAR, CHAR_TABLE};

pub fn encode_digit(value: u8) -> u8 {
    if value > 0x0F {
        return 0;
    }
    CHAR_TABLE[value as usize]
}

pub fn encode_char(code: u8) -> u8 {
    let index = if code > 127 { BLANK_CHAR } else { code };
    CHAR_TABLE[index as usize]
}
