pub const MAX_DEVICES: u8 = 8;
pub const ROWS: u8 = 8; // digit registers per device
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const MAX_SCAN_LIMIT: u8 = 7;
pub const DP_MASK: u8 = 0x80;
pub const BLANK_CHAR: u8 = b' ';

// Segment bits, MSB first: DP A B C D E F G
//
//     A
//   F   B
//     G
//   E   C
//     D
pub const CHAR_TABLE: [u8; 128] = [
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B, 0x77, 0x1F, 0x0D, 0x3D, 0x4F, 0x47,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ' ' to '/'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x01, 0x80, 0x25,
    // '0' to '?'
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00,
    // '@' to 'O'
    0x00, 0x77, 0x7F, 0x4E, 0x7E, 0x4F, 0x47, 0x5F, 0x37, 0x30, 0x7C, 0x00, 0x0E, 0x00, 0x76, 0x7E,
    // 'P' to '_'
    0x67, 0x7E, 0x77, 0x5B, 0x46, 0x3E, 0x00, 0x00, 0x00, 0x33, 0x6D, 0x4E, 0x13, 0x78, 0x00, 0x08,
    // '`' to 'o'
    0x00, 0x7D, 0x1F, 0x0D, 0x3D, 0x4F, 0x47, 0x7B, 0x37, 0x30, 0x38, 0x00, 0x06, 0x00, 0x15, 0x1D,
    // 'p' to DEL
    0x67, 0x73, 0x05, 0x5B, 0x0F, 0x1C, 0x00, 0x00, 0x00, 0x27, 0x6D, 0x4E, 0x00, 0x78, 0x00, 0x00,
];

#[allow(dead_code)]
pub mod opcode {
    pub const NO_OP: u8 = 0x00;
    pub const DIGIT_OFFSET: u8 = 0x01; // Digit0 - Digit7
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    // 0x0D and 0x0E are unused on the MAX7219/MAX7221
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // raw segments for digits 7:0
        pub const DECODE_ALL: u8 = 0xFF; // Code-B for digits 7:0
    }

    pub mod display_test {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const ALL_ON: u8 = 0x01;
    }

    pub mod shutdown {
        pub const SHUTDOWN_MODE: u8 = 0x00; // bit 0 clear: shutdown mode
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
    }
}
