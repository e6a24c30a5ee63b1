pub const NUM_DIGITS: usize = 8;
pub const MAX_INTENSITY: u8 = 15; // 4 bits

pub const BLANK: u8 = 0x00;
pub const NUMBERS: [u8; 10] = [
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B,
];

#[allow(dead_code)]
pub mod register {
    pub const NO_OP: u8 = 0x00;
    pub const DIGIT_OFFSET: u8 = 0x01; // Digit0 - Digit7
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // raw segment data for digits 7:0
        pub const DECODE_ALL: u8 = 0xFF; // Code-B decode for digits 7:0
    }

    pub mod shutdown_mode {
        pub const SHUTDOWN: u8 = 0x00; // bit 0 clear: shutdown, display blanked
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
    }

    pub mod display_test_mode {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const DISP_TEST: u8 = 0x01; // bit 0: all LEDs on at full intensity
    }
}
