/// Register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const RX_ADDR_P2: u8 = 0x0C;
    pub const RX_ADDR_P3: u8 = 0x0D;
    pub const RX_ADDR_P4: u8 = 0x0E;
    pub const RX_ADDR_P5: u8 = 0x0F;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P1: u8 = 0x12;
    pub const RX_PW_P2: u8 = 0x13;
    pub const RX_PW_P3: u8 = 0x14;
    pub const RX_PW_P4: u8 = 0x15;
    pub const RX_PW_P5: u8 = 0x16;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;

    /// Only the lower 5 bits of a register command address a register.
    pub const ADDRESS_MASK: u8 = 0x1F;
}

/// SPI commands for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;
}

/// Bit mnemonics shared by the STATUS and CONFIG registers.
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;
}

/// The number of RX pipes on the nRF24L01.
pub const PIPE_COUNT: u8 = 6;

/// The largest payload the FIFOs can hold.
pub const MAX_PAYLOAD_SIZE: u8 = 32;

/// The highest RF channel (2400 MHz + 125 MHz).
pub const MAX_CHANNEL: u8 = 125;

/// Time (in microseconds) the radio needs to settle after leaving power-down mode.
///
/// Tpd2stby is 1.5 ms on the datasheet. 5 ms covers non-plus variants and clones too.
pub const POWER_UP_DELAY_US: u32 = 5000;
