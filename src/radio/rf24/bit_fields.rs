//! Typed layouts of the radio's 8-bit configuration registers.
//!
//! Fields are declared from the most significant bit down, matching the
//! register tables in the nRF24L01+ datasheet.

use bitfield_struct::bitfield;

use crate::{DataRate, OutputPower, StatusFlags};

/// The CONFIG register (0x00).
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct Config {
    #[bits(1)]
    _reserved: u8,

    /// Set to keep the "RX Data Ready" event off the IRQ pin.
    pub mask_rx_dr: bool,

    /// Set to keep the "TX Data Sent" event off the IRQ pin.
    pub mask_tx_ds: bool,

    /// Set to keep the "Max Retransmit" event off the IRQ pin.
    pub mask_max_rt: bool,

    pub en_crc: bool,

    /// CRC encoding scheme: `false` is 1 byte, `true` is 2 bytes.
    pub crco: bool,

    pub pwr_up: bool,

    /// RX/TX control: `true` is PRX, `false` is PTX.
    pub prim_rx: bool,
}

impl Config {
    /// 16-bit CRC, all IRQ events enabled, powered down as PTX.
    pub const RESET_VALUE: u8 = 0x0C;

    /// The events that will assert the IRQ pin.
    ///
    /// The mask bits use inverted logic: a set bit keeps the event off the pin.
    #[cfg(test)]
    pub const fn irq_enabled(&self) -> StatusFlags {
        StatusFlags::from_bits(!self.into_bits() & StatusFlags::IRQ_MASK)
    }

    pub const fn with_irq_enabled(self, flags: StatusFlags) -> Self {
        Self::from_bits(
            self.into_bits() & !StatusFlags::IRQ_MASK | (!flags.into_bits() & StatusFlags::IRQ_MASK),
        )
    }
}

/// The SETUP_RETR register (0x04).
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct SetupRetry {
    /// Auto retransmit delay, in steps of 250 microseconds (plus 250).
    #[bits(4)]
    pub ard: u8,

    /// Auto retransmit count. 0 disables retransmission.
    #[bits(4)]
    pub arc: u8,
}

/// The RF_SETUP register (0x06).
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct RfSetup {
    pub cont_wave: bool,

    #[bits(1)]
    _reserved: u8,

    pub rf_dr_low: bool,

    pub pll_lock: bool,

    pub rf_dr_high: bool,

    #[bits(2)]
    pub rf_pwr: u8,

    /// Obsolete on nRF24L01+ (LNA gain on older variants).
    pub lna_hcurr: bool,
}

impl RfSetup {
    /// Decode the (RF_DR_LOW, RF_DR_HIGH) pair.
    ///
    /// Returns [`None`] for the reserved `(1, 1)` encoding.
    pub const fn data_rate(&self) -> Option<DataRate> {
        DataRate::from_bits(self.into_bits())
    }

    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self::from_bits(self.into_bits() & !DataRate::MASK | data_rate.into_bits())
    }

    pub const fn output_power(&self) -> OutputPower {
        OutputPower::from_bits(self.into_bits())
    }

    pub const fn with_output_power(self, power: OutputPower) -> Self {
        Self::from_bits(self.into_bits() & !OutputPower::MASK | power.into_bits())
    }
}

/// The OBSERVE_TX register (0x08). Read-only on the chip.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct ObserveTx {
    /// Lost packets. Saturates at 15 and resets when RF_CH is written.
    #[bits(4)]
    pub plos_cnt: u8,

    /// Retransmissions of the current packet. Resets for every new packet.
    #[bits(4)]
    pub arc_cnt: u8,
}

/// The FIFO_STATUS register (0x17).
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _reserved: u8,

    pub tx_reuse: bool,

    pub tx_full: bool,

    pub tx_empty: bool,

    #[bits(2)]
    _reserved2: u8,

    pub rx_full: bool,

    pub rx_empty: bool,
}

/// The FEATURE register (0x1D).
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct Feature {
    #[bits(5)]
    _reserved: u8,

    /// Dynamic payload length.
    pub en_dpl: bool,

    /// Payloads attached to ACK packets.
    pub en_ack_pay: bool,

    /// Allow the W_TX_PAYLOAD_NOACK command.
    pub en_dyn_ack: bool,
}
