//! This module defines the value types used throughout the driver's API.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// How fast data moves through the air. Units are in bits per second (bps).
///
/// Encoded in the RF_SETUP register as the (RF_DR_LOW, RF_DR_HIGH) bit pair.
/// The pair `(1, 1)` is reserved by the datasheet and is never produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataRate {
    /// represents 1 Mbps, encoded as `(0, 0)`
    #[default]
    Mbps1,
    /// represents 2 Mbps, encoded as `(0, 1)`
    Mbps2,
    /// represents 250 Kbps, encoded as `(1, 0)`
    Kbps250,
}

impl DataRate {
    /// RF_DR_LOW (bit 5) and RF_DR_HIGH (bit 3) of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    /// Decode the data rate bits of a RF_SETUP register value.
    ///
    /// Returns [`None`] for the reserved encoding.
    pub(crate) const fn from_bits(value: u8) -> Option<Self> {
        match value & Self::MASK {
            0 => Some(DataRate::Mbps1),
            0x8 => Some(DataRate::Mbps2),
            0x20 => Some(DataRate::Kbps250),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// Transmitter output power. The units dBm (decibel-milliwatts)
/// represent a logarithmic signal loss, so every value is at or below 0 dBm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputPower {
    /// -18 dBm
    Minus18Dbm,
    /// -12 dBm
    Minus12Dbm,
    /// -6 dBm
    Minus6Dbm,
    /// 0 dBm
    #[default]
    ZeroDbm,
}

impl OutputPower {
    /// RF_PWR (bits 1 and 2) of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0b110;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            OutputPower::Minus18Dbm => 0,
            OutputPower::Minus12Dbm => 2,
            OutputPower::Minus6Dbm => 4,
            OutputPower::ZeroDbm => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => OutputPower::Minus18Dbm,
            2 => OutputPower::Minus12Dbm,
            4 => OutputPower::Minus6Dbm,
            _ => OutputPower::ZeroDbm,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OutputPower {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            OutputPower::Minus18Dbm => defmt::write!(fmt, "-18 dBm"),
            OutputPower::Minus12Dbm => defmt::write!(fmt, "-12 dBm"),
            OutputPower::Minus6Dbm => defmt::write!(fmt, "-6 dBm"),
            OutputPower::ZeroDbm => defmt::write!(fmt, "0 dBm"),
        }
    }
}

impl Display for OutputPower {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            OutputPower::Minus18Dbm => write!(f, "-18 dBm"),
            OutputPower::Minus12Dbm => write!(f, "-12 dBm"),
            OutputPower::Minus6Dbm => write!(f, "-6 dBm"),
            OutputPower::ZeroDbm => write!(f, "0 dBm"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// A mirror of the radio's STATUS register.
///
/// The radio clocks this register out on the first byte of every SPI transaction,
/// so the driver refreshes its copy as a side effect of every command.
///
/// The same type describes the three interrupt events when configuring
/// (see [`EsbStatus::set_irq_configuration()`](fn@crate::radio::prelude::EsbStatus::set_irq_configuration))
/// or servicing (see [`EsbStatus::irq_callback()`](fn@crate::radio::prelude::EsbStatus::irq_callback))
/// the radio's IRQ pin:
/// ```
/// use nrf24::StatusFlags;
///
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flag
/// assert!(flags.rx_dr());
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    /// Always 0 on the chip, which is what makes 0xFF usable as an error sentinel.
    #[bits(1)]
    _reserved: u8,

    /// A flag to describe if RX Data Ready to read.
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// Values 0-5 are pipe numbers. 6 is unused and 7 means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// The value [`get_status()`](fn@crate::radio::prelude::EsbStatus::get_status)
    /// reports when the SPI transaction itself failed.
    pub const TRANSPORT_ERROR: StatusFlags = StatusFlags::from_bits(0xFF);

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all three interrupt flags are set to `true`.
    pub const fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// Only keep the three interrupt flags.
    pub const fn irq_flags(self) -> Self {
        Self::from_bits(self.into_bits() & Self::IRQ_MASK)
    }

    /// Is any of the three interrupt flags asserted?
    pub const fn any(&self) -> bool {
        self.into_bits() & Self::IRQ_MASK != 0
    }

    /// Is this the sentinel for a failed SPI transaction?
    pub const fn is_transport_error(&self) -> bool {
        self.into_bits() & 0x80 != 0
    }

    /// The pipe that received the payload at the top of the RX FIFO, if any.
    pub const fn pipe(&self) -> Option<u8> {
        match self.rx_pipe() {
            p @ 0..=5 => Some(p),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

#[cfg(test)]
mod test {
    use super::{DataRate, FifoState, OutputPower, StatusFlags};
    extern crate std;
    use std::{format, string::String};

    #[test]
    fn data_rate_encoding() {
        for rate in [DataRate::Mbps1, DataRate::Mbps2, DataRate::Kbps250] {
            assert_eq!(DataRate::from_bits(rate.into_bits()), Some(rate));
            // RF_DR_LOW and RF_DR_HIGH are never both set
            assert_ne!(rate.into_bits(), DataRate::MASK);
        }
        assert_eq!(DataRate::from_bits(0x28), None);
        // bits outside the mask are ignored
        assert_eq!(DataRate::from_bits(0x0F), Some(DataRate::Mbps2));
    }

    #[test]
    fn output_power_encoding() {
        assert_eq!(OutputPower::from_bits(0x07), OutputPower::ZeroDbm);
        assert_eq!(OutputPower::from_bits(0x01), OutputPower::Minus18Dbm);
        assert_eq!(OutputPower::Minus6Dbm.into_bits(), 4);
    }

    #[test]
    fn display_data_rate() {
        assert_eq!(format!("{}", DataRate::Kbps250), String::from("250 Kbps"));
        assert_eq!(format!("{}", DataRate::Mbps2), String::from("2 Mbps"));
    }

    #[test]
    fn display_output_power() {
        assert_eq!(format!("{}", OutputPower::Minus12Dbm), String::from("-12 dBm"));
    }

    #[test]
    fn display_fifo_state() {
        assert_eq!(format!("{}", FifoState::Occupied), String::from("Occupied"));
    }

    #[test]
    fn display_flags() {
        assert_eq!(
            format!("{}", StatusFlags::default()),
            String::from("StatusFlags rx_dr: false, tx_ds: false, max_rt: false")
        );
    }

    #[test]
    fn status_bit_layout() {
        // RX_DR | pipe 3 | TX_FULL
        let status = StatusFlags::from_bits(0b0100_0111);
        assert!(status.rx_dr());
        assert!(!status.tx_ds());
        assert!(!status.max_rt());
        assert_eq!(status.rx_pipe(), 3);
        assert_eq!(status.pipe(), Some(3));
        assert!(status.tx_full());
        assert!(!status.is_transport_error());

        // the power-on value of STATUS reports an empty RX FIFO
        assert_eq!(StatusFlags::from_bits(0x0E).pipe(), None);
        assert!(StatusFlags::TRANSPORT_ERROR.is_transport_error());
    }

    #[test]
    fn flags_builders() {
        let flags = StatusFlags::default().with_tx_ds(true).with_max_rt(true);
        assert_eq!(flags.into_bits(), 0x30);
        assert!(flags.any());
        assert_eq!(StatusFlags::new().into_bits(), 0x70);
        assert_eq!(StatusFlags::from_bits(0x7F).irq_flags().into_bits(), 0x70);
        assert!(!StatusFlags::from_bits(0x0E).any());
    }
}
