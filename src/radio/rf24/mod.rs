use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
pub(crate) mod bit_fields;
mod channel;
pub(crate) mod constants;
mod data_rate;
mod fifo;
mod init;
mod output_power;
mod pipe;
mod power;
mod radio;
mod retries;
mod status;
pub use constants::{
    commands, mnemonics, registers, MAX_CHANNEL, MAX_PAYLOAD_SIZE, PIPE_COUNT,
};

use super::RadioConfig;
use crate::{DataRate, StatusFlags};

/// A collection of error types to describe failed radio operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// There is no payload in the RX FIFO.
    RxFifoEmpty,
    /// There is no room left in the TX FIFO.
    TxFifoFull,
    /// The packet was not acknowledged after the configured number of retransmissions.
    MaxRetransmit,
    /// The given buffer cannot hold a full payload.
    BufferTooSmall,
    /// A parameter was out of the range that the radio supports.
    InvalidParameters,
    /// The radio did not behave as expected.
    ///
    /// Used when a register does not read back the value just written,
    /// when a register holds a reserved encoding,
    /// and when no radio answered during [`init()`](fn@crate::radio::prelude::EsbInit::init).
    UnknownError,
    /// A transmission did not conclude within the configured
    /// [`RadioConfig::tx_poll_limit()`].
    Timeout,
}

impl<SPI, DO> Nrf24Error<SPI, DO> {
    /// Was this error raised by the SPI bus or the CE pin (as opposed to the radio itself)?
    pub fn is_control_interface(&self) -> bool {
        matches!(self, Nrf24Error::Spi(_) | Nrf24Error::Gpo(_))
    }
}

impl<SPI: Debug, DO: Debug> Display for Nrf24Error<SPI, DO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Nrf24Error::Spi(e) => write!(f, "SPI transaction failed: {e:?}"),
            Nrf24Error::Gpo(e) => write!(f, "CE pin failed: {e:?}"),
            Nrf24Error::RxFifoEmpty => write!(f, "RX FIFO is empty"),
            Nrf24Error::TxFifoFull => write!(f, "TX FIFO is full"),
            Nrf24Error::MaxRetransmit => write!(f, "Maximum retransmissions reached"),
            Nrf24Error::BufferTooSmall => write!(f, "Buffer is too small"),
            Nrf24Error::InvalidParameters => write!(f, "Invalid parameters"),
            Nrf24Error::UnknownError => write!(f, "Unknown error"),
            Nrf24Error::Timeout => write!(f, "Transmission timed out"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "SPI transaction failed"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "CE pin failed"),
            Nrf24Error::RxFifoEmpty => defmt::write!(fmt, "RX FIFO is empty"),
            Nrf24Error::TxFifoFull => defmt::write!(fmt, "TX FIFO is full"),
            Nrf24Error::MaxRetransmit => defmt::write!(fmt, "Maximum retransmissions reached"),
            Nrf24Error::BufferTooSmall => defmt::write!(fmt, "Buffer is too small"),
            Nrf24Error::InvalidParameters => defmt::write!(fmt, "Invalid parameters"),
            Nrf24Error::UnknownError => defmt::write!(fmt, "Unknown error"),
            Nrf24Error::Timeout => defmt::write!(fmt, "Transmission timed out"),
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Additionally, there are some functions implemented that expose the radio's
/// SPI command set directly.
pub struct RF24<SPI, DO, DELAY> {
    /// The delay (in milliseconds) that [`RF24::stop_listening()`] waits for
    /// an outgoing ACK packet to complete before leaving RX mode.
    ///
    /// Defaults to 250. If the auto-ack feature is disabled, then this can be set to 0.
    ///
    pub tx_delay: u32,
    _spi: SPI,
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is strongly recommended to enter RX or TX mode using [`RF24::start_listening()`] and
    /// [`RF24::stop_listening()`] because those methods guarantee proper radio usage.
    pub ce_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _pipe0_rx_addr: Option<[u8; 5]>,
    _payload_length: u8,
    _address_width: u8,
    _data_rate: DataRate,
    _channel: u8,
    _tx_poll_limit: Option<u32>,
}

impl<SPI, DO, DELAY> RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`RF24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    /// See [`CsnDevice`](struct@crate::transport::CsnDevice) if the CSN pin
    /// is driven separately.
    ///
    /// The [`RadioConfig::default()`] values are used.
    /// Nothing is written to the radio until
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init) is called.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> RF24<SPI, DO, DELAY> {
        Self::new_with_config(ce_pin, spi, delay_impl, RadioConfig::default())
    }

    /// Same as [`RF24::new()`], but with a custom [`RadioConfig`].
    pub fn new_with_config(
        ce_pin: DO,
        spi: SPI,
        delay_impl: DELAY,
        config: RadioConfig,
    ) -> RF24<SPI, DO, DELAY> {
        RF24 {
            tx_delay: config.tx_delay(),
            ce_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _status: StatusFlags::from_bits(0),
            _buf: [0u8; 33],
            _pipe0_rx_addr: None,
            _payload_length: config.payload_size(),
            _address_width: config.address_width(),
            _data_rate: config.data_rate(),
            _channel: config.channel(),
            _tx_poll_limit: config.tx_poll_limit(),
        }
    }

    /// Give back the SPI device, the CE pin and the delay implementation.
    pub fn release(self) -> (SPI, DO, DELAY) {
        (self._spi, self.ce_pin, self._delay_impl)
    }

    /// The channel last written successfully by
    /// [`set_channel()`](fn@crate::radio::prelude::EsbChannel::set_channel).
    pub fn channel(&self) -> u8 {
        self._channel
    }

    /// The data rate last written (and verified) by
    /// [`set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn data_rate(&self) -> DataRate {
        self._data_rate
    }

    pub fn payload_size(&self) -> u8 {
        self._payload_length
    }

    pub fn address_width(&self) -> u8 {
        self._address_width
    }

    /// The STATUS byte captured during the latest SPI transaction.
    pub fn last_status(&self) -> StatusFlags {
        self._status
    }

    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Send a `command` followed by `len` zeros.
    ///
    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: usize, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if len > MAX_PAYLOAD_SIZE as usize {
            return Err(Nrf24Error::InvalidParameters);
        }
        self._buf[0] = command;
        self._buf[1..=len].fill(0);
        self.spi_transfer(len + 1)
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let buf_len = buf.len();
        if buf_len > MAX_PAYLOAD_SIZE as usize {
            return Err(Nrf24Error::InvalidParameters);
        }
        self._buf[0] = command;
        self._buf[1..=buf_len].copy_from_slice(buf);
        self.spi_transfer(buf_len + 1)
    }

    /// Read `buf.len()` bytes from the register at address `reg`.
    ///
    /// Multi-byte registers (the pipe addresses) are received least significant byte first.
    pub fn read_register(
        &mut self,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len();
        self.spi_read(len, commands::R_REGISTER | (reg & registers::ADDRESS_MASK))?;
        buf.copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    /// Write `buf` to the register at address `reg`.
    pub fn write_register(
        &mut self,
        reg: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_buf(commands::W_REGISTER | (reg & registers::ADDRESS_MASK), buf)
    }

    /// Read a single byte register.
    pub fn read_reg8(&mut self, reg: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::R_REGISTER | (reg & registers::ADDRESS_MASK))?;
        Ok(self._buf[1])
    }

    /// Write a single byte register.
    pub fn write_reg8(&mut self, reg: u8, value: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_register(reg, &[value])
    }

    /// Send a single byte `command` (like [`commands::FLUSH_RX`] or [`commands::NOP`]).
    pub fn send_command(&mut self, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(0, command)
    }

    /// Fetch `buf.len()` bytes from the top of the RX FIFO.
    ///
    /// Unlike [`RF24::read()`], this does not clear the RX_DR flag.
    pub fn read_payload(&mut self, buf: &mut [u8]) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len();
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        buf.copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    /// Put `buf` into the TX FIFO as it is (no padding).
    ///
    /// If `ack_requested` is `false`, the payload is marked to be sent without
    /// asking for an acknowledgement.
    pub fn write_payload(
        &mut self,
        buf: &[u8],
        ack_requested: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let command = if ack_requested {
            commands::W_TX_PAYLOAD
        } else {
            commands::W_TX_PAYLOAD_NO_ACK
        };
        self.spi_write_buf(command, buf)
    }
}
