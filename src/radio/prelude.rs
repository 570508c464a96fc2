//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24::radio::prelude::*;
//! ```

use crate::types::{DataRate, FifoState, OutputPower, StatusFlags};

/// A trait to represent the power-on configuration sequence
/// of an ESB capable transceiver.
pub trait EsbInit {
    type InitErrorType;

    /// Bring the radio into a known state.
    ///
    /// The radio is left powered up in TX mode (CE inactive) with the
    /// cached address width, data rate and channel applied,
    /// auto-retransmit set to 15 retries at 1500 microsecond intervals,
    /// and both FIFOs empty.
    ///
    /// If the radio did not answer on the SPI bus (the RF_SETUP register
    /// read back as 0x00 or 0xFF), then the sequence still runs to the end
    /// but an error is returned.
    fn init(&mut self) -> Result<(), Self::InitErrorType>;
}

/// A trait to represent manipulation of the power state
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power up the radio.
    ///
    /// This blocks for 5 milliseconds to let the crystal oscillator settle,
    /// unless the radio was already powered up (then nothing is written).
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power down the radio. The CE pin is made inactive first.
    ///
    /// Does nothing if the radio is already powered down.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// The default channel is 76 (2400 + 76 = 2.476 GHz).
    /// Values above 125 are treated as 125.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of the data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Set the radio's data rate.
    ///
    /// The register is read back after it is written.
    /// If the radio did not accept the new value, an error is returned.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;

    /// Get the radio's configured data rate.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of the transmitter's output power
/// for an ESB capable transceiver.
pub trait EsbOutputPower {
    type OutputPowerErrorType;

    /// Set the transmitter's output power.
    ///
    /// Like [`EsbDataRate::set_data_rate()`], the register is verified after writing.
    fn set_output_power(&mut self, power: OutputPower) -> Result<(), Self::OutputPowerErrorType>;

    /// Get the transmitter's configured output power.
    fn get_output_power(&mut self) -> Result<OutputPower, Self::OutputPowerErrorType>;
}

/// A trait to represent manipulation of the automatic retransmission
/// for an ESB capable transceiver.
pub trait EsbRetries {
    type RetriesErrorType;

    /// Configure the automatic retransmission of unacknowledged packets.
    ///
    /// - `delay` is in steps of 250 microseconds: the wait is `(delay + 1) * 250` microseconds.
    /// - `count` is the number of retransmissions. 0 disables them.
    ///
    /// Both parameters must be in range [0, 15].
    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::RetriesErrorType>;

    /// Get the number of retransmissions spent on the last transmitted packet.
    fn get_last_arc(&mut self) -> Result<u8, Self::RetriesErrorType>;
}

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the address that packets are transmitted to.
    ///
    /// The same address is written to pipe 0 for receiving the
    /// automatic acknowledgements. The `address` must be at least as long as
    /// the configured address width; extra bytes are ignored.
    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Open a specified `pipe` for receiving data when radio is in RX mode.
    ///
    /// The `pipe` must be in range [0, 5].
    ///
    /// ### About pipe addresses
    /// Pipes 0 and 1 store a full address. Pipes 2-5 only store a single byte
    /// (the first byte of `address`), borrowing the remaining bytes from pipe 1.
    ///
    /// ```ignore
    /// let a = ["Prime", "2Node", "3xxxx", "4xxxx"];
    /// radio.open_reading_pipe(0, a[0].as_bytes()).unwrap(); // address used is "Prime"
    /// radio.open_reading_pipe(1, a[1].as_bytes()).unwrap(); // address used is "2Node"
    /// radio.open_reading_pipe(2, a[2].as_bytes()).unwrap(); // address used is "3Node"
    /// radio.open_reading_pipe(3, a[3].as_bytes()).unwrap(); // address used is "4Node"
    /// ```
    ///
    /// <div class="warning">
    ///
    /// Pipe 0 is shared with [`EsbPipe::open_writing_pipe()`].
    /// The address given here for pipe 0 is remembered and restored
    /// at every call to [`EsbRadio::start_listening()`].
    ///
    /// </div>
    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Close a specified pipe from receiving data when radio is in RX mode.
    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;

    /// Set the static payload size (applies to all pipes).
    ///
    /// The `size` must be in range [1, 32].
    fn set_payload_size(&mut self, size: u8) -> Result<(), Self::PipeErrorType>;

    /// Set the address width (applies to all pipes).
    ///
    /// The `width` must be in range [3, 5].
    fn set_address_width(&mut self, width: u8) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Fetch the STATUS register.
    ///
    /// If the SPI transaction fails, [`StatusFlags::TRANSPORT_ERROR`] is returned.
    fn get_status(&mut self) -> StatusFlags;

    /// Refresh the internal cache of status byte
    /// (which is also saved from every SPI transaction).
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Configure which status flags trigger the radio's IRQ pin.
    ///
    /// Set any member of [`StatusFlags`] to `false` to have the
    /// IRQ pin ignore the corresponding event.
    /// By default, all events are enabled and will trigger the IRQ pin.
    fn set_irq_configuration(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// interrupt event. Members set to `false` are left untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Service the radio's IRQ pin.
    ///
    /// Clears every asserted interrupt flag and returns the flags that were asserted.
    /// An event latched again after the clear is left for the next call.
    fn irq_callback(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;
}

/// A trait to represent the half-duplex RX/TX operation
/// of an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Put the radio into active RX mode.
    ///
    /// The address cached by [`EsbPipe::open_reading_pipe()`] for pipe 0
    /// is restored. If none was given (or its first byte is 0), pipe 0 is closed.
    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put the radio into TX mode (with CE inactive).
    ///
    /// Pipe 0 is opened for receiving the automatic acknowledgements.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Ensure there is a payload in the RX FIFO.
    ///
    /// An error is returned when the RX FIFO is empty.
    fn available(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Like [`EsbRadio::available()`], but also returns the pipe number
    /// that received the payload at the top of the RX FIFO.
    ///
    /// <div class="warning">
    ///
    /// According to the nRF24L01 datasheet, the pipe number is
    /// "unreliable" during a FALLING transition on the IRQ pin.
    ///
    /// </div>
    fn available_pipe(&mut self) -> Result<u8, Self::RadioErrorType>;

    /// Fetch the payload at the top of the RX FIFO into `buf`.
    ///
    /// The `buf` must be able to hold the configured payload size.
    /// Returns the number of bytes stored in `buf`.
    fn read(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType>;

    /// Transmit a single payload and block until the transmission concludes.
    ///
    /// Payloads shorter than the configured payload size are padded with zeros.
    /// Set `ack_requested` to `false` to send the payload without asking
    /// the receiver for an acknowledgement.
    fn write(&mut self, buf: &[u8], ack_requested: bool) -> Result<(), Self::RadioErrorType>;

    /// Transmit the same payload repeatedly, without waiting for acknowledgements.
    ///
    /// Automatic retransmission is disabled by this function and is not restored.
    /// The radio keeps transmitting until the CE pin is made inactive
    /// (see [`EsbRadio::stop_listening()`] or [`EsbPower::power_down()`]).
    fn write_continuously(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;
}
