use super::rf24::{MAX_CHANNEL, MAX_PAYLOAD_SIZE};
use crate::DataRate;

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
///
/// Values given to the `with_*()` methods are clamped to the range the radio supports.
/// The configuration is applied to the radio by
/// [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioConfig {
    payload_size: u8,
    address_width: u8,
    data_rate: DataRate,
    channel: u8,
    tx_delay: u32,
    tx_poll_limit: Option<u32>,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::payload_size()`] | `32` |
    /// | [`RadioConfig::address_width()`] | `5` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::tx_delay()`] | `250` |
    /// | [`RadioConfig::tx_poll_limit()`] | `None` |
    fn default() -> Self {
        Self {
            payload_size: MAX_PAYLOAD_SIZE,
            address_width: 5,
            data_rate: DataRate::Mbps1,
            channel: 76,
            tx_delay: 250,
            tx_poll_limit: None,
        }
    }
}

impl RadioConfig {
    /// The static payload size used on all pipes.
    pub const fn payload_size(&self) -> u8 {
        self.payload_size
    }

    /// Set the static payload size. Clamped to the range [1, 32].
    pub fn with_payload_size(self, size: u8) -> Self {
        Self {
            payload_size: size.clamp(1, MAX_PAYLOAD_SIZE),
            ..self
        }
    }

    /// The address width (in bytes) used on all pipes.
    pub const fn address_width(&self) -> u8 {
        self.address_width
    }

    /// Set the address width. Clamped to the range [3, 5].
    pub fn with_address_width(self, width: u8) -> Self {
        Self {
            address_width: width.clamp(3, 5),
            ..self
        }
    }

    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// The RF channel. The frequency is `2400 + channel` MHz.
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the RF channel. Values above 125 are treated as 125.
    pub fn with_channel(self, channel: u8) -> Self {
        Self {
            channel: channel.min(MAX_CHANNEL),
            ..self
        }
    }

    /// The time (in milliseconds) that
    /// [`EsbRadio::stop_listening()`](fn@crate::radio::prelude::EsbRadio::stop_listening)
    /// waits for a pending ACK packet to go out.
    pub const fn tx_delay(&self) -> u32 {
        self.tx_delay
    }

    pub fn with_tx_delay(self, tx_delay: u32) -> Self {
        Self { tx_delay, ..self }
    }

    /// The number of STATUS polls
    /// [`EsbRadio::write()`](fn@crate::radio::prelude::EsbRadio::write)
    /// performs before giving up on a transmission.
    ///
    /// `None` polls until the radio reports either outcome.
    pub const fn tx_poll_limit(&self) -> Option<u32> {
        self.tx_poll_limit
    }

    pub fn with_tx_poll_limit(self, limit: Option<u32>) -> Self {
        Self {
            tx_poll_limit: limit,
            ..self
        }
    }
}
