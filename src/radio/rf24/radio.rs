use super::{
    bit_fields::{Config, Feature, FifoStatus, SetupRetry},
    commands, registers, Nrf24Error, MAX_PAYLOAD_SIZE, RF24,
};
use crate::{
    radio::prelude::{EsbFifo, EsbPipe, EsbRadio, EsbStatus},
    StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Put `buf` into the TX FIFO, padded with zeros to the static payload size.
    fn write_padded(
        &mut self,
        buf: &[u8],
        ack_requested: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = self._payload_length as usize;
        if buf.len() > len {
            return Err(Nrf24Error::InvalidParameters);
        }
        let mut payload = [0u8; MAX_PAYLOAD_SIZE as usize];
        payload[..buf.len()].copy_from_slice(buf);
        self.write_payload(&payload[..len], ack_requested)
    }

    /// Poll STATUS until the radio reports TX_DS or MAX_RT.
    fn wait_for_tx_outcome(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let mut polls = 0u32;
        loop {
            self.update()?;
            if self._status.tx_ds() || self._status.max_rt() {
                return Ok(());
            }
            polls += 1;
            if self._tx_poll_limit.is_some_and(|limit| polls >= limit) {
                #[cfg(feature = "defmt")]
                defmt::warn!("no TX outcome after {} polls", polls);
                return Err(Nrf24Error::Timeout);
            }
        }
    }
}

impl<SPI, DO, DELAY> EsbRadio for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        let config = Config::from_bits(self.read_reg8(registers::CONFIG)?).with_prim_rx(true);
        self.write_reg8(registers::CONFIG, config.into_bits())?;
        self.clear_status_flags(StatusFlags::new())?;

        // Restore the pipe0 address, if exists
        if let Some(addr) = self._pipe0_rx_addr.filter(|addr| addr[0] != 0) {
            let width = self._address_width as usize;
            self.write_register(registers::RX_ADDR_P0, &addr[..width])?;
        } else {
            self.close_reading_pipe(0)?;
        }

        self.flush_rx()?;
        if Feature::from_bits(self.read_reg8(registers::FEATURE)?).en_ack_pay() {
            self.flush_tx()?;
        }
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("listening on channel {}", self._channel);
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        // let a pending ACK packet go out
        self._delay_impl.delay_ms(self.tx_delay);
        self.flush_rx()?;
        if Feature::from_bits(self.read_reg8(registers::FEATURE)?).en_ack_pay() {
            self._delay_impl.delay_ms(self.tx_delay);
            self.flush_tx()?;
        }

        let config = Config::from_bits(self.read_reg8(registers::CONFIG)?).with_prim_rx(false);
        self.write_reg8(registers::CONFIG, config.into_bits())?;

        // pipe 0 receives the auto-ACK packets
        let out = self.read_reg8(registers::EN_RXADDR)? | 1;
        self.write_reg8(registers::EN_RXADDR, out)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("stopped listening");
        Ok(())
    }

    fn available(&mut self) -> Result<(), Self::RadioErrorType> {
        if FifoStatus::from_bits(self.read_reg8(registers::FIFO_STATUS)?).rx_empty() {
            return Err(Nrf24Error::RxFifoEmpty);
        }
        Ok(())
    }

    fn available_pipe(&mut self) -> Result<u8, Self::RadioErrorType> {
        self.available()?;
        self.update()?;
        self._status.pipe().ok_or(Nrf24Error::RxFifoEmpty)
    }

    /// See [`EsbRadio::read()`] for implementation-agnostic detail.
    ///
    /// Exactly [`RF24::payload_size()`] bytes are fetched, so the payload is removed
    /// from the RX FIFO. Bytes in `buf` past the payload size are left untouched.
    fn read(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType> {
        let len = self._payload_length;
        if buf.len() < len as usize {
            return Err(Nrf24Error::BufferTooSmall);
        }
        self.read_payload(&mut buf[..len as usize])?;
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        Ok(len)
    }

    /// See [`EsbRadio::write()`] for implementation-agnostic detail.
    ///
    /// The STATUS register is polled until the radio reports TX_DS or MAX_RT.
    /// If [`RadioConfig::tx_poll_limit()`](fn@crate::radio::RadioConfig::tx_poll_limit)
    /// is set and exhausted first, the TX FIFO is flushed and
    /// [`Nrf24Error::Timeout`] is returned. CE is deasserted on every outcome,
    /// including a failed poll.
    fn write(&mut self, buf: &[u8], ack_requested: bool) -> Result<(), Self::RadioErrorType> {
        self.update()?;
        if self._status.tx_full() {
            return Err(Nrf24Error::TxFifoFull);
        }
        self.write_padded(buf, ack_requested)?;

        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        // CE must be active for at least 10 microseconds to start a transmission
        self._delay_impl.delay_us(10);

        let outcome = self.wait_for_tx_outcome();
        // CE goes low even when polling failed
        let released = self.ce_pin.set_low().map_err(Nrf24Error::Gpo);
        if let Err(e) = outcome.and(released) {
            if matches!(e, Nrf24Error::Timeout) {
                self.flush_tx()?;
            }
            return Err(e);
        }

        if self._status.max_rt() {
            self.clear_status_flags(StatusFlags::default().with_max_rt(true))?;
            // only 1 payload is in the TX FIFO when using this method
            self.flush_tx()?;
            #[cfg(feature = "defmt")]
            defmt::debug!("no ACK received");
            return Err(Nrf24Error::MaxRetransmit);
        }
        self.clear_status_flags(StatusFlags::default().with_tx_ds(true))
    }

    fn write_continuously(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        self.update()?;
        if self._status.tx_full() {
            return Err(Nrf24Error::TxFifoFull);
        }
        if buf.len() > self._payload_length as usize {
            return Err(Nrf24Error::InvalidParameters);
        }
        // a reused payload is never acknowledged
        let setup_retr = SetupRetry::from_bits(self.read_reg8(registers::SETUP_RETR)?).with_arc(0);
        self.write_reg8(registers::SETUP_RETR, setup_retr.into_bits())?;
        self.write_padded(buf, false)?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self.send_command(commands::REUSE_TX_PL)
    }
}
