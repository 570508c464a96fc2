use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{EsbChannel, EsbDataRate, EsbFifo, EsbInit, EsbPower, EsbRetries},
    Nrf24Error, RF24,
};

use super::{
    bit_fields::{Config, Feature},
    constants::POWER_UP_DELAY_US,
    registers,
};

impl<SPI, DO, DELAY> EsbInit for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type InitErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`RF24::new()`] (or [`RF24::new_with_config()`]).
    fn init(&mut self) -> Result<(), Self::InitErrorType> {
        // configuration bits may not stick until the radio has settled after a reset
        self._delay_impl.delay_us(POWER_UP_DELAY_US);

        // 16 bit CRC, enable all IRQ, and power down as TX
        self.write_reg8(registers::CONFIG, Config::RESET_VALUE)?;
        self.write_reg8(registers::SETUP_AW, self._address_width - 2)?;
        self.set_retries(5, 15)?;

        // a radio that does not answer is reported once the sequence is complete
        let data_rate_accepted = match self.set_data_rate(self._data_rate) {
            Err(Nrf24Error::UnknownError) => false,
            result => {
                result?;
                true
            }
        };
        let rf_setup = self.read_reg8(registers::RF_SETUP)?;

        // allow W_TX_PAYLOAD_NOACK, used by write() when no ACK is requested
        self.write_reg8(
            registers::FEATURE,
            Feature::new().with_en_dyn_ack(true).into_bits(),
        )?;
        self.write_reg8(registers::DYNPD, 0)?;
        self.set_channel(self._channel)?;
        self.flush_rx()?;
        self.flush_tx()?;
        self.power_up()?;

        let config = Config::from_bits(self.read_reg8(registers::CONFIG)?).with_prim_rx(false);
        self.write_reg8(registers::CONFIG, config.into_bits())?;

        if rf_setup == 0 || rf_setup == 0xFF || !data_rate_accepted {
            #[cfg(feature = "defmt")]
            defmt::warn!("no radio answered (RF_SETUP = {=u8:#x})", rf_setup);
            return Err(Nrf24Error::UnknownError);
        }
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "radio initialized on channel {} at {}",
            self._channel,
            self._data_rate
        );
        Ok(())
    }
}
