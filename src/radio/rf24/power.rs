use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPower, Nrf24Error, RF24};

use super::{bit_fields::Config, constants::POWER_UP_DELAY_US, registers};

impl<SPI, DO, DELAY> EsbPower for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In power standby mode (when not receiving nor transmitting), a non-PA/LNA radio
    /// will consume about 26uA (.026mA).
    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_reg8(registers::CONFIG)?);
        if !config.pwr_up() {
            return Ok(());
        }
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?; // Guarantee CE is low on powerDown
        self.write_reg8(registers::CONFIG, config.with_pwr_up(false).into_bits())?;
        #[cfg(feature = "defmt")]
        defmt::debug!("radio powered down");
        Ok(())
    }

    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_reg8(registers::CONFIG)?);
        if config.pwr_up() {
            return Ok(());
        }
        self.write_reg8(registers::CONFIG, config.with_pwr_up(true).into_bits())?;

        // For nRF24L01+ to go from power down mode to TX or RX mode it must first pass through stand-by mode.
        // There must be a delay of Tpd2standby (see Table 16.) after the nRF24L01+ leaves power down mode before
        // the CE is set high.
        self._delay_impl.delay_us(POWER_UP_DELAY_US);
        #[cfg(feature = "defmt")]
        defmt::debug!("radio powered up");
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        Ok(Config::from_bits(self.read_reg8(registers::CONFIG)?).pwr_up())
    }
}
