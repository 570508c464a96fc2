use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{bit_fields::RfSetup, registers};
use crate::radio::{prelude::EsbOutputPower, Nrf24Error, RF24};
use crate::OutputPower;

impl<SPI, DO, DELAY> EsbOutputPower for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type OutputPowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_output_power(&mut self) -> Result<OutputPower, Self::OutputPowerErrorType> {
        Ok(RfSetup::from_bits(self.read_reg8(registers::RF_SETUP)?).output_power())
    }

    fn set_output_power(&mut self, power: OutputPower) -> Result<(), Self::OutputPowerErrorType> {
        let rf_setup =
            RfSetup::from_bits(self.read_reg8(registers::RF_SETUP)?).with_output_power(power);
        self.write_reg8(registers::RF_SETUP, rf_setup.into_bits())?;
        if self.read_reg8(registers::RF_SETUP)? != rf_setup.into_bits() {
            #[cfg(feature = "defmt")]
            defmt::warn!("RF_SETUP did not accept output power {}", power);
            return Err(Nrf24Error::UnknownError);
        }
        Ok(())
    }
}
