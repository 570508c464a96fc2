use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbRetries, Nrf24Error, RF24};

use super::{
    bit_fields::{ObserveTx, SetupRetry},
    registers,
};

impl<SPI, DO, DELAY> EsbRetries for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RetriesErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::RetriesErrorType> {
        if delay > 15 || count > 15 {
            return Err(Nrf24Error::InvalidParameters);
        }
        let setup_retr = SetupRetry::new().with_ard(delay).with_arc(count);
        self.write_reg8(registers::SETUP_RETR, setup_retr.into_bits())
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::RetriesErrorType> {
        Ok(ObserveTx::from_bits(self.read_reg8(registers::OBSERVE_TX)?).arc_cnt())
    }
}
