use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{bit_fields::RfSetup, registers};
use crate::radio::{prelude::EsbDataRate, Nrf24Error, RF24};
use crate::DataRate;

impl<SPI, DO, DELAY> EsbDataRate for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        RfSetup::from_bits(self.read_reg8(registers::RF_SETUP)?)
            .data_rate()
            .ok_or(Nrf24Error::UnknownError)
    }

    /// The cached [`RF24::data_rate()`] is only updated
    /// if the RF_SETUP register reads back the value written.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let rf_setup =
            RfSetup::from_bits(self.read_reg8(registers::RF_SETUP)?).with_data_rate(data_rate);
        self.write_reg8(registers::RF_SETUP, rf_setup.into_bits())?;
        let verified = self.read_reg8(registers::RF_SETUP)?;
        if verified != rf_setup.into_bits() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "RF_SETUP reads {=u8:#x} after writing {=u8:#x}",
                verified,
                rf_setup.into_bits()
            );
            return Err(Nrf24Error::UnknownError);
        }
        self._data_rate = data_rate;
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::prelude::EsbDataRate;
    use crate::radio::rf24::commands;
    use crate::{spi_test_expects, test::mk_radio, DataRate};

    use super::{registers, Nrf24Error};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn get_data_rate() {
        let spi_expectations = spi_test_expects![
            // get the RF_SETUP register value for each possible result
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0u8]),
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x8u8]),
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x20u8]),
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x28u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_data_rate(), Ok(DataRate::Mbps1));
        assert_eq!(radio.get_data_rate(), Ok(DataRate::Mbps2));
        assert_eq!(radio.get_data_rate(), Ok(DataRate::Kbps250));
        assert_eq!(radio.get_data_rate(), Err(Nrf24Error::UnknownError));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_data_rate() {
        let mut spi_expectations = vec![];
        // (rate, RF_SETUP value before, RF_SETUP value after)
        let cases = [
            (DataRate::Kbps250, 0x0Fu8, 0x27u8),
            (DataRate::Mbps2, 0x27u8, 0x0Fu8),
            (DataRate::Mbps1, 0x0Fu8, 0x07u8),
        ];
        for (_, before, after) in cases {
            spi_expectations.extend(spi_test_expects![
                (vec![registers::RF_SETUP, 0u8], vec![0xEu8, before]),
                (
                    vec![registers::RF_SETUP | commands::W_REGISTER, after],
                    vec![0xEu8, 0u8],
                ),
                (vec![registers::RF_SETUP, 0u8], vec![0xEu8, after]),
            ]);
        }
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        for (rate, _, _) in cases {
            radio.set_data_rate(rate).unwrap();
            assert_eq!(radio.data_rate(), rate);
        }
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_data_rate_mismatch() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x0Fu8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x27u8],
                vec![0xEu8, 0u8],
            ),
            // the radio kept the old value
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x0Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            radio.set_data_rate(DataRate::Kbps250),
            Err(Nrf24Error::UnknownError)
        );
        assert_eq!(radio.data_rate(), DataRate::Mbps1);
        spi.done();
        ce_pin.done();
    }
}
