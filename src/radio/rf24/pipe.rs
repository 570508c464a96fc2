use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPipe, Nrf24Error, RF24};

use super::{registers, MAX_PAYLOAD_SIZE, PIPE_COUNT};

impl<SPI, DO, DELAY> EsbPipe for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let width = self._address_width as usize;
        if address.len() < width {
            return Err(Nrf24Error::InvalidParameters);
        }
        self.write_register(registers::RX_ADDR_P0, &address[..width])?;
        self.write_register(registers::TX_ADDR, &address[..width])?;
        self.write_reg8(registers::RX_PW_P0, self._payload_length)
    }

    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        if pipe >= PIPE_COUNT {
            return Err(Nrf24Error::InvalidParameters);
        }

        if pipe < 2 {
            let width = self._address_width as usize;
            if address.len() < width {
                return Err(Nrf24Error::InvalidParameters);
            }

            // If this is pipe 0, cache the address.  This is needed because
            // open_writing_pipe() will overwrite the pipe 0 address, so
            // start_listening() will have to restore it.
            if pipe == 0 {
                let mut cached_addr = [0u8; 5];
                cached_addr[..width].copy_from_slice(&address[..width]);
                self._pipe0_rx_addr = Some(cached_addr);
            }
            self.write_register(registers::RX_ADDR_P0 + pipe, &address[..width])?;
        }
        // For pipes 2-5, only write the LSB
        else {
            let lsb = *address.first().ok_or(Nrf24Error::InvalidParameters)?;
            self.write_reg8(registers::RX_ADDR_P0 + pipe, lsb)?;
        }
        self.write_reg8(registers::RX_PW_P0 + pipe, self._payload_length)?;

        let out = self.read_reg8(registers::EN_RXADDR)? | (1 << pipe);
        self.write_reg8(registers::EN_RXADDR, out)
    }

    /// The address cached for pipe 0 (if any) is kept, so
    /// [`RF24::start_listening()`] will still restore it.
    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe >= PIPE_COUNT {
            return Err(Nrf24Error::InvalidParameters);
        }
        let out = self.read_reg8(registers::EN_RXADDR)? & !(1 << pipe);
        self.write_reg8(registers::EN_RXADDR, out)
    }

    fn set_payload_size(&mut self, size: u8) -> Result<(), Self::PipeErrorType> {
        if !(1..=MAX_PAYLOAD_SIZE).contains(&size) {
            return Err(Nrf24Error::InvalidParameters);
        }
        for pipe in 0..PIPE_COUNT {
            self.write_reg8(registers::RX_PW_P0 + pipe, size)?;
        }
        self._payload_length = size;
        Ok(())
    }

    fn set_address_width(&mut self, width: u8) -> Result<(), Self::PipeErrorType> {
        if !(3..=5).contains(&width) {
            return Err(Nrf24Error::InvalidParameters);
        }
        self.write_reg8(registers::SETUP_AW, width - 2)?;
        self._address_width = width;
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbPipe, Nrf24Error};
    use crate::radio::rf24::commands;
    use crate::radio::RadioConfig;
    use crate::{
        spi_test_expects,
        test::{mk_radio, mk_radio_with_config},
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn open_writing_pipe() {
        let mut rx_addr = vec![registers::RX_ADDR_P0 | commands::W_REGISTER];
        rx_addr.extend_from_slice(b"1Node");
        let mut tx_addr = vec![registers::TX_ADDR | commands::W_REGISTER];
        tx_addr.extend_from_slice(b"1Node");
        let spi_expectations = spi_test_expects![
            (rx_addr, vec![0xEu8; 6]),
            (tx_addr, vec![0xEu8; 6]),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 32u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // extra bytes are ignored
        radio.open_writing_pipe(b"1Node!").unwrap();
        assert_eq!(
            radio.open_writing_pipe(b"1No"),
            Err(Nrf24Error::InvalidParameters)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn open_reading_pipe() {
        let config = RadioConfig::default()
            .with_address_width(3)
            .with_payload_size(8);
        let spi_expectations = spi_test_expects![
            // pipe 0 takes the full address
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, 0x55u8, 0x66, 0x77],
                vec![0xEu8, 0, 0, 0],
            ),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 8u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 2u8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            // pipe 5 takes only the first byte
            (
                vec![registers::RX_ADDR_P5 | commands::W_REGISTER, 0xC6u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_PW_P5 | commands::W_REGISTER, 8u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 3u8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 0x23u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio_with_config(&[], &spi_expectations, config);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.open_reading_pipe(0, &[0x55, 0x66, 0x77]).unwrap();
        assert_eq!(radio._pipe0_rx_addr, Some([0x55, 0x66, 0x77, 0, 0]));
        radio.open_reading_pipe(5, &[0xC6, 0xC2, 0xC2]).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn open_reading_pipe_invalid() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            radio.open_reading_pipe(6, b"1Node"),
            Err(Nrf24Error::InvalidParameters)
        );
        assert_eq!(
            radio.open_reading_pipe(1, b"1No"),
            Err(Nrf24Error::InvalidParameters)
        );
        assert_eq!(
            radio.open_reading_pipe(2, &[]),
            Err(Nrf24Error::InvalidParameters)
        );
        assert_eq!(radio.close_reading_pipe(6), Err(Nrf24Error::InvalidParameters));
        // nothing was cached for pipe 0
        assert_eq!(radio._pipe0_rx_addr, None);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn close_reading_pipe() {
        let spi_expectations = spi_test_expects![
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 0x3Fu8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 0x3Bu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.close_reading_pipe(2).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn set_payload_size() {
        let mut spi_expectations = vec![];
        for pipe in 0..6u8 {
            spi_expectations.extend(spi_test_expects![(
                vec![(registers::RX_PW_P0 + pipe) | commands::W_REGISTER, 16u8],
                vec![0xEu8, 0u8],
            ),]);
        }
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.set_payload_size(0), Err(Nrf24Error::InvalidParameters));
        assert_eq!(radio.set_payload_size(33), Err(Nrf24Error::InvalidParameters));
        assert_eq!(radio.payload_size(), 32);
        radio.set_payload_size(16).unwrap();
        assert_eq!(radio.payload_size(), 16);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn set_address_width() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, 1u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.set_address_width(2), Err(Nrf24Error::InvalidParameters));
        assert_eq!(radio.set_address_width(6), Err(Nrf24Error::InvalidParameters));
        radio.set_address_width(3).unwrap();
        assert_eq!(radio.address_width(), 3);
        spi.done();
        ce_pin.done();
    }
}
