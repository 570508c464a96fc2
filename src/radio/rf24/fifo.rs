use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbFifo, Nrf24Error, RF24},
    FifoState,
};

use super::{bit_fields::FifoStatus, commands, registers};

impl<SPI, DO, DELAY> EsbFifo for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(commands::FLUSH_RX)
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(commands::FLUSH_TX)
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let fifo = FifoStatus::from_bits(self.read_reg8(registers::FIFO_STATUS)?);
        let (full, empty) = if about_tx {
            (fifo.tx_full(), fifo.tx_empty())
        } else {
            (fifo.rx_full(), fifo.rx_empty())
        };
        Ok(match (full, empty) {
            (true, _) => FifoState::Full,
            (_, true) => FifoState::Empty,
            _ => FifoState::Occupied,
        })
    }
}
