use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, RF24},
    types::StatusFlags,
};

use super::{bit_fields::Config, commands, registers};

impl<SPI, DO, DELAY> EsbStatus for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_status(&mut self) -> StatusFlags {
        match self.send_command(commands::NOP) {
            Ok(()) => self._status,
            Err(_) => StatusFlags::TRANSPORT_ERROR,
        }
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.send_command(commands::NOP)
    }

    fn set_irq_configuration(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        let config = Config::from_bits(self.read_reg8(registers::CONFIG)?).with_irq_enabled(flags);
        self.write_reg8(registers::CONFIG, config.into_bits())
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_reg8(registers::STATUS, flags.irq_flags().into_bits())
    }

    fn irq_callback(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.update()?;
        let flags = self._status.irq_flags();
        self.clear_status_flags(flags)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("serviced IRQ: {}", flags);
        Ok(flags)
    }
}
