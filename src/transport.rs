//! The transport adapter between the radio driver and a platform's SPI peripheral.
//!
//! [`RF24`](struct@crate::radio::RF24) talks to the radio through an
//! [`SpiDevice`], which owns chip-select handling. Many HALs already provide one.
//! When a platform only exposes a raw [`SpiBus`] and a GPIO for the radio's CSN pin,
//! wrap them in a [`CsnDevice`].
//!
//! Timeouts of the underlying byte exchange are the [`SpiBus`] implementation's
//! concern; they surface here as [`TransportError::Bus`].

use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::{Error, ErrorKind, ErrorType, Operation, SpiBus, SpiDevice},
};

/// Errors raised while exchanging bytes with the radio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransportError<BUS, CS> {
    /// The SPI bus failed (or timed out) during the exchange.
    Bus(BUS),
    /// The CSN pin could not be driven.
    ChipSelect(CS),
}

impl<BUS, CS> Error for TransportError<BUS, CS>
where
    BUS: Error,
    CS: Debug,
{
    fn kind(&self) -> ErrorKind {
        match self {
            TransportError::Bus(e) => e.kind(),
            TransportError::ChipSelect(_) => ErrorKind::ChipSelectFault,
        }
    }
}

impl<BUS: Debug, CS: Debug> Display for TransportError<BUS, CS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TransportError::Bus(e) => write!(f, "SPI bus error: {e:?}"),
            TransportError::ChipSelect(e) => write!(f, "CSN pin error: {e:?}"),
        }
    }
}

/// An [`SpiDevice`] made of an exclusively owned [`SpiBus`] and the radio's CSN pin.
///
/// CSN is driven low before the first operation of a transaction and driven high
/// again on every exit path, including bus errors.
pub struct CsnDevice<BUS, CSN, DELAY> {
    bus: BUS,
    csn: CSN,
    delay: DELAY,
}

impl<BUS, CSN, DELAY> CsnDevice<BUS, CSN, DELAY>
where
    BUS: SpiBus,
    CSN: OutputPin,
    DELAY: DelayNs,
{
    /// Take ownership of the `bus` and the `csn` pin.
    ///
    /// The radio is deselected (CSN high) before this returns.
    pub fn new(bus: BUS, mut csn: CSN, delay: DELAY) -> Result<Self, CSN::Error> {
        csn.set_high()?;
        Ok(Self { bus, csn, delay })
    }

    /// Give back the bus, the CSN pin and the delay provider.
    pub fn release(self) -> (BUS, CSN, DELAY) {
        (self.bus, self.csn, self.delay)
    }
}

impl<BUS, CSN, DELAY> ErrorType for CsnDevice<BUS, CSN, DELAY>
where
    BUS: SpiBus,
    CSN: OutputPin,
{
    type Error = TransportError<BUS::Error, CSN::Error>;
}

impl<BUS, CSN, DELAY> SpiDevice for CsnDevice<BUS, CSN, DELAY>
where
    BUS: SpiBus,
    CSN: OutputPin,
    DELAY: DelayNs,
{
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.csn.set_low().map_err(TransportError::ChipSelect)?;

        let exchanged = operations.iter_mut().try_for_each(|op| match op {
            Operation::Read(buf) => self.bus.read(buf),
            Operation::Write(buf) => self.bus.write(buf),
            Operation::Transfer(read, write) => self.bus.transfer(read, write),
            Operation::TransferInPlace(buf) => self.bus.transfer_in_place(buf),
            Operation::DelayNs(ns) => {
                self.bus.flush()?;
                self.delay.delay_ns(*ns);
                Ok(())
            }
        });
        // the bus must be idle before the radio is deselected
        let flushed = exchanged.and_then(|_| self.bus.flush());
        let deselected = self.csn.set_high();

        flushed.map_err(TransportError::Bus)?;
        deselected.map_err(TransportError::ChipSelect)
    }
}
