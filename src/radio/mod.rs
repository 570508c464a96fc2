//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod rf24;
pub use rf24::{
    commands, mnemonics, registers, Nrf24Error, MAX_CHANNEL, MAX_PAYLOAD_SIZE, PIPE_COUNT, RF24,
};

mod config;
pub use config::RadioConfig;
