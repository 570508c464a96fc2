#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`RF24::new()`](fn@crate::radio::RF24::new)
//! - [`RF24::init()`](radio/struct.RF24.html#method.init)
//! - [`RF24::open_writing_pipe()`](radio/struct.RF24.html#method.open_writing_pipe)
//! - [`RF24::open_reading_pipe()`](radio/struct.RF24.html#method.open_reading_pipe)
//! - [`RF24::close_reading_pipe()`](radio/struct.RF24.html#method.close_reading_pipe)
//! - [`RF24::start_listening()`](radio/struct.RF24.html#method.start_listening)
//! - [`RF24::stop_listening()`](radio/struct.RF24.html#method.stop_listening)
//! - [`RF24::available()`](radio/struct.RF24.html#method.available)
//! - [`RF24::available_pipe()`](radio/struct.RF24.html#method.available_pipe)
//! - [`RF24::read()`](radio/struct.RF24.html#method.read)
//! - [`RF24::write()`](radio/struct.RF24.html#method.write)
//! - [`RF24::set_channel()`](radio/struct.RF24.html#method.set_channel)
//! - [`RF24::get_channel()`](radio/struct.RF24.html#method.get_channel)
//!
//! ## Advanced API
//!
//! - [`RF24::write_continuously()`](radio/struct.RF24.html#method.write_continuously)
//! - [`RF24::get_fifo_state()`](radio/struct.RF24.html#method.get_fifo_state)
//! - [`RF24::flush_rx()`](radio/struct.RF24.html#method.flush_rx)
//! - [`RF24::flush_tx()`](radio/struct.RF24.html#method.flush_tx)
//! - [`RF24::get_status()`](radio/struct.RF24.html#method.get_status)
//! - [`RF24::update()`](radio/struct.RF24.html#method.update)
//! - [`RF24::clear_status_flags()`](radio/struct.RF24.html#method.clear_status_flags)
//! - [`RF24::irq_callback()`](radio/struct.RF24.html#method.irq_callback)
//! - [`RF24::get_last_arc()`](radio/struct.RF24.html#method.get_last_arc)
//! - [`RF24::read_register()`](fn@crate::radio::RF24::read_register)
//! - [`RF24::write_register()`](fn@crate::radio::RF24::write_register)
//! - [`RF24::send_command()`](fn@crate::radio::RF24::send_command)
//!
//! ## Configuration API
//!
//! - [`RF24::new_with_config()`](fn@crate::radio::RF24::new_with_config)
//! - [`RF24::set_irq_configuration()`](radio/struct.RF24.html#method.set_irq_configuration)
//! - [`RF24::set_retries()`](radio/struct.RF24.html#method.set_retries)
//! - [`RF24::set_address_width()`](radio/struct.RF24.html#method.set_address_width)
//! - [`RF24::set_payload_size()`](radio/struct.RF24.html#method.set_payload_size)
//! - [`RF24::set_data_rate()`](radio/struct.RF24.html#method.set_data_rate)
//! - [`RF24::get_data_rate()`](radio/struct.RF24.html#method.get_data_rate)
//! - [`RF24::set_output_power()`](radio/struct.RF24.html#method.set_output_power)
//! - [`RF24::get_output_power()`](radio/struct.RF24.html#method.get_output_power)
//! - [`RF24::is_powered()`](radio/struct.RF24.html#method.is_powered)
//! - [`RF24::power_up()`](radio/struct.RF24.html#method.power_up)
//! - [`RF24::power_down()`](radio/struct.RF24.html#method.power_down)
//! - [`RF24::tx_delay`](value@crate::radio::RF24::tx_delay)
//!
#![no_std]

mod types;
pub use types::{DataRate, FifoState, OutputPower, StatusFlags};
pub mod radio;
pub mod transport;
