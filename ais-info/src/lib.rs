#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Reads AIS messages from files or stdin and prints fleet, sender and density reports.

pub mod error;
pub mod settings;
pub mod source;
pub mod startup;
pub mod telemetry;

pub use error::{Error, Result};
