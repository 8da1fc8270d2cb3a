#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Single pass aggregation of AIS sentence streams into fleet, sender and density reports.

mod aggregation;
mod bucketer;
mod density_map;
pub mod error;
mod extent;
mod filter;
mod fleet;
mod models;
mod report;
mod sender;
mod sentence;

pub use aggregation::*;
pub use bucketer::*;
pub use density_map::*;
pub use error::{Error, Result, SinkError};
pub use extent::*;
pub use filter::*;
pub use fleet::*;
pub use models::*;
pub use report::*;
pub use sender::*;
pub use sentence::*;
