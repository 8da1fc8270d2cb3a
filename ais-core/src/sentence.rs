use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// Message type carrying static and voyage related data (name, destination, ...).
pub const VOYAGE_DATA_MESSAGE_TYPE: u32 = 5;

/// A position on a flat longitude/latitude grid, `x` is longitude and `y` is latitude.
pub type Point = geo::Point<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mmsi(i32);

/// Read access to a single decoded AIS message.
///
/// Absent data is always represented as `None`, a sentence never fails to answer.
pub trait Sentence {
    fn type_id(&self) -> u32;
    fn mmsi(&self) -> Option<Mmsi>;
    fn location(&self) -> Option<Point>;
    /// Looks up a descriptive field by name, e.g. `name` or `destination`.
    fn field(&self, name: &str) -> Option<&str>;
}

impl<S: Sentence + ?Sized> Sentence for &S {
    fn type_id(&self) -> u32 {
        (**self).type_id()
    }

    fn mmsi(&self) -> Option<Mmsi> {
        (**self).mmsi()
    }

    fn location(&self) -> Option<Point> {
        (**self).location()
    }

    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

impl Mmsi {
    pub fn new(mmsi: i32) -> Self {
        Self(mmsi)
    }

    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl FromStr for Mmsi {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<Mmsi> for i32 {
    fn from(value: Mmsi) -> Self {
        value.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
