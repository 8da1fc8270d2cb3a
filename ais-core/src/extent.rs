use std::fmt::Display;

use geo::{Rect, coord};

use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

/// Running minimum and maximum of a stream of values.
///
/// The tracked range only ever grows and `min <= max` holds once a value has been added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<T> {
    bounds: Option<MinMax<T>>,
}

/// Bounding box of a stream of points, longitude and latitude tracked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoExtent {
    pub lon: Extent<f64>,
    pub lat: Extent<f64>,
}

impl<T> Default for Extent<T> {
    fn default() -> Self {
        Self { bounds: None }
    }
}

impl<T: PartialOrd + Copy> Extent<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: T) {
        match &mut self.bounds {
            None => {
                self.bounds = Some(MinMax {
                    min: value,
                    max: value,
                })
            }
            Some(bounds) => {
                if value > bounds.max {
                    bounds.max = value;
                }
                if value < bounds.min {
                    bounds.min = value;
                }
            }
        }
    }

    pub fn valid(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn min(&self) -> Option<T> {
        self.bounds.map(|b| b.min)
    }

    pub fn max(&self) -> Option<T> {
        self.bounds.map(|b| b.max)
    }

    pub fn bounds(&self) -> Option<MinMax<T>> {
        self.bounds
    }
}

impl<T: PartialOrd + Copy> Extend<T> for Extent<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| self.add(v));
    }
}

impl<T: PartialOrd + Copy> FromIterator<T> for Extent<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut extent = Self::new();
        extent.extend(iter);
        extent
    }
}

impl GeoExtent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: Point) {
        self.lon.add(point.x());
        self.lat.add(point.y());
    }

    pub fn valid(&self) -> bool {
        self.lon.valid() && self.lat.valid()
    }

    /// Returns `None` until at least one point has been added.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match (self.lon.bounds(), self.lat.bounds()) {
            (Some(lon), Some(lat)) => Some(Rect::new(
                coord! { x: lon.min, y: lat.min },
                coord! { x: lon.max, y: lat.max },
            )),
            _ => None,
        }
    }

    /// Bounding box lines with latitude increasing upwards and longitude increasing to the right.
    pub fn report(&self, indent: &str) -> Vec<String> {
        match (self.lon.bounds(), self.lat.bounds()) {
            (Some(lon), Some(lat)) => vec![
                format!("{indent}    top left: {}, {}", lat.max, lon.min),
                format!("{indent}bottom right: {}, {}", lat.min, lon.max),
            ],
            _ => vec![format!("{indent}no positions observed")],
        }
    }
}

impl Display for GeoExtent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        write!(
            f,
            "GeoExtent(latmin={}, latmax={}, lonmin={}, lonmax={})",
            fmt(self.lat.min()),
            fmt(self.lat.max()),
            fmt(self.lon.min()),
            fmt(self.lon.max()),
        )
    }
}
