use std::collections::HashSet;

use serde::Deserialize;

use crate::{Mmsi, Sentence};

/// Exclusive coordinate interval, `min < value < max`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OpenRange {
    pub min: f64,
    pub max: f64,
}

/// Selects the sentences that take part in a pass.
///
/// Every configured criterion has to hold, an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct SentenceFilter {
    mmsis: HashSet<Mmsi>,
    type_id: Option<u32>,
    longitude: Option<OpenRange>,
    latitude: Option<OpenRange>,
}

impl OpenRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min < value && value < self.max
    }
}

impl SentenceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mmsis(mut self, mmsis: impl IntoIterator<Item = Mmsi>) -> Self {
        self.mmsis.extend(mmsis);
        self
    }

    pub fn with_type_id(mut self, type_id: u32) -> Self {
        self.type_id = Some(type_id);
        self
    }

    pub fn with_longitude(mut self, range: OpenRange) -> Self {
        self.longitude = Some(range);
        self
    }

    pub fn with_latitude(mut self, range: OpenRange) -> Self {
        self.latitude = Some(range);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mmsis.is_empty()
            && self.type_id.is_none()
            && self.longitude.is_none()
            && self.latitude.is_none()
    }

    pub fn matches<S: Sentence>(&self, sentence: &S) -> bool {
        if !self.mmsis.is_empty() && !sentence.mmsi().is_some_and(|m| self.mmsis.contains(&m)) {
            return false;
        }
        if self.type_id.is_some_and(|t| t != sentence.type_id()) {
            return false;
        }

        let location = sentence.location();
        if let Some(range) = &self.longitude {
            if !location.is_some_and(|p| range.contains(p.x())) {
                return false;
            }
        }
        if let Some(range) = &self.latitude {
            if !location.is_some_and(|p| range.contains(p.y())) {
                return false;
            }
        }

        true
    }
}
