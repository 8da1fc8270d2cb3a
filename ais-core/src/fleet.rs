use std::collections::BTreeMap;

use crate::{GeoExtent, Mmsi, Sentence};

/// Totals over every sentence of a pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetSummary {
    sentence_count: u64,
    type_counts: BTreeMap<u32, u64>,
    sender_counts: BTreeMap<Option<Mmsi>, u64>,
    extent: GeoExtent,
}

impl FleetSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: Sentence>(&mut self, sentence: &S) {
        self.sentence_count += 1;
        *self.type_counts.entry(sentence.type_id()).or_default() += 1;
        *self.sender_counts.entry(sentence.mmsi()).or_default() += 1;
        if let Some(location) = sentence.location() {
            self.extent.add(location);
        }
    }

    pub fn sentence_count(&self) -> u64 {
        self.sentence_count
    }

    pub fn num_senders(&self) -> usize {
        self.sender_counts.len()
    }

    pub fn type_counts(&self) -> &BTreeMap<u32, u64> {
        &self.type_counts
    }

    pub fn sender_counts(&self) -> &BTreeMap<Option<Mmsi>, u64> {
        &self.sender_counts
    }

    pub fn extent(&self) -> &GeoExtent {
        &self.extent
    }

    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Found {} senders in {} sentences.",
                self.num_senders(),
                self.sentence_count
            ),
            "   type counts:".to_string(),
        ];
        lines.extend(
            self.type_counts
                .iter()
                .map(|(t, c)| format!("                {t:2} {c:8}")),
        );
        lines.push(String::new());
        lines.extend(self.extent.report("  "));
        lines
    }
}
