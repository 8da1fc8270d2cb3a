use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{Mmsi, Sentence, VOYAGE_DATA_MESSAGE_TYPE};

/// Descriptive fields captured from voyage data messages.
pub const VOYAGE_FIELDS: [&str; 2] = ["name", "destination"];

/// Descriptive values keyed by field name, the first non-empty value of a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptiveFields {
    values: BTreeMap<String, String>,
}

/// Everything observed from a single sender during one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderSummary {
    mmsi: Option<Mmsi>,
    sentence_count: u64,
    type_counts: BTreeMap<u32, u64>,
    fields: DescriptiveFields,
}

impl DescriptiveFields {
    /// Stores `value` unless it is blank or the field already holds a value.
    pub fn capture(&mut self, name: &str, value: Option<&str>) {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return;
        };
        if !self.values.contains_key(name) {
            self.values.insert(name.to_string(), value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SenderSummary {
    pub fn new(mmsi: Option<Mmsi>) -> Self {
        Self {
            mmsi,
            sentence_count: 0,
            type_counts: BTreeMap::new(),
            fields: DescriptiveFields::default(),
        }
    }

    pub fn add<S: Sentence>(&mut self, sentence: &S) {
        if self.mmsi.is_none() {
            self.mmsi = sentence.mmsi();
        }
        self.sentence_count += 1;
        *self.type_counts.entry(sentence.type_id()).or_default() += 1;

        if sentence.type_id() == VOYAGE_DATA_MESSAGE_TYPE {
            for name in VOYAGE_FIELDS {
                self.fields.capture(name, sentence.field(name));
            }
        }
    }

    pub fn mmsi(&self) -> Option<Mmsi> {
        self.mmsi
    }

    pub fn sentence_count(&self) -> u64 {
        self.sentence_count
    }

    pub fn type_counts(&self) -> &BTreeMap<u32, u64> {
        &self.type_counts
    }

    pub fn fields(&self) -> &DescriptiveFields {
        &self.fields
    }

    pub fn report(&self) -> Vec<String> {
        let mmsi = self
            .mmsi
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut lines = vec![
            format!("{mmsi}:"),
            format!("    sentences: {}", self.sentence_count),
            format!(
                "        types: {}",
                self.type_counts
                    .iter()
                    .format_with(", ", |(t, c), f| f(&format_args!("{t}: {c}")))
            ),
        ];
        lines.extend(
            self.fields
                .iter()
                .map(|(name, value)| format!("  {name:>11}: {value}")),
        );
        lines
    }
}
