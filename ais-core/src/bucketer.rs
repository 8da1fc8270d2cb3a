use std::{fmt::Display, num::NonZeroUsize};

/// Maps values of a closed range `[min_val, max_val]` onto `bucket_count` contiguous buckets.
///
/// Buckets are half-open intervals between evenly spaced edges. A zero width range is widened
/// by one unit on each side so that it still yields `bucket_count` distinct buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucketer {
    min_val: f64,
    max_val: f64,
    bucket_count: NonZeroUsize,
    edges: Vec<f64>,
}

impl Bucketer {
    pub fn new(min_val: f64, max_val: f64, bucket_count: NonZeroUsize) -> Self {
        let edges = if min_val == max_val {
            linspace(min_val - 1., max_val + 1., bucket_count.get())
        } else {
            linspace(min_val, max_val + f64::EPSILON, bucket_count.get())
        };

        Self {
            min_val,
            max_val,
            bucket_count,
            edges,
        }
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Index of the bucket containing `value`, always in `[0, bucket_count - 1]`.
    ///
    /// `max_val` can land on (or due to rounding past) the last edge, such values are clamped
    /// into the last bucket. Values below `min_val` end up in the first bucket.
    pub fn bucket(&self, value: f64) -> usize {
        let edges_below = self.edges.partition_point(|edge| *edge <= value);
        edges_below
            .saturating_sub(1)
            .min(self.bucket_count.get() - 1)
    }
}

impl Display for Bucketer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bucketer({}, {}, {}, {:?})",
            self.min_val, self.max_val, self.bucket_count, self.edges
        )
    }
}

/// `intervals + 1` evenly spaced edges from `start` to `stop`, both included.
fn linspace(start: f64, stop: f64, intervals: usize) -> Vec<f64> {
    let step = (stop - start) / intervals as f64;
    let mut edges: Vec<f64> = (0..intervals).map(|i| start + i as f64 * step).collect();
    edges.push(stop);
    edges
}
