use std::{collections::BTreeMap, io::Write, num::NonZeroUsize};

use snafu::ResultExt;
use tracing::{debug, instrument};

use crate::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DensityMap, FleetSummary, Mmsi, RenderOutcome,
    ReportSink, Sentence, SenderSummary,
    error::{Result, SinkError, error::RenderSnafu},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoOptions {
    pub width: NonZeroUsize,
    pub height: NonZeroUsize,
    pub per_sender: bool,
    pub with_map: bool,
}

/// State of a single pass over a sentence stream.
///
/// Every sentence is consumed exactly once, reports are rendered after the stream ends.
#[derive(Debug, Clone)]
pub struct Aggregation {
    fleet: FleetSummary,
    senders: Option<BTreeMap<Option<Mmsi>, SenderSummary>>,
    map: Option<DensityMap>,
}

impl Default for InfoOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            per_sender: false,
            with_map: false,
        }
    }
}

impl Aggregation {
    pub fn new(options: InfoOptions) -> Self {
        Self {
            fleet: FleetSummary::new(),
            senders: options.per_sender.then(BTreeMap::new),
            map: options
                .with_map
                .then(|| DensityMap::new(options.width, options.height)),
        }
    }

    pub fn add<S: Sentence>(&mut self, sentence: &S) {
        self.fleet.add(sentence);

        if let Some(senders) = &mut self.senders {
            let mmsi = sentence.mmsi();
            senders
                .entry(mmsi)
                .or_insert_with(|| SenderSummary::new(mmsi))
                .add(sentence);
        }

        if let (Some(map), Some(location)) = (&mut self.map, sentence.location()) {
            map.add(location);
        }
    }

    pub fn fleet(&self) -> &FleetSummary {
        &self.fleet
    }

    pub fn density_map(&self) -> Option<&DensityMap> {
        self.map.as_ref()
    }

    /// Sender summaries ordered by sender id, empty unless per sender detail was requested.
    pub fn senders(&self) -> impl Iterator<Item = &SenderSummary> {
        self.senders.iter().flat_map(|s| s.values())
    }

    /// Writes the fleet summary, the density map and the sender summaries, in that order.
    ///
    /// Stops early when the reader closes the sink, which is not considered an error.
    #[instrument(skip_all)]
    pub fn render<W: Write>(&self, writer: W) -> Result<RenderOutcome> {
        let mut sink = ReportSink::new(writer);
        match self.render_inner(&mut sink) {
            Ok(()) => Ok(RenderOutcome::Completed),
            Err(SinkError::Closed { .. }) => {
                debug!(
                    "report sink closed after {} lines, stopping",
                    sink.lines_written()
                );
                Ok(RenderOutcome::SinkClosed)
            }
            Err(e) => Err(e).context(RenderSnafu),
        }
    }

    fn render_inner<W: Write>(
        &self,
        sink: &mut ReportSink<W>,
    ) -> std::result::Result<(), SinkError> {
        sink.lines(self.fleet.report())?;
        if let Some(map) = &self.map {
            sink.lines(map.to_text())?;
        }
        for sender in self.senders() {
            sink.lines(sender.report())?;
        }
        sink.flush()
    }
}

pub fn build_fleet_report<I>(stream: I) -> String
where
    I: IntoIterator,
    I::Item: Sentence,
{
    let mut fleet = FleetSummary::new();
    for sentence in stream {
        fleet.add(&sentence);
    }
    fleet.report().join("\n")
}

/// One report per sender, ordered by sender id.
pub fn build_sender_reports<I>(stream: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Sentence,
{
    let mut aggregation = Aggregation::new(InfoOptions {
        per_sender: true,
        ..Default::default()
    });
    for sentence in stream {
        aggregation.add(&sentence);
    }
    aggregation
        .senders()
        .map(|s| s.report().join("\n"))
        .collect()
}

pub fn build_density_map<I>(stream: I, width: NonZeroUsize, height: NonZeroUsize) -> String
where
    I: IntoIterator,
    I::Item: Sentence,
{
    let mut map = DensityMap::new(width, height);
    for location in stream.into_iter().filter_map(|s| s.location()) {
        map.add(location);
    }
    map.render()
}
