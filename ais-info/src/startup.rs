use std::{io::Write, path::PathBuf};

use ais_core::{Aggregation, InfoOptions, Mmsi, RenderOutcome, SentenceFilter};
use snafu::ResultExt;
use tokio::io::AsyncRead;
use tracing::{info, instrument, warn};

use crate::{
    error::{
        Result,
        error::{OpenSourceSnafu, ParseMmsiSnafu, ReadMmsiFileSnafu, ReportSnafu},
    },
    settings::{FilterSettings, Settings},
    source::SentenceSource,
};

pub struct App {
    options: InfoOptions,
    filter: SentenceFilter,
    sources: Vec<PathBuf>,
    max_line_length: usize,
}

impl App {
    pub fn build(settings: &Settings) -> Result<App> {
        Ok(App {
            options: settings.info_options(),
            filter: build_filter(&settings.filter)?,
            sources: settings.sources.clone(),
            max_line_length: settings.max_line_length,
        })
    }

    /// Consumes every configured source (or stdin) and writes the report to stdout.
    pub async fn run(self) -> Result<RenderOutcome> {
        let mut aggregation = Aggregation::new(self.options);

        if self.sources.is_empty() {
            self.consume(tokio::io::stdin(), "stdin", &mut aggregation)
                .await;
        } else {
            for path in &self.sources {
                let file = tokio::fs::File::open(path)
                    .await
                    .context(OpenSourceSnafu { path })?;
                self.consume(file, &path.to_string_lossy(), &mut aggregation)
                    .await;
            }
        }

        let outcome = aggregation
            .render(std::io::stdout().lock())
            .context(ReportSnafu)?;
        if outcome == RenderOutcome::SinkClosed {
            info!("stdout was closed, report truncated");
        }
        Ok(outcome)
    }

    /// Runs a single pass over `source` and writes the report to `out`.
    pub async fn run_with(
        self,
        source: impl AsyncRead + Unpin,
        out: impl Write,
    ) -> Result<RenderOutcome> {
        let mut aggregation = Aggregation::new(self.options);
        self.consume(source, "input", &mut aggregation).await;
        aggregation.render(out).context(ReportSnafu)
    }

    #[instrument(skip(self, source, aggregation), fields(app.num_lines, app.num_skipped, app.num_filtered))]
    async fn consume(
        &self,
        source: impl AsyncRead + Unpin,
        name: &str,
        aggregation: &mut Aggregation,
    ) {
        let mut source = SentenceSource::new(source, self.max_line_length);
        let mut num_filtered: u64 = 0;

        while let Some(sentence) = source.next().await {
            if self.filter.matches(&sentence) {
                aggregation.add(&sentence);
            } else {
                num_filtered += 1;
            }
        }

        if source.num_skipped() > 0 {
            warn!(
                "skipped {} of {} lines from {name}",
                source.num_skipped(),
                source.num_lines()
            );
        }

        let span = tracing::Span::current();
        span.record("app.num_lines", source.num_lines());
        span.record("app.num_skipped", source.num_skipped());
        span.record("app.num_filtered", num_filtered);
    }
}

fn build_filter(settings: &FilterSettings) -> Result<SentenceFilter> {
    let mut filter = SentenceFilter::new().with_mmsis(settings.mmsis.iter().copied());

    if let Some(path) = &settings.mmsi_file {
        let contents = std::fs::read_to_string(path).context(ReadMmsiFileSnafu { path })?;
        let mmsis = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.parse::<Mmsi>().context(ParseMmsiSnafu { value: l }))
            .collect::<Result<Vec<_>>>()?;
        filter = filter.with_mmsis(mmsis);
    }
    if let Some(type_id) = settings.type_id {
        filter = filter.with_type_id(type_id);
    }
    if let Some(range) = settings.longitude {
        filter = filter.with_longitude(range);
    }
    if let Some(range) = settings.latitude {
        filter = filter.with_latitude(range);
    }

    Ok(filter)
}
