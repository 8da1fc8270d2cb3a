use std::num::NonZeroUsize;

use ais_core::{AisPosition, AisStatic, Mmsi, RenderOutcome};
use ais_info::{
    settings::{Environment, FilterSettings, LogLevel, Settings},
    startup::App,
};
use chrono::{DateTime, TimeZone, Utc};

pub struct TestHelper {
    pub ais_source: AisSource,
    pub settings: Settings,
}

#[derive(Default)]
pub struct AisSource {
    out: String,
}

impl TestHelper {
    pub fn new() -> TestHelper {
        TestHelper {
            ais_source: AisSource::default(),
            settings: Settings {
                environment: Environment::Test,
                log_level: LogLevel::Debug,
                sources: vec![],
                max_line_length: 1000,
                width: NonZeroUsize::new(10).unwrap(),
                height: NonZeroUsize::new(5).unwrap(),
                per_sender: false,
                with_map: false,
                filter: FilterSettings::default(),
            },
        }
    }

    /// Runs a pass over everything sent so far and returns the report.
    pub async fn run(self) -> String {
        let mut out = Vec::new();
        let outcome = self.run_with(&mut out).await;
        assert_eq!(outcome, RenderOutcome::Completed);
        String::from_utf8(out).unwrap()
    }

    pub async fn run_with(self, out: impl std::io::Write) -> RenderOutcome {
        self.try_run_with(out).await.unwrap()
    }

    pub async fn try_run_with(self, out: impl std::io::Write) -> ais_info::Result<RenderOutcome> {
        let app = App::build(&self.settings).unwrap();
        app.run_with(self.ais_source.out.as_bytes(), out).await
    }
}

impl AisSource {
    pub fn send_position(&mut self, position: &AisPosition) {
        let string = serde_json::to_string(position).unwrap();
        self.send_string(&string)
    }

    pub fn send_static(&mut self, static_message: &AisStatic) {
        let string = serde_json::to_string(static_message).unwrap();
        self.send_string(&string)
    }

    pub fn send_string(&mut self, val: &str) {
        self.out.push_str(val);
        self.out.push('\n');
    }
}

pub fn msgtime() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub fn position(mmsi: i32, lon: f64, lat: f64) -> AisPosition {
    AisPosition::new(Mmsi::new(mmsi), msgtime(), lon, lat)
}

pub fn voyage(mmsi: i32, name: &str, destination: &str) -> AisStatic {
    AisStatic::new(
        Mmsi::new(mmsi),
        msgtime(),
        Some(name.to_string()),
        Some(destination.to_string()),
    )
}
