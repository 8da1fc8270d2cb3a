use std::{io, io::Write};

use ais_core::{Mmsi, OpenRange, RenderOutcome, SinkError};
use ais_info::Error;

use crate::helper::{TestHelper, position, voyage};

#[tokio::test]
async fn test_fleet_report_counts_senders_types_and_bounds() {
    let mut helper = TestHelper::new();
    helper.ais_source.send_position(&position(1, 10., 20.));
    helper.ais_source.send_position(&position(1, 10.5, 20.5));
    helper.ais_source.send_static(&voyage(2, "X", "Y"));

    let report = helper.run().await;

    assert_eq!(
        report,
        concat!(
            "Found 2 senders in 3 sentences.\n",
            "   type counts:\n",
            "                 1        2\n",
            "                 5        1\n",
            "\n",
            "      top left: 20.5, 10\n",
            "  bottom right: 20, 10.5\n",
        )
    );
}

#[tokio::test]
async fn test_empty_input_renders_blank_map() {
    let mut helper = TestHelper::new();
    helper.settings.with_map = true;

    let report = helper.run().await;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Found 0 senders in 0 sentences.");
    assert_eq!(lines[3], "  no positions observed");
    assert_eq!(lines[4], "+----------+");
    assert!(lines[5..10].iter().all(|l| *l == "|          |"));
    assert_eq!(lines[10], "+----------+");
    assert_eq!(lines.len(), 11);
}

#[tokio::test]
async fn test_sender_reports_follow_map_sorted_by_mmsi() {
    let mut helper = TestHelper::new();
    helper.settings.per_sender = true;
    helper.settings.with_map = true;
    helper.ais_source.send_static(&voyage(300, "LAST", "TROMSO"));
    helper.ais_source.send_position(&position(100, 5., 60.));
    helper.ais_source.send_static(&voyage(100, "FIRST", "BERGEN"));
    helper.ais_source.send_static(&voyage(100, "RENAMED", "OSLO"));

    let report = helper.run().await;
    let map_end = report.rfind('+').unwrap();
    let senders = &report[map_end + 2..];

    assert_eq!(
        senders,
        concat!(
            "100:\n",
            "    sentences: 3\n",
            "        types: 1: 1, 5: 2\n",
            "  destination: BERGEN\n",
            "         name: FIRST\n",
            "300:\n",
            "    sentences: 1\n",
            "        types: 5: 1\n",
            "  destination: TROMSO\n",
            "         name: LAST\n",
        )
    );
}

#[tokio::test]
async fn test_identical_positions_render_one_full_intensity_cell() {
    let mut helper = TestHelper::new();
    helper.settings.with_map = true;
    for mmsi in 1..=3 {
        helper.ais_source.send_position(&position(mmsi, 18.9, 69.6));
    }

    let report = helper.run().await;
    let map: Vec<&str> = report.lines().skip_while(|l| !l.starts_with('+')).collect();

    assert_eq!(map.len(), 7);
    assert_eq!(map.iter().map(|l| l.matches('9').count()).sum::<usize>(), 1);
    assert!(
        map[1..6]
            .iter()
            .all(|l| l.chars().filter(char::is_ascii_digit).all(|c| c == '9'))
    );
}

#[tokio::test]
async fn test_malformed_lines_are_skipped() {
    let mut helper = TestHelper::new();
    helper.ais_source.send_string("{ this is not json");
    helper.ais_source.send_string(r#"{"messageType":8,"mmsi":1,"msgtime":"2023-01-01T00:00:00Z"}"#);
    helper.ais_source.send_position(&position(1, 1., 1.));

    let report = helper.run().await;

    assert!(report.starts_with("Found 1 senders in 1 sentences.\n"));
}

#[tokio::test]
async fn test_filter_limits_the_pass() {
    let mut helper = TestHelper::new();
    helper.settings.filter.mmsis = vec![Mmsi::new(1), Mmsi::new(2)];
    helper.settings.filter.longitude = Some(OpenRange::new(0., 10.));
    helper.ais_source.send_position(&position(1, 5., 60.));
    helper.ais_source.send_position(&position(2, 15., 60.));
    helper.ais_source.send_position(&position(3, 5., 60.));
    helper.ais_source.send_static(&voyage(1, "A", "B"));

    let report = helper.run().await;

    assert!(report.starts_with("Found 1 senders in 1 sentences.\n"));
}

#[tokio::test]
async fn test_mmsi_file_extends_the_filter() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2\n\n  3  ").unwrap();

    let mut helper = TestHelper::new();
    helper.settings.filter.mmsi_file = Some(file.path().to_path_buf());
    helper.settings.filter.type_id = Some(1);
    for mmsi in 1..=4 {
        helper.ais_source.send_position(&position(mmsi, 5., 60.));
    }
    helper.ais_source.send_static(&voyage(2, "A", "B"));

    let report = helper.run().await;

    assert!(report.starts_with("Found 2 senders in 2 sentences.\n"));
}

#[test]
fn test_invalid_mmsi_file_fails_to_build() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "LK45").unwrap();

    let mut helper = TestHelper::new();
    helper.settings.filter.mmsi_file = Some(file.path().to_path_buf());

    assert!(ais_info::startup::App::build(&helper.settings).is_err());
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_closed_output_ends_successfully() {
    let mut helper = TestHelper::new();
    helper.settings.per_sender = true;
    helper.ais_source.send_position(&position(1, 5., 60.));

    let outcome = helper.run_with(ClosedPipe).await;

    assert_eq!(outcome, RenderOutcome::SinkClosed);
}

struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::StorageFull.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_failing_output_is_a_report_error() {
    let mut helper = TestHelper::new();
    helper.ais_source.send_position(&position(1, 5., 60.));

    let err = helper.try_run_with(FullDisk).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Report {
            source: ais_core::Error::Render {
                source: SinkError::Write { .. },
                ..
            },
            ..
        }
    ));
}
