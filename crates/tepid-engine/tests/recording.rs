//! Integration test: solver output through the real sinks.

use std::fs;

use tepid_engine::{Solver, SolverConfig};
use tepid_frames::{
    compare_recording, CsvSnapshotWriter, FrameHeader, FrameReader, FrameWriter, CSV_HEADER,
};
use tepid_test_utils::fixtures::five_by_five;
use tepid_test_utils::MemorySink;

fn config() -> SolverConfig {
    SolverConfig::for_plate(five_by_five())
        .with_tolerance(1e-2)
        .with_max_iterations(1000)
        .with_snapshot_interval(10)
}

#[test]
fn binary_recording_replays_bit_exact() {
    let mut buf = Vec::new();
    let mut writer = FrameWriter::new(&mut buf, FrameHeader::new(5, 5, 4.0)).unwrap();
    let report = Solver::new(config()).unwrap().run(&mut writer);
    let frames = writer.frames_written();
    drop(writer);
    assert_eq!(frames, report.metrics.snapshots_written);

    let mut replay = MemorySink::new();
    Solver::new(config()).unwrap().run(&mut replay);

    let reader = FrameReader::open(buf.as_slice()).unwrap();
    assert_eq!(reader.header().shape(), (5, 5));
    assert_eq!(compare_recording(reader, &replay.snapshots).unwrap(), None);
}

#[test]
fn recording_detects_changed_configuration() {
    let mut buf = Vec::new();
    let mut writer = FrameWriter::new(&mut buf, FrameHeader::new(5, 5, 4.0)).unwrap();
    Solver::new(config()).unwrap().run(&mut writer);
    drop(writer);

    let mut other = config();
    other.plate.initial_guess = 49.0;
    let mut replay = MemorySink::new();
    Solver::new(other).unwrap().run(&mut replay);

    let reader = FrameReader::open(buf.as_slice()).unwrap();
    let report = compare_recording(reader, &replay.snapshots).unwrap().unwrap();
    assert_eq!(report.index, 0);
}

#[test]
fn wrong_header_shape_counts_failures() {
    let mut writer = FrameWriter::new(Vec::new(), FrameHeader::new(5, 3, 4.0)).unwrap();
    let report = Solver::new(config()).unwrap().run(&mut writer);
    assert_eq!(report.metrics.snapshots_written, 0);
    assert!(report.metrics.snapshot_failures >= 2);
    assert!(report.converged());
}

#[test]
fn csv_series_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = CsvSnapshotWriter::new(dir.path(), "full_structured", 4.0).unwrap();
    let report = Solver::new(config()).unwrap().run(&mut sink);

    let first = dir.path().join("full_structured_000000.csv");
    let text = fs::read_to_string(first).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(text.lines().count(), 1 + 25);

    let last = sink.path_for(report.iterations);
    assert_eq!(fs::read(&last).unwrap(), fs::read(sink.final_path()).unwrap());
    assert_eq!(
        sink.files_written(),
        report.metrics.snapshots_written + 1
    );
    // centre cell of the final table
    let centre = fs::read_to_string(sink.final_path())
        .unwrap()
        .lines()
        .find(|l| l.starts_with("2,2,0,"))
        .map(str::to_owned)
        .unwrap();
    assert_eq!(centre, "2,2,0,2,2,100");
}
