//! Loading record files from disk and querying them.

use std::io::Write;

use clap::Parser;
use recsieve_cli::input::MockLines;
use recsieve_cli::{load_records, run, Cli, OutputMode, Session, Settings, SourceError};
use tempfile::NamedTempFile;

const VESSELS_JS: &str = r#"var vessels = [
  { "name": "Aurora",  "type": "Tanker", "length": 300, "flag": "NO" },
  { "name": "Brisk",   "type": "Cargo",  "length": 150, "flag": null },
  { "name": "Calypso", "type": "cargo",  "length": "unknown" },
  { "name": "Dorado",  "type": "Tug",    "length": 32.5, "flag": "PA" }
];
"#;

fn record_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_wrapped_file_in_source_order() {
    let file = record_file(VESSELS_JS);
    let records = load_records(file.path()).unwrap();

    assert_eq!(records.len(), 4);
    let names: Vec<&str> = records.iter().filter_map(|r| r["name"].as_str()).collect();
    assert_eq!(names, ["Aurora", "Brisk", "Calypso", "Dorado"]);

    let keys: Vec<&String> = records[0].keys().collect();
    assert_eq!(keys, ["name", "type", "length", "flag"]);
}

#[test]
fn loads_plain_json_file() {
    let file = record_file(r#"[{"a": 1}]"#);
    assert_eq!(load_records(file.path()).unwrap().len(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn run_reports_the_file_it_could_not_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let cli = Cli::try_parse_from([
        "recsieve",
        path.to_str().unwrap(),
        "--query",
        "WHERE a=1",
    ])
    .unwrap();

    let err = run(cli).unwrap_err();
    assert!(err.to_string().starts_with("failed to load records from"));
}

#[test]
fn query_file_end_to_end() {
    let file = record_file(VESSELS_JS);
    let session = Session::new(load_records(file.path()).unwrap(), Settings::default());

    let mut out = Vec::new();
    let matched = session
        .execute("WHERE type = 'CARGO' AND length < 200", &mut out)
        .unwrap();

    assert_eq!(matched, 1);
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "{\n  \"name\": \"Brisk\",\n  \"type\": \"Cargo\",\n  \"length\": 150,\n  \"flag\": null\n}\n"
    );
}

#[test]
fn csv_output_from_file() {
    let file = record_file(VESSELS_JS);
    let settings = Settings {
        mode: OutputMode::Csv,
        ..Settings::default()
    };
    let session = Session::new(load_records(file.path()).unwrap(), settings);

    let mut out = Vec::new();
    session.execute("WHERE flag = no", &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "name,type,length,flag\nAurora,Tanker,300,NO\n"
    );
}

#[test]
fn prompt_loop_over_file() {
    let file = record_file(VESSELS_JS);
    let session = Session::new(load_records(file.path()).unwrap(), Settings::default());
    let mut input = MockLines::piped(["WHERE length > 100", "WHERE length = 32.5", "quit"]);
    let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());

    assert_eq!(session.records().len(), 4);
    let summary = session.prompt_loop(&mut input, &mut out, &mut err).unwrap();

    assert_eq!(summary.executed, 2);
    assert!(err.is_empty());
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Total records loaded: 4\n"));
    assert!(out.contains("Matched Records: 2"));
    assert!(out.contains("\"name\": \"Dorado\""));
}
