use std::fs;
use std::sync::{Arc, Mutex};

use record_miner::error::MinerError;
use record_miner::ingestion::{
    load_from_path, LoadContext, LoadObserver, LoadOptions, LoadStats,
};
use record_miner::store::Store;

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.events
            .lock()
            .unwrap()
            .push(format!("ok:{:?}:{}", ctx.format, stats.records));
    }

    fn on_failure(&self, ctx: &LoadContext, _error: &MinerError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("err:{:?}", ctx.format));
    }
}

#[test]
fn detects_csv_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "id,name\n1,Ada\n").unwrap();

    let mut store = Store::new();
    let appended = load_from_path(&mut store, &path, &LoadOptions::default()).unwrap();

    assert_eq!(appended, 1);
    assert_eq!(store.all()[0].category, "csv");
}

#[test]
fn detects_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"[{"timestamp": "2024-03-13T10:15:00Z", "data": {"v": 1}, "source": "s", "category": "csv"}]"#,
    )
    .unwrap();

    let mut store = Store::new();
    let total = load_from_path(&mut store, &path, &LoadOptions::default()).unwrap();

    assert_eq!(total, 1);
}

#[test]
fn unknown_extension_is_an_error() {
    let mut store = Store::new();
    let err = load_from_path(&mut store, "data.parquet", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, MinerError::UnknownFormat { .. }));
}

#[test]
fn format_override_beats_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    fs::write(&path, "id,name\n1,Ada\n").unwrap();

    let options = LoadOptions {
        format: Some(record_miner::ingestion::LoadFormat::Csv),
        observer: None,
    };

    let mut store = Store::new();
    let appended = load_from_path(&mut store, &path, &options).unwrap();
    assert_eq!(appended, 1);
}

#[test]
fn observer_sees_successes_and_failures() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("data.csv");
    fs::write(&good, "id\n1\n2\n").unwrap();
    let bad = dir.path().join("empty.csv");
    fs::write(&bad, "id\n").unwrap();

    let observer = Arc::new(RecordingObserver::default());
    let options = LoadOptions {
        format: None,
        observer: Some(observer.clone() as Arc<dyn LoadObserver>),
    };

    let mut store = Store::new();
    load_from_path(&mut store, &good, &options).unwrap();
    load_from_path(&mut store, &bad, &options).unwrap_err();

    let events = observer.events.lock().unwrap();
    assert_eq!(events.as_slice(), ["ok:Csv:2", "err:Csv"]);
}
