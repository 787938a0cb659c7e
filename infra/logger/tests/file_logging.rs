use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use whub_logger::{LevelFilter, Logger};

#[test]
fn file_logging_creates_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("integration-file-logging")
        .console(None)
        .path(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .init()?;

    assert!(logger.has_file_output());
    tracing::info!(letters = "eilrst", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().next().expect("log file should not be empty");
    let parsed: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(parsed["fields"]["letters"], "eilrst");

    Ok(())
}
