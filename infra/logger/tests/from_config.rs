use ignite_domain::config::LoggingConfig;
use ignite_logger::{Logger, LoggerError};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn from_config_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        json: true,
        directory: Some(log_dir.clone()),
        env_filter: None,
    };

    let logger = Logger::from_config("integration-json", &config)?;
    assert!(logger.guard().is_some(), "file output should hold a worker guard");

    tracing::info!(status = "COMPLETED", "startup finished");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().find(|l| l.contains("startup finished")).expect("event logged");
    assert!(line.starts_with('{'), "file output should be JSON: {line}");

    let err = Logger::from_config("integration-json-again", &LoggingConfig::default())
        .expect_err("second install should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    Ok(())
}

#[test]
fn from_config_rejects_unknown_level() {
    let config = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
    let err = Logger::from_config("integration-level", &config).expect_err("bad level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
