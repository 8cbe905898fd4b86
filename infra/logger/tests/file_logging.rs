use vitrine_logger::{LevelFilter, Logger};

#[test]
fn init_with_path_creates_file_guard() {
    let dir = tempfile::tempdir().expect("temp dir");

    let logger = Logger::builder()
        .name("integration-file-logging")
        .console(false)
        .level(LevelFilter::DEBUG)
        .path(dir.path())
        .max_files(2)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_some(), "file logging should hand out a worker guard");

    tracing::info!("file logging smoke entry");
    drop(logger);

    let entries = std::fs::read_dir(dir.path()).expect("read log dir").count();
    assert!(entries > 0, "a rolling log file should have been created");
}

#[test]
fn missing_name_is_rejected() {
    let err = Logger::builder().init().expect_err("nameless logger must fail");
    assert!(err.to_string().contains("name"));
}
