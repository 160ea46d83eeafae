// Kept in its own test binary: installing the global subscriber twice in one
// process would panic.

#[test]
fn initializes_file_and_console_logging() {
    let log_dir = std::env::temp_dir().join(format!("studybuddy-logs-{}", std::process::id()));

    let result = studybuddy::shared::logging::init_service_logging(
        log_dir.to_str().unwrap(),
        "studybuddy_test",
    );

    assert!(result.is_ok());
    assert!(log_dir.is_dir());

    let _ = std::fs::remove_dir_all(&log_dir);
}
