use fhub_logger::{Logger, LoggerError};

#[test]
fn empty_name_is_rejected() {
    let err = Logger::builder().name("  ").init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn zero_max_files_is_rejected() {
    let err = Logger::builder().name("firmhub").max_files(0).init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn no_layers_is_rejected() {
    let err = Logger::builder().name("firmhub").console(false).init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn invalid_env_filter_is_rejected() {
    let err =
        Logger::builder().name("firmhub").env_filter("not a [valid] filter!!").init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
