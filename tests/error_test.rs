//! Tests for error types

use std::path::PathBuf;

use loss_graph::Error;

#[test]
fn test_not_found_error() {
    let error = Error::NotFound {
        path: PathBuf::from("/tmp/missing.jsonl"),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("log file"));
    assert!(error_str.contains("/tmp/missing.jsonl"));
    assert!(error_str.contains("does not exist"));
}

#[test]
fn test_invalid_input_error() {
    let error = Error::InvalidInput("log file must be provided".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("invalid input"));
    assert!(error_str.contains("log file must be provided"));
}

#[test]
fn test_parse_error() {
    let error = Error::Parse {
        line: 17,
        message: "expected value".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("malformed log line 17"));
    assert!(error_str.contains("expected value"));
}

#[test]
fn test_empty_data_error() {
    let error = Error::EmptyData;
    let error_str = format!("{error}");
    assert!(error_str.contains("loss data is empty"));
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::TypeMismatch {
        record: 3,
        value: "\"4.5\"".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("record 3"));
    assert!(error_str.contains("not a float"));
    assert!(error_str.contains("\"4.5\""));
}

#[test]
fn test_upload_error() {
    let error = Error::Upload("failed to upload to s3: access denied".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("upload failed"));
    assert!(error_str.contains("access denied"));
}

#[test]
fn test_render_error() {
    let error = Error::Render("backend draw failed".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("render error"));
    assert!(error_str.contains("backend draw failed"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_error_debug() {
    let error = Error::EmptyData;
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("EmptyData"));
}

#[test]
fn test_result_type_alias() {
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> loss_graph::Result<i32> {
        Ok(42)
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> loss_graph::Result<i32> {
        Err(Error::EmptyData)
    }

    let result = returns_error();
    assert!(result.is_err());
}
