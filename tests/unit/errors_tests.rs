/*!
 * Tests for error types and conversions
 */

use padshift::errors::{AppError, ParseError};

#[test]
fn test_parseError_malformedLine_shouldEmbedTheRawLine() {
    let error = ParseError::MalformedLine("→ DE: wer auch immer".to_string());
    let display = format!("{}", error);
    assert!(display.contains("error parsing the following line"));
    assert!(display.contains("→ DE: wer auch immer"));
}

#[test]
fn test_parseError_invalidClock_shouldDisplayCorrectly() {
    let error = ParseError::InvalidClock("noon".to_string());
    let display = format!("{}", error);
    assert!(display.contains("invalid clock time"));
    assert!(display.contains("noon"));
}

#[test]
fn test_parseError_invalidWindow_shouldDisplayCorrectly() {
    let error = ParseError::InvalidWindow("11:00 to 12:00".to_string());
    let display = format!("{}", error);
    assert!(display.contains("invalid shift window"));
    assert!(display.contains("11:00 to 12:00"));
}

#[test]
fn test_appError_fromParseError_shouldWrapCorrectly() {
    let parse_error = ParseError::MalformedLine("→ nope".to_string());
    let app_error: AppError = parse_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Parse error"));
    assert!(display.contains("→ nope"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing pad");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("missing pad"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error = anyhow::anyhow!("something odd");
    let app_error: AppError = error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("something odd"));
}
