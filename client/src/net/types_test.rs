use super::*;

#[test]
fn fatal_error_frame_carries_its_message() {
    let frame = Frame::new(FATAL_ERROR_KIND, serde_json::json!("disk full"));
    assert_eq!(
        ServerMessage::from_frame(&frame),
        ServerMessage::FatalError("disk full".to_owned())
    );
}

#[test]
fn fatal_error_with_non_string_payload_keeps_raw_json_text() {
    let frame = Frame::new(FATAL_ERROR_KIND, serde_json::json!({"code": 7}));
    let ServerMessage::FatalError(message) = ServerMessage::from_frame(&frame) else {
        panic!("expected fatal error");
    };
    assert_eq!(message, r#"{"code":7}"#);
}

#[test]
fn successful_convert_file_parses_output_path() {
    let frame = Frame::new(
        CONVERT_FILE_KIND,
        serde_json::json!({"success": true, "output_path": "/tmp/out.mp4"}),
    );
    assert_eq!(
        ServerMessage::from_frame(&frame),
        ServerMessage::ConvertFile(ConvertFileResult {
            success: true,
            output_path: Some("/tmp/out.mp4".to_owned()),
            error: None,
        })
    );
}

#[test]
fn failed_convert_file_parses_error_text() {
    let frame = Frame::new(
        CONVERT_FILE_KIND,
        serde_json::json!({"success": false, "error": "unsupported codec"}),
    );
    let ServerMessage::ConvertFile(result) = ServerMessage::from_frame(&frame) else {
        panic!("expected convert result");
    };
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("unsupported codec"));
    assert!(result.output_path.is_none());
}

#[test]
fn malformed_convert_file_payload_falls_through_to_value() {
    let frame = Frame::new(CONVERT_FILE_KIND, serde_json::json!("done"));
    assert_eq!(
        ServerMessage::from_frame(&frame),
        ServerMessage::Value {
            kind: CONVERT_FILE_KIND.to_owned(),
            payload: serde_json::json!("done"),
        }
    );
}

#[test]
fn other_kinds_pass_through_unchanged() {
    let frame = Frame::new("voices", serde_json::json!(["fem 1", "male 2"]));
    assert_eq!(
        ServerMessage::from_frame(&frame),
        ServerMessage::Value {
            kind: "voices".to_owned(),
            payload: serde_json::json!(["fem 1", "male 2"]),
        }
    );
}
