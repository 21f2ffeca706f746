use super::*;

fn sample_frame() -> Frame {
    Frame::new(
        "convert_file",
        serde_json::json!({
            "success": true,
            "output_path": "/tmp/out.mp4",
            "tags": ["a", "b"],
            "nested": {"k": "v"},
            "nil": null
        }),
    )
}

#[test]
fn encode_request_is_the_bare_kind() {
    assert_eq!(encode_request("voices"), "voices");
    assert!(!encode_request("voices").contains(':'));
}

#[test]
fn encode_frame_joins_kind_and_json_with_one_colon() {
    let frame = Frame::new("quality", serde_json::json!("High (1.5s)"));
    assert_eq!(encode_frame(&frame), "quality:\"High (1.5s)\"");
}

#[test]
fn encode_decode_round_trip_preserves_frame() {
    let frame = sample_frame();
    let text = encode_frame(&frame);
    let decoded = decode_frame(&text).expect("decode should succeed");
    assert_eq!(decoded, frame);
}

#[test]
fn decode_splits_on_first_colon_only() {
    let decoded = decode_frame(r#"fatal_error:"disk full: /dev/sda1""#).expect("decode");
    assert_eq!(decoded.kind, "fatal_error");
    assert_eq!(decoded.payload, serde_json::json!("disk full: /dev/sda1"));
}

#[test]
fn payload_colons_survive_round_trip() {
    let frame = Frame::new(
        "convert_file",
        serde_json::json!({"output_path": "C:\\out\\clip.mp4", "error": "codec: unsupported"}),
    );
    let decoded = decode_frame(&encode_frame(&frame)).expect("decode");
    assert_eq!(decoded, frame);
}

#[test]
fn decode_rejects_text_without_separator() {
    let err = decode_frame("voices").expect_err("text should fail");
    assert!(matches!(err, CodecError::MissingSeparator));
}

#[test]
fn decode_rejects_malformed_payload_json() {
    let err = decode_frame("voices:not json").expect_err("payload should fail");
    assert!(matches!(err, CodecError::Payload(_)));
}

#[test]
fn decode_rejects_empty_payload_section() {
    let err = decode_frame("progress:").expect_err("payload should fail");
    assert!(matches!(err, CodecError::Payload(_)));
}

#[test]
fn empty_kind_is_preserved() {
    let decoded = decode_frame(":true").expect("decode");
    assert_eq!(decoded.kind, "");
    assert_eq!(decoded.payload, serde_json::json!(true));
}

#[test]
fn scalar_and_array_payloads_round_trip() {
    for payload in [
        serde_json::json!(null),
        serde_json::json!(12.5),
        serde_json::json!(["fem 1", "male 3"]),
    ] {
        let frame = Frame::new("value", payload);
        assert_eq!(decode_frame(&encode_frame(&frame)).expect("decode"), frame);
    }
}
