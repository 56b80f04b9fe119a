use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes_and_space() {
    assert_eq!(normalize_base_url(" http://localhost:8000// "), "http://localhost:8000");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}

#[test]
fn root_endpoint_formats_expected_path() {
    assert_eq!(root_endpoint("http://localhost:8000"), "http://localhost:8000/");
}

#[test]
fn hello_endpoint_formats_expected_path() {
    assert_eq!(hello_endpoint("http://api.example"), "http://api.example/api/hello");
}

#[test]
fn decode_message_reads_message_field() {
    let body = decode_message(200, r#"{"message":"ok"}"#).expect("decode");
    assert_eq!(body, MessageResponse::new("ok"));
}

#[test]
fn decode_message_rejects_non_success_status() {
    assert_eq!(decode_message(503, r#"{"message":"ok"}"#), Err(ProbeError::Status(503)));
}

#[test]
fn decode_message_rejects_malformed_body() {
    assert!(matches!(decode_message(200, "<html>"), Err(ProbeError::Decode(_))));
    assert!(matches!(decode_message(200, r#"{"status":"healthy"}"#), Err(ProbeError::Decode(_))));
}

#[test]
fn error_status_fails_root_slot_and_keeps_greeting_loading() {
    assert_eq!(
        root_status(decode_message(503, r#"{"message":"ok"}"#)),
        ConnectionStatus::Failed { reason: "HTTP 503".to_owned() }
    );
    assert_eq!(greeting_status(decode_message(503, r#"{"message":"ok"}"#)), GreetingStatus::Loading);
}

#[test]
fn malformed_body_fails_root_slot_and_keeps_greeting_loading() {
    match root_status(decode_message(200, "<html>")) {
        ConnectionStatus::Failed { reason } => assert!(reason.starts_with("invalid response body: ")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(greeting_status(decode_message(200, r#"{"status":"healthy"}"#)), GreetingStatus::Loading);
}

#[test]
fn success_body_fills_both_slots() {
    assert_eq!(
        root_status(decode_message(200, r#"{"message":"Welcome to Magna Galactica API"}"#)),
        ConnectionStatus::Connected { message: "Welcome to Magna Galactica API".to_owned() }
    );
    assert_eq!(
        greeting_status(decode_message(200, r#"{"message":"Hello, Magna Galactica!"}"#)),
        GreetingStatus::Loaded("Hello, Magna Galactica!".to_owned())
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_short_circuit_outside_the_browser() {
    use futures::executor::block_on;

    let root = block_on(probe_root(DEFAULT_API_BASE_URL.to_owned()));
    assert!(matches!(root, ConnectionStatus::Failed { .. }));
    let greeting = block_on(probe_greeting(DEFAULT_API_BASE_URL.to_owned()));
    assert_eq!(greeting, GreetingStatus::Loading);
}
