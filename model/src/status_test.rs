use super::*;

// =============================================================
// ConnectionStatus
// =============================================================

#[test]
fn connection_status_default_is_connecting() {
    let status = ConnectionStatus::default();
    assert_eq!(status, ConnectionStatus::Connecting);
    assert!(!status.is_settled());
}

#[test]
fn root_ok_shows_connected_with_message() {
    let status = ConnectionStatus::from_result(Ok(MessageResponse::new("ok")));
    assert_eq!(status, ConnectionStatus::Connected { message: "ok".to_owned() });
    assert!(status.is_settled());
}

#[test]
fn root_rejection_shows_reason_text() {
    let status = ConnectionStatus::from_result(Err(ProbeError::Request("Failed to fetch".to_owned())));
    assert_eq!(status, ConnectionStatus::Failed { reason: "Failed to fetch".to_owned() });
    assert!(status.is_settled());
}

#[test]
fn root_http_error_shows_status_code() {
    let status = ConnectionStatus::from_result(Err(ProbeError::Status(503)));
    assert_eq!(status, ConnectionStatus::Failed { reason: "HTTP 503".to_owned() });
}

#[test]
fn root_decode_error_is_prefixed() {
    let status = ConnectionStatus::from_result(Err(ProbeError::Decode("missing field `message`".to_owned())));
    assert_eq!(
        status,
        ConnectionStatus::Failed { reason: "invalid response body: missing field `message`".to_owned() }
    );
}

// =============================================================
// GreetingStatus
// =============================================================

#[test]
fn greeting_default_is_loading() {
    assert_eq!(GreetingStatus::default(), GreetingStatus::Loading);
}

#[test]
fn greeting_ok_shows_message() {
    let status = GreetingStatus::from_result(Ok(MessageResponse::new("Hello, Magna Galactica!")));
    assert_eq!(status, GreetingStatus::Loaded("Hello, Magna Galactica!".to_owned()));
}

#[test]
fn greeting_failure_stays_loading() {
    assert_eq!(GreetingStatus::from_result(Err(ProbeError::Status(500))), GreetingStatus::Loading);
    assert_eq!(
        GreetingStatus::from_result(Err(ProbeError::Request("offline".to_owned()))),
        GreetingStatus::Loading
    );
}

#[test]
fn unreachable_hint_names_base_url() {
    assert_eq!(
        unreachable_hint("http://localhost:8000"),
        "Make sure the API server is running at http://localhost:8000"
    );
}
