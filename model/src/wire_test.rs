use super::*;

#[test]
fn greeting_uses_given_name() {
    assert_eq!(greeting(Some(PROBE_HELLO_NAME)), "Hello, Magna Galactica!");
}

#[test]
fn greeting_defaults_to_world() {
    assert_eq!(greeting(None), "Hello, World!");
}

#[test]
fn greeting_keeps_empty_name() {
    assert_eq!(greeting(Some("")), "Hello, !");
}

#[test]
fn message_response_serializes_single_field() {
    let json = serde_json::to_value(MessageResponse::new("ok")).expect("serialize");
    assert_eq!(json, serde_json::json!({ "message": "ok" }));
}

#[test]
fn message_response_ignores_extra_fields() {
    let parsed: MessageResponse =
        serde_json::from_str(r#"{"message":"hi","extra":1}"#).expect("parse");
    assert_eq!(parsed.message, "hi");
}

#[test]
fn message_response_requires_message() {
    assert!(serde_json::from_str::<MessageResponse>(r#"{"status":"healthy"}"#).is_err());
}

#[test]
fn health_response_shape() {
    let json = serde_json::to_value(HealthResponse { status: HEALTHY.to_owned() }).expect("serialize");
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[test]
fn hello_params_name_is_optional() {
    let params: HelloParams = serde_json::from_str("{}").expect("parse");
    assert_eq!(params.name, None);
}
