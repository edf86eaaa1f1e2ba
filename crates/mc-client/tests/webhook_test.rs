use mc_client::webhook::WEBHOOK_SIGNATURE_HEADER;
use mc_client::{MoncreneauClient, compute_webhook_signature, verify_webhook_json};
use serde_json::json;

#[test]
fn test_verify_signature_from_sender() {
  let _client = MoncreneauClient::with_api_key("mk_test_abc123").unwrap();

  let payload = r#"{"test":"data"}"#;
  let signature = compute_webhook_signature(payload, "secret").unwrap();

  assert!(MoncreneauClient::verify_webhook_signature(payload, &signature, "secret"));
}

#[test]
fn test_delivery_with_header() {
  let body = r#"{"event":"appointment.created","data":{"id":"apt_1","status":"SCHEDULED"}}"#;
  let headers = vec![(WEBHOOK_SIGNATURE_HEADER, compute_webhook_signature(body, "whsec").unwrap())];

  let signature = headers
    .iter()
    .find(|(name, _)| name.eq_ignore_ascii_case("x-webhook-signature"))
    .map(|(_, value)| value.as_str())
    .unwrap();

  assert!(MoncreneauClient::verify_webhook_signature(body, signature, "whsec"));
  assert!(!MoncreneauClient::verify_webhook_signature(body, signature, "other"));
}

#[test]
fn test_verify_json_value() {
  let payload = json!({ "event": "appointment.cancelled", "id": "apt_2" });
  let signature =
    compute_webhook_signature(r#"{"event":"appointment.cancelled","id":"apt_2"}"#, "whsec").unwrap();

  assert!(verify_webhook_json(&payload, &signature, "whsec").unwrap());
}
