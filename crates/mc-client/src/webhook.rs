//! Webhook signature verification
//!
//! Moncreneau signs every webhook delivery with HMAC-SHA256 over the raw
//! request body, keyed with the endpoint's webhook secret, and sends the
//! lowercase hex digest in the `X-Webhook-Signature` header.
//!
//! ```rust
//! use mc_client::webhook::{compute_webhook_signature, verify_webhook_signature};
//!
//! let body = r#"{"test":"data"}"#;
//! let signature = compute_webhook_signature(body, "secret").unwrap();
//! assert!(verify_webhook_signature(body, &signature, "secret"));
//! ```

use hmac::{Hmac, Mac};
use mc_core::{Error, Result};
use serde::Serialize;
use sha2::Sha256;
use tracing::debug;

pub use mc_core::WEBHOOK_SIGNATURE_HEADER;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex HMAC-SHA256 of `payload` keyed with `secret`
///
/// # Errors
///
/// Returns `Error::Config` if the MAC cannot be keyed with `secret`.
pub fn compute_webhook_signature(payload: &str, secret: &str) -> Result<String> {
  let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
    .map_err(|e| Error::Config(format!("Failed to create HMAC: {}", e)))?;
  mac.update(payload.as_bytes());
  Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check `signature` against the raw webhook body
///
/// `payload` must be the body exactly as received. The comparison is a
/// case-sensitive match against the lowercase hex digest.
pub fn verify_webhook_signature(payload: &str, signature: &str, secret: &str) -> bool {
  match compute_webhook_signature(payload, secret) {
    Ok(computed) => {
      let valid = computed == signature;
      if !valid {
        debug!("Webhook signature mismatch");
      }
      valid
    }
    Err(e) => {
      debug!("Webhook signature could not be computed: {}", e);
      false
    }
  }
}

/// Serialize `payload` to JSON and check `signature` against it
///
/// Serialization is plain `serde_json::to_string`: no key sorting or
/// whitespace normalization is applied, so the result only verifies when it
/// matches the sender's bytes. Prefer [`verify_webhook_signature`] with the
/// raw body whenever it is available.
///
/// # Errors
///
/// Returns `Error::Serde` when `payload` cannot be serialized.
pub fn verify_webhook_json<T>(payload: &T, signature: &str, secret: &str) -> Result<bool>
where
  T: Serialize + ?Sized,
{
  let body = serde_json::to_string(payload)?;
  Ok(verify_webhook_signature(&body, signature, secret))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  // HMAC-SHA256("secret", r#"{"test":"data"}"#)
  const TEST_SIGNATURE: &str = "3dc45d495160ff5b5469aa9506c0a5e598e0eddbcd493cbebe8674124983c0f9";

  #[test]
  fn test_known_payload_verifies() {
    let body = r#"{"test":"data"}"#;

    assert_eq!(compute_webhook_signature(body, "secret").unwrap(), TEST_SIGNATURE);
    assert!(verify_webhook_signature(body, TEST_SIGNATURE, "secret"));
  }

  #[test]
  fn test_signature_is_lowercase_hex() {
    let signature = compute_webhook_signature("payload", "secret").unwrap();

    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
  }

  #[test]
  fn test_rfc4231_vector() {
    // RFC 4231 test case 2
    let signature = compute_webhook_signature("what do ya want for nothing?", "Jefe").unwrap();
    assert_eq!(signature, "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843");
  }

  #[test]
  fn test_every_single_character_mutation_is_rejected() {
    let body = r#"{"event":"appointment.created","data":{"id":"apt_1"}}"#;
    let signature = compute_webhook_signature(body, "whsec_test").unwrap();

    for (i, c) in signature.char_indices() {
      let replacement = if c == '0' { '1' } else { '0' };
      let mut mutated = signature.clone();
      mutated.replace_range(i..i + 1, &replacement.to_string());
      assert!(!verify_webhook_signature(body, &mutated, "whsec_test"), "mutation at {}", i);
    }
  }

  #[test]
  fn test_uppercase_signature_is_rejected() {
    let body = "body";
    let signature = compute_webhook_signature(body, "secret").unwrap();

    assert!(!verify_webhook_signature(body, &signature.to_uppercase(), "secret"));
  }

  #[test]
  fn test_wrong_secret_or_payload_is_rejected() {
    let body = r#"{"test":"data"}"#;
    let signature = compute_webhook_signature(body, "secret").unwrap();

    assert!(!verify_webhook_signature(body, &signature, "other"));
    assert!(!verify_webhook_signature(r#"{"test": "data"}"#, &signature, "secret"));
    assert!(!verify_webhook_signature(body, "", "secret"));
    assert!(!verify_webhook_signature(r#"{"test":"data"}"#, TEST_SIGNATURE, "wrong"));
  }

  #[test]
  fn test_empty_secret_and_payload() {
    let signature = compute_webhook_signature("", "").unwrap();
    assert!(verify_webhook_signature("", &signature, ""));
  }

  #[test]
  fn test_json_payload_matches_compact_serialization() {
    let payload = json!({ "test": "data" });
    let signature = compute_webhook_signature(r#"{"test":"data"}"#, "secret").unwrap();

    assert!(verify_webhook_json(&payload, &signature, "secret").unwrap());
    assert!(!verify_webhook_json(&payload, &signature, "other").unwrap());
  }

  #[test]
  fn test_json_payload_of_typed_struct() {
    #[derive(Serialize)]
    struct Event<'a> {
      event: &'a str,
      appointment_id: &'a str,
    }

    let event = Event { event: "appointment.cancelled", appointment_id: "apt_9" };
    let body = r#"{"event":"appointment.cancelled","appointment_id":"apt_9"}"#;
    let signature = compute_webhook_signature(body, "secret").unwrap();

    assert!(verify_webhook_json(&event, &signature, "secret").unwrap());
  }
}
