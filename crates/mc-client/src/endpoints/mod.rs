//! Endpoint groups of the Moncreneau API
//!
//! Each group maps its methods 1:1 onto one HTTP verb and path and hands the
//! request to the shared [`HttpClient`].

pub mod appointments;
pub mod departments;

use crate::transport::HttpClient;
use mc_core::{Error, Result};
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<HttpClient>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<HttpClient> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Join a collection path with encoded path segments
///
/// Each segment is percent-encoded, so an identifier can never step outside
/// its collection. Empty and dot segments are refused outright: URL parsing
/// resolves `.`/`..` (encoded or not) before the request is sent.
pub(crate) fn resource_path(collection: &str, segments: &[&str]) -> Result<String> {
  let mut path = collection.to_string();
  for segment in segments {
    if is_dot_or_empty(segment) {
      return Err(Error::InvalidInput(format!("Invalid path segment '{}'", segment)));
    }
    path.push('/');
    path.push_str(&urlencoding::encode(segment));
  }
  Ok(path)
}

fn is_dot_or_empty(segment: &str) -> bool {
  matches!(
    segment.to_ascii_lowercase().as_str(),
    "" | "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resource_path() {
    assert_eq!(resource_path("/appointments", &[]).unwrap(), "/appointments");
    assert_eq!(resource_path("/appointments", &["apt_1"]).unwrap(), "/appointments/apt_1");
    assert_eq!(
      resource_path("/departments", &["12", "availability"]).unwrap(),
      "/departments/12/availability"
    );
  }

  #[test]
  fn test_resource_path_encodes_segments() {
    assert_eq!(
      resource_path("/appointments", &["../departments"]).unwrap(),
      "/appointments/..%2Fdepartments"
    );
    assert_eq!(resource_path("/appointments", &["a b?c"]).unwrap(), "/appointments/a%20b%3Fc");
    assert_eq!(resource_path("/appointments", &["v1.2"]).unwrap(), "/appointments/v1.2");
  }

  #[test]
  fn test_resource_path_rejects_dot_and_empty_segments() {
    for segment in ["", ".", "..", "%2e", "%2E%2E", ".%2e"] {
      let result = resource_path("/appointments", &[segment]);
      assert!(matches!(result, Err(Error::InvalidInput(_))), "segment {:?}", segment);
    }
  }
}
