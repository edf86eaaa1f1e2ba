//! Webhook Verification Example
//!
//! Reads a webhook body from stdin and checks it against the signature passed
//! as the first argument, using `MONCRENEAU_WEBHOOK_SECRET` as the key.
//!
//! ```text
//! echo -n '{"test":"data"}' | cargo run --example verify_webhook -- <signature>
//! ```

use anyhow::{Context, Result, bail};
use mc_client::MoncreneauClient;
use mc_client::webhook::WEBHOOK_SIGNATURE_HEADER;
use std::io::Read;

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let signature = std::env::args()
    .nth(1)
    .with_context(|| format!("Usage: verify_webhook <{} value>", WEBHOOK_SIGNATURE_HEADER))?;
  let secret =
    std::env::var("MONCRENEAU_WEBHOOK_SECRET").context("MONCRENEAU_WEBHOOK_SECRET not set")?;

  let mut body = String::new();
  std::io::stdin().read_to_string(&mut body)?;

  if !MoncreneauClient::verify_webhook_signature(&body, &signature, &secret) {
    bail!("Invalid webhook signature");
  }

  println!("Signature valid");
  Ok(())
}
