//! Book Appointment Example
//!
//! This example demonstrates how to use mc-client to:
//! - Pick an active department
//! - Find the first open slot over the coming week
//! - Book it and list the resulting appointments
//! - Tell API errors apart from transport failures
//!
//! Run with `MONCRENEAU_API_KEY` set (a `.env` file works too).

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use mc_client::{
  Config, CreateAppointmentRequest, Error, GetAvailabilityParams, ListAppointmentsParams,
  MoncreneauClient,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let config = Config::from_env().context("Failed to load configuration")?;
  let client = MoncreneauClient::new(config)?;

  let departments = client.departments().list().await?;
  let Some(department) = departments.iter().find(|d| d.is_active) else {
    warn!("No active department available");
    return Ok(());
  };
  info!("Using department {} ({})", department.name, department.id);

  let today = Utc::now().date_naive();
  let range = GetAvailabilityParams::new(today, today + Duration::days(7));
  let availability = client.departments().get_availability(department.id, &range).await?;

  let Some(slot) = availability.open_slots().next() else {
    warn!("No open slot between {} and {}", range.start_date, range.end_date);
    return Ok(());
  };

  let request = CreateAppointmentRequest::new(department.id, slot.date_time.clone(), "Demo User")
    .with_external_user_id("demo-user");

  match client.appointments().create(&request).await {
    Ok(appointment) => {
      println!("Booked {} at {} ({})", appointment.id, appointment.date_time, appointment.status);
      println!("QR code: {}", appointment.qr_code);
    }
    Err(Error::Api { code, message, status_code, .. }) => {
      println!("Booking refused ({} {}): {}", status_code, code, message);
      return Ok(());
    }
    Err(e) => return Err(e.into()),
  }

  let params = ListAppointmentsParams::new().page(0, 10).department_id(department.id);
  let page = client.appointments().list(Some(&params)).await?;
  println!(
    "{} appointment(s) on page {} of {}",
    page.len(),
    page.page + 1,
    page.total_pages
  );
  for appointment in page.iter() {
    println!("  {} {} {}", appointment.id, appointment.date_time, appointment.status);
  }

  Ok(())
}
