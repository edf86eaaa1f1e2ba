use chrono::NaiveDate;
use mc_client::{Config, Error, GetAvailabilityParams, MoncreneauClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MoncreneauClient {
  let config = Config::new("mk_test_abc123").with_base_url(format!("{}/api/v1", server.uri()));
  MoncreneauClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_list_departments() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/departments"))
    .and(header("X-API-Key", "mk_test_abc123"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {
        "id": 12,
        "name": "Etat civil",
        "slotDuration": 15,
        "isActive": true,
        "openingHours": {
          "MONDAY": [{ "start": "08:00", "end": "12:00" }]
        }
      },
      {
        "id": 13,
        "name": "Passeports",
        "description": "Demandes et renouvellements",
        "slotDuration": 30,
        "isActive": false
      }
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let departments = client_for(&server).departments().list().await.unwrap();

  assert_eq!(departments.len(), 2);
  assert_eq!(departments[0].hours_for("MONDAY")[0].end, "12:00");
  assert_eq!(departments[1].description.as_deref(), Some("Demandes et renouvellements"));
  assert!(!departments[1].is_active);
}

#[tokio::test]
async fn test_retrieve_department() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/departments/12"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "id": 12,
      "name": "Etat civil",
      "slotDuration": 15,
      "isActive": true
    })))
    .expect(1)
    .mount(&server)
    .await;

  let department = client_for(&server).departments().retrieve(12).await.unwrap();

  assert_eq!(department.id, 12);
  assert_eq!(department.slot_duration, 15);
  assert!(department.opening_hours.is_none());
}

#[tokio::test]
async fn test_get_availability_sends_date_range() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/departments/12/availability"))
    .and(query_param("startDate", "2025-01-15"))
    .and(query_param("endDate", "2025-01-16"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "departmentId": 12,
      "availability": [
        {
          "date": "2025-01-15",
          "slots": [
            { "time": "08:00", "available": false, "dateTime": "2025-01-15T08:00:00" },
            { "time": "08:15", "available": true, "dateTime": "2025-01-15T08:15:00" }
          ]
        },
        { "date": "2025-01-16", "slots": [] }
      ]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let params = GetAvailabilityParams::new(
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
  );
  let availability = client_for(&server).departments().get_availability(12, &params).await.unwrap();

  assert_eq!(availability.department_id, 12);
  assert_eq!(availability.availability.len(), 2);
  let open: Vec<&str> = availability.open_slots().map(|s| s.time.as_str()).collect();
  assert_eq!(open, vec!["08:15"]);

  let requests = server.received_requests().await.unwrap();
  assert_eq!(requests[0].url.query(), Some("startDate=2025-01-15&endDate=2025-01-16"));
}

#[tokio::test]
async fn test_availability_validation_error() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/departments/12/availability"))
    .respond_with(ResponseTemplate::new(400).set_body_json(json!({
      "error": {
        "code": "INVALID_DATE_RANGE",
        "message": "endDate must not be before startDate",
        "details": { "startDate": "2025-01-20", "endDate": "2025-01-15" }
      }
    })))
    .mount(&server)
    .await;

  let params = GetAvailabilityParams::new(
    NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
  );
  let err = client_for(&server).departments().get_availability(12, &params).await.unwrap_err();

  match err {
    Error::Api { code, status_code, details, .. } => {
      assert_eq!(code, "INVALID_DATE_RANGE");
      assert_eq!(status_code, 400);
      assert_eq!(details.unwrap()["endDate"], "2025-01-15");
    }
    other => panic!("Expected Api error, got {:?}", other),
  }
}
