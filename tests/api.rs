// tests/api.rs

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_backend::{config::AppState, db::InMemoryFleetStore, routes::build_router};

fn app() -> Router {
    let state = AppState::from_store(Arc::new(InMemoryFleetStore::new()));
    build_router(state, &[])
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, bytes)
}

fn num(value: &Value) -> f64 {
    value.as_f64().unwrap_or_else(|| panic!("not a number: {value}"))
}

/// T1 + driver + one completed March 2024 trip with a 1000 income and a 200 toll.
async fn seed_march_scenario(app: &Router) -> (String, String) {
    let (status, truck) = send(
        app,
        Method::POST,
        "/api/trucks",
        Some(json!({ "plateNumber": "T1", "model": "Volvo FH16", "capacity": 25, "year": 2021, "mileage": 1000 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let truck_id = truck["id"].as_str().unwrap().to_string();

    let (status, driver) = send(
        app,
        Method::POST,
        "/api/drivers",
        Some(json!({
            "firstName": "Omar",
            "lastName": "Haddad",
            "licenseNumber": "DL-1",
            "licenseExpiry": "2028-01-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, trip) = send(
        app,
        Method::POST,
        "/api/trips",
        Some(json!({
            "origin": "Riyadh",
            "destination": "Jeddah",
            "startDate": "2024-03-01T08:00:00Z",
            "driverId": driver["id"],
            "truckId": truck_id,
            "status": "COMPLETED",
            "distance": 950,
            "clientName": "Acme"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let trip_id = trip["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        app,
        Method::POST,
        "/api/trip-incomes",
        Some(json!({ "tripId": trip_id, "clientName": "Acme", "amount": 1000, "dueDate": "2024-03-20" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        app,
        Method::POST,
        "/api/trip-expenses",
        Some(json!({ "tripId": trip_id, "type": "TOLL", "amount": 200, "date": "2024-03-05T10:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (truck_id, trip_id)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&app(), Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn march_scenario_through_the_api() {
    let app = app();
    let (truck_id, _) = seed_march_scenario(&app).await;

    let (status, monthly) = send(&app, Method::GET, "/api/reports/monthly", None).await;
    assert_eq!(status, StatusCode::OK);
    let buckets = monthly.as_array().unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0]["month"], "March");
    assert_eq!(buckets[0]["monthIndex"], 2);
    assert_eq!(num(&buckets[0]["revenue"]), 1000.0);
    assert_eq!(num(&buckets[0]["expenses"]), 200.0);
    assert_eq!(num(&buckets[0]["profit"]), 800.0);

    let (_, trucks) = send(&app, Method::GET, "/api/reports/trucks", None).await;
    let row = &trucks.as_array().unwrap()[0];
    assert_eq!(row["id"], truck_id.as_str());
    assert_eq!(row["name"], "T1");
    assert_eq!(num(&row["income"]), 1000.0);
    assert_eq!(num(&row["expenses"]), 200.0);
    assert_eq!(num(&row["profit"]), 800.0);
    assert_eq!(row["trips"], 1);
    assert_eq!(num(&row["margin"]), 80.0);

    let (_, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(num(&stats["totalRevenue"]), 1000.0);
    assert_eq!(num(&stats["netProfit"]), 800.0);
    assert_eq!(num(&stats["pendingPayments"]), 1000.0);
    assert_eq!(stats["activeTrucks"], 1);
    assert_eq!(stats["availableDrivers"], 1);
    assert_eq!(stats["activeTrips"], 0);

    let (_, recent) = send(&app, Method::GET, "/api/dashboard/recent-trips?limit=3", None).await;
    let recent = recent.as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["driverName"], "Omar Haddad");
    assert_eq!(recent[0]["truckPlate"], "T1");
}

#[tokio::test]
async fn payment_status_round_trip() {
    let app = app();
    let (_, trip_id) = seed_march_scenario(&app).await;

    let (_, incomes) = send(&app, Method::GET, &format!("/api/trip-incomes/trip/{trip_id}"), None).await;
    let income = &incomes.as_array().unwrap()[0];
    assert_eq!(income["paymentStatus"], "PENDING");
    assert!(income["paidDate"].is_null());
    let income_id = income["id"].as_str().unwrap().to_string();

    let uri = format!("/api/trip-incomes/{income_id}");
    let (status, paid) = send(&app, Method::PUT, &uri, Some(json!({ "paymentStatus": "PAID" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["paymentStatus"], "PAID");
    assert!(paid["paidDate"].is_string());

    let (_, ledger) = send(&app, Method::GET, &format!("/api/trip-incomes/trip/{trip_id}/ledger"), None).await;
    assert_eq!(num(&ledger["totalIncome"]), 1000.0);
    assert_eq!(num(&ledger["paidAmount"]), 1000.0);
    assert_eq!(num(&ledger["outstandingAmount"]), 0.0);

    let (_, pending) = send(&app, Method::PUT, &uri, Some(json!({ "paymentStatus": "PENDING" }))).await;
    assert!(pending["paidDate"].is_null());

    let (_, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(num(&stats["totalRevenue"]), 1000.0);
}

#[tokio::test]
async fn invalid_payload_is_a_bad_request_with_details() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/trip-incomes",
        Some(json!({
            "tripId": "00000000-0000-0000-0000-000000000001",
            "clientName": "",
            "amount": 0,
            "dueDate": "2024-03-20"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["clientName"].is_array());
    assert!(body["details"].get("client_name").is_none());
    assert!(body["details"]["amount"].is_array());
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = app();
    let ghost = "00000000-0000-0000-0000-00000000dead";

    for (method, uri, body) in [
        (Method::GET, format!("/api/trucks/{ghost}"), None),
        (Method::DELETE, format!("/api/drivers/{ghost}"), None),
        (Method::PATCH, format!("/api/trips/{ghost}/status?status=COMPLETED"), None),
        (Method::PUT, format!("/api/trip-incomes/{ghost}"), Some(json!({ "amount": 5 }))),
        (Method::DELETE, format!("/api/trip-incomes/{ghost}"), None),
    ] {
        let (status, _) = send(&app, method, &uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn duplicate_plate_is_a_conflict() {
    let app = app();
    let body = json!({ "plateNumber": "DUP", "model": "MAN TGX", "year": 2018 });

    let (first, _) = send(&app, Method::POST, "/api/trucks", Some(body.clone())).await;
    let (second, _) = send(&app, Method::POST, "/api/trucks", Some(body)).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
}

#[tokio::test]
async fn trip_status_patch_and_delete() {
    let app = app();
    let (_, trip_id) = seed_march_scenario(&app).await;

    let (status, trip) = send(
        &app,
        Method::PATCH,
        &format!("/api/trips/{trip_id}/status?status=IN_PROGRESS"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trip["status"], "IN_PROGRESS");

    let (_, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(stats["activeTrips"], 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The income survives as an orphan: global totals keep it, the truck row does not
    let (_, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(num(&stats["totalRevenue"]), 1000.0);
    let (_, trucks) = send(&app, Method::GET, "/api/reports/trucks", None).await;
    assert_eq!(num(&trucks[0]["income"]), 0.0);
}

#[tokio::test]
async fn orphan_fuel_counts_globally_only() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/fuel-records",
        Some(json!({
            "truckId": "00000000-0000-0000-0000-0000000000aa",
            "amount": 120,
            "cost": 300,
            "date": "2024-05-02T07:30:00Z",
            "station": "Exit 9",
            "odometerReading": 50000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(num(&stats["totalExpenses"]), 300.0);
    let (_, trucks) = send(&app, Method::GET, "/api/reports/trucks", None).await;
    assert!(trucks.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn monthly_export_is_csv() {
    let app = app();
    seed_march_scenario(&app).await;

    let request = Request::builder()
        .uri("/api/reports/monthly/export?year=2024")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(text, "Month,Revenue,Expenses,Profit\nMarch,1000,200,800\n");

    let (_, other_year) = send(&app, Method::GET, "/api/reports/monthly?year=2023", None).await;
    assert!(other_year.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, doc) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/reports/trucks"].is_object());
}

#[tokio::test]
async fn oversized_amounts_are_rejected() {
    let app = app();
    for amount in [json!(10000000000000u64), json!(5e28)] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/trip-incomes",
            Some(json!({
                "tripId": "00000000-0000-0000-0000-000000000001",
                "clientName": "Acme",
                "amount": amount,
                "dueDate": "2024-03-20"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["amount"].is_array());
    }

    let (status, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(num(&stats["totalRevenue"]), 0.0);
}

#[tokio::test]
async fn cost_records_can_be_edited() {
    let app = app();
    let truck_id = "00000000-0000-0000-0000-0000000000bb";
    let fuel = json!({
        "truckId": truck_id,
        "amount": 100,
        "cost": 250,
        "date": "2024-05-02T07:30:00Z",
        "station": "Exit 9"
    });
    let (_, record) = send(&app, Method::POST, "/api/fuel-records", Some(fuel.clone())).await;
    let fuel_uri = format!("/api/fuel-records/{}", record["id"].as_str().unwrap());

    let mut edit = fuel;
    edit["cost"] = json!(275);
    let (status, updated) = send(&app, Method::PUT, &fuel_uri, Some(edit)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], record["id"]);
    assert_eq!(num(&updated["cost"]), 275.0);

    let (_, stats) = send(&app, Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(num(&stats["totalExpenses"]), 275.0);

    let maintenance = json!({
        "truckId": truck_id,
        "type": "ROUTINE",
        "cost": 400,
        "date": "2024-06-01T09:00:00Z"
    });
    let (_, job) = send(&app, Method::POST, "/api/maintenance-records", Some(maintenance.clone())).await;
    let job_uri = format!("/api/maintenance-records/{}", job["id"].as_str().unwrap());

    let mut backdated = maintenance.clone();
    backdated["nextDueDate"] = json!("2024-05-01");
    let (status, _) = send(&app, Method::PUT, &job_uri, Some(backdated)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut rescheduled = maintenance;
    rescheduled["nextDueDate"] = json!("2024-12-01");
    let (status, job) = send(&app, Method::PUT, &job_uri, Some(rescheduled)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["nextDueDate"], "2024-12-01");

    let expense = json!({
        "tripId": "00000000-0000-0000-0000-000000000001",
        "type": "FOOD",
        "amount": 30,
        "date": "2024-05-03T12:00:00Z"
    });
    let ghost = "00000000-0000-0000-0000-00000000dead";
    let (status, _) = send(&app, Method::PUT, &format!("/api/trip-expenses/{ghost}"), Some(expense.clone())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, created) = send(&app, Method::POST, "/api/trip-expenses", Some(expense.clone())).await;
    let mut edit = expense;
    edit["type"] = json!("LODGING");
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/trip-expenses/{}", created["id"].as_str().unwrap()),
        Some(edit),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["type"], "LODGING");
}

#[tokio::test]
async fn status_values_ignore_case() {
    let app = app();
    let (_, trip_id) = seed_march_scenario(&app).await;

    let (status, trip) = send(
        &app,
        Method::PATCH,
        &format!("/api/trips/{trip_id}/status?status=in_progress"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trip["status"], "IN_PROGRESS");

    let (_, incomes) = send(&app, Method::GET, &format!("/api/trip-incomes/trip/{trip_id}"), None).await;
    let uri = format!("/api/trip-incomes/{}", incomes[0]["id"].as_str().unwrap());
    let (status, income) = send(&app, Method::PUT, &uri, Some(json!({ "paymentStatus": "paid" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(income["paymentStatus"], "PAID");
    assert!(income["paidDate"].is_string());
}
