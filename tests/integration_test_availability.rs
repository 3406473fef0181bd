mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_quote_reports_price_and_availability() {
    let app = TestApp::new().await;
    let room_id = app.seed_room("101", 1000, 3).await;
    let base = format!("/api/v1/rooms/{}/availability", room_id);

    let (status, quote) = app.request("GET", &format!("{}?check_in=2025-03-10&check_out=2025-03-13&guests=2&board_type=bed_and_breakfast", base), None).await;
    assert_eq!(status, StatusCode::OK, "{quote}");
    assert_eq!(quote["available"], true);
    assert_eq!(quote["nights"], 3);
    assert_eq!(quote["total_price"], 7200);
    assert_eq!(quote["board_type"], "bed_and_breakfast");

    let (status, _) = app.book(&room_id, "2025-03-11", "2025-03-12", 1).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, quote) = app.request("GET", &format!("{}?check_in=2025-03-10&check_out=2025-03-13", base), None).await;
    assert_eq!(quote["available"], false);
    assert_eq!(quote["total_guests"], 1);
    assert_eq!(quote["total_price"], 3000);

    let (_, quote) = app.request("GET", &format!("{}?check_in=2025-03-12&check_out=2025-03-13", base), None).await;
    assert_eq!(quote["available"], true);
}

#[tokio::test]
async fn test_quote_validates_input() {
    let app = TestApp::new().await;
    let room_id = app.seed_room("102", 1000, 2).await;
    let base = format!("/api/v1/rooms/{}/availability", room_id);

    let (status, body) = app.request("GET", &base, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"].as_array().unwrap().len(), 2);

    let (status, body) = app.request("GET", &format!("{}?check_in=2025-03-10&check_out=2025-03-10", base), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "check_out_date");

    let (status, body) = app.request("GET", &format!("{}?check_in=2025-03-10&check_out=2025-03-11&guests=5", base), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "total_guests");

    let (status, _) = app.request("GET", "/api/v1/rooms/missing/availability?check_in=2025-03-10&check_out=2025-03-11", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_room_catalogue() {
    let app = TestApp::new().await;
    app.seed_room("201", 3000, 2).await;
    app.seed_room("202", 1500, 1).await;

    let (status, types) = app.admin("GET", "/api/v1/admin/room-types", None).await;
    assert_eq!(status, StatusCode::OK);
    let types = types.as_array().unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0]["price_per_night"], 1500);
    assert!(types[0].get("amenities_json").is_none());

    let (_, rooms) = app.admin("GET", "/api/v1/admin/rooms", None).await;
    let numbers: Vec<&str> = rooms.as_array().unwrap().iter().map(|r| r["room_number"].as_str().unwrap()).collect();
    assert_eq!(numbers, vec!["201", "202"]);

    // Room numbers are unique
    let (status, _) = app.admin("POST", "/api/v1/admin/rooms", Some(json!({
        "room_number": "201",
        "room_type_id": types[0]["id"],
        "max_guests": 2,
    }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.admin("POST", "/api/v1/admin/rooms", Some(json!({
        "room_number": "203",
        "room_type_id": "missing",
        "max_guests": 2,
    }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.admin("POST", "/api/v1/admin/room-types", Some(json!({
        "name": " ",
        "price_per_night": -5,
        "bed_type": "Twin",
        "room_size": 0,
        "view_type": "City",
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_closed_room_takes_no_new_reservations() {
    let app = TestApp::new().await;
    let room_id = app.seed_room("301", 1000, 2).await;
    let (status, existing) = app.book(&room_id, "2025-03-01", "2025-03-03", 1).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/v1/admin/rooms/{}", room_id);
    let (status, _) = app.request("PATCH", &uri, Some(json!({ "is_active": false }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, room) = app.admin("PATCH", &uri, Some(json!({ "is_active": false }))).await;
    assert_eq!(status, StatusCode::OK, "{room}");
    assert_eq!(room["is_active"], false);

    let (status, body) = app.book(&room_id, "2025-03-10", "2025-03-12", 1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "room_id");

    let (status, quote) = app.request("GET", &format!("/api/v1/rooms/{}/availability?check_in=2025-03-10&check_out=2025-03-12", room_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["available"], false);

    // Existing stays stay as they are
    let (_, kept) = app.admin("GET", &format!("/api/v1/admin/reservations/{}", existing["id"].as_str().unwrap()), None).await;
    assert_eq!(kept["status"], "pending");

    let (status, _) = app.admin("PATCH", &uri, Some(json!({ "is_active": true }))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.book(&room_id, "2025-03-10", "2025-03-12", 1).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.admin("PATCH", "/api/v1/admin/rooms/missing", Some(json!({ "is_active": false }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
