//! Concert create, list, get, and delete.

use http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn concert(name: &str, date: &str, category_id: i64) -> Value {
    json!({
        "categoryId": category_id,
        "concertName": name,
        "concertDate": date,
        "ticketingUrl": "https://tickets.example.com/show/1",
        "locationName": "Olympic Hall",
        "ratings": "All ages",
    })
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/concerts",
            Some(concert("Seoul Jazz", "2024.05.25", 1)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_validates_body() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let response = app
        .request(
            "POST",
            "/concerts",
            Some(json!({ "concertName": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concert_lifecycle() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let response = app
        .request(
            "POST",
            "/concerts",
            Some(concert("Seoul Jazz", "2024.05.25", 1)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["concertName"], "Seoul Jazz");
    let id = response.body["concertId"].as_i64().unwrap();

    let response = app
        .request("GET", &format!("/concerts/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["locationName"], "Olympic Hall");

    let response = app
        .request("DELETE", &format!("/concerts/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app
        .request("GET", &format!("/concerts/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/concerts/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filters_and_orders() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    for (name, date, category) in [
        ("Spring Rock", "2024.04.01", 1),
        ("Summer Rock", "2024.07.01", 1),
        ("Winter Ballad", "2024.12.01", 2),
    ] {
        let response = app
            .request(
                "POST",
                "/concerts",
                Some(concert(name, date, category)),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app.request("GET", "/concerts", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 3);
    assert_eq!(response.body["items"][0]["concertName"], "Winter Ballad");

    let response = app
        .request("GET", "/concerts?category_id=1&per_page=1", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 2);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["items"][0]["concertName"], "Summer Rock");
    assert_eq!(response.body["has_next"], true);
}

#[tokio::test]
async fn test_get_with_bad_id() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/concerts/abc", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_page_edges() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;
    for (name, date) in [("Spring Rock", "2024.04.01"), ("Summer Rock", "2024.07.01")] {
        let response = app
            .request("POST", "/concerts", Some(concert(name, date, 1)), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request(
            "GET",
            "/concerts?page=18446744073709551615&per_page=100",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert!(response.body["items"].as_array().unwrap().is_empty());
    assert_eq!(response.body["total_items"], 2);
    assert_eq!(response.body["has_next"], false);

    let response = app.request("GET", "/concerts?page=3&per_page=5", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["items"].as_array().unwrap().is_empty());
    assert_eq!(response.body["total_pages"], 1);

    let response = app.request("GET", "/concerts?per_page=0", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page_size"], 1);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["items"][0]["concertName"], "Summer Rock");
    assert_eq!(response.body["has_next"], true);
}
