//! Artists and like toggling.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create_artist(app: &TestApp, token: &str, name: &str) -> i64 {
    let response = app
        .request(
            "POST",
            "/artists",
            Some(json!({ "artistName": name, "categoryId": 3 })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["likeCount"], 0);
    response.body["artistId"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_get() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;
    let id = create_artist(&app, &token, "IU").await;

    let response = app
        .request("GET", &format!("/artists/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["artistName"], "IU");

    let response = app.request("GET", "/artists", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 1);

    let response = app.request("GET", "/artists/999", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_like_flips_state_and_counts() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice@tgle.ml", "alice").await;
    let bob = app.signed_in("bob@tgle.ml", "bob").await;
    let id = create_artist(&app, &alice, "IU").await;
    let like = format!("/artists/{id}/like");

    let response = app.request("POST", &like, None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isLike"], true);
    assert_eq!(response.body["likeCount"], 1);

    let response = app.request("POST", &like, None, Some(&bob)).await;
    assert_eq!(response.body["likeCount"], 2);

    let response = app.request("POST", &like, None, Some(&alice)).await;
    assert_eq!(response.body["isLike"], false);
    assert_eq!(response.body["likeCount"], 1);

    let response = app
        .request("GET", "/artists/liked", None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());

    let response = app.request("GET", "/artists/liked", None, Some(&bob)).await;
    assert_eq!(response.body[0]["artistName"], "IU");
    assert_eq!(response.body[0]["likeCount"], 1);

    let response = app.request("GET", &like, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isLike"], true);
}

#[tokio::test]
async fn test_like_requires_token_and_artist() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let response = app.request("POST", "/artists/1/like", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("POST", "/artists/404/like", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/artists/liked", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_page_edges() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;
    create_artist(&app, &token, "IU").await;
    create_artist(&app, &token, "Zico").await;

    let response = app
        .request(
            "GET",
            "/artists?page=18446744073709551615&per_page=100",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert!(response.body["items"].as_array().unwrap().is_empty());
    assert_eq!(response.body["total_items"], 2);

    let response = app.request("GET", "/artists?page=2&per_page=1", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"][0]["artistName"], "Zico");
    assert_eq!(response.body["has_next"], false);
    assert_eq!(response.body["has_previous"], true);

    let response = app.request("GET", "/artists?page=9", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["items"].as_array().unwrap().is_empty());

    let response = app.request("GET", "/artists?per_page=0", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page_size"], 1);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 1);
}
