//! Sign-up, login, Kakao login, account self-service, and logout.

use axum::body::Body;
use http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use http::{Request, StatusCode};
use serde_json::json;

use tgle_database::repositories::UserRepository;

use crate::helpers::{MULTIPART_BOUNDARY, PASSWORD, PNG, TestApp, multipart_body};

#[tokio::test]
async fn test_sign_up_creates_user() {
    let app = TestApp::new().await;

    let response = app.sign_up("fan@tgle.ml", "fan").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "fan@tgle.ml");
    assert_eq!(response.body["nickname"], "fan");
    assert_eq!(response.body["provider"], "local");
    assert!(response.body.get("passwordHash").is_none());
    assert!(
        app.state
            .repos
            .users
            .find_by_email("fan@tgle.ml")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_sign_up_duplicates_conflict() {
    let app = TestApp::new().await;
    app.sign_up("fan@tgle.ml", "fan").await;

    let response = app.sign_up("fan@tgle.ml", "other").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");

    let response = app.sign_up("other@tgle.ml", "fan").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_sign_up_password_mismatch() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users/signup",
            Some(json!({
                "email": "fan@tgle.ml",
                "nickname": "fan",
                "password": PASSWORD,
                "confirmPassword": "something-else-entirely",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_check_nickname() {
    let app = TestApp::new().await;
    app.sign_up("fan@tgle.ml", "fan").await;

    let response = app
        .request("GET", "/users/signup?nickname=newcomer", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app
        .request("GET", "/users/signup?nickname=fan", None, None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app.request("GET", "/users/signup", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.sign_up("fan@tgle.ml", "fan").await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "fan@tgle.ml", "password": "not-the-password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "nobody@tgle.ml", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_sets_token_body_header_and_cookie() {
    let app = TestApp::new().await;
    app.sign_up("fan@tgle.ml", "fan").await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "fan@tgle.ml", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let jwt = response.body["jwt"].as_str().unwrap();
    assert_eq!(response.body["nickname"], "fan");
    assert_eq!(response.headers.get("jwt").unwrap(), jwt);
    assert!(
        response
            .cookies()
            .iter()
            .any(|c| c.starts_with(&format!("jwt={jwt}")) && c.contains("HttpOnly"))
    );
}

#[tokio::test]
async fn test_userinfo_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/users/userinfo", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/users/userinfo", None, Some("not.a.jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_userinfo_with_bearer_or_cookie() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let response = app
        .request("GET", "/users/userinfo", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "fan@tgle.ml");

    let request = Request::builder()
        .uri("/users/userinfo")
        .header(COOKIE, format!("jwt={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["nickname"], "fan");
}

#[tokio::test]
async fn test_update_userinfo() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let response = app
        .request("PUT", "/users/userinfo", Some(json!({})), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "PUT",
            "/users/userinfo",
            Some(json!({ "nickname": "superfan" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app
        .request("GET", "/users/userinfo", None, Some(&token))
        .await;
    assert_eq!(response.body["nickname"], "superfan");
}

#[tokio::test]
async fn test_update_password_then_login() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;
    let new_password = "amber-lantern-festival-47";

    let response = app
        .request(
            "PUT",
            "/users/userinfo",
            Some(json!({ "password": new_password, "confirmPassword": new_password })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "email": "fan@tgle.ml", "password": new_password })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_profile_upload() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let request = Request::builder()
        .method("PUT")
        .uri("/users/userinfo/upload")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(multipart_body(
            "profileImg",
            "me.png",
            "image/png",
            PNG,
        )))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let url = response.body["profileImg"].as_str().unwrap().to_string();
    assert!(url.starts_with("http://localhost:3000/uploads/users/"));
    assert!(url.ends_with(".png"));

    let path = url.trim_start_matches("http://localhost:3000");
    let response = app.request("GET", path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_profile_upload_rejects_non_images() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let request = Request::builder()
        .method("PUT")
        .uri("/users/userinfo/upload")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(multipart_body(
            "profileImg",
            "notes.txt",
            "text/plain",
            b"just text",
        )))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_clears_cookie_and_revokes_token() {
    let app = TestApp::new().await;
    let token = app.signed_in("fan@tgle.ml", "fan").await;

    let response = app
        .request("POST", "/users/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .cookies()
            .iter()
            .any(|c| c.starts_with("jwt=") && c.contains("Max-Age=0"))
    );

    let response = app
        .request("GET", "/users/userinfo", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_token() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/users/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_kakao_login_redirects_to_provider() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/users/kakao", None, None).await;

    assert!(response.status.is_redirection());
    assert!(
        response
            .location()
            .unwrap()
            .starts_with("https://kauth.kakao.com/oauth/authorize")
    );
}

#[tokio::test]
async fn test_kakao_callback_signup_then_login() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/users/oauth/kakao/callback?code=code-77", None, None)
        .await;
    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("https://frontend.test"));
    assert!(response.cookies().is_empty());

    let response = app
        .request("GET", "/users/oauth/kakao/callback?code=code-77", None, None)
        .await;
    assert!(response.status.is_redirection());
    assert!(response.cookies().iter().any(|c| c.starts_with("jwt=")));
}

#[tokio::test]
async fn test_kakao_callback_without_code() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/users/oauth/kakao/callback", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
