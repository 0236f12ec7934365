use actix_web::http::StatusCode;
use actix_web::{App, test};
use publisher_admin_backend::core::AppState;
use publisher_admin_backend::routes::configure_all_routes;
use serde_json::{Value, json};

macro_rules! app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(
            App::new()
                .configure(move |cfg| state.configure(cfg))
                .configure(configure_all_routes),
        )
        .await
    }};
}

fn items_count(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
    resp.headers()
        .get("X-Items-Count")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// 벤더를 만들고 온보딩 문서를 제출한 뒤 벤더 ID를 돌려줍니다.
macro_rules! onboard_vendor {
    ($app:expr, $name:expr, $domain3:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/vendors")
            .set_json(json!({
                "name": $name,
                "domain3": $domain3,
                "email": "ops@studio.io",
                "howManyProducts": "1-5",
                "managerId": "6f1c1b1e-4f4a-4c7e-9d0a-3c9b0a1d2e3f",
            }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let vendor: Value = test::read_body_json(resp).await;
        let vendor_id = vendor["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/vendors/{}/documents", vendor_id))
            .set_json(json!({
                "company": { "name": $name, "country": "KR" },
                "contact": { "authorized": { "fullName": "Kim Minji" } },
            }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        vendor_id
    }};
}

#[actix_web::test]
async fn health_reports_storage_backend() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "memory");
}

#[actix_web::test]
async fn send_then_list_messages() {
    let state = AppState::in_memory();
    let app = app!(state);
    let vendor_id = onboard_vendor!(&app, "Pixel Forge", "pixelforge");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/vendors/{}/messages", vendor_id))
        .set_json(json!({ "title": "Welcome", "message": "Glad to have you" }))
        .to_request();
    let sent: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sent["title"], "Welcome");
    assert_eq!(sent["isRead"], false);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/vendors/{}/messages", vendor_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(items_count(&resp).as_deref(), Some("1"));

    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed[0], sent);
}

#[actix_web::test]
async fn message_without_title_is_unprocessable() {
    let state = AppState::in_memory();
    let app = app!(state);
    let vendor_id = onboard_vendor!(&app, "Orbit", "orbit");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/vendors/{}/messages", vendor_id))
        .set_json(json!({ "message": "no title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 422);
}

#[actix_web::test]
async fn bad_vendor_id_is_bad_request() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/vendors/not-a-uuid/documents")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Bad id"));
}

#[actix_web::test]
async fn status_change_with_message_notifies_vendor() {
    let state = AppState::in_memory();
    let app = app!(state);
    let vendor_id = onboard_vendor!(&app, "Loop Studio", "loop");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/vendors/{}/documents/status", vendor_id))
        .set_json(json!({ "status": "Approved", "message": "Welcome aboard" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/vendors/{}/documents", vendor_id))
        .to_request();
    let documents: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(documents["status"], "approved");

    state.dispatcher.flush().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/vendors/{}/messages", vendor_id))
        .to_request();
    let messages: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(messages.as_array().unwrap().len(), 1);
    assert_eq!(messages[0]["title"], "Welcome aboard");
    assert_eq!(messages[0]["message"], "Welcome aboard");
}

#[actix_web::test]
async fn status_change_rejects_unknown_status_and_vendor() {
    let state = AppState::in_memory();
    let app = app!(state);
    let vendor_id = onboard_vendor!(&app, "Nova", "nova");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/vendors/{}/documents/status", vendor_id))
        .set_json(json!({ "status": "archived" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/vendors/{}/documents/status", vendor_id))
        .set_json(json!({ "message": "missing status" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::put()
        .uri("/api/v1/vendors/6f1c1b1e-4f4a-4c7e-9d0a-000000000000/documents/status")
        .set_json(json!({ "status": "approved", "message": "hi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Vendor not found");
}

#[actix_web::test]
async fn status_change_cannot_reset_to_undefined() {
    let state = AppState::in_memory();
    let app = app!(state);
    let vendor_id = onboard_vendor!(&app, "Blank Slate", "blank-slate");
    let uri = format!("/api/v1/vendors/{}/documents/status", vendor_id);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "status": "   " }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "status": "undefined" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/vendors/{}/documents", vendor_id))
        .to_request();
    let documents: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(documents["status"], "new");
}

#[actix_web::test]
async fn reviews_are_filtered_and_counted() {
    let state = AppState::in_memory();
    let app = app!(state);
    onboard_vendor!(&app, "Pixel Forge", "pixel-forge");
    onboard_vendor!(&app, "Pixel Union", "pixel-union");
    onboard_vendor!(&app, "Orbit Games", "orbit-games");

    let req = test::TestRequest::get()
        .uri("/api/v1/vendors/reviews?name=pixel&status=new&sort=name")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(items_count(&resp).as_deref(), Some("2"));

    let reviews: Value = test::read_body_json(resp).await;
    assert_eq!(reviews[0]["name"], "Pixel Forge");
    assert_eq!(reviews[0]["person"], "Kim Minji");
    assert_eq!(reviews[0]["status"], "new");
    assert!(reviews[0]["updatedAt"].as_str().unwrap().ends_with('Z'));

    let req = test::TestRequest::get()
        .uri("/api/v1/vendors/reviews?limit=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(items_count(&resp).as_deref(), Some("3"));
    let reviews: Value = test::read_body_json(resp).await;
    assert!(reviews.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn reviews_reject_bad_pagination_and_status() {
    let state = AppState::in_memory();
    let app = app!(state);

    for uri in [
        "/api/v1/vendors/reviews?limit=abc",
        "/api/v1/vendors/reviews?offset=-1",
        "/api/v1/vendors/reviews?status=archived",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[actix_web::test]
async fn vendor_domain_must_be_unique() {
    let state = AppState::in_memory();
    let app = app!(state);
    onboard_vendor!(&app, "First", "shared");

    let req = test::TestRequest::post()
        .uri("/api/v1/vendors")
        .set_json(json!({
            "name": "Second",
            "domain3": "shared",
            "email": "ops@second.io",
            "managerId": "6f1c1b1e-4f4a-4c7e-9d0a-3c9b0a1d2e3f",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
