//! Integration tests for the template endpoints.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use common::{body_json, session_cookie_header, test_app};

fn authed(mut request: Request<Body>) -> Request<Body> {
    request.headers_mut().insert(
        header::COOKIE,
        session_cookie_header().parse().expect("cookie header"),
    );
    request
}

#[tokio::test]
async fn catalog_lists_every_template_with_its_fields() {
    let response = test_app()
        .oneshot(authed(
            Request::builder()
                .uri("/api/templates")
                .body(Body::empty())
                .unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    for key in [
        "relance_1_email",
        "relance_2_linkedin",
        "relance_3_email",
        "relance_4_tel",
        "relance_5_email",
        "sms_relance_rapide",
        "whatsapp_relance_rapide",
    ] {
        assert!(body.get(key).is_some(), "missing {key}");
    }

    assert_eq!(body["relance_1_email"]["canal"], "email");
    assert_eq!(
        body["relance_1_email"]["sujet"],
        "[NOM_CABINET] - Suite à notre échange"
    );
    assert_eq!(body["relance_4_tel"]["corps"], serde_json::Value::Null);
}

#[tokio::test]
async fn fill_replaces_bound_placeholders_and_keeps_the_rest() {
    let payload = serde_json::json!({
        "templateKey": "relance_1_email",
        "variables": {
            "PRENOM": "Marie",
            "DATE_DEMO": "12 mars",
            "NOM_CABINET": "Cabinet Durand",
        },
    });
    let response = test_app()
        .oneshot(authed(common::json_post(
            "/api/templates/remplir",
            payload.to_string(),
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let corps = body["corps"].as_str().unwrap();

    assert!(corps.contains("Bonjour Marie,"));
    assert!(corps.contains("démo le 12 mars"));
    assert!(corps.contains("Cabinet Durand"));
    assert!(!corps.contains("[PRENOM]"));
    assert!(corps.contains("[EMAIL] | [TEL]"));
}

#[tokio::test]
async fn fill_without_variables_returns_the_text_unchanged() {
    let payload = serde_json::json!({ "templateKey": "relance_2_linkedin" });
    let response = test_app()
        .oneshot(authed(common::json_post(
            "/api/templates/remplir",
            payload.to_string(),
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let corps = body["corps"].as_str().unwrap();

    assert!(corps.contains("[PRENOM]"));
    assert!(corps.contains("[DATE_DEMO]"));
}

#[tokio::test]
async fn fill_unknown_template_is_a_404() {
    let payload = serde_json::json!({ "templateKey": "nonexistent-id", "variables": {} });
    let response = test_app()
        .oneshot(authed(common::json_post(
            "/api/templates/remplir",
            payload.to_string(),
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Template non trouvé");
}

#[tokio::test]
async fn fill_call_script_fills_the_notes_field() {
    let payload = serde_json::json!({
        "templateKey": "relance_4_tel",
        "variables": { "PRENOM": "Paul" },
    });
    let response = test_app()
        .oneshot(authed(common::json_post(
            "/api/templates/remplir",
            payload.to_string(),
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["corps"], serde_json::Value::Null);
    let notes = body["notes_appel"].as_str().unwrap();
    assert!(notes.contains("Bonjour Paul, Gaspard de DIV Protocol."));
}
