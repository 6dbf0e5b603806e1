use std::time::Duration;

use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};
use ysn_site::domain::SubmissionStatus;
use ysn_site::form_view::StatusKind;

use crate::helpers::{spawn_page, spawn_page_with_auto_hide, spawn_page_without_endpoint, valid_fields};

#[tokio::test]
async fn valid_form_is_posted_once_with_every_field() {
    let app = spawn_page().await;

    Mock::given(path("/f/contact"))
        .and(method("POST"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&app.endpoint)
        .await;

    let status = app.page.contact_form.on_submit_intent(valid_fields()).await;
    assert_eq!(status, SubmissionStatus::Succeeded);

    let bodies = app.received_bodies().await;
    assert_eq!(bodies.len(), 1);
    for (name, value) in valid_fields().iter() {
        assert!(bodies[0].contains(&format!("name=\"{name}\"")));
        assert!(bodies[0].contains(value));
    }
}

#[tokio::test]
async fn success_resets_the_form_and_shows_the_thank_you_message() {
    let app = spawn_page().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.endpoint)
        .await;

    app.page.contact_form.on_submit_intent(valid_fields()).await;

    let view = app.page.contact_form.view();
    assert!(view.fields.is_blank());
    assert_eq!(
        view.status_region.text,
        "Thank you for your interest! We will get back to you soon."
    );
    assert_eq!(view.status_region.kind, Some(StatusKind::Success));
    assert!(view.submit_control.enabled);
    assert_eq!(view.submit_control.label, "Send Message");
}

#[tokio::test]
async fn success_message_hides_itself() {
    let app = spawn_page_with_auto_hide(50).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.endpoint)
        .await;

    app.page.contact_form.on_submit_intent(valid_fields()).await;
    assert!(app.page.contact_form.view().status_region.visible);

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(!app.page.contact_form.view().status_region.visible);
    assert_eq!(app.page.contact_form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn endpoint_errors_are_shown_and_the_control_is_restored() {
    let app = spawn_page().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": [{ "message": "Email is invalid" }]
        })))
        .expect(1)
        .mount(&app.endpoint)
        .await;

    let status = app.page.contact_form.on_submit_intent(valid_fields()).await;

    assert_eq!(status, SubmissionStatus::Failed("Email is invalid".into()));
    let view = app.page.contact_form.view();
    assert_eq!(view.status_region.text, "Email is invalid");
    assert_eq!(view.status_region.kind, Some(StatusKind::Error));
    assert!(view.submit_control.enabled);
    assert_eq!(view.submit_control.label, "Send Message");
    assert_eq!(view.fields, valid_fields());
}

#[tokio::test]
async fn unstructured_errors_show_the_fallback_message() {
    let app = spawn_page().await;
    let fallback = app.page.contact_form.settings().fallback_error_message.clone();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.endpoint)
        .await;

    let status = app.page.contact_form.on_submit_intent(valid_fields()).await;

    assert_eq!(status, SubmissionStatus::Failed(fallback.clone()));
    assert_eq!(app.page.contact_form.view().status_region.text, fallback);
}

#[tokio::test]
async fn unreachable_endpoint_shows_the_fallback_and_keeps_the_form() {
    let page = spawn_page_without_endpoint();
    let fallback = page.contact_form.settings().fallback_error_message.clone();

    let status = page.contact_form.on_submit_intent(valid_fields()).await;

    assert_eq!(status, SubmissionStatus::Failed(fallback.clone()));
    let view = page.contact_form.view();
    assert_eq!(view.status_region.text, fallback);
    assert!(view.submit_control.enabled);
    assert_eq!(view.fields, valid_fields());
}

#[tokio::test]
async fn invalid_forms_are_never_posted() {
    let app = spawn_page().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.endpoint)
        .await;

    let test_cases = vec![
        (valid_fields().with("name", ""), "missing the name"),
        (valid_fields().with("email", ""), "missing the email"),
        (valid_fields().with("status", ""), "missing the status"),
        (valid_fields().with("email", "foo@bar"), "a malformed email"),
    ];
    for (fields, description) in test_cases {
        let status = app.page.contact_form.on_submit_intent(fields).await;
        assert!(
            status.failure_reason().is_some(),
            "The form was not rejected when it had {description}."
        );
        assert!(app.page.contact_form.view().submit_control.enabled);
    }
}

#[tokio::test]
async fn a_failed_attempt_does_not_affect_the_next_one() {
    let app = spawn_page().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": [{ "message": "Email is invalid" }, { "message": "Try again later" }]
        })))
        .up_to_n_times(1)
        .mount(&app.endpoint)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.endpoint)
        .await;

    let first = app.page.contact_form.on_submit_intent(valid_fields()).await;
    assert_eq!(
        first.failure_reason(),
        Some("Email is invalid, Try again later")
    );

    let second = app.page.contact_form.on_submit_intent(valid_fields()).await;
    assert_eq!(second, SubmissionStatus::Succeeded);
    let view = app.page.contact_form.view();
    assert_eq!(view.status_region.kind, Some(StatusKind::Success));
    assert!(view.submit_control.enabled);
    assert_eq!(app.received_bodies().await.len(), 2);
}
