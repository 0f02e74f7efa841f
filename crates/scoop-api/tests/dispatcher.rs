//! Dispatcher wire-contract tests against a mock backend.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scoop_api::{ApiClient, ApiConfig, ApiError};
use scoop_models::{Overlay, Template, TemplateData, TemplateDraft, TextOverlay};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn submit_download_returns_backend_job_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/download"))
        .and(body_json(json!({"url": "https://example.com/v"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "j-123"})))
        .expect(1)
        .mount(&server)
        .await;

    let job_id = client_for(&server)
        .submit_download("https://example.com/v")
        .await
        .unwrap();
    assert_eq!(job_id.as_str(), "j-123");
}

#[tokio::test]
async fn submit_clip_sends_bare_filename_and_omits_absent_fields() {
    let server = MockServer::start().await;

    // output_name is None and must not appear in the body at all.
    Mock::given(method("POST"))
        .and(path("/api/clip"))
        .and(body_json(json!({
            "filename": "v.mp4",
            "start": 1.0,
            "end": 5.0,
            "text": "hi",
            "flip": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "j-clip"})))
        .expect(1)
        .mount(&server)
        .await;

    let job_id = client_for(&server)
        .submit_clip(
            "/downloads/v.mp4",
            1.0,
            5.0,
            Some("hi".to_string()),
            None,
            false,
        )
        .await
        .unwrap();
    assert_eq!(job_id.as_str(), "j-clip");
}

#[tokio::test]
async fn submit_clip_template_sends_full_customization() {
    let server = MockServer::start().await;

    let template = Template {
        name: "promo".to_string(),
        data: TemplateData {
            overlays: vec![Overlay::Text(TextOverlay::placeholder())],
            ..TemplateData::default()
        },
    };
    let draft = TemplateDraft::from_template(&template);

    Mock::given(method("POST"))
        .and(path("/api/clip-template"))
        .and(body_json(json!({
            "filename": "v.mp4",
            "template_name": "promo",
            "custom_overlays": [{
                "type": "text",
                "text": "New Text",
                "x": "(w-text_w)/2",
                "y": "(h-text_h)/2",
                "fontSize": 28,
                "textColor": "white",
                "box": false,
                "boxColor": "black@0.6",
                "shadow": false,
                "stroke": false,
                "strokeColor": "black"
            }],
            "custom_start": 0.0,
            "custom_duration": 10.0,
            "custom_output_name": "promo_{timestamp}.mp4",
            "custom_resolution": "1080:1920",
            "custom_flip": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "j-tpl"})))
        .expect(1)
        .mount(&server)
        .await;

    let job_id = client_for(&server)
        .submit_clip_template("/downloads/v.mp4", &draft)
        .await
        .unwrap();
    assert_eq!(job_id.as_str(), "j-tpl");
}

#[tokio::test]
async fn fetch_clips_decodes_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clips/v.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clips": [{
                "filename": "v/clip_1.mp4",
                "start": 0.0,
                "end": 8.0,
                "text": "",
                "overlays": [],
                "template": "",
                "created_at": 1700000000.0,
                "path": "clips/v/clip_1.mp4"
            }]
        })))
        .mount(&server)
        .await;

    let clips = client_for(&server)
        .fetch_clips("/downloads/v.mp4")
        .await
        .unwrap();
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0].filename, "v/clip_1.mp4");
}

#[tokio::test]
async fn fetch_templates_and_fonts_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "templates": [{"name": "promo", "data": {"overlays": [], "duration": 15.0}}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/fonts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fonts": [{"name": "Inter", "path": "/fonts/Inter.ttf"}]
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let templates = api.fetch_templates().await.unwrap();
    let fonts = api.fetch_fonts().await.unwrap();

    assert_eq!(templates[0].name, "promo");
    assert_eq!(templates[0].data.duration, Some(15.0));
    assert_eq!(fonts[0].name, "Inter");
}

#[tokio::test]
async fn non_success_status_is_surfaced_not_committed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/transcribe"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "filename required"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit_transcribe("missing.mp4")
        .await
        .unwrap_err();
    match err {
        ApiError::UnexpectedStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {:?}", other),
    }
}
