//! 端到端路由测试
//!
//! 用 FakeSpeechClient 驱动完整管线，逐条验证 HTTP 行为：
//! 播放页、下载附件、各类带内拒绝、音频端点的命中与 404

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use docx_rs::{Docx, Paragraph, Run};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::util::ServiceExt;

use lector::infrastructure::http::{create_routes, AppState};
use lector::infrastructure::speech::FakeSpeechClient;
use lector::infrastructure::storage::{is_generated_audio_name, TempFileStore};

const BOUNDARY: &str = "----lector-test-boundary";

struct TestApp {
    router: Router,
    synthesizer: Arc<FakeSpeechClient>,
    _scratch: TempDir,
    scratch_path: std::path::PathBuf,
}

async fn test_app() -> TestApp {
    let scratch = TempDir::new().unwrap();
    let scratch_path = scratch.path().to_path_buf();
    let store = Arc::new(TempFileStore::new(scratch.path()).await.unwrap());
    let synthesizer = Arc::new(FakeSpeechClient::with_defaults());
    let state = Arc::new(AppState::new(store, synthesizer.clone()));

    TestApp {
        router: create_routes().with_state(state),
        synthesizer,
        _scratch: scratch,
        scratch_path,
    }
}

/// 生成一个真实的 .docx 文件内容
fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for p in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
    }
    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

enum Part<'a> {
    File { name: &'a str, filename: &'a str, data: &'a [u8] },
    Text { name: &'a str, value: &'a str },
}

/// 手工拼一个 multipart/form-data 请求体
fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::File { name, filename, data } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
                body.extend_from_slice(b"\r\n");
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_string(response: axum::response::Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// 从播放页 HTML 中取出生成的音频文件名
fn audio_name_from_player(html: &str) -> String {
    let start = html.find("/audio/").expect("player page references /audio/") + "/audio/".len();
    let rest = &html[start..];
    let end = rest.find('"').expect("audio src is quoted");
    rest[..end].to_string()
}

fn mp3_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".mp3"))
        .collect()
}

#[tokio::test]
async fn test_play_returns_player_page_and_audio_is_served() {
    let app = test_app().await;
    let document = docx_bytes(&["Hello", "World"]);

    let response = app
        .router
        .clone()
        .oneshot(upload_request(&[
            Part::File {
                name: "file",
                filename: "greeting.docx",
                data: &document,
            },
            Part::Text {
                name: "action",
                value: "play",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<audio"));

    let audio_name = audio_name_from_player(&html);
    assert!(is_generated_audio_name(&audio_name));

    // 播放页引用的文件可以从 /audio/{filename} 取回
    let audio_response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/audio/{}", audio_name))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(audio_response.status(), StatusCode::OK);
    assert_eq!(
        audio_response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap(),
        "audio/mpeg"
    );
    assert_eq!(body_bytes(audio_response).await, app.synthesizer.audio_bytes());

    // 合成收到规范化后的文本和默认音色
    let requests = app.synthesizer.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].text, "Hello World");
    assert_eq!(requests[0].voice, "ru-RU-DmitryNeural");
}

#[tokio::test]
async fn test_download_returns_attachment_with_fixed_name() {
    let app = test_app().await;
    let document = docx_bytes(&["Текст для скачивания в виде файла"]);

    let response = app
        .router
        .clone()
        .oneshot(upload_request(&[
            Part::File {
                name: "file",
                filename: "story.docx",
                data: &document,
            },
            Part::Text {
                name: "action",
                value: "download",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "audio/mpeg"
    );

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    // RFC 5987 编码的固定本地化文件名
    assert!(disposition.contains(
        "filename*=UTF-8''%D1%80%D0%B5%D1%87%D1%8C_%D1%80%D0%BE%D0%B1%D0%BE%D1%82%D0%B0.mp3"
    ));

    let audio = body_bytes(response).await;
    assert!(!audio.is_empty());
    assert_eq!(audio, app.synthesizer.audio_bytes());
}

#[tokio::test]
async fn test_custom_voice_passed_through() {
    let app = test_app().await;
    let document = docx_bytes(&["Пример текста другим голосом"]);

    let response = app
        .router
        .clone()
        .oneshot(upload_request(&[
            Part::File {
                name: "file",
                filename: "voices.docx",
                data: &document,
            },
            Part::Text {
                name: "voice",
                value: "ru-RU-SvetlanaNeural",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.synthesizer.requests()[0].voice, "ru-RU-SvetlanaNeural");
}

#[tokio::test]
async fn test_unsupported_extension_is_in_band_message() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(upload_request(&[Part::File {
            name: "file",
            filename: "notes.txt",
            data: b"plain text content",
        }]))
        .await
        .unwrap();

    // 预期内的拒绝都是 200 + 文案，不是错误状态码
    assert_eq!(response.status(), StatusCode::OK);
    let message = body_string(response).await;
    assert!(message.contains("PDF и Word"));

    // 提取和合成都未被调用，也没有生成音频
    assert!(app.synthesizer.requests().is_empty());
    assert!(mp3_files(&app.scratch_path).is_empty());
}

#[tokio::test]
async fn test_empty_document_is_in_band_message() {
    let app = test_app().await;
    let document = docx_bytes(&["", "  "]);

    let response = app
        .router
        .clone()
        .oneshot(upload_request(&[Part::File {
            name: "file",
            filename: "scan.docx",
            data: &document,
        }]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let message = body_string(response).await;
    assert!(message.contains("пустой или текст не распознан"));
    assert!(app.synthesizer.requests().is_empty());
}

#[tokio::test]
async fn test_missing_file_field_is_in_band_message() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(upload_request(&[Part::Text {
            name: "voice",
            value: "ru-RU-DmitryNeural",
        }]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let message = body_string(response).await;
    assert!(message.contains("Файл не выбран"));
}

#[tokio::test]
async fn test_missing_audio_returns_404_with_body() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/audio/01234567-89ab-4cde-8f01-23456789abcd.mp3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_traversal_shaped_audio_name_returns_404() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/audio/..%2F..%2Fetc%2Fpasswd")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_renders_upload_form() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("action=\"/upload\""));
    assert!(html.contains("ru-RU-DmitryNeural"));
    assert!(html.contains("ru-RU-SvetlanaNeural"));
    assert!(html.contains("ru-RU-DariyaNeural"));
}

#[tokio::test]
async fn test_ping() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"ok\""));
}
