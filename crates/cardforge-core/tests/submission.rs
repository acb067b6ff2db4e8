//! Submission tests against a local one-shot HTTP responder.

use std::net::SocketAddr;

use cardforge_core::{
    CardClient, CardConfig, CardError, FormSnapshot, ImageField, SelectedFile,
    SubmissionOutcome, SubmissionState, TextField,
};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ============================================================================
// Test Utilities
// ============================================================================

/// Serve one request with `status` and JSON `body`; resolves to the raw request.
async fn respond_once(status: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (addr, handle)
}

/// Read one full HTTP request (headers plus body).
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_complete(buf: &[u8]) -> bool {
    let text = String::from_utf8_lossy(buf);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let headers = text[..header_end].to_ascii_lowercase();
    let body_len = buf.len() - (header_end + 4);

    let content_length = headers
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok());
    match content_length {
        Some(len) => body_len >= len,
        // Chunked transfer ends with a zero-length chunk
        None => text.ends_with("0\r\n\r\n"),
    }
}

fn client_for(addr: SocketAddr) -> CardClient {
    let config = CardConfig {
        server_url: format!("http://{}", addr),
        timeout_secs: 5,
        ..CardConfig::default()
    };
    CardClient::new(&config).unwrap()
}

fn ada() -> FormSnapshot {
    FormSnapshot::new()
        .with_text(TextField::Fname, "Ada")
        .with_text(TextField::Lname, "Lovelace")
        .with_text(TextField::Title, "Analyst")
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn created_card_displays_link() {
    let (addr, server) = respond_once("200 OK", r#"{"success": true, "url": "https://x/y"}"#).await;
    let client = client_for(addr);

    let mut state = SubmissionState::default();
    assert!(state.begin());
    state.finish(client.submit(&ada()).await);

    assert_eq!(state.link(), Some("https://x/y"));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /create_card HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: multipart/form-data"));
    assert!(request.contains("name=\"fname\"\r\n\r\nAda\r\n"));
    assert!(request.contains("name=\"title\"\r\n\r\nAnalyst\r\n"));
    // Empty fields are still sent, like a browser form
    assert!(request.contains("name=\"pronouns\"\r\n\r\n\r\n"));
    assert!(!request.contains("name=\"footer_credit\""));
}

#[tokio::test]
async fn rejected_card_shows_no_link() {
    let (addr, server) = respond_once("200 OK", r#"{"success": false}"#).await;

    let outcome = client_for(addr).submit(&ada()).await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Rejected { ref errors } if errors.is_empty()));

    let mut state = SubmissionState::default();
    state.begin();
    state.finish(Ok(outcome));
    assert_eq!(state.link(), None);
    server.await.unwrap();
}

#[tokio::test]
async fn validation_errors_survive_bad_request_status() {
    let (addr, server) = respond_once(
        "400 Bad Request",
        r#"{"success": false, "errors": {"lname": ["This field is required."]}}"#,
    )
    .await;

    let outcome = client_for(addr)
        .submit(&FormSnapshot::new().with_text(TextField::Fname, "Ada"))
        .await
        .unwrap();
    let SubmissionOutcome::Rejected { errors } = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(errors["lname"], vec!["This field is required."]);
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_reply_is_invalid_response() {
    let (addr, server) = respond_once("500 Internal Server Error", "oops").await;

    let err = client_for(addr).submit(&ada()).await.unwrap_err();
    match err {
        CardError::InvalidResponse(reason) => assert!(reason.contains("500")),
        other => panic!("unexpected error: {other}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn image_files_are_sent_as_file_parts() {
    let dir = TempDir::new().unwrap();
    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, b"\x89PNG\r\n\x1a\nlogo-bytes").unwrap();

    let (addr, server) = respond_once("200 OK", r#"{"success": true, "url": "https://x/1"}"#).await;
    let mut snapshot = ada().with_image(ImageField::Logo, SelectedFile::new(&logo));
    snapshot.footer_credit = true;

    client_for(addr).submit(&snapshot).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.contains("name=\"logo\"; filename=\"logo.png\""));
    assert!(request.to_ascii_lowercase().contains("content-type: image/png"));
    assert!(request.contains("logo-bytes"));
    assert!(request.contains("name=\"footer_credit\"\r\n\r\ny\r\n"));
}

#[tokio::test]
async fn missing_image_fails_before_sending() {
    let dir = TempDir::new().unwrap();
    let snapshot = ada().with_image(ImageField::Photo, SelectedFile::new(dir.path().join("gone.png")));

    // Nothing listens here; the read error must come first
    let client = client_for("127.0.0.1:9".parse().unwrap());
    let err = client.submit(&snapshot).await.unwrap_err();
    assert!(matches!(err, CardError::ImageRead { ref field, .. } if field == "photo"));
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut state = SubmissionState::default();
    state.begin();
    let result = client_for(addr).submit(&ada()).await;
    assert!(matches!(result, Err(CardError::Http(_))));

    state.finish(result);
    assert!(matches!(state, SubmissionState::Failed { .. }));
}
