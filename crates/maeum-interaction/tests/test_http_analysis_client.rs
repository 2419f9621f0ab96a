use maeum_core::analysis::{AnalysisClient, AnalysisRequest};
use maeum_core::persona::PersonaId;
use maeum_core::upload::UploadedDrawing;
use maeum_interaction::HttpAnalysisClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const RESPONSE_JSON: &str = r##"{
    "analysis_result": {
        "mind_expression": "따뜻한 마음",
        "persona_mind_sentence": "마음이 따뜻하구나",
        "persona_energy_sentence": "즐거움 85.0%가 가장 높아요",
        "word_cloud": ["행복", "설렘", "호기심", "평온", "용기"],
        "top_5_colors": ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF"],
        "energy_chart": {"joyful": 85.0, "curious": 70.0, "sparkle": 55.5, "rest": 30.0, "spacing_out": 12.0}
    },
    "character_commentary": "전체",
    "commentary_sections": [
        {"title": "인트로", "content": "안녕"},
        {"title": "키워드", "content": "키워드"},
        {"title": "에너지", "content": "에너지"},
        {"title": "솔루션 1", "content": "하나"},
        {"title": "솔루션 2", "content": "둘"}
    ]
}"##;

/// Serves exactly one request with the given status and body and hands back
/// the raw request bytes.
async fn spawn_backend(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {} TEST\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());

    match content_length {
        Some(length) => {
            while buf.len() < header_end + length {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body was complete");
                buf.extend_from_slice(&chunk[..n]);
            }
        }
        // Chunked transfer: read until the terminating zero-length chunk.
        None => {
            while !buf.ends_with(b"0\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body was complete");
                buf.extend_from_slice(&chunk[..n]);
            }
        }
    }

    buf
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn two_drawings_for_labong() -> AnalysisRequest {
    AnalysisRequest::new(
        vec![
            UploadedDrawing::new("house.png", "image/png", b"PNGDATA".to_vec()),
            UploadedDrawing::new("sun.jpg", "image/jpeg", b"JPGDATA".to_vec()),
        ],
        PersonaId::Labong,
    )
}

#[tokio::test]
async fn test_request_carries_two_files_and_one_persona() {
    let (base_url, server) = spawn_backend(200, RESPONSE_JSON).await;
    let client = HttpAnalysisClient::new(base_url);

    let response = client
        .analyze(&two_drawings_for_labong())
        .await
        .expect("Should analyze");
    let raw = server.await.unwrap();

    assert!(raw.starts_with("POST /api/analyze HTTP/1.1\r\n"), "{}", raw);
    assert!(
        raw.to_lowercase()
            .contains("content-type: multipart/form-data")
    );
    assert_eq!(raw.matches("name=\"files\"").count(), 2);
    assert_eq!(raw.matches("name=\"persona\"").count(), 1);
    assert!(raw.contains("filename=\"house.png\""));
    assert!(raw.contains("filename=\"sun.jpg\""));
    assert!(raw.contains("PNGDATA"));
    assert!(raw.contains("JPGDATA"));
    assert!(raw.contains("\r\n\r\n현실친구 라봉이\r\n"));

    assert_eq!(response.analysis_result.word_cloud.len(), 5);
    assert_eq!(response.analysis_result.top_5_colors[0], "#FF0000");
    assert_eq!(response.analysis_result.energy_chart.joyful, 85.0);
    assert_eq!(response.commentary_sections.len(), 5);
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let (base_url, server) = spawn_backend(500, r#"{"detail":"boom"}"#).await;
    let client = HttpAnalysisClient::new(base_url);

    let err = client.analyze(&two_drawings_for_labong()).await.unwrap_err();
    server.await.unwrap();

    match &err {
        maeum_core::MaeumError::Http { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_backend_failure());
}

#[tokio::test]
async fn test_malformed_payload_is_backend_failure() {
    let (base_url, server) = spawn_backend(200, r#"{"unexpected": true}"#).await;
    let client = HttpAnalysisClient::new(base_url);

    let err = client.analyze(&two_drawings_for_labong()).await.unwrap_err();
    server.await.unwrap();

    assert!(err.is_serialization());
    assert!(err.is_backend_failure());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Grab a free port, then close it again.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = HttpAnalysisClient::new(base_url);
    let err = client.analyze(&two_drawings_for_labong()).await.unwrap_err();

    assert!(
        matches!(err, maeum_core::MaeumError::Network(_)),
        "{:?}",
        err
    );
}
