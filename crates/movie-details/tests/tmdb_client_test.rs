//! `TmdbClient` against a local listener that answers one request with a canned response.

use movie_details::clients::{MovieApi, TmdbClient};
use movie_details::config::TmdbConfig;
use movie_details::error::ApiError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one HTTP response and hands back the raw request head.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/3", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}

#[tokio::test]
async fn test_fetch_sends_auth_and_decodes_record() {
    let body = r#"{"id": 438631, "title": "Dune", "runtime": 155, "budget": 165000000, "genres": [{"id": 878, "name": "Sci-Fi"}]}"#;
    let (base_url, server) = serve_once("200 OK", body).await;

    let client = TmdbClient::new(TmdbConfig::new(base_url).with_api_key("secret-token")).unwrap();
    let movie = client.fetch_movie_details("438631").await.unwrap();

    assert_eq!(movie.title, "Dune");
    assert_eq!(movie.runtime, Some(155));

    let request = server.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /3/movie/438631 http/1.1"), "{request}");
    assert!(request.contains("authorization: bearer secret-token"), "{request}");
    assert!(request.contains("accept: application/json"), "{request}");
}

#[tokio::test]
async fn test_not_found_status() {
    let (base_url, server) = serve_once("404 Not Found", r#"{"success": false}"#).await;

    let client = TmdbClient::new(TmdbConfig::new(base_url)).unwrap();
    let result = client.fetch_movie_details("0").await;

    assert!(matches!(result, Err(ApiError::NotFound(id)) if id == "0"));
    let request = server.await.unwrap().to_lowercase();
    assert!(!request.contains("authorization:"), "{request}");
}

#[tokio::test]
async fn test_unauthorized_status() {
    let (base_url, _server) = serve_once("401 Unauthorized", r#"{"success": false}"#).await;

    let client = TmdbClient::new(TmdbConfig::new(base_url).with_api_key("wrong")).unwrap();
    let result = client.fetch_movie_details("1").await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_server_error_status() {
    let (base_url, _server) = serve_once("503 Service Unavailable", "{}").await;

    let client = TmdbClient::new(TmdbConfig::new(base_url)).unwrap();
    match client.fetch_movie_details("1").await {
        Err(ApiError::Status { status, reason }) => {
            assert_eq!(status, 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (base_url, _server) = serve_once("200 OK", r#"{"no_title": true}"#).await;

    let client = TmdbClient::new(TmdbConfig::new(base_url)).unwrap();
    let result = client.fetch_movie_details("1").await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}
