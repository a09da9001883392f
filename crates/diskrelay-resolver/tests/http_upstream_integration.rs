//! Integration test driving the reqwest-backed upstream client against a
//! minimal local HTTP server.

use diskrelay_resolver::{HttpUpstreamClient, UpstreamClient};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use url::Url;

/// Starts a server in a background thread that answers `/ok` with a JSON
/// direct link and everything else with 404. Returns the base URL. The
/// server runs until the process exits.
fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).to_string();
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (status_line, body) = if path.starts_with("/ok") {
        (
            "HTTP/1.1 200 OK",
            r#"{"href":"https://downloader.test/file.bin"}"#,
        )
    } else {
        ("HTTP/1.1 404 Not Found", r#"{"error":"DiskNotFoundError"}"#)
    };

    let response = format!(
        "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

#[tokio::test]
async fn fetch_returns_status_and_body() {
    let base = start_server();
    let client = HttpUpstreamClient::new(Duration::from_secs(2)).unwrap();

    let url = Url::parse(&format!("{}/ok", base)).unwrap();
    let response = client.fetch(&url).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.body, r#"{"href":"https://downloader.test/file.bin"}"#);
}

#[tokio::test]
async fn fetch_surfaces_error_statuses_as_responses() {
    let base = start_server();
    let client = HttpUpstreamClient::new(Duration::from_secs(2)).unwrap();

    let url = Url::parse(&format!("{}/gone", base)).unwrap();
    let response = client.fetch(&url).await.unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn fetch_fails_on_unreachable_host() {
    // Bind then drop a listener so the port is closed.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = HttpUpstreamClient::new(Duration::from_secs(2)).unwrap();

    let url = Url::parse(&format!("http://127.0.0.1:{}/ok", port)).unwrap();
    assert!(client.fetch(&url).await.is_err());
}
