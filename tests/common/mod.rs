#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use fundraising_standings::config::Config;

pub const FIXTURE_PAGE: &str = include_str!("../fixtures/minimal_team_page.html");

/// Loopback HTTP server answering every request with the same status and body.
pub struct PageServer {
    pub base_url: String,
    pub requested_paths: Arc<Mutex<Vec<String>>>,
}

pub async fn serve_page(status: u16, body: &str) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requested_paths = Arc::new(Mutex::new(Vec::new()));
    let paths = Arc::clone(&requested_paths);
    let body = body.to_string();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else { break };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let request = String::from_utf8_lossy(&request);
            if let Some(path) = request.split_whitespace().nth(1) {
                paths.lock().unwrap().push(path.to_string());
            }

            let response = format!(
                "HTTP/1.1 {} Status\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    PageServer {
        base_url: format!("http://{}/wisconsin/Team/View", addr),
        requested_paths,
    }
}

pub fn template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Config pointing at a local page server with every notify option set.
pub fn test_config(base_url: &str) -> Config {
    Config {
        team_page_base_url: base_url.to_string(),
        template_path: Some(template_dir().to_string_lossy().into_owned()),
        email_sender: Some("hi@example.com".to_string()),
        email_recipient: Some("bob@example.com".to_string()),
        timezone: Some("America/Chicago".to_string()),
        score_table_name: Some("test_table".to_string()),
        ..Config::default()
    }
}
