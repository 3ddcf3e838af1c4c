//! Minimal scripted HTTP server for integration tests.
//!
//! The server plays back a fixed sequence of canned responses, one per
//! connection, and records every request it receives so tests can assert on
//! headers and bodies. Responses carry `Connection: close`, so each client
//! request opens a fresh connection and consumes the next response in the
//! script (the last response repeats once the script is exhausted).
//!
//! The literal `{{base}}` in a scripted response is replaced with the
//! server's own base URL, which is only known after binding. This lets a
//! script emit an `Operation-Location` header that points back at itself.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

static TRACING: Once = Once::new();

/// Route crate logs through the test harness so failing tests print them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub struct StubServer {
    addr: std::net::SocketAddr,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Bind a local listener and serve the scripted responses.
    pub async fn spawn(responses: Vec<String>) -> Self {
        init_tracing();
        assert!(!responses.is_empty(), "script needs at least one response");

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let responses: Vec<String> = responses
            .into_iter()
            .map(|response| response.replace("{{base}}", &format!("http://{addr}")))
            .collect();
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let task_hits = Arc::clone(&hits);
        let task_requests = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let index = task_hits.fetch_add(1, Ordering::SeqCst);
                let response = responses[index.min(responses.len() - 1)].clone();
                let requests = Arc::clone(&task_requests);
                tokio::spawn(async move {
                    let request = read_request(&mut stream).await;
                    requests.lock().await.push(request);
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            addr,
            hits,
            requests,
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for a path on the server.
    pub fn url_for(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Number of connections accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Every request received so far, as raw HTTP text.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

/// Read one HTTP request (headers plus any Content-Length body) as text.
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let Ok(n) = stream.read(&mut chunk).await else {
            break;
        };
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buffer);
        let Some(header_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let body_len = content_length(&text);
        if buffer.len() >= header_end + 4 + body_len {
            break;
        }
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

fn content_length(request: &str) -> usize {
    request
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0)
}

/// A response with a JSON body.
pub fn json_response(status: u16, body: &str) -> String {
    response_with_headers(status, &[("Content-Type", "application/json")], body)
}

/// A response with no body.
pub fn empty_response(status: u16) -> String {
    response_with_headers(status, &[], "")
}

/// A response with arbitrary extra headers and a body.
pub fn response_with_headers(status: u16, headers: &[(&str, &str)], body: &str) -> String {
    let reason = match status {
        200 => "OK",
        202 => "Accepted",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let mut response = format!("HTTP/1.1 {status} {reason}\r\n");
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ));
    response
}
