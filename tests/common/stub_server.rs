//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of paths from memory (404 for everything else, unless
//! [`StubServer::serve_everything`] is on) and counts GET requests per path so
//! tests can assert on network access.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone, Default)]
pub struct StubServer {
    base_url: String,
    routes: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    heads: Arc<Mutex<HashMap<String, String>>>,
    catch_all: Arc<AtomicBool>,
}

impl StubServer {
    /// Starts the server on an ephemeral port. It runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let server = StubServer {
            base_url: format!("http://127.0.0.1:{}", port),
            ..Default::default()
        };

        let shared = server.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let shared = shared.clone();
                thread::spawn(move || shared.handle(stream));
            }
        });
        server
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Serve `body` at `/{path}`.
    pub fn serve(&self, path: &str, body: impl Into<Vec<u8>>) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("/{}", path), body.into());
    }

    /// Serve an artifact and its `.sha1` sidecar.
    pub fn serve_artifact(&self, path: &str, body: &[u8], sha1: &str) {
        self.serve(path, body.to_vec());
        self.serve(&format!("{}.sha1", path), sha1.as_bytes().to_vec());
    }

    /// Answer every unknown path with [`generated_body`], and every unknown
    /// `X.sha1` with the digest of X's generated body.
    pub fn serve_everything(&self) {
        self.catch_all.store(true, Ordering::SeqCst);
    }

    pub fn hits(&self, path: &str) -> usize {
        self.hits
            .lock()
            .unwrap()
            .get(&format!("/{}", path))
            .copied()
            .unwrap_or(0)
    }

    /// Request line and headers of the last request for `path`.
    pub fn last_request(&self, path: &str) -> Option<String> {
        self.heads
            .lock()
            .unwrap()
            .get(&format!("/{}", path))
            .cloned()
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    fn handle(&self, mut stream: TcpStream) {
        let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
        let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let request = String::from_utf8_lossy(&request);
        let mut parts = request
            .lines()
            .next()
            .unwrap_or_default()
            .split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        if method == "GET" {
            *self.hits.lock().unwrap().entry(path.clone()).or_default() += 1;
        }
        self.heads
            .lock()
            .unwrap()
            .insert(path.clone(), request.to_string());

        let body = self
            .routes
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .or_else(|| self.generated(&path));
        let (status, body) = match body {
            Some(body) => ("200 OK", body),
            None => ("404 Not Found", b"not found".to_vec()),
        };

        let header = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        );
        let _ = stream.write_all(header.as_bytes());
        let _ = stream.write_all(&body);
        let _ = stream.flush();
    }

    fn generated(&self, path: &str) -> Option<Vec<u8>> {
        if !self.catch_all.load(Ordering::SeqCst) {
            return None;
        }
        let path = path.trim_start_matches('/');
        Some(match path.strip_suffix(".sha1") {
            Some(artifact) => sha1_hex(&generated_body(artifact)).into_bytes(),
            None => generated_body(path),
        })
    }
}

/// Body served for `path` when the server answers every request.
pub fn generated_body(path: &str) -> Vec<u8> {
    format!("generated artifact {path}").into_bytes()
}

pub fn sha1_hex(bytes: &[u8]) -> String {
    use sha1::{Digest, Sha1};
    hex::encode(Sha1::digest(bytes))
}
