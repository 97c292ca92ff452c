//! Shared helpers for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};

use anyhow::Result;
use pkgscribe::config::LayoutSection;
use pkgscribe::{Generator, Layout};
use tempfile::TempDir;

pub const DOCS_TEMPLATE: &str = "Document the package at ${packageLink}.";
pub const TESTS_TEMPLATE: &str = "Test ${packageLink}.\n---\n${packageDocs}\n---";

/// Generator that records prompts and returns a canned response
pub struct FakeGenerator {
    response: Option<String>,
    pub prompts: RefCell<Vec<String>>,
}

impl FakeGenerator {
    pub fn returning(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            response: None,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.borrow().last().cloned().unwrap_or_default()
    }
}

impl Generator for FakeGenerator {
    fn generate(&self, prompt: &str) -> Result<Option<String>> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Generator that always fails, like an unreachable endpoint
pub struct FailingGenerator;

impl Generator for FailingGenerator {
    fn generate(&self, _prompt: &str) -> Result<Option<String>> {
        anyhow::bail!("connection refused")
    }
}

/// Temp project root with both default templates installed
pub fn project() -> (TempDir, Layout) {
    let tmp = TempDir::new().unwrap();
    let layout = Layout::new(tmp.path(), LayoutSection::default());
    write_file(&layout.docs_prompt(), DOCS_TEMPLATE);
    write_file(&layout.tests_prompt(), TESTS_TEMPLATE);
    (tmp, layout)
}

pub fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Accept one HTTP request, answer it, and return the raw request text
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);

        let reason = match status {
            200 => "OK",
            400 => "Bad Request",
            403 => "Forbidden",
            _ => "Internal Server Error",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (format!("http://{}", addr), handle)
}

fn read_request(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// A generateContent response with one text part
pub fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
