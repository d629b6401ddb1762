//! In-process stand-in for the cxg.de api. Each stub answers a single
//! request with a canned response and hands the request it saw back to the
//! test.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is json")
    }
}

pub struct StubServer {
    url: String,
    requests: mpsc::Receiver<RecordedRequest>,
}

impl StubServer {
    /// Answers the first request with `status` and a JSON `body`.
    pub fn respond(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::spawn(move |mut stream| {
            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        })
    }

    /// Reads the request and then never answers.
    pub fn silent(hold: Duration) -> Self {
        Self::spawn(move |_stream| thread::sleep(hold))
    }

    fn spawn<F>(answer: F) -> Self
    where
        F: FnOnce(TcpStream) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let url = format!("http://{}", listener.local_addr().expect("listener addr"));
        let (tx, requests) = mpsc::channel();
        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
            if let Some(request) = read_request(&stream) {
                let _ = tx.send(request);
            }
            answer(stream);
        });
        Self { url, requests }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request the stub received.
    pub fn request(&self) -> RecordedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub received a request")
    }

    pub fn saw_request(&self) -> bool {
        self.requests.try_recv().is_ok()
    }
}

/// A base url nothing is listening on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let url = format!("http://{}", listener.local_addr().expect("listener addr"));
    drop(listener);
    url
}

fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);

    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        let (name, value) = line.split_once(':')?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).ok()?;

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}
