// Minimal one-shot HTTP server for exercising the real provider client.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Request line the server received, e.g. `GET /api/questions?... HTTP/1.1`
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Answers exactly one request with `status` and `body`, then closes
pub fn serve_once(status: &'static str, body: impl Into<String>) -> OneShotServer {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line.trim_end().to_string()
    });

    OneShotServer {
        url: format!("http://{addr}/api/questions"),
        handle,
    }
}

/// Accepts one connection and never answers
pub fn serve_silence(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(hold);
            drop(stream);
        }
    });
    format!("http://{addr}/api/questions")
}

/// A provider-shaped JSON array with `count` four-answer questions
pub fn records_json(count: usize) -> String {
    let records: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{"category":"Science","id":"q{n}","correctAnswer":"right {n}","incorrectAnswers":["wrong {n}a","wrong {n}b","wrong {n}c"],"question":"Question number {n}?","tags":[],"type":"Multiple Choice","difficulty":"easy","regions":[],"isNiche":false}}"#
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}
