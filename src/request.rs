use crate::error::{ClientError, Result};
use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use std::fmt;
use std::time::{Duration, Instant};

const APPLICATION_JSON: &str = "application/json";

pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn get(url: String) -> Request {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        Request {
            method: Method::GET,
            url,
            headers,
            body: None,
        }
    }

    pub fn put_json(url: String, body: Vec<u8>) -> Request {
        let mut request = Request::get(url);
        request.method = Method::PUT;
        request
            .headers
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        request.body = Some(body);
        request
    }

    /// Sends the request and reads the whole body; `elapsed` covers both.
    pub fn execute(&self, client: &Client) -> Result<Exchange> {
        let mut builder = client
            .request(self.method.clone(), &self.url)
            .headers(self.headers.clone());
        if let Some(body) = &self.body {
            builder = builder.body(body.clone());
        }

        let start_instant = Instant::now();
        let response = builder.send().map_err(|source| ClientError::Network {
            url: self.url.clone(),
            source,
        })?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().map_err(|source| ClientError::ResponseRead {
            url: self.url.clone(),
            source,
        })?;

        Ok(Exchange {
            status,
            headers,
            elapsed: start_instant.elapsed(),
            body: body.to_vec(),
        })
    }

    fn print_request_headers(&self) -> String {
        let mut headers_string_buffer = "".to_string();
        for k in &self.headers {
            headers_string_buffer.push_str(&format!("   {}: {:?}\n", k.0, k.1));
        }
        headers_string_buffer
    }
}

impl fmt::Display for Request {
    fn fmt(&self, dest: &mut fmt::Formatter) -> fmt::Result {
        write!(
            dest,
            "{} {}\nheaders:\n{}\nbody:\n{}",
            self.method,
            self.url,
            self.print_request_headers(),
            match &self.body {
                Some(body) => String::from_utf8_lossy(body).into_owned(),
                None => "".to_string(),
            },
        )
    }
}

/// A completed request: what came back and how long it took.
pub struct Exchange {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub elapsed: Duration,
    pub body: Vec<u8>,
}

impl Exchange {
    pub fn verbose(&self) -> String {
        format!(
            "{} - {:?}\n{}\n{}",
            self.status,
            self.elapsed,
            print_response_headers(&self.headers),
            pretty_print(&self.body)
        )
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, dest: &mut fmt::Formatter) -> fmt::Result {
        write!(
            dest,
            "Time elapsed: {:?} | Response: {}",
            self.elapsed,
            pretty_print(&self.body)
        )
    }
}

fn print_response_headers(h: &HeaderMap) -> String {
    let mut header_buffer = "".to_string();
    for k in h {
        header_buffer.push_str(&format!("{}: {:?}\n", k.0, k.1));
    }
    header_buffer
}

/// Re-indents a JSON body with two spaces, or returns it untouched.
///
/// ```
/// assert_eq!(storeclient::request::pretty_print(br#"{"a":1}"#), "{\n  \"a\": 1\n}");
/// assert_eq!(storeclient::request::pretty_print(b"not json"), "not json");
/// ```
pub fn pretty_print(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match json::parse(&text) {
        Ok(parsed) => json::stringify_pretty(parsed, 2),
        Err(_) => text.into_owned(),
    }
}
