//! HTTP transport abstraction for testability.
//!
//! The fetcher only needs "GET this URL with these query parameters and a
//! timeout". Hiding that behind a trait lets tests replay canned upstream
//! responses without a network.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;

use crate::error::Result;

/// A completed upstream response, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiscoresResponse {
    pub status: u16,
    /// Reason phrase for `status` (e.g. "Not Found")
    pub reason: String,
    /// Full request URL including the query string
    pub url: String,
    pub body: String,
    /// Time from sending the request until the status line and headers
    /// arrived. Reading the body is not included.
    pub elapsed: Duration,
}

impl HiscoresResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

pub trait HiscoresTransport {
    /// Issue a single GET request.
    ///
    /// Implementations must report a timeout as `Error::Timeout` so the
    /// fetcher can classify it as an outage.
    fn get(&self, url: &str, query: &[(&str, &str)], timeout: Duration) -> Result<HiscoresResponse>;
}

/// Blocking reqwest transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl HiscoresTransport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(&str, &str)], timeout: Duration) -> Result<HiscoresResponse> {
        let request = self.client.get(url).query(query).timeout(timeout).build()?;
        let request_url = request.url().to_string();

        let started = Instant::now();
        let response = self.client.execute(request)?;
        let elapsed = started.elapsed();
        let status = response.status();
        let body = response.text()?;

        Ok(HiscoresResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            url: request_url,
            body,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    const BODY_DELAY: Duration = Duration::from_millis(800);

    /// Serve one response whose body trails the headers by `BODY_DELAY`.
    fn serve_slow_body(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).unwrap();
            write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            thread::sleep(BODY_DELAY);
            stream.write_all(body.as_bytes()).unwrap();
        });
        format!("http://{}/index_lite.ws", addr)
    }

    #[test]
    fn test_elapsed_stops_at_headers() {
        let url = serve_slow_body("1,2,3");
        let transport = ReqwestTransport::new("hiscores-test").unwrap();
        let response = transport
            .get(&url, &[("player", "Zezima")], Duration::from_secs(10))
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.reason, "OK");
        assert_eq!(response.body, "1,2,3");
        assert!(response.url.ends_with("/index_lite.ws?player=Zezima"));
        assert!(response.elapsed < BODY_DELAY, "{:?}", response.elapsed);
    }
}
