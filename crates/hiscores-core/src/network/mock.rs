//! Mock transport for testing
//!
//! Replays queued responses in order and records every request, so fetcher
//! behaviour can be checked without reaching the real leaderboard.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};
use crate::network::{HiscoresResponse, HiscoresTransport};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub timeout: Duration,
}

enum Reply {
    Response {
        status: u16,
        reason: String,
        body: String,
        elapsed: Duration,
    },
    Error(Error),
}

#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response that arrives immediately.
    pub fn reply(self, status: u16, reason: &str, body: &str) -> Self {
        self.reply_after(status, reason, body, Duration::from_millis(5))
    }

    /// Queue a response that reports the given elapsed time.
    pub fn reply_after(self, status: u16, reason: &str, body: &str, elapsed: Duration) -> Self {
        self.push(Reply::Response {
            status,
            reason: reason.to_string(),
            body: body.to_string(),
            elapsed,
        })
    }

    /// Queue a transport timeout.
    pub fn time_out(self) -> Self {
        self.push(Reply::Error(Error::Timeout("operation timed out".to_string())))
    }

    /// Queue an arbitrary transport error.
    pub fn fail(self, error: Error) -> Self {
        self.push(Reply::Error(error))
    }

    fn push(self, reply: Reply) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    /// Requests issued so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl HiscoresTransport for MockTransport {
    fn get(&self, url: &str, query: &[(&str, &str)], timeout: Duration) -> Result<HiscoresResponse> {
        let request_url = Url::parse_with_params(url, query)
            .map_err(|e| Error::Http(format!("Request error: {}", e)))?
            .to_string();

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: request_url.clone(),
                timeout,
            });
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .ok_or_else(|| Error::Http("MockTransport has no queued reply".to_string()))?;

        match reply {
            Reply::Response {
                status,
                reason,
                body,
                elapsed,
            } => Ok(HiscoresResponse {
                status,
                reason,
                url: request_url,
                body,
                elapsed,
            }),
            Reply::Error(e) => Err(e),
        }
    }
}
