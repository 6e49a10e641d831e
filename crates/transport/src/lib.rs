//! The HTTP transport for the personal-site chat service.
//!
//! The remote service is operated by a third party and has been observed
//! to answer in two shapes: an event-stream-framed text body delivered in
//! one piece, or a plain JSON object. [`RemoteChat`] hides that
//! variability behind the [`ChatBackend`] contract and converts every
//! failure into a readable diagnostic reply, so the conversation never
//! looks hung to the person on the other side.

#[macro_use]
extern crate tracing;

mod config;
mod normalize;
mod proto;

use std::sync::Arc;

use reqwest::{Client, StatusCode, header};
use sitechat_chat::{ChatBackend, FailureKind, Reply};

pub use config::ServiceConfig;

/// HTTP client for the remote chat service.
#[derive(Clone, Debug)]
pub struct RemoteChat {
    client: Client,
    config: Arc<ServiceConfig>,
}

impl RemoteChat {
    /// Creates a new `RemoteChat` with the given configuration.
    #[inline]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Issues one best-effort health check to pre-warm the service.
    ///
    /// The deployment scales to zero when idle and takes a moment to
    /// answer its first chat request, so callers fire this as soon as
    /// they start. Failures are logged and swallowed; this never blocks
    /// or breaks anything, and there is no retry.
    pub async fn wake(&self) {
        let url = format!("{}/healthz", self.config.base_url());
        match self.client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => {
                debug!("chat service is awake");
            }
            Ok(resp) => {
                warn!("health check answered {}", resp.status());
            }
            Err(err) => {
                warn!("health check failed: {err}");
            }
        }
    }
}

impl ChatBackend for RemoteChat {
    fn send_prompt(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Reply> + Send + 'static {
        let request = proto::ChatRequest {
            prompt: prompt.to_owned(),
        };
        let resp_fut = self
            .client
            .post(format!("{}/chat", self.config.base_url()))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send();

        async move {
            let resp = match resp_fut.await {
                Ok(resp) => resp,
                Err(err) => return connect_failure(&err),
            };

            let status = resp.status();
            let body = match resp.text().await {
                Ok(body) => body,
                Err(err) => {
                    warn!("failed to read the response body: {err}");
                    return Reply::diagnostic(
                        FailureKind::Connection,
                        format!("Connection error: {err}"),
                    );
                }
            };

            if !status.is_success() {
                return status_failure(status, &body);
            }

            debug!(len = body.len(), "got a chat response");
            normalize::normalize_body(&body)
        }
    }
}

fn connect_failure(err: &reqwest::Error) -> Reply {
    warn!("chat request failed: {err}");
    if err.is_connect() {
        Reply::diagnostic(
            FailureKind::Network,
            "Network error: unable to reach the chat server. Please check \
             your internet connection.",
        )
    } else {
        Reply::diagnostic(
            FailureKind::Connection,
            format!("Connection error: {err}"),
        )
    }
}

fn status_failure(status: StatusCode, body: &str) -> Reply {
    warn!("chat request answered {status}");
    let reason = status.canonical_reason().unwrap_or("unknown status");
    Reply::diagnostic(
        FailureKind::Status,
        format!(
            "Chat request failed ({}): {reason}. Response: {}...",
            status.as_u16(),
            normalize::snippet(body),
        ),
    )
}

#[cfg(test)]
mod tests {
    use sitechat_chat::ReplyKind;

    use super::*;

    fn remote_for(server: &mockito::Server) -> RemoteChat {
        RemoteChat::new(ServiceConfig::with_base_url(server.url()))
    }

    #[tokio::test]
    async fn test_json_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"prompt": "Hi"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"hi there"}"#)
            .create();

        let reply = remote_for(&server).send_prompt("Hi").await;

        mock.assert();
        assert_eq!(reply.kind(), ReplyKind::Answer);
        assert_eq!(reply.text(), "hi there");
    }

    #[tokio::test]
    async fn test_event_stream_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body("data: Hel\ndata: lo\ndata: end")
            .create();

        let reply = remote_for(&server).send_prompt("Hi").await;

        mock.assert();
        assert_eq!(reply.text(), "Hello");
    }

    #[tokio::test]
    async fn test_error_status_names_the_evidence() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .with_status(500)
            .with_body("internal error")
            .create();

        let reply = remote_for(&server).send_prompt("Hi").await;

        mock.assert();
        assert_eq!(reply.kind(), ReplyKind::Diagnostic(FailureKind::Status));
        assert!(reply.text().contains("500"));
        assert!(reply.text().contains("internal error"));
    }

    #[tokio::test]
    async fn test_connection_refused_becomes_a_reply() {
        // Bind a port and drop it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let remote = RemoteChat::new(ServiceConfig::with_base_url(format!(
            "http://{addr}"
        )));
        let reply = remote.send_prompt("Hi").await;

        assert_eq!(
            reply.kind(),
            ReplyKind::Diagnostic(FailureKind::Network)
        );
        assert!(!reply.text().is_empty());
    }

    #[tokio::test]
    async fn test_wake_is_best_effort() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/healthz")
            .with_status(500)
            .create();

        // A failing health check must not panic or surface anything.
        remote_for(&server).wake().await;
        mock.assert();
    }

    #[tokio::test]
    async fn test_wake_survives_a_dead_host() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let remote = RemoteChat::new(ServiceConfig::with_base_url(format!(
            "http://{addr}"
        )));
        remote.wake().await;
    }
}
