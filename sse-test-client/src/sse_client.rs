use anyhow::Result;
use eventsource_client::{self as es, Client, ReconnectOptions};
use futures_util::stream::StreamExt;
use log::*;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Name of the event that closes an answer stream.
pub const END_EVENT: &str = "end";

#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub data: String,
    pub timestamp: Instant,
}

impl Event {
    pub fn new(event_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            data: data.into(),
            timestamp: Instant::now(),
        }
    }
}

pub struct Connection {
    event_rx: mpsc::UnboundedReceiver<Event>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Connection {
    /// Opens `GET /ask/stream` for `question` and forwards every received event.
    pub async fn establish(base_url: &str, question: &str, lang: &str, top_k: i64) -> Result<Self> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/ask/stream", base_url),
            &[
                ("question", question.to_string()),
                ("lang", lang.to_string()),
                ("top_k", top_k.to_string()),
            ],
        )?;
        let (tx, rx) = mpsc::unbounded_channel();

        // The server closes the stream after `end`, reconnecting would replay the answer.
        let client = es::ClientBuilder::for_url(url.as_str())?
            .reconnect(ReconnectOptions::reconnect(false).build())
            .build();

        let handle = tokio::spawn(async move {
            let mut stream = client.stream();

            loop {
                match stream.next().await {
                    Some(Ok(es::SSE::Event(event))) => {
                        let is_end = event.event_type == END_EVENT;
                        let sse_event = Event::new(event.event_type, event.data);

                        if tx.send(sse_event).is_err() {
                            debug!("SSE receiver dropped");
                            break;
                        }
                        if is_end {
                            break;
                        }
                    }
                    Some(Ok(_)) => {
                        // Keep-alive comments
                    }
                    Some(Err(e)) => {
                        warn!("SSE error: {}", e);
                        break;
                    }
                    None => {
                        debug!("SSE stream ended");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            event_rx: rx,
            _handle: handle,
        })
    }

    /// Collects events up to and including `end`.
    pub async fn collect_until_end(&mut self, timeout: Duration) -> Result<Vec<Event>> {
        let deadline = Instant::now() + timeout;
        let mut events = Vec::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                anyhow::bail!("Timeout after {} events waiting for end", events.len());
            }

            match tokio::time::timeout(remaining, self.event_rx.recv()).await {
                Ok(Some(event)) => {
                    let is_end = event.event_type == END_EVENT;
                    events.push(event);
                    if is_end {
                        return Ok(events);
                    }
                }
                Ok(None) => {
                    anyhow::bail!("SSE connection closed after {} events", events.len());
                }
                Err(_) => {
                    anyhow::bail!("Timeout after {} events waiting for end", events.len());
                }
            }
        }
    }
}
