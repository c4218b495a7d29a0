use crate::message::{AnswerEvent, EventType};
use axum::response::sse::Event;
use log::*;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Pause after each `token` event.
pub const TOKEN_DELAY: Duration = Duration::from_millis(30);

/// Destination of emitted events.
pub trait EventSink {
    /// True once the receiving side is gone and nothing more can be delivered.
    fn is_closed(&self) -> bool;

    /// Delivers one event. Returns false if the receiving side is gone.
    fn send(&self, event: AnswerEvent) -> bool;
}

impl EventSink for UnboundedSender<Result<Event, Infallible>> {
    fn is_closed(&self) -> bool {
        UnboundedSender::is_closed(self)
    }

    fn send(&self, event: AnswerEvent) -> bool {
        UnboundedSender::send(self, Ok(event.into_event())).is_ok()
    }
}

/// How an emission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Every event was delivered.
    Completed { tokens: usize },
    /// The sink closed early. Nothing was written after the disconnect was seen.
    Disconnected { tokens_sent: usize },
}

/// Writes `events` into `sink` in order, awaiting `token_delay` after each `token` event.
///
/// The sink is checked before every event. Once it reports closed, emission stops and the
/// remaining events, trailing `citations`/`final`/`end` included, are dropped.
pub async fn emit_answer<S>(sink: &S, events: Vec<AnswerEvent>, token_delay: Duration) -> Emission
where
    S: EventSink + ?Sized,
{
    let mut tokens_sent = 0;

    for event in events {
        if sink.is_closed() {
            debug!("SSE client disconnected after {tokens_sent} tokens, dropping remaining events");
            return Emission::Disconnected { tokens_sent };
        }

        let is_token = event.is_token();
        let event_type = event.event_type();
        if !sink.send(event) {
            debug!("SSE client disconnected while sending {event_type} event");
            return Emission::Disconnected { tokens_sent };
        }

        if is_token {
            tokens_sent += 1;
            tokio::time::sleep(token_delay).await;
        }
    }

    Emission::Completed {
        tokens: tokens_sent,
    }
}
