use crate::params::ask::StreamParams;
use crate::response::ErrorResponse;
use crate::Error;
use ::sse::{emit_answer, AnswerEvent, Emission, TOKEN_DELAY};
use async_stream::stream;
use axum::extract::Query;
use axum::http::{header, HeaderName, HeaderValue};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use domain::{answer as AnswerApi, Question};
use futures::Stream;
use log::*;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::mpsc;

/// GET stream an answer word by word as server-sent events
#[utoipa::path(
    get,
    path = "/ask/stream",
    params(StreamParams),
    responses(
        (status = 200, description = "Event stream: token*, citations, final, end", content_type = "text/event-stream", body = String),
        (status = 400, description = "top_k is not an integer", body = ErrorResponse),
    )
)]
pub(crate) async fn ask_stream(
    Query(params): Query<StreamParams>,
) -> Result<impl IntoResponse, Error> {
    let question = Question::try_from(params)?;
    debug!(
        "GET ask stream, question: {:?}, top_k: {}",
        question.text, question.top_k
    );

    let answer = AnswerApi::stream_answer(&question);
    let events = AnswerEvent::sequence(&answer)?;

    let body = Sse::new(answer_stream(events, TOKEN_DELAY)).keep_alive(KeepAlive::default());
    Ok((stream_headers(), body))
}

/// Headers that keep caches and proxies from buffering or rewriting the stream.
fn stream_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/event-stream; charset=utf-8"),
        ),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-transform"),
        ),
        (header::CONNECTION, HeaderValue::from_static("keep-alive")),
        (
            HeaderName::from_static("x-accel-buffering"),
            HeaderValue::from_static("no"),
        ),
    ]
}

/// Spawns the emitter as a producer task and returns the receiving side as a stream.
///
/// When the client goes away the response body, and with it the receiver, is dropped.
/// The emitter sees the closed channel before its next event and stops.
fn answer_stream(
    events: Vec<AnswerEvent>,
    token_delay: Duration,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Result<Event, Infallible>>();

    tokio::spawn(async move {
        match emit_answer(&tx, events, token_delay).await {
            Emission::Completed { tokens } => {
                debug!("Answer stream completed after {tokens} tokens")
            }
            Emission::Disconnected { tokens_sent } => {
                info!("Answer stream client disconnected after {tokens_sent} tokens")
            }
        }
    });

    stream! {
        while let Some(event) = rx.recv().await {
            yield event;
        }
    }
}
