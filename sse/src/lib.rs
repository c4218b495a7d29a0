//! Server-Sent Events (SSE) infrastructure for streamed answers.
//!
//! This crate turns an [`domain::Answer`] into an ordered sequence of typed SSE events and
//! paces them out to a client.
//!
//! # Event sequence
//!
//! 1. `token`: one per whitespace delimited word, data is the word plus a trailing space
//! 2. `citations`: JSON array of citations, non-ASCII characters written literally
//! 3. `final`: the complete answer text
//! 4. `end`: the literal `done`
//!
//! Each event goes out on the wire as `event: <name>\ndata: <payload>\n\n`.
//!
//! # Disconnects
//!
//! The emitter writes into an [`emitter::EventSink`] and checks whether the sink has been
//! closed before every event. A closed sink means the client went away; the emitter stops
//! right there and nothing else is written, trailing `citations`/`final`/`end` included.
//!
//! # Modules
//!
//! - `message`: Type-safe event definitions and the answer to event sequence mapping
//! - `emitter`: Paced producer writing events into a sink

pub mod emitter;
pub mod message;

pub use emitter::{emit_answer, Emission, EventSink, TOKEN_DELAY};
pub use message::{AnswerEvent, EventType};
