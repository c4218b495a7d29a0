//! Domain layer for question answering.
//!
//! Answers are currently fixed demo texts with a single citation. The types here are the
//! contract a retrieval backed implementation will have to fill in: a [`Question`] goes in,
//! an [`Answer`] with its [`Citation`]s comes out. The web layer only ever talks to these
//! types, never to how the answer was produced.

pub mod answer;
pub mod error;
pub mod question;

pub use answer::{Answer, Citation};
pub use question::Question;
