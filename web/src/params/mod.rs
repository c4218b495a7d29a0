//! This module holds typed parameters for various endpoint inputs.
//!
//! By using typed parameters, inputs are validated (by type) and correctly formatted before
//! they are processed by the application logic. Each parameter type converts into the
//! `domain` type the handlers work with.

pub(crate) mod ask;
