//! These models represent the objects passed around by the agent
//!
//! The internal message format is deliberately close to, but not the same as,
//! the OpenAI chat completion wire format: tool call arguments are kept as the
//! raw text the provider sent so that decoding happens exactly once, at
//! execution time. Conversion to the wire format lives in `providers::utils`.
pub mod message;
pub mod tool;
