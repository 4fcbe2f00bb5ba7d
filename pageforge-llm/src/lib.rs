//! Generation client for the pageforge toolchain.
//!
//! Two pieces: [`enhance_prompt`] wraps a user's page description in the
//! strict formatting instructions the extractor expects, and
//! [`GenerationClient`] submits the result to an OpenAI-compatible
//! completion endpoint and hands back the raw text. Extraction never sees
//! transport failures; they surface here as [`GenerationError`] and stay the
//! caller's problem.

mod client;
mod prompt;

pub use client::{GenerationClient, GenerationError};
pub use prompt::enhance_prompt;
