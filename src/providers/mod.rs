//! Built-in vendor provider implementations.
//!
//! Each provider is gated behind its own cargo feature so integrations can be
//! compiled out; the factory reports compiled-out providers as unavailable.

#[cfg(feature = "anthropic")]
pub mod anthropic;
#[cfg(feature = "openai")]
pub mod openai;
