//! OpenAI provider.
//!
//! Translates the uniform predict contract into OpenAI's chat-completions
//! request/response shapes.

mod client;
mod config;

pub use client::OpenAiProvider;
pub use config::OpenAiConfig;
