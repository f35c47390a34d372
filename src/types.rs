//! Core type definitions: tasks, capabilities, and prediction payloads.
//!
//! The task set is closed and process-wide constant. A capability pairs a
//! single task with the data formats a model accepts for it; duplicate vendor
//! catalog entries produce one [`crate::model::Model`] per task.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A fixed category of AI inference behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    // Text tasks
    TextGeneration,
    Chat,
    Translation,
    Summarization,
    TextClassification,
    // Vision tasks
    ImageClassification,
    ObjectDetection,
    ImageGeneration,
    // Audio tasks
    SpeechToText,
    TextToSpeech,
    AudioClassification,
    // Multimodal tasks
    VisualQa,
    ImageCaptioning,
}

impl TaskType {
    /// Stable string identifier, matching the serialized form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TextGeneration => "text_generation",
            Self::Chat => "chat",
            Self::Translation => "translation",
            Self::Summarization => "summarization",
            Self::TextClassification => "text_classification",
            Self::ImageClassification => "image_classification",
            Self::ObjectDetection => "object_detection",
            Self::ImageGeneration => "image_generation",
            Self::SpeechToText => "speech_to_text",
            Self::TextToSpeech => "text_to_speech",
            Self::AudioClassification => "audio_classification",
            Self::VisualQa => "visual_qa",
            Self::ImageCaptioning => "image_captioning",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pairing of a supported task with the accepted data formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCapability {
    /// The single task this capability covers
    pub supported_task: TaskType,
    /// Accepted input/output format identifiers, in provider order
    pub supported_formats: Vec<String>,
}

impl ModelCapability {
    /// Create a capability for one task
    pub fn new<I, S>(supported_task: TaskType, supported_formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported_task,
            supported_formats: supported_formats.into_iter().map(Into::into).collect(),
        }
    }
}

/// Opaque prediction input, forwarded verbatim to the provider.
///
/// Dataset payloads are vendor-shaped JSON (e.g. a `messages` array for chat
/// models); the dispatch core has no knowledge of their internals.
pub type PredictionInput = serde_json::Value;

/// A single input or an ordered batch, accepted by [`crate::model::Model::predict`]
#[derive(Debug, Clone)]
pub enum PredictionRequest {
    Single(PredictionInput),
    Batch(Vec<PredictionInput>),
}

impl From<PredictionInput> for PredictionRequest {
    fn from(input: PredictionInput) -> Self {
        Self::Single(input)
    }
}

impl From<Vec<PredictionInput>> for PredictionRequest {
    fn from(inputs: Vec<PredictionInput>) -> Self {
        Self::Batch(inputs)
    }
}

/// Prediction output mirroring the request shape: a single call returns a
/// single output, a batched call returns outputs in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionOutcome {
    Single(String),
    Batch(Vec<String>),
}

impl PredictionOutcome {
    /// The single output, if this outcome came from a single-input call
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(output) => Some(output),
            Self::Batch(_) => None,
        }
    }

    /// Flatten into a list of outputs regardless of shape
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(output) => vec![output],
            Self::Batch(outputs) => outputs,
        }
    }
}

/// HTTP client configuration shared by providers.
///
/// The upstream design gives no timeout; exposing one here is the hardening
/// addition the provider clients apply when building their `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Per-request timeout; `None` means the transport default
    pub timeout: Option<Duration>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
