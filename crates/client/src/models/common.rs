//! Common types shared across deployment server models.
//!
//! This module contains the generic `entry` wrapper and the `messages`
//! envelope Splunk uses for errors. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    /// Unknown or unrecognized message type.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Generic Splunk REST API response wrapper.
#[derive(Debug, Deserialize, Clone)]
pub struct SplunkResponse<T> {
    pub entry: Vec<Entry<T>>,
}

/// One `entry` element. `content` is optional because write endpoints
/// sometimes echo entries without it.
#[derive(Debug, Deserialize, Clone)]
pub struct Entry<T> {
    pub name: String,
    pub content: Option<T>,
}

/// Content we do not inspect.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct IgnoredContent {}

/// A single message from Splunk (usually in error responses).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub text: String,
}

/// A collection of messages from Splunk.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

impl SplunkMessages {
    /// Flatten into `TYPE: text; TYPE: text`.
    pub fn flatten(&self) -> String {
        self.messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
