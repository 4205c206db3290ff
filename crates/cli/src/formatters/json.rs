//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all result types as pretty-printed JSON.

use crate::formatters::macros::impl_serde_formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl_serde_formatter!(JsonFormatter, serde_json::to_string_pretty);
