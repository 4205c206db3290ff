//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Format all result types as YAML.
//! - Human-friendly export of inventories and batch reports.

use crate::formatters::macros::impl_serde_formatter;

/// YAML formatter.
pub struct YamlFormatter;

impl_serde_formatter!(YamlFormatter, serde_yaml::to_string);
