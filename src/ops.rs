//! Settings operations: listing, single-option lookup, and result types.
//!
//! Provides the logic behind `config list` and `config get`, and the
//! `ConfigResult` enum that callers use to display results.

use std::fmt;

use crate::codec;
use crate::error::ConfigError;
use crate::record::ConfigRecord;
use crate::registry::{self, OPTIONS};

/// Result of a settings operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// One option's current value.
    KeyValue { key: String, value: String },
    /// Confirmation that a value was applied and saved.
    ValueSet { key: String, value: String },
    /// Every current option.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            ConfigResult::ValueSet { key, value } => write!(f, "Set {key} = {value}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Format the option at `index` from `record`.
pub fn format_option(record: &ConfigRecord, index: usize) -> String {
    let d = &OPTIONS[index];
    codec::format(d.kind, &d.field.get(record))
}

/// Look up an option by name (any case) and report it under its canonical name.
pub fn get_value(record: &ConfigRecord, name: &str) -> Result<ConfigResult, ConfigError> {
    let index = registry::find(name).ok_or_else(|| ConfigError::UnknownOption {
        name: name.into(),
    })?;
    Ok(ConfigResult::KeyValue {
        key: OPTIONS[index].name.into(),
        value: format_option(record, index),
    })
}

/// Every non-legacy option in registry order.
pub fn list_values(record: &ConfigRecord) -> ConfigResult {
    let entries = OPTIONS
        .iter()
        .enumerate()
        .filter(|(_, d)| !d.legacy)
        .map(|(i, d)| (d.name.to_string(), format_option(record, i)))
        .collect();
    ConfigResult::Listing { entries }
}
