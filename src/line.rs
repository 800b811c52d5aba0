//! Splitting one settings line into a name and a value.

use crate::error::ConfigError;

/// A `Name=Value` pair read from a file or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOption {
    pub name: String,
    pub value: String,
    /// Whether applying this option marks it for saving. Options inherited
    /// from a theme file are applied but not remembered.
    pub rememberable: bool,
}

/// Parse one line.
///
/// Blank lines and `#` comments yield `Ok(None)`. A line without `=` is a
/// [`ConfigError::MalformedLine`]. Whitespace around the name and the value
/// is trimmed; the value may itself contain `=`.
pub fn parse_line(line: &str) -> Result<Option<RawOption>, ConfigError> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let Some((name, value)) = line.split_once('=') else {
        return Err(ConfigError::MalformedLine {
            line: line.to_string(),
        });
    };
    Ok(Some(RawOption {
        name: name.trim().to_string(),
        value: value.trim().to_string(),
        rememberable: true,
    }))
}
