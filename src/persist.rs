//! Writing settings files.
//!
//! [`render`] builds the file content from already formatted pairs;
//! [`write_settings`] puts it on disk, creating parent directories as needed.
//! Saving rewrites the whole file: only remembered options appear in it, so
//! comments and options never remembered are not carried over.

use std::path::Path;

use tracing::info;

use crate::error::ConfigError;

/// Pure function: one `Name=value` line per entry, in order.
pub fn render<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut out = String::new();
    for (name, value) in entries {
        out.push_str(name);
        out.push('=');
        out.push_str(&value);
        out.push('\n');
    }
    out
}

/// I/O wrapper: write `content` to `path`, replacing the file.
pub fn write_settings(path: &Path, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(file = %path.display(), bytes = content.len(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn render_one_line_per_entry() {
        let out = render([("Columns", "80".to_string()), ("Font", "Consolas".to_string())]);
        assert_eq!(out, "Columns=80\nFont=Consolas\n");
    }

    #[test]
    fn render_empty_value() {
        assert_eq!(render([("Charset", String::new())]), "Charset=\n");
    }

    #[test]
    fn render_nothing() {
        assert_eq!(render(std::iter::empty()), "");
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("rc");
        write_settings(&path, "Rows=30\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Rows=30\n");
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rc");
        std::fs::write(&path, "# old comment\nRows=24\nTerm=vt100\n").unwrap();
        write_settings(&path, "Rows=30\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Rows=30\n");
    }

    #[test]
    fn write_into_a_file_parent_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let result = write_settings(&blocker.join("rc"), "Rows=30\n");
        assert!(matches!(result, Err(ConfigError::WriteError { .. })));
    }
}
