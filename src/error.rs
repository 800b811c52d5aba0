use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Ignoring unknown option '{name}'")]
    UnknownOption { name: String },

    #[error("Ignoring malformed option '{line}'")]
    MalformedLine { line: String },

    #[error("Ignoring invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },

    #[error(
        "The option '{name}' is specified twice in file '{}'; the later value overrides the earlier one",
        .path.display()
    )]
    DuplicateOption { name: String, path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Theme file {} is already part of the theme chain; not following it", .path.display())]
    ThemeCycle { path: PathBuf },

    #[error("Theme '{name}' named in {} is not relative to the theme directory; not following it", .path.display())]
    ThemeOutsideDir { name: String, path: PathBuf },

    #[error("Theme chain is deeper than {limit} levels at {}; ignoring the rest", .path.display())]
    ThemeTooDeep { path: PathBuf, limit: usize },

    #[error("Could not save options to '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No settings file has been loaded; there is nowhere to save options")]
    NoSettingsFile,

    #[error("App name is required; call .app_name() on the builder")]
    AppNameRequired,

    #[error("Configuration error: {0}")]
    Defaults(#[from] confique::Error),
}
