use std::path::PathBuf;

/// Where the standard settings chain lives.
///
/// [`SettingsBuilder`](crate::SettingsBuilder) derives every path from the
/// app name unless it is set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    /// Directory that `ThemeFile` names are resolved against.
    pub theme_dir: PathBuf,
    /// System-wide settings, read first and never written.
    pub master_file: PathBuf,
    /// The user's settings file, read after the master file and used as the
    /// save target. `None` when no home directory could be found.
    pub user_file: Option<PathBuf>,
}

/// A settings operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    List,
    Get { name: String },
    Set { name: String, value: String },
}
