//! Reading settings files and resolving their theme chains.
//!
//! A settings file is read into an [`OptionTable`] keyed by the lowercased
//! option name, in file order. When the table names a `ThemeFile`, that file
//! is read from the theme directory (recursively) and merged underneath: the
//! theme supplies only the options the naming file leaves out.
//!
//! Nothing here fails. Missing files read as empty without comment, and
//! every other problem (an unreadable file, a malformed line, a duplicate
//! option, a theme cycle) is recorded as a warning in the [`LoadReport`] and
//! logged, and loading carries on with what it has.

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::line::{RawOption, parse_line};
use crate::merge::merge_parent;

/// Options read from one file chain, keyed by lowercased name.
pub type OptionTable = IndexMap<String, RawOption>;

/// Theme files may nest this many levels below the file that starts the chain.
pub const MAX_THEME_DEPTH: usize = 8;

/// What a load read and what it had to skip.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files that existed and were read, in the order they were read.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ConfigError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub(crate) fn warn(&mut self, warning: ConfigError) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    pub(crate) fn absorb(&mut self, other: LoadReport) {
        self.files.extend(other.files);
        self.warnings.extend(other.warnings);
    }
}

/// Read `path` and every theme it names, merged into one table.
///
/// Options read from `path` itself carry `rememberable`; options inherited
/// from themes never do.
pub fn load_recursive(
    path: &Path,
    rememberable: bool,
    theme_dir: &Path,
    report: &mut LoadReport,
) -> OptionTable {
    let mut loader = ChainLoader {
        theme_dir,
        report,
        chain: Vec::new(),
    };
    loader.load(path, rememberable)
}

struct ChainLoader<'a> {
    theme_dir: &'a Path,
    report: &'a mut LoadReport,
    /// Canonical paths of the files currently being loaded, outermost first.
    chain: Vec<PathBuf>,
}

impl ChainLoader<'_> {
    fn load(&mut self, path: &Path, rememberable: bool) -> OptionTable {
        let identity = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if self.chain.contains(&identity) {
            self.report.warn(ConfigError::ThemeCycle {
                path: path.to_path_buf(),
            });
            return OptionTable::new();
        }
        if self.chain.len() > MAX_THEME_DEPTH {
            self.report.warn(ConfigError::ThemeTooDeep {
                path: path.to_path_buf(),
                limit: MAX_THEME_DEPTH,
            });
            return OptionTable::new();
        }

        let Some(mut table) = load_one(path, rememberable, self.report) else {
            return OptionTable::new();
        };

        let theme = table
            .get("themefile")
            .map(|o| o.value.as_str())
            .filter(|v| !v.is_empty())
            .and_then(|v| self.theme_path(v, path));
        if let Some(theme) = theme {
            debug!(file = %path.display(), theme = %theme.display(), "following theme");
            self.chain.push(identity);
            let parent = self.load(&theme, false);
            self.chain.pop();
            merge_parent(parent, &mut table);
        }
        table
    }

    /// `<theme dir>/<name>`, or `None` (with a warning) when `name` is
    /// absolute and would leave the theme directory.
    fn theme_path(&mut self, name: &str, named_in: &Path) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative
            .components()
            .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        {
            self.report.warn(ConfigError::ThemeOutsideDir {
                name: name.to_string(),
                path: named_in.to_path_buf(),
            });
            return None;
        }
        Some(self.theme_dir.join(relative))
    }
}

/// Read a single file without following its theme. `None` when the file
/// could not be read.
pub fn load_one(path: &Path, rememberable: bool, report: &mut LoadReport) -> Option<OptionTable> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(file = %path.display(), "settings file not found, skipping");
            return None;
        }
        Err(e) => {
            report.warn(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
            return None;
        }
    };
    debug!(file = %path.display(), "reading settings file");
    report.files.push(path.to_path_buf());

    let content = String::from_utf8_lossy(&bytes);
    Some(parse_table(&content, path, rememberable, report))
}

/// Parse file content into a table. `path` is only used in warnings.
pub fn parse_table(
    content: &str,
    path: &Path,
    rememberable: bool,
    report: &mut LoadReport,
) -> OptionTable {
    let mut table = OptionTable::new();
    for line in content.lines() {
        let mut option = match parse_line(line) {
            Ok(Some(option)) => option,
            Ok(None) => continue,
            Err(e) => {
                report.warn(e);
                continue;
            }
        };
        option.rememberable = rememberable;
        let key = option.name.to_ascii_lowercase();
        if table.shift_remove(&key).is_some() {
            report.warn(ConfigError::DuplicateOption {
                name: option.name.clone(),
                path: path.to_path_buf(),
            });
        }
        table.insert(key, option);
    }
    table
}
