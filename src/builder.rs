use std::path::PathBuf;

use crate::error::ConfigError;
use crate::file::LoadReport;
use crate::platform::{FixedPalette, Platform};
use crate::settings::Settings;
use crate::types::Locations;

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }
}

/// Builder for a [`Settings`] owner.
///
/// Every location defaults from the app name:
///
/// - theme directory: `/usr/share/{app}/themes`
/// - master file: `/usr/share/{app}/{app}rc`
/// - user file: `~/.{app}rc`
pub struct SettingsBuilder {
    app_name: Option<String>,
    theme_dir: Option<PathBuf>,
    master_file: Option<PathBuf>,
    user_file: Option<PathBuf>,
    platform: Option<Box<dyn Platform>>,
}

impl SettingsBuilder {
    fn new() -> Self {
        Self {
            app_name: None,
            theme_dir: None,
            master_file: None,
            user_file: None,
            platform: None,
        }
    }

    /// Set the application name used to derive default locations.
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Override the directory `ThemeFile` names are resolved against.
    pub fn theme_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.theme_dir = Some(dir.into());
        self
    }

    /// Override the system-wide settings file.
    pub fn master_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.master_file = Some(path.into());
        self
    }

    /// Override the user settings file (also the default save target).
    pub fn user_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_file = Some(path.into());
        self
    }

    /// Host hook for the system colours used by the `UseSystemColours`
    /// migration. Defaults to [`FixedPalette::default`].
    pub fn platform(mut self, platform: impl Platform + 'static) -> Self {
        self.platform = Some(Box::new(platform));
        self
    }

    /// Resolve the effective app name, or error if not set.
    fn effective_app_name(&self) -> Result<&str, ConfigError> {
        self.app_name
            .as_deref()
            .ok_or(ConfigError::AppNameRequired)
    }

    fn effective_theme_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.theme_dir {
            return Ok(dir.clone());
        }
        let app = self.effective_app_name()?;
        Ok(PathBuf::from(format!("/usr/share/{app}/themes")))
    }

    fn effective_master_file(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.master_file {
            return Ok(path.clone());
        }
        let app = self.effective_app_name()?;
        Ok(PathBuf::from(format!("/usr/share/{app}/{app}rc")))
    }

    /// `None` if there is no explicit file and no home directory.
    fn effective_user_file(&self) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = &self.user_file {
            return Ok(Some(path.clone()));
        }
        let app = self.effective_app_name()?;
        Ok(directories::UserDirs::new().map(|user| user.home_dir().join(format!(".{app}rc"))))
    }

    fn effective_locations(&self) -> Result<Locations, ConfigError> {
        Ok(Locations {
            theme_dir: self.effective_theme_dir()?,
            master_file: self.effective_master_file()?,
            user_file: self.effective_user_file()?,
        })
    }

    /// Build the owner with every option at its default. Nothing is read.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let locations = self.effective_locations()?;
        let platform = self
            .platform
            .unwrap_or_else(|| Box::new(FixedPalette::default()));
        Settings::new(locations, platform)
    }

    /// Build and load the standard chain (master file, then user file).
    pub fn load(self) -> Result<(Settings, LoadReport), ConfigError> {
        let mut settings = self.build()?;
        let report = settings.load_all();
        Ok((settings, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::fixtures::test::write_file;
    use tempfile::TempDir;

    #[test]
    fn app_name_sets_defaults() {
        let builder = Settings::builder().app_name("myterm");
        assert_eq!(
            builder.effective_theme_dir().unwrap(),
            PathBuf::from("/usr/share/myterm/themes")
        );
        assert_eq!(
            builder.effective_master_file().unwrap(),
            PathBuf::from("/usr/share/myterm/mytermrc")
        );
    }

    #[test]
    fn user_file_defaults_under_home() {
        let builder = Settings::builder().app_name("myterm");
        if let Some(path) = builder.effective_user_file().unwrap() {
            assert!(path.ends_with(".mytermrc"));
        }
    }

    #[test]
    fn explicit_locations_override_defaults() {
        let builder = Settings::builder()
            .app_name("myterm")
            .theme_dir("/opt/themes")
            .master_file("/etc/mytermrc")
            .user_file("/tmp/rc");
        let locations = builder.effective_locations().unwrap();
        assert_eq!(locations.theme_dir, PathBuf::from("/opt/themes"));
        assert_eq!(locations.master_file, PathBuf::from("/etc/mytermrc"));
        assert_eq!(locations.user_file, Some(PathBuf::from("/tmp/rc")));
    }

    #[test]
    fn explicit_locations_need_no_app_name() {
        let builder = Settings::builder()
            .theme_dir("/opt/themes")
            .master_file("/etc/mytermrc")
            .user_file("/tmp/rc");
        assert!(builder.build().is_ok());
    }

    #[test]
    fn missing_app_name_errors() {
        let result = Settings::builder().build();
        assert!(matches!(result, Err(ConfigError::AppNameRequired)));
    }

    #[test]
    fn build_starts_at_defaults() {
        let settings = Settings::builder()
            .app_name("myterm")
            .user_file("/nonexistent/rc")
            .build()
            .unwrap();
        assert_eq!(settings.committed().cols, 80);
        assert_eq!(settings.committed(), settings.working());
        assert_eq!(settings.rc_path(), None);
    }

    #[test]
    fn platform_hook_is_used() {
        let dir = TempDir::new().unwrap();
        let rc = write_file(dir.path(), "rc", "UseSystemColours=yes\n");
        let palette = FixedPalette {
            foreground: Colour::from_rgb(1, 2, 3),
            background: Colour::from_rgb(4, 5, 6),
        };
        let (settings, _) = Settings::builder()
            .theme_dir(dir.path())
            .master_file(dir.path().join("master"))
            .user_file(&rc)
            .platform(palette)
            .load()
            .unwrap();
        assert_eq!(settings.committed().fg_colour, Colour::from_rgb(1, 2, 3));
        assert_eq!(settings.committed().bg_colour, Colour::from_rgb(4, 5, 6));
    }

    #[test]
    fn load_reads_master_then_user() {
        let dir = TempDir::new().unwrap();
        let master = write_file(dir.path(), "master", "Rows=50\nColumns=100\n");
        let rc = write_file(dir.path(), "rc", "Rows=30\n");
        let (settings, report) = Settings::builder()
            .app_name("myterm")
            .master_file(&master)
            .user_file(&rc)
            .load()
            .unwrap();
        assert_eq!(report.files, [master, rc.clone()]);
        assert_eq!(settings.committed().rows, 30);
        assert_eq!(settings.committed().cols, 100);
        assert_eq!(settings.rc_path(), Some(rc.as_path()));
    }
}
