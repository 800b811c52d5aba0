#[cfg(test)]
pub mod test {
    use std::path::{Path, PathBuf};

    use tempfile::TempDir;

    use crate::colour::Colour;
    use crate::platform::FixedPalette;
    use crate::settings::Settings;

    pub const SYSTEM_FG: Colour = Colour::from_rgb(250, 250, 250);
    pub const SYSTEM_BG: Colour = Colour::from_rgb(5, 5, 5);

    /// Write `content` to `dir/name`, creating `dir` if needed.
    pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// A scratch directory laid out like an installation: `themes/`, a
    /// master file and a user file, none of which exist until written.
    pub struct TestEnv {
        dir: TempDir,
    }

    impl TestEnv {
        pub fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        pub fn dir(&self) -> &Path {
            self.dir.path()
        }

        pub fn theme_dir(&self) -> PathBuf {
            self.dir().join("themes")
        }

        pub fn master_file(&self) -> PathBuf {
            self.dir().join("master")
        }

        pub fn user_file(&self) -> PathBuf {
            self.dir().join("home").join(".termrc")
        }

        pub fn write_master(&self, content: &str) -> PathBuf {
            write_file(self.dir(), "master", content)
        }

        pub fn write_user(&self, content: &str) -> PathBuf {
            write_file(&self.dir().join("home"), ".termrc", content)
        }

        pub fn write_theme(&self, name: &str, content: &str) -> PathBuf {
            write_file(&self.theme_dir(), name, content)
        }

        pub fn settings(&self) -> Settings {
            Settings::builder()
                .app_name("termrc")
                .theme_dir(self.theme_dir())
                .master_file(self.master_file())
                .user_file(self.user_file())
                .platform(FixedPalette {
                    foreground: SYSTEM_FG,
                    background: SYSTEM_BG,
                })
                .build()
                .unwrap()
        }
    }

    #[test]
    fn env_paths_are_inside_the_scratch_dir() {
        let env = TestEnv::new();
        let settings = env.settings();
        let locations = settings.locations();
        assert!(locations.theme_dir.starts_with(env.dir()));
        assert!(locations.master_file.starts_with(env.dir()));
        assert_eq!(locations.user_file, Some(env.user_file()));
    }
}
