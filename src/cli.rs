//! Clap adapter for termrc.
//!
//! Compiled only when the `clap` Cargo feature is enabled (on by default).
//! [`ConfigArgs`] gives a host `-c FILE` and `-o NAME=VALUE` flags plus
//! `list|get|set` subcommands. [`ConfigArgs::apply_to`] feeds the flags into
//! a [`Settings`], and [`ConfigArgs::into_action`] converts the subcommand
//! into a framework-agnostic [`ConfigAction`] for
//! [`Settings::handle`](crate::Settings::handle).

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::error::ConfigError;
use crate::file::LoadReport;
use crate::settings::Settings;
use crate::types::ConfigAction;

/// Clap-derived args for the settings flags and subcommands.
///
/// Embed this into your app's clap derive:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     settings: ConfigArgs,
/// }
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Load this settings file after the standard ones and save to it.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Override one option for this run only. May be repeated.
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE", global = true)]
    pub options: Vec<String>,

    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available settings subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show every option with its current value.
    List,
    /// Show the current value of one option.
    Get {
        /// Option name, any case (e.g. "FontHeight").
        name: String,
    },
    /// Change an option and save it to the settings file.
    Set {
        /// Option name, any case (e.g. "FontHeight").
        name: String,
        /// New value, in settings-file syntax.
        value: String,
    },
}

impl ConfigArgs {
    /// Convert the subcommand into a `ConfigAction`.
    ///
    /// Bare invocation (no subcommand) and explicit `list` both map to
    /// `ConfigAction::List`.
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List,
            Some(ConfigSubcommand::Get { name }) => ConfigAction::Get { name },
            Some(ConfigSubcommand::Set { name, value }) => ConfigAction::Set { name, value },
        }
    }

    /// Load `--config` (as the new save target) and apply each `--option`
    /// as a command-line override, in order. Stops at the first invalid
    /// `--option`.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<LoadReport, ConfigError> {
        let mut report = LoadReport::default();
        if let Some(path) = &self.config {
            report.absorb(settings.load_configuration(path, true));
        }
        for raw in &self.options {
            settings.parse_arg_option(raw)?;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::TestEnv;
    use clap::Parser;

    /// Wrapper so we can use `try_parse_from` on the flattened args.
    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(args: &[&str]) -> ConfigArgs {
        TestCli::try_parse_from(args).unwrap().config
    }

    #[test]
    fn parse_bare_is_list() {
        assert_eq!(parse(&["test"]).into_action(), ConfigAction::List);
    }

    #[test]
    fn parse_explicit_list() {
        assert_eq!(parse(&["test", "list"]).into_action(), ConfigAction::List);
    }

    #[test]
    fn parse_get() {
        let action = parse(&["test", "get", "FontHeight"]).into_action();
        assert_eq!(
            action,
            ConfigAction::Get {
                name: "FontHeight".into()
            }
        );
    }

    #[test]
    fn parse_set() {
        let action = parse(&["test", "set", "ForegroundColour", "#ffffff"]).into_action();
        assert_eq!(
            action,
            ConfigAction::Set {
                name: "ForegroundColour".into(),
                value: "#ffffff".into(),
            }
        );
    }

    #[test]
    fn invalid_subcommand_errors() {
        let result = TestCli::try_parse_from(["test", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_repeated_options_and_config() {
        let args = parse(&["test", "-o", "Rows=30", "--option", "Term=vt100", "-c", "/tmp/rc"]);
        assert_eq!(args.options, ["Rows=30", "Term=vt100"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/rc")));
    }

    #[test]
    fn flags_allowed_after_subcommand() {
        let args = parse(&["test", "get", "Rows", "-o", "Rows=30"]);
        assert_eq!(args.options, ["Rows=30"]);
    }

    #[test]
    fn apply_to_loads_config_then_overrides() {
        let env = TestEnv::new();
        let extra = env.write_theme("extra", "Rows=40\nColumns=100\n");
        let path = extra.to_string_lossy().into_owned();
        let args = parse(&["test", "-c", path.as_str(), "-o", "Columns=132"]);

        let mut settings = env.settings();
        let report = args.apply_to(&mut settings).unwrap();
        assert_eq!(report.files, [extra.clone()]);
        assert_eq!(settings.committed().rows, 40);
        assert_eq!(settings.committed().cols, 132);
        assert_eq!(settings.rc_path(), Some(extra.as_path()));
    }

    #[test]
    fn apply_to_rejects_bad_option() {
        let env = TestEnv::new();
        let args = parse(&["test", "-o", "NoSuchOption=1"]);
        let mut settings = env.settings();
        assert!(matches!(
            args.apply_to(&mut settings),
            Err(ConfigError::UnknownOption { .. })
        ));
    }
}
