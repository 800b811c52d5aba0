//! Layered, typed settings files with theme inheritance for terminal
//! emulators.
//!
//! Termrc reads `Name=Value` settings files, follows `ThemeFile` chains,
//! checks and converts every value against a fixed option table, and later
//! writes back exactly the options the user chose, never the ones that only
//! came from the command line.
//!
//! ```ignore
//! let (mut settings, report) = Settings::builder()
//!     .app_name("myterm")
//!     .load()?;
//! settings.parse_arg_option("Columns=132")?;
//! settings.finish();
//! let rows = settings.committed().rows;
//! ```
//!
//! That call reads `/usr/share/myterm/mytermrc`, then `~/.mytermrc` (and any
//! themes they name), on top of the compiled defaults.
//!
//! # Settings files
//!
//! ```text
//! # comments and blank lines are ignored
//! ThemeFile = solarized
//! Font = Consolas
//! FontHeight = 11
//! ForegroundColour = #839496
//! CursorType = block
//! ```
//!
//! - Names are matched case-insensitively against the option table. Unknown
//!   names, lines without `=`, and values that do not parse are reported as
//!   warnings in the [`LoadReport`] and skipped; the rest of the file still
//!   applies.
//! - An option given twice in one file keeps the later value, with a
//!   warning naming the file.
//! - A missing file is not an error. A file that exists but cannot be read
//!   is a warning.
//!
//! # Value syntax
//!
//! | Kind | Accepted | Written as |
//! |------|----------|------------|
//! | Boolean | `yes`, `no`, `true`, `false`, any prefix of them, or a number | `yes` / `no` |
//! | Integer | decimal, `0x` hex, leading-`0` octal; trailing text ignored | decimal |
//! | Colour | `R,G,B`, `#RRGGBB`, `rgb:RR/GG/BB`, `rgb:RRRR/GGGG/BBBB` | `R,G,B` |
//! | Enumeration | a symbolic name or any prefix of one, or a number | the name |
//! | String | anything | as given |
//!
//! Prefix matching takes the first name in table order, so `CursorType=u`
//! means `underscore` and `Hold=a` means `always`.
//!
//! # Themes
//!
//! `ThemeFile=name` loads `<theme dir>/name` as a parent; absolute names are
//! reported and ignored. The parent only supplies options the child leaves
//! out; themes can name themes of their
//! own. A theme that is already part of the chain, or a chain deeper than
//! [`MAX_THEME_DEPTH`](file::MAX_THEME_DEPTH), is reported and cut off.
//! Options inherited from a theme are applied but never saved into the
//! user's file.
//!
//! # Provenance and saving
//!
//! Termrc remembers, per option, whether it was set by the user's settings
//! file (or changed in an edit) and whether it was given on the command line:
//!
//! - Only options set by the user's file or changed through
//!   [`apply_working_copy`](Settings::apply_working_copy) are written back.
//! - An option that is also overridden on the command line is written with
//!   the value the file gave it, not the override.
//! - Command-line overrides are replayed after every reload, so applying an
//!   edit does not lose them.
//!
//! # Editing
//!
//! An options editor works on a copy:
//! [`begin_edit`](Settings::begin_edit), then
//! [`set_option`](Settings::set_option) or
//! [`working_mut`](Settings::working_mut), then
//! [`apply_working_copy`](Settings::apply_working_copy), which saves, reloads,
//! and reports which options changed and whether fonts need reloading.
//!
//! # Legacy options
//!
//! `UseSystemColours`, `BoldAsBright` and `FontQuality` are still read.
//! `UseSystemColours=yes` is turned into explicit foreground, background and
//! cursor colours taken from the host [`Platform`]; the other two are aliases
//! of `BoldAsColour` and `FontSmoothing`. None of them is ever written.
//!
//! # Clap adapter
//!
//! The `cli` module (behind the `clap` feature, on by default) provides
//! [`ConfigArgs`]: `-c FILE`, repeatable `-o NAME=VALUE`, and
//! `list|get|set` subcommands that produce a [`ConfigAction`] for
//! [`Settings::handle`]. To use termrc without clap:
//!
//! ```toml
//! termrc = { version = "...", default-features = false }
//! ```
//!
//! # Error handling
//!
//! Everything fallible returns [`ConfigError`]. Problems found while loading
//! do not fail the load; they are collected in the [`LoadReport`] and logged
//! through `tracing`.

pub mod choice;
pub mod codec;
pub mod colour;
pub mod error;
pub mod file;
pub mod record;
pub mod registry;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod line;
pub(crate) mod merge;
mod ops;
mod persist;
mod platform;
mod provenance;
mod settings;

#[cfg(test)]
mod fixtures;

pub use builder::SettingsBuilder;
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use colour::Colour;
pub use error::ConfigError;
pub use file::LoadReport;
pub use line::{RawOption, parse_line};
pub use ops::ConfigResult;
pub use platform::{FixedPalette, Platform};
pub use provenance::{Provenance, Source};
pub use record::ConfigRecord;
pub use settings::{ApplyOutcome, Settings};
pub use types::{ConfigAction, Locations};
