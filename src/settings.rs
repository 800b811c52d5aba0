//! The settings owner: loading, command-line overrides, editing, applying
//! and saving.
//!
//! [`Settings`] holds three records:
//!
//! - **committed**: the live settings the host reads;
//! - **working**: a copy the options editor mutates, merged back by
//!   [`apply_working_copy`](Settings::apply_working_copy);
//! - **baseline**: a snapshot of the committed record taken right after the
//!   last file load, before command-line overrides are replayed.
//!
//! Loads never reset the committed record, so the master file and the user
//! file layer on top of each other and on top of the compiled defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec;
use crate::error::ConfigError;
use crate::file::{self, LoadReport};
use crate::line::parse_line;
use crate::ops::{self, ConfigResult};
use crate::persist;
use crate::platform::Platform;
use crate::provenance::{Provenance, Source};
use crate::record::ConfigRecord;
use crate::registry::{self, LEADING_COLOURS, OPTIONS};
use crate::types::{ConfigAction, Locations};

/// What [`Settings::apply_working_copy`] did.
#[derive(Debug)]
pub struct ApplyOutcome {
    /// Canonical names of the options whose value changed, in registry order.
    pub changed: Vec<&'static str>,
    /// Whether any font-affecting option changed.
    pub font_changed: bool,
    /// Where the settings were saved.
    pub saved: PathBuf,
    /// Report of the reload that followed the save.
    pub reload: LoadReport,
}

/// Owner of one application's settings: the loaded record, the options
/// editor's working copy, provenance, and the file saves go to.
///
/// Build one with [`Settings::builder`].
pub struct Settings {
    committed: ConfigRecord,
    working: ConfigRecord,
    baseline: ConfigRecord,
    provenance: Provenance,
    rc_path: Option<PathBuf>,
    locations: Locations,
    platform: Box<dyn Platform>,
    /// Command-line values, replayed after every remember-mode load.
    arg_overrides: Vec<(usize, String)>,
    /// Options marked as command-line supplied without a value.
    arg_marks: Vec<usize>,
}

impl Settings {
    pub(crate) fn new(
        locations: Locations,
        platform: Box<dyn Platform>,
    ) -> Result<Self, ConfigError> {
        let defaults = ConfigRecord::defaults()?;
        Ok(Self {
            committed: defaults.clone(),
            working: defaults.clone(),
            baseline: defaults,
            provenance: Provenance::default(),
            rc_path: None,
            locations,
            platform,
            arg_overrides: Vec::new(),
            arg_marks: Vec::new(),
        })
    }

    pub fn committed(&self) -> &ConfigRecord {
        &self.committed
    }

    pub fn working(&self) -> &ConfigRecord {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut ConfigRecord {
        &mut self.working
    }

    pub fn baseline(&self) -> &ConfigRecord {
        &self.baseline
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// The file saves go to: the last file loaded in remember mode.
    pub fn rc_path(&self) -> Option<&Path> {
        self.rc_path.as_deref()
    }

    // -- loading --------------------------------------------------------------

    /// Load `path` and its theme chain into the committed record.
    ///
    /// With `remember`, provenance starts over, `path` becomes the save target,
    /// the file's own options are remembered for saving, and command-line
    /// overrides are replayed on top afterwards.
    pub fn load_configuration(&mut self, path: &Path, remember: bool) -> LoadReport {
        if remember {
            self.provenance.reset();
            self.rc_path = Some(path.to_path_buf());
        }

        let mut report = LoadReport::default();
        let table = file::load_recursive(path, remember, &self.locations.theme_dir, &mut report);
        for option in table.values() {
            match apply_to(&mut self.committed, &option.name, &option.value) {
                Ok(index) if option.rememberable => self.provenance.remember_file(index),
                Ok(_) => {}
                Err(e) => report.warn(e),
            }
        }
        self.check_legacy(Source::File);
        self.baseline = self.committed.clone();

        if remember {
            self.replay_args(&mut report);
        }
        debug!(
            file = %path.display(),
            remember,
            options = table.len(),
            warnings = report.warnings.len(),
            "loaded settings"
        );
        report
    }

    /// Load the master file, then the user file as the save target.
    pub fn load_all(&mut self) -> LoadReport {
        let user = self.locations.user_file.clone();
        self.load_chain(user)
    }

    /// Load the master file, then the current save target (or the user file
    /// when nothing has been loaded in remember mode yet).
    pub fn reload(&mut self) -> LoadReport {
        let target = self
            .rc_path
            .clone()
            .or_else(|| self.locations.user_file.clone());
        self.load_chain(target)
    }

    fn load_chain(&mut self, target: Option<PathBuf>) -> LoadReport {
        let master = self.locations.master_file.clone();
        let mut report = self.load_configuration(&master, false);
        match target {
            Some(target) => report.absorb(self.load_configuration(&target, true)),
            // Nothing else will replay the command line on top of the master file.
            None => self.replay_args(&mut report),
        }
        report
    }

    // -- command line ---------------------------------------------------------

    /// Apply a command-line option to the committed record. Returns the
    /// option's canonical name.
    pub fn set_arg_option(&mut self, name: &str, value: &str) -> Result<&'static str, ConfigError> {
        let index = apply_to(&mut self.committed, name, value)?;
        self.provenance.remember_arg(index);
        self.check_legacy(Source::Arg);
        self.record_override(index, value.to_string());
        Ok(OPTIONS[index].name)
    }

    /// Replace any earlier override of `index` with `value`.
    fn record_override(&mut self, index: usize, value: String) {
        self.arg_overrides.retain(|(i, _)| *i != index);
        self.arg_overrides.push((index, value));
    }

    /// Apply a `Name=Value` command-line argument. Blank and comment input
    /// is ignored and yields `Ok(None)`.
    pub fn parse_arg_option(&mut self, raw: &str) -> Result<Option<&'static str>, ConfigError> {
        match parse_line(raw)? {
            Some(option) => self.set_arg_option(&option.name, &option.value).map(Some),
            None => Ok(None),
        }
    }

    /// Mark an option as supplied on the command line without changing it.
    pub fn remember_arg(&mut self, name: &str) -> Result<(), ConfigError> {
        let index = registry::find(name).ok_or_else(|| ConfigError::UnknownOption {
            name: name.into(),
        })?;
        self.provenance.remember_arg(index);
        if !self.arg_marks.contains(&index) {
            self.arg_marks.push(index);
        }
        Ok(())
    }

    fn replay_args(&mut self, report: &mut LoadReport) {
        if self.arg_overrides.is_empty() && self.arg_marks.is_empty() {
            return;
        }
        for (index, value) in &self.arg_overrides {
            match apply_index(&mut self.committed, *index, value) {
                Ok(()) => self.provenance.remember_arg(*index),
                Err(e) => report.warn(e),
            }
        }
        for &index in &self.arg_marks {
            self.provenance.remember_arg(index);
        }
        self.check_legacy(Source::Arg);
    }

    /// Translate the deprecated `UseSystemColours` flag into explicit colours
    /// and remember them under `source`.
    fn check_legacy(&mut self, source: Source) {
        if !self.committed.use_system_colours {
            return;
        }
        let foreground = self.platform.system_colour(true);
        let background = self.platform.system_colour(false);
        let c = &mut self.committed;
        c.fg_colour = foreground;
        c.cursor_colour = foreground;
        c.bg_colour = background;
        c.use_system_colours = false;
        for index in 0..LEADING_COLOURS {
            self.provenance.remember(source, index);
        }
        debug!(?source, "migrated UseSystemColours to explicit colours");
    }

    // -- post-load ------------------------------------------------------------

    /// Clamp and normalize the committed record once loading is complete.
    pub fn finish(&mut self) {
        let c = &mut self.committed;
        c.rows = c.rows.max(1);
        c.cols = c.cols.max(1);
        c.scrollback_lines = c.scrollback_lines.max(0);
        if c.locale.is_empty() {
            c.charset.clear();
        }
        // Levels 1..=3 are an older scale for low/medium/high.
        if (1..=3).contains(&c.transparency.0) {
            c.transparency.0 *= 16;
        }
    }

    // -- editing --------------------------------------------------------------

    /// Start an edit session: the working copy becomes a copy of the
    /// committed record.
    pub fn begin_edit(&mut self) {
        self.working = self.committed.clone();
    }

    /// Current working-copy value of an option, formatted as settings text.
    pub fn get_option(&self, name: &str) -> Result<String, ConfigError> {
        let index = registry::find(name).ok_or_else(|| ConfigError::UnknownOption {
            name: name.into(),
        })?;
        Ok(ops::format_option(&self.working, index))
    }

    /// Parse `value` into the working copy. Returns the canonical name.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<&'static str, ConfigError> {
        apply_to(&mut self.working, name, value).map(|index| OPTIONS[index].name)
    }

    /// Commit the working copy: remember what changed, copy it over the
    /// committed record, save, and reload the standard chain.
    ///
    /// An edited option that was also given on the command line replaces that
    /// override, so it stays live but is not saved.
    ///
    /// A save failure is returned before anything is reloaded; the committed
    /// record keeps the applied values.
    pub fn apply_working_copy(&mut self) -> Result<ApplyOutcome, ConfigError> {
        let mut changed = Vec::new();
        let mut font_changed = false;
        for (index, d) in OPTIONS.iter().enumerate().filter(|(_, d)| !d.legacy) {
            if d.field.get(&self.committed) == d.field.get(&self.working) {
                continue;
            }
            changed.push(d.name);
            font_changed |= d.field.affects_font();
            if self.provenance.seen_arg(index) {
                // Keep the edit live across the reload without saving it.
                let value = ops::format_option(&self.working, index);
                self.record_override(index, value);
            } else {
                self.provenance.remember_file(index);
            }
        }

        registry::copy_record(&self.working, &mut self.committed);
        let saved = self.save()?;
        let reload = self.reload();

        Ok(ApplyOutcome {
            changed,
            font_changed,
            saved,
            reload,
        })
    }

    // -- saving ---------------------------------------------------------------

    /// File content for the current state: remembered options in the order
    /// they were first remembered, legacy names skipped. Options also given
    /// on the command line are written with their baseline value.
    pub fn render_saved(&self) -> String {
        let entries = self.provenance.file_order().iter().filter_map(|&index| {
            let d = &OPTIONS[index];
            if d.legacy {
                return None;
            }
            let source = if self.provenance.seen_arg(index) {
                &self.baseline
            } else {
                &self.committed
            };
            Some((d.name, ops::format_option(source, index)))
        });
        persist::render(entries)
    }

    /// Write [`render_saved`](Self::render_saved) to the save target.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = self.rc_path.as_deref().ok_or(ConfigError::NoSettingsFile)?;
        persist::write_settings(path, &self.render_saved())?;
        Ok(path.to_path_buf())
    }

    // -- operations -----------------------------------------------------------

    /// Handle a `ConfigAction` and print the result to stdout.
    pub fn handle_and_print(&mut self, action: &ConfigAction) -> Result<(), ConfigError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle a `ConfigAction` (list / get / set).
    ///
    /// `set` goes through the working copy and
    /// [`apply_working_copy`](Self::apply_working_copy), so it is remembered
    /// and saved like an edit made in an options dialog.
    pub fn handle(&mut self, action: &ConfigAction) -> Result<ConfigResult, ConfigError> {
        match action {
            ConfigAction::List => Ok(ops::list_values(&self.committed)),
            ConfigAction::Get { name } => ops::get_value(&self.committed, name),
            ConfigAction::Set { name, value } => {
                self.begin_edit();
                let key = self.set_option(name, value)?;
                let shown = self.get_option(key)?;
                self.apply_working_copy()?;
                Ok(ConfigResult::ValueSet {
                    key: key.into(),
                    value: shown,
                })
            }
        }
    }
}

/// Parse `text` for the option called `name` and store it in `record`.
fn apply_to(record: &mut ConfigRecord, name: &str, text: &str) -> Result<usize, ConfigError> {
    let index = registry::find(name).ok_or_else(|| ConfigError::UnknownOption {
        name: name.into(),
    })?;
    apply_index(record, index, text)?;
    Ok(index)
}

fn apply_index(record: &mut ConfigRecord, index: usize, text: &str) -> Result<(), ConfigError> {
    let d = &OPTIONS[index];
    let invalid = || ConfigError::InvalidValue {
        name: d.name.into(),
        value: text.into(),
    };
    let value = codec::parse(d.kind, text).ok_or_else(invalid)?;
    if d.field.set(record, value) {
        Ok(())
    } else {
        Err(invalid())
    }
}
