//! Which options came from settings files and which from the command line.
//!
//! File provenance decides what gets saved: only options remembered here are
//! written, in the order they were first remembered. Arg provenance decides
//! which snapshot a saved value comes from: an option also given on the
//! command line is saved with its file baseline value, so a one-off override
//! never leaks into the settings file.

/// Where a remembered option came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    File,
    Arg,
}

/// Two ordered, duplicate-free sets of option indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance {
    file: Vec<usize>,
    arg: Vec<usize>,
}

impl Provenance {
    pub fn remember(&mut self, source: Source, index: usize) {
        let set = match source {
            Source::File => &mut self.file,
            Source::Arg => &mut self.arg,
        };
        if !set.contains(&index) {
            set.push(index);
        }
    }

    pub fn remember_file(&mut self, index: usize) {
        self.remember(Source::File, index);
    }

    pub fn remember_arg(&mut self, index: usize) {
        self.remember(Source::Arg, index);
    }

    pub fn seen_file(&self, index: usize) -> bool {
        self.file.contains(&index)
    }

    pub fn seen_arg(&self, index: usize) -> bool {
        self.arg.contains(&index)
    }

    /// File-provenance indices in the order they were first remembered.
    pub fn file_order(&self) -> &[usize] {
        &self.file
    }

    pub fn reset(&mut self) {
        self.file.clear();
        self.arg.clear();
    }
}
