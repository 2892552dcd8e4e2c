//! Filter Predicate
//!
//! Decides whether a directory entry takes part in the merge. The walker only
//! sees the [`EntryFilter`] trait; [`PatternFilter`] is the glob-backed
//! implementation used by the command line.

use crate::error::SyncError;
use glob::Pattern;

/// Entry eligibility predicate consumed by the walker.
pub trait EntryFilter {
    /// Whether a regular file with this name is eligible.
    fn admits(&self, file_name: &str) -> bool;

    /// Whether dotfiles and dot-directories take part.
    fn include_hidden(&self) -> bool;

    /// Hidden entries are skipped unless explicitly requested.
    fn skips_hidden(&self, file_name: &str) -> bool {
        !self.include_hidden() && is_hidden(file_name)
    }
}

/// Name begins with a dot.
pub fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}

/// Ignore/only glob filter.
///
/// A name is admitted when it matches no ignore pattern and, if any only
/// patterns are set, matches at least one of them.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    ignore: Vec<Pattern>,
    only: Vec<Pattern>,
    include_hidden: bool,
}

impl PatternFilter {
    pub fn new(include_hidden: bool) -> Self {
        Self {
            include_hidden,
            ..Self::default()
        }
    }

    /// Compile a filter from raw glob strings.
    pub fn from_globs<I, O>(ignore: I, only: O, include_hidden: bool) -> Result<Self, SyncError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        let mut filter = Self::new(include_hidden);
        for glob in ignore {
            filter.ignore.push(compile(glob.as_ref())?);
        }
        for glob in only {
            filter.only.push(compile(glob.as_ref())?);
        }
        Ok(filter)
    }

    pub fn ignore(mut self, glob: &str) -> Result<Self, SyncError> {
        self.ignore.push(compile(glob)?);
        Ok(self)
    }

    pub fn only(mut self, glob: &str) -> Result<Self, SyncError> {
        self.only.push(compile(glob)?);
        Ok(self)
    }

    /// Matches at least one ignore pattern.
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.ignore.iter().any(|p| p.matches(file_name))
    }

    /// Fails the only-pattern requirement.
    pub fn is_not_only(&self, file_name: &str) -> bool {
        !self.only.is_empty() && !self.only.iter().any(|p| p.matches(file_name))
    }
}

impl EntryFilter for PatternFilter {
    fn admits(&self, file_name: &str) -> bool {
        !self.is_ignored(file_name) && !self.is_not_only(file_name)
    }

    fn include_hidden(&self) -> bool {
        self.include_hidden
    }
}

fn compile(glob: &str) -> Result<Pattern, SyncError> {
    Pattern::new(glob).map_err(|e| SyncError::InvalidPattern {
        pattern: glob.to_string(),
        reason: e.msg.to_string(),
    })
}
