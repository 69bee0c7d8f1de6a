use std::fmt;

use super::config::UnlockConfig;
use super::error::ConfigError;
use super::source::{RuleBook, RuleSource};
use crate::parse::is_bare_number;
use crate::{normalize, UnlockError};

/// Builder for an [`Unlocker`] with non-default settings.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use coursegate::Unlocker;
///
/// let rules = HashMap::from([("MATH1231".to_owned(), "MATH1131".to_owned())]);
/// let unlocker = Unlocker::builder(rules)
///     .entry_point("MATH1131")
///     .default_prefix("MATH")
///     .build()
///     .unwrap();
///
/// assert!(unlocker.is_unlocked::<&str>(&[], "MATH1131").unwrap());
/// assert!(unlocker.is_unlocked(&["MATH1131"], "MATH1231").unwrap());
/// ```
#[derive(Debug)]
pub struct UnlockerBuilder<S> {
    source: S,
    config: UnlockConfig,
}

impl<S: RuleSource> UnlockerBuilder<S> {
    /// The course unlocked when nothing has been completed.
    #[must_use]
    pub fn entry_point(mut self, identifier: &str) -> Self {
        self.config.entry_point = identifier.to_owned();
        self
    }

    /// Prefix for bare course numbers and subject-count clauses.
    #[must_use]
    pub fn default_prefix(mut self, prefix: &str) -> Self {
        self.config.default_prefix = prefix.to_owned();
        self
    }

    #[must_use]
    pub fn credits_per_course(mut self, credits: u32) -> Self {
        self.config.credits_per_course = credits;
        self
    }

    /// Bracket nesting beyond this depth fails with
    /// [`ParseError::NestingTooDeep`](crate::parse::ParseError::NestingTooDeep).
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Validate the settings and build the `Unlocker`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a setting is empty, zero or not an uppercase
    /// prefix.
    pub fn build(self) -> Result<Unlocker<S>, ConfigError> {
        self.config.validate()?;
        Ok(Unlocker {
            source: self.source,
            config: self.config,
        })
    }
}

/// Answers whether a course is unlocked by a set of completed courses.
///
/// Holds no per-query state. Thread-safe whenever the rule source is, and
/// designed to live behind `Arc`.
#[derive(Debug)]
pub struct Unlocker<S> {
    source: S,
    config: UnlockConfig,
}

impl<S: RuleSource> Unlocker<S> {
    /// An `Unlocker` with the default settings.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: UnlockConfig::default(),
        }
    }

    #[must_use]
    pub fn builder(source: S) -> UnlockerBuilder<S> {
        UnlockerBuilder {
            source,
            config: UnlockConfig::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &UnlockConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether `target` can be taken after completing `completed`.
    ///
    /// With nothing completed only the entry point is unlocked. Otherwise the
    /// target's rule is normalized; a rule naming exactly one completed course,
    /// or a bare four-digit number whose prefixed code was completed, unlocks
    /// immediately. Anything else goes through the full evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`UnlockError::UnknownTarget`] if the source has no rule for
    /// `target`, and [`UnlockError::Parse`] if evaluation reaches a clause the
    /// grammar does not cover or nests too deeply.
    pub fn is_unlocked<C: AsRef<str>>(
        &self,
        completed: &[C],
        target: &str,
    ) -> Result<bool, UnlockError> {
        if completed.is_empty() {
            let unlocked = target == self.config.entry_point;
            log::debug!("{target}: nothing completed, unlocked = {unlocked}");
            return Ok(unlocked);
        }

        let rule = self
            .source
            .lookup(target)
            .ok_or_else(|| UnlockError::UnknownTarget {
                target: target.to_owned(),
            })?;
        let completed: Vec<&str> = completed.iter().map(AsRef::as_ref).collect();
        let condition = normalize(rule);

        if completed.contains(&condition.as_str()) {
            log::debug!("{target}: single completed course {condition}");
            return Ok(true);
        }

        if is_bare_number(&condition) {
            let course = format!("{}{condition}", self.config.default_prefix);
            let unlocked = completed.contains(&course.as_str());
            log::debug!("{target}: bare course number as {course}, unlocked = {unlocked}");
            return Ok(unlocked);
        }

        let unlocked = crate::evaluate::evaluate(&completed, &condition, &self.config)?;
        log::debug!("{target}: '{condition}' evaluated to {unlocked}");
        Ok(unlocked)
    }
}

impl Unlocker<RuleBook> {
    /// Every course in the book that `completed` unlocks, in identifier order.
    ///
    /// # Errors
    ///
    /// Returns the first [`UnlockError`] raised by any rule.
    pub fn unlocked_targets<C: AsRef<str>>(
        &self,
        completed: &[C],
    ) -> Result<Vec<&str>, UnlockError> {
        let mut unlocked = Vec::new();
        for target in self.source.identifiers() {
            if self.is_unlocked(completed, target)? {
                unlocked.push(target);
            }
        }
        Ok(unlocked)
    }
}

impl fmt::Display for Unlocker<RuleBook> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unlocker({} rules, entry point {})",
            self.source.len(),
            self.config.entry_point,
        )
    }
}
