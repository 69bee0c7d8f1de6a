use super::error::ConfigError;

/// Settings shared by every query an [`Unlocker`](super::Unlocker) answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockConfig {
    pub(crate) entry_point: String,
    pub(crate) default_prefix: String,
    pub(crate) credits_per_course: u32,
    pub(crate) max_depth: usize,
}

impl Default for UnlockConfig {
    fn default() -> Self {
        Self {
            entry_point: "COMP1511".to_owned(),
            default_prefix: "COMP".to_owned(),
            credits_per_course: 6,
            max_depth: 32,
        }
    }
}

impl UnlockConfig {
    /// The only course unlocked with nothing completed.
    #[must_use]
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Subject prefix completing a bare four-digit course number, also used
    /// by subject-count clauses.
    #[must_use]
    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }

    /// Units of credit every completed course is worth.
    #[must_use]
    pub fn credits_per_course(&self) -> u32 {
        self.credits_per_course
    }

    /// Deepest bracket nesting evaluated before giving up.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if !self.default_prefix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidPrefix {
                prefix: self.default_prefix.clone(),
            });
        }
        if self.entry_point.is_empty() {
            return Err(ConfigError::EmptyEntryPoint);
        }
        if self.credits_per_course == 0 {
            return Err(ConfigError::ZeroCredits);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
