use std::fmt;

use super::error::ParseError;
use super::grammar::{find_credit_threshold, find_level_marker};
use super::token::strip_outer;

/// Why a clause fragment could not be understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseFault {
    /// No `<n> UNITS OF CREDIT` phrase.
    MissingThreshold,
    /// Mentions `IN` but no course list follows the clause.
    MissingEnumeration,
}

impl fmt::Display for ClauseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseFault::MissingThreshold => write!(f, "no units of credit threshold"),
            ClauseFault::MissingEnumeration => write!(f, "no course list to count from"),
        }
    }
}

/// What a clause counts toward its credit-unit threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseKind {
    /// Completed courses whose fifth character is `level`.
    LevelCount { level: char },
    /// Completed courses containing `prefix`.
    SubjectCount { prefix: String },
    /// Completed courses that appear in `members`.
    EnumerationCount { members: Vec<String> },
    /// Every completed course.
    TotalCount,
    Malformed(ClauseFault),
}

/// A classified credit-unit clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    text: String,
    threshold: u32,
    kind: ClauseKind,
}

impl Clause {
    /// Classify a clause fragment.
    ///
    /// `enumeration` is the raw list token directly after the clause, if any.
    /// The checks run in a fixed order and match on substrings, so a clause
    /// such as `COMPLETION OF 36 UNITS OF CREDIT` counts courses carrying
    /// `prefix` because `COMPLETION` contains `COMP`.
    #[must_use]
    pub fn classify(text: &str, enumeration: Option<&str>, prefix: &str) -> Self {
        let Some(threshold) = find_credit_threshold(text) else {
            return Self {
                text: text.to_owned(),
                threshold: 0,
                kind: ClauseKind::Malformed(ClauseFault::MissingThreshold),
            };
        };

        let kind = if let Some(level) = find_level_marker(text) {
            ClauseKind::LevelCount { level }
        } else if text.contains(prefix) {
            ClauseKind::SubjectCount {
                prefix: prefix.to_owned(),
            }
        } else if text.contains("IN") {
            match enumeration {
                Some(list) => ClauseKind::EnumerationCount {
                    members: strip_outer(list).split(", ").map(str::to_owned).collect(),
                },
                None => ClauseKind::Malformed(ClauseFault::MissingEnumeration),
            }
        } else {
            ClauseKind::TotalCount
        };

        Self {
            text: text.to_owned(),
            threshold,
            kind,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Required units of credit. Zero for malformed clauses.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub fn kind(&self) -> &ClauseKind {
        &self.kind
    }

    /// Number of completed courses that count toward this clause.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedClause`] for a malformed clause.
    pub fn counted(&self, completed: &[&str]) -> Result<usize, ParseError> {
        let counted = match &self.kind {
            ClauseKind::LevelCount { level } => completed
                .iter()
                .filter(|course| course.chars().nth(4) == Some(*level))
                .count(),
            ClauseKind::SubjectCount { prefix } => completed
                .iter()
                .filter(|course| course.contains(prefix.as_str()))
                .count(),
            ClauseKind::EnumerationCount { members } => members
                .iter()
                .filter(|member| completed.contains(&member.as_str()))
                .count(),
            ClauseKind::TotalCount => completed.len(),
            ClauseKind::Malformed(reason) => {
                return Err(ParseError::MalformedClause {
                    clause: self.text.clone(),
                    reason: *reason,
                });
            }
        };
        Ok(counted)
    }

    /// Whether the counted courses, at `credits_per_course` each, reach the
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedClause`] for a malformed clause.
    pub fn is_satisfied(
        &self,
        completed: &[&str],
        credits_per_course: u32,
    ) -> Result<bool, ParseError> {
        let counted = u64::try_from(self.counted(completed)?).unwrap_or(u64::MAX);
        Ok(counted.saturating_mul(u64::from(credits_per_course)) >= u64::from(self.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_total_count() {
        let clause = Clause::classify("18 UNITS OF CREDIT", None, "COMP");
        assert_eq!(clause.threshold(), 18);
        assert_eq!(clause.kind(), &ClauseKind::TotalCount);
    }

    #[test]
    fn classify_level_before_subject() {
        let clause = Clause::classify("12 UNITS OF CREDIT IN LEVEL 2 COMP COURSES", None, "COMP");
        assert_eq!(clause.kind(), &ClauseKind::LevelCount { level: '2' });
    }

    #[test]
    fn classify_completion_counts_subject() {
        let clause = Clause::classify("COMPLETION OF 36 UNITS OF CREDIT", None, "COMP");
        assert_eq!(
            clause.kind(),
            &ClauseKind::SubjectCount {
                prefix: "COMP".into()
            }
        );
    }

    #[test]
    fn classify_prefix_is_configurable() {
        let clause = Clause::classify("COMPLETION OF 36 UNITS OF CREDIT", None, "MATH");
        assert_eq!(clause.kind(), &ClauseKind::TotalCount);
    }

    #[test]
    fn classify_enumeration() {
        let clause = Clause::classify(
            "6 UNITS OF CREDIT IN",
            Some("(COMP1511, COMP1521)"),
            "COMP",
        );
        assert_eq!(
            clause.kind(),
            &ClauseKind::EnumerationCount {
                members: vec!["COMP1511".into(), "COMP1521".into()]
            }
        );
    }

    #[test]
    fn classify_enumeration_without_list() {
        let clause = Clause::classify("6 UNITS OF CREDIT IN", None, "COMP");
        assert_eq!(
            clause.kind(),
            &ClauseKind::Malformed(ClauseFault::MissingEnumeration)
        );
    }

    #[test]
    fn classify_missing_threshold() {
        let clause = Clause::classify("APPROVAL FROM THE SCHOOL", None, "COMP");
        assert_eq!(
            clause.kind(),
            &ClauseKind::Malformed(ClauseFault::MissingThreshold)
        );
        assert_eq!(clause.threshold(), 0);
    }

    #[test]
    fn total_count_threshold_boundary() {
        let clause = Clause::classify("18 UNITS OF CREDIT", None, "COMP");
        assert!(clause
            .is_satisfied(&["COMP1511", "COMP1521", "MATH1081"], 6)
            .unwrap());
        assert!(!clause.is_satisfied(&["COMP1511", "COMP1521"], 6).unwrap());
    }

    #[test]
    fn level_count_uses_fifth_character() {
        let clause = Clause::classify("12 UNITS OF CREDIT IN LEVEL 2 COURSES", None, "COMP");
        let completed = ["COMP2521", "MATH2400", "COMP1511", "COMP3121"];
        assert_eq!(clause.counted(&completed).unwrap(), 2);
        assert!(clause.is_satisfied(&completed, 6).unwrap());
        assert!(!clause.is_satisfied(&["COMP2521", "COMP1511"], 6).unwrap());
    }

    #[test]
    fn level_count_ignores_short_identifiers() {
        let clause = Clause::classify("6 UNITS OF CREDIT IN LEVEL 1 COURSES", None, "COMP");
        assert_eq!(clause.counted(&["COMP", "X"]).unwrap(), 0);
    }

    #[test]
    fn subject_count_matches_substring() {
        let clause = Clause::classify("12 UNITS OF CREDIT IN COMP COURSES", None, "COMP");
        let completed = ["COMP1511", "MATH1081", "COMP1521"];
        assert_eq!(clause.counted(&completed).unwrap(), 2);
    }

    #[test]
    fn enumeration_counts_listed_courses() {
        let clause = Clause::classify(
            "6 UNITS OF CREDIT IN",
            Some("(COMP1511, COMP1521)"),
            "COMP",
        );
        assert!(clause.is_satisfied(&["COMP1511"], 6).unwrap());
        assert!(!clause.is_satisfied(&["COMP2521"], 6).unwrap());
    }

    #[test]
    fn malformed_clause_is_a_parse_error() {
        let clause = Clause::classify("APPROVAL FROM THE SCHOOL", None, "COMP");
        let err = clause.is_satisfied(&["COMP1511"], 6).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedClause { ref clause, reason: ClauseFault::MissingThreshold }
                if clause == "APPROVAL FROM THE SCHOOL"
        ));
    }

    #[test]
    fn credits_per_course_scales_count() {
        let clause = Clause::classify("18 UNITS OF CREDIT", None, "COMP");
        assert!(clause.is_satisfied(&["COMP1511", "COMP1521"], 12).unwrap());
    }
}
