use std::collections::HashMap;

use coursegate::Unlocker;
use proptest::prelude::*;

const TARGET: &str = "ZZZZ9999";

/// Generate a course code: four uppercase letters, four digits.
fn arb_course() -> impl Strategy<Value = String> {
    "[A-Z]{4}[0-9]{4}"
}

/// Generate a completed list drawn from a small pool so duplicates and
/// overlaps with rule text are common.
fn arb_completed() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("COMP1511".to_owned()),
            Just("COMP1521".to_owned()),
            Just("COMP2521".to_owned()),
            Just("MATH1081".to_owned()),
            arb_course(),
        ],
        0..8,
    )
}

fn unlocker_for(rule: &str) -> Unlocker<HashMap<String, String>> {
    Unlocker::new(HashMap::from([(TARGET.to_owned(), rule.to_owned())]))
}

proptest! {
    /// With nothing completed only the entry point is unlocked, whatever the
    /// target and whether or not it has a rule.
    #[test]
    fn nothing_completed_unlocks_entry_point_only(target in arb_course()) {
        let unlocker = unlocker_for("COMP1511");
        let none: [&str; 0] = [];
        prop_assert_eq!(unlocker.is_unlocked(&none, &target).unwrap(), target == "COMP1511");
    }

    /// A rule naming one course is satisfied exactly when that course was
    /// completed, regardless of order or repetition.
    #[test]
    fn single_course_rule_matches_membership(
        required in prop_oneof![Just("COMP1521".to_owned()), arb_course()],
        completed in arb_completed(),
    ) {
        // Words starting with PRE are stripped as qualifiers.
        prop_assume!(!required.starts_with("PRE"));
        let unlocker = unlocker_for(&format!("Prerequisite: {required}"));
        let expected = completed.contains(&required);
        prop_assert_eq!(unlocker.is_unlocked(&completed, TARGET).unwrap(), expected);

        let mut shuffled = completed.clone();
        shuffled.reverse();
        shuffled.extend(completed.iter().cloned());
        prop_assert_eq!(unlocker.is_unlocked(&shuffled, TARGET).unwrap(), expected);
    }

    /// A bare four-digit rule is completed with the default prefix.
    #[test]
    fn bare_number_rule_uses_prefix(
        number in "[0-9]{4}",
        completed in arb_completed(),
    ) {
        let unlocker = unlocker_for(&number);
        let expected = completed.contains(&format!("COMP{number}"));
        prop_assert_eq!(unlocker.is_unlocked(&completed, TARGET).unwrap(), expected);
    }

    /// A plain credit clause holds when six units per course reach the
    /// threshold.
    #[test]
    fn credit_clause_arithmetic(threshold in 0_u32..200, taken in 1_usize..30) {
        let unlocker = unlocker_for(&format!("{threshold} units of credit"));
        let completed: Vec<String> = (0..taken).map(|i| format!("GENE{i:04}")).collect();
        let expected = taken * 6 >= threshold as usize;
        prop_assert_eq!(unlocker.is_unlocked(&completed, TARGET).unwrap(), expected);
    }

    /// OR of two courses equals membership of either; AND equals both.
    #[test]
    fn two_course_connectives(
        a in arb_course(),
        b in arb_course(),
        completed in arb_completed(),
    ) {
        prop_assume!(!a.starts_with("PRE") && !b.starts_with("PRE"));
        let has_a = completed.contains(&a);
        let has_b = completed.contains(&b);

        let or_rule = unlocker_for(&format!("{a} or {b}"));
        prop_assert_eq!(or_rule.is_unlocked(&completed, TARGET).unwrap(), has_a || has_b);

        let and_rule = unlocker_for(&format!("{a} and {b}"));
        prop_assert_eq!(and_rule.is_unlocked(&completed, TARGET).unwrap(), has_a && has_b);
    }

    /// Evaluation never panics on arbitrary text; it returns a verdict or an error.
    #[test]
    fn arbitrary_text_never_panics(
        rule in "[A-Za-z0-9 (),.]{0,60}",
        completed in arb_completed(),
    ) {
        let _ = unlocker_for(&rule).is_unlocked(&completed, TARGET);
    }
}
