/// Normalize raw rule text before evaluation.
///
/// Upper-cases, removes every period and drops each word starting with `PRE`
/// (`PREREQUISITE:`, `PRE-REQUISITE:` and friends). Words are rejoined with
/// single spaces.
#[must_use]
pub fn normalize(rule_text: &str) -> String {
    rule_text
        .to_uppercase()
        .replace('.', "")
        .split_whitespace()
        .filter(|word| !word.starts_with("PRE"))
        .collect::<Vec<_>>()
        .join(" ")
}
