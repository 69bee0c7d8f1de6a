use winnow::ascii::digit1;
use winnow::combinator::{delimited, terminated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

// -- Primitives -------------------------------------------------------------

fn blank(input: &mut &str) -> ModalResult<char> {
    one_of(|c: char| c.is_whitespace()).parse_next(input)
}

// -- Course references ------------------------------------------------------

fn course_code<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(4, |c: char| c.is_ascii_uppercase()),
        take_while(4, |c: char| c.is_ascii_digit()),
    )
        .take()
        .parse_next(input)
}

fn bare_number<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(4, |c: char| c.is_ascii_digit()).parse_next(input)
}

/// `true` if `word` is exactly four uppercase letters followed by four digits.
pub(crate) fn is_course_code(word: &str) -> bool {
    course_code.parse(word).is_ok()
}

/// `true` if `word` is exactly four digits, a course number missing its prefix.
pub(crate) fn is_bare_number(word: &str) -> bool {
    bare_number.parse(word).is_ok()
}

// -- Clause fragments -------------------------------------------------------

/// `<digits> UNITS OF CREDIT`, also accepting the `UNITS OC CREDIT` typo.
fn credit_threshold(input: &mut &str) -> ModalResult<u32> {
    terminated(
        digit1.try_map(str::parse::<u32>),
        (blank, "UNITS", blank, 'O', one_of(['F', 'C']), blank, "CREDIT"),
    )
    .parse_next(input)
}

/// A lone `1`, `2` or `3` between whitespace marks a course level.
fn level_marker(input: &mut &str) -> ModalResult<char> {
    delimited(blank, one_of('1'..='3'), blank).parse_next(input)
}

/// Leftmost credit-unit threshold in `text`.
///
/// Only the start of each digit run is tried: a match starting mid-run would
/// share the same tail, so it can never succeed where the run start failed.
pub(crate) fn find_credit_threshold(text: &str) -> Option<u32> {
    let mut previous_digit = false;
    text.char_indices().find_map(|(start, c)| {
        let run_start = c.is_ascii_digit() && !previous_digit;
        previous_digit = c.is_ascii_digit();
        if !run_start {
            return None;
        }
        let mut input = &text[start..];
        credit_threshold(&mut input).ok()
    })
}

/// Leftmost level marker in `text`.
pub(crate) fn find_level_marker(text: &str) -> Option<char> {
    text.char_indices().find_map(|(start, _)| {
        let mut input = &text[start..];
        level_marker(&mut input).ok()
    })
}
