use std::fmt;

use super::grammar::is_course_code;

/// Boolean operator governing one bracket level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "AND" => Some(LogicOp::And),
            "OR" => Some(LogicOp::Or),
            _ => None,
        }
    }

    /// A level is `And` as soon as one of its tokens is the word `AND`,
    /// otherwise `Or`. Each bracket level infers its own operator.
    #[must_use]
    pub fn infer(tokens: &[Token]) -> Self {
        if tokens.contains(&Token::Logic(LogicOp::And)) {
            LogicOp::And
        } else {
            LogicOp::Or
        }
    }

    /// `true` if a single operand with this value decides the whole level.
    #[must_use]
    pub fn short_circuits(self, operand: bool) -> bool {
        match self {
            LogicOp::And => !operand,
            LogicOp::Or => operand,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One top-level unit of a normalized rule text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Four uppercase letters followed by four digits.
    Course(String),
    /// A literal `AND` or `OR`.
    Logic(LogicOp),
    /// Bracketed sub-rule, parentheses included.
    Group(String),
    /// Bracketed, comma-separated enumeration of courses, parentheses included.
    List(String),
    /// Any other fragment, e.g. `COMPLETION OF 18 UNITS OF CREDIT`.
    Clause(String),
}

impl Token {
    fn classify(raw: String) -> Self {
        if has_bracket(&raw) {
            if raw.contains(',') {
                Token::List(raw)
            } else {
                Token::Group(raw)
            }
        } else if let Some(op) = LogicOp::from_word(&raw) {
            Token::Logic(op)
        } else if is_course_code(&raw) {
            Token::Course(raw)
        } else {
            Token::Clause(raw)
        }
    }

    /// The token's source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Token::Logic(op) => op.as_str(),
            Token::Course(s) | Token::Group(s) | Token::List(s) | Token::Clause(s) => s,
        }
    }

    /// Course codes and logic words stand on their own during splitting.
    #[must_use]
    pub fn is_special(&self) -> bool {
        matches!(self, Token::Course(_) | Token::Logic(_))
    }
}

fn is_special(word: &str) -> bool {
    is_course_code(word) || LogicOp::from_word(word).is_some()
}

fn has_bracket(word: &str) -> bool {
    word.contains(['(', ')'])
}

/// Whether `word` may start a new token after `previous`. Only consulted at
/// bracket depth zero.
fn can_split(previous: &str, word: &str) -> bool {
    is_special(word) || is_special(previous) || word.contains('(')
}

fn count(word: &str, bracket: char) -> isize {
    word.chars().fold(0, |n, c| if c == bracket { n + 1 } else { n })
}

/// Split one level of normalized rule text into tokens.
///
/// Course codes, logic words and anything opening a bracket break out as their
/// own token; other words are merged into the token before them, so phrases
/// like `COMPLETION OF 18 UNITS OF CREDIT` stay whole. While a bracket is open
/// every word is merged, leaving nested text inside a single group token.
#[must_use]
pub fn split(text: &str) -> Vec<Token> {
    let mut raw: Vec<String> = Vec::new();
    let mut depth: isize = 0;

    for word in text.split_whitespace() {
        match raw.last_mut() {
            Some(last) if depth != 0 || !can_split(last, word) => {
                last.push(' ');
                last.push_str(word);
                depth -= count(word, ')');
            }
            _ => {
                raw.push(word.to_owned());
                depth += count(word, '(');
            }
        }
    }

    raw.into_iter().map(Token::classify).collect()
}

/// Drop the first and last character, the enclosing parentheses of a group
/// or list token.
#[must_use]
pub fn strip_outer(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
