use crate::parse::{split, strip_outer, Clause, LogicOp, ParseError, Token};
use crate::UnlockConfig;

/// Evaluate normalized rule text against the completed courses.
pub(crate) fn evaluate(
    completed: &[&str],
    text: &str,
    config: &UnlockConfig,
) -> Result<bool, ParseError> {
    eval_level(completed, text, config, 0)
}

fn eval_level(
    completed: &[&str],
    text: &str,
    config: &UnlockConfig,
    depth: usize,
) -> Result<bool, ParseError> {
    if depth > config.max_depth() {
        return Err(ParseError::NestingTooDeep {
            limit: config.max_depth(),
        });
    }

    let tokens = split(text);
    let op = LogicOp::infer(&tokens);
    log::trace!("level {depth}: {} tokens under {op}", tokens.len());

    // Groups first, in order. A deciding group stops evaluation of the rest.
    for token in &tokens {
        if let Token::Group(raw) = token {
            let result = eval_level(completed, strip_outer(raw), config, depth + 1)?;
            if op.short_circuits(result) {
                log::trace!("level {depth}: group {raw} decides {op} as {result}");
                return Ok(result);
            }
        }
    }

    let siblings: Vec<&Token> = tokens
        .iter()
        .filter(|token| !matches!(token, Token::Group(_)))
        .collect();

    // Every clause in the pass is evaluated before the results are combined.
    // A clause counts from the list token directly after it, if there is one.
    let clause_results = siblings
        .iter()
        .enumerate()
        .filter_map(|(i, token)| match token {
            Token::Clause(text) => Some((text, siblings.get(i + 1))),
            _ => None,
        })
        .map(|(text, next)| {
            let enumeration = match next {
                Some(Token::List(raw)) => Some(raw.as_str()),
                _ => None,
            };
            Clause::classify(text, enumeration, config.default_prefix())
                .is_satisfied(completed, config.credits_per_course())
        })
        .collect::<Result<Vec<bool>, _>>()?;

    if let Some(&decided) = clause_results.iter().find(|&&r| op.short_circuits(r)) {
        log::trace!("level {depth}: credit clause decides {op} as {decided}");
        return Ok(decided);
    }

    let mut leaves = siblings
        .into_iter()
        .filter(|token| token.is_special())
        .map(Token::as_str);

    // A bare AND at an AND level counts as satisfied; an OR at that level is
    // looked up like a course and fails. Mixed operators are not rejected.
    let result = match op {
        LogicOp::Or => leaves.any(|leaf| completed.contains(&leaf)),
        LogicOp::And => {
            leaves.all(|leaf| completed.contains(&leaf) || leaf == LogicOp::And.as_str())
        }
    };
    Ok(result)
}
