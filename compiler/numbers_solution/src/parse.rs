//! Parsing the solvers' postfix text output.
//!
//! Each solution is one line of space-separated tokens:
//!
//! - `V(<int>)` pushes a value;
//! - `A(<ops>)` / `M(<ops>)` pops one entry per character of `<ops>` and
//!   pushes an additive / multiplicative node over them, in stack order;
//! - a bare `R` ends the solution, leaving exactly one entry.
//!
//! `<ops>` uses `+` for forward and `-` for inverted children in both
//! groups; for `M` they become `*` and `/`.

use crate::node::{GroupKind, OpNode, ResultNode, Tag, Tags};

/// Deepest operator nesting a solution may have.
///
/// Real solutions nest at most one level per card. Canonicalization, keys
/// and printing recurse once per level, so deeper lines are rejected here.
pub const MAX_NESTING: usize = 256;

/// A malformed solution line. `index` is the 1-based token position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("token {index} `{token}`: unknown token head")]
    UnknownHead { index: usize, token: String },
    #[error("token {index} `{token}`: expected `V(..)`, `A(..)`, `M(..)` or `R`")]
    MalformedToken { index: usize, token: String },
    #[error("token {index} `{token}`: invalid integer value")]
    BadValue { index: usize, token: String },
    #[error("token {index} `{token}`: operator `{symbol}` is not `+` or `-`")]
    BadOperator {
        index: usize,
        token: String,
        symbol: char,
    },
    #[error("token {index} `{token}`: no operators")]
    EmptyOperators { index: usize, token: String },
    #[error("token {index} `{token}`: needs {needed} operands but the stack holds {available}")]
    StackUnderflow {
        index: usize,
        token: String,
        needed: usize,
        available: usize,
    },
    #[error("token {index} `R`: stack holds {depth} entries (expected exactly one)")]
    UnbalancedStack { index: usize, depth: usize },
    #[error("token {index} `{token}`: follows the terminal `R`")]
    TrailingToken { index: usize, token: String },
    #[error("missing terminal `R`")]
    MissingReturn,
    #[error("token {index} `{token}`: nests operators deeper than {limit} levels")]
    TooDeep {
        index: usize,
        token: String,
        limit: usize,
    },
}

/// A [`ParseError`] located on a 1-based line of solver output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub source: ParseError,
}

enum Token {
    Value(i64),
    Combine(Tags),
    Return,
}

fn lex_token(index: usize, text: &str) -> Result<Token, ParseError> {
    let malformed = || ParseError::MalformedToken {
        index,
        token: text.to_string(),
    };

    let mut chars = text.chars();
    let head = chars.next().ok_or_else(malformed)?;
    let rest = chars.as_str();

    let group = match head {
        'R' if rest.is_empty() => return Ok(Token::Return),
        'R' => return Err(malformed()),
        'V' => None,
        'A' => Some(GroupKind::Additive),
        'M' => Some(GroupKind::Multiplicative),
        _ => {
            return Err(ParseError::UnknownHead {
                index,
                token: text.to_string(),
            })
        }
    };

    let body = rest
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let Some(group) = group else {
        return body
            .parse::<i64>()
            .map(Token::Value)
            .map_err(|_| ParseError::BadValue {
                index,
                token: text.to_string(),
            });
    };

    if body.is_empty() {
        return Err(ParseError::EmptyOperators {
            index,
            token: text.to_string(),
        });
    }
    body.chars()
        .map(|symbol| match symbol {
            '+' => Ok(Tag::new(group, false)),
            '-' => Ok(Tag::new(group, true)),
            _ => Err(ParseError::BadOperator {
                index,
                token: text.to_string(),
                symbol,
            }),
        })
        .collect::<Result<Tags, _>>()
        .map(Token::Combine)
}

/// Parse one solution from its tokens.
pub fn parse_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<ResultNode, ParseError> {
    // Each entry carries its nesting depth; a value is depth 0.
    let mut stack: Vec<(ResultNode, usize)> = Vec::new();
    let mut tokens = tokens.into_iter().enumerate().map(|(i, t)| (i + 1, t));

    while let Some((index, text)) = tokens.next() {
        match lex_token(index, text)? {
            Token::Value(value) => stack.push((ResultNode::Value(value), 0)),
            Token::Combine(tags) => {
                let needed = tags.len();
                if stack.len() < needed {
                    return Err(ParseError::StackUnderflow {
                        index,
                        token: text.to_string(),
                        needed,
                        available: stack.len(),
                    });
                }
                let popped = stack.split_off(stack.len() - needed);
                let depth = 1 + popped.iter().map(|(_, depth)| *depth).max().unwrap_or(0);
                if depth > MAX_NESTING {
                    return Err(ParseError::TooDeep {
                        index,
                        token: text.to_string(),
                        limit: MAX_NESTING,
                    });
                }
                let children = popped.into_iter().map(|(child, _)| child).collect();
                // Tags come from one group by construction.
                stack.push((ResultNode::Op(OpNode::from_parts(children, tags)), depth));
            }
            Token::Return => {
                if let Some((index, token)) = tokens.next() {
                    return Err(ParseError::TrailingToken {
                        index,
                        token: token.to_string(),
                    });
                }
                let depth = stack.len();
                return match stack.pop() {
                    Some((root, _)) if depth == 1 => Ok(root),
                    _ => Err(ParseError::UnbalancedStack { index, depth }),
                };
            }
        }
    }

    Err(ParseError::MissingReturn)
}

/// Parse one line of solver output.
pub fn parse_line(line: &str) -> Result<ResultNode, ParseError> {
    parse_tokens(line.split_whitespace())
}

/// Parse a solver's whole output, one solution per non-blank line.
///
/// Fails on the first malformed line; no partial result is returned.
pub fn parse_output(text: &str) -> Result<Vec<ResultNode>, LineError> {
    Ok(parse_numbered(text)?
        .into_iter()
        .map(|(_, node)| node)
        .collect())
}

/// As [`parse_output`], pairing each solution with its 1-based line number.
pub fn parse_numbered(text: &str) -> Result<Vec<(usize, ResultNode)>, LineError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let line_number = index + 1;
            parse_line(line)
                .map(|node| (line_number, node))
                .map_err(|source| {
                    tracing::warn!(line = line_number, %source, "rejected solver line");
                    LineError {
                        line: line_number,
                        source,
                    }
                })
        })
        .collect()
}
