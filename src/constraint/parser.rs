//! Constraint constructors and the dispatcher that picks between them
//!
//! The dispatcher walks [`RULES`] top to bottom and hands the trimmed text to
//! the first rule whose lexical check applies. Structural separators come
//! before operator prefixes because group members start with operators, and
//! two-character operators come before their one-character prefixes.

use tracing::trace;

use crate::constraint::Constraint;
use crate::version::error::{ErrorKind, ParseError};
use crate::version::partial::{PartialVersion, is_wildcard};

/// One dispatch step: a lexical check and the constructor it selects
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    applies: fn(&str) -> bool,
    build: fn(&str) -> Result<Constraint, ParseError>,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "any",
        applies: is_wildcard,
        build: Constraint::any,
    },
    Rule {
        name: "or_group",
        applies: has_or_separator,
        build: Constraint::or_group,
    },
    Rule {
        name: "hyphen_range",
        applies: has_hyphen_separator,
        build: Constraint::hyphen_range,
    },
    Rule {
        name: "and_group",
        applies: has_whitespace,
        build: Constraint::and_group,
    },
    Rule {
        name: "tilde",
        applies: starts_with_tilde,
        build: Constraint::tilde,
    },
    Rule {
        name: "caret",
        applies: starts_with_caret,
        build: Constraint::caret,
    },
    Rule {
        name: "greater_equal",
        applies: starts_with_greater_equal,
        build: Constraint::greater_equal,
    },
    Rule {
        name: "less_equal",
        applies: starts_with_less_equal,
        build: Constraint::less_equal,
    },
    Rule {
        name: "greater_than",
        applies: starts_with_greater,
        build: Constraint::greater_than,
    },
    Rule {
        name: "less_than",
        applies: starts_with_less,
        build: Constraint::less_than,
    },
];

/// Leading `=` or no operator at all
static FALLBACK: Rule = Rule {
    name: "equal",
    applies: always,
    build: Constraint::equal,
};

fn has_or_separator(text: &str) -> bool {
    text.contains("||")
}

fn has_hyphen_separator(text: &str) -> bool {
    text.contains(" - ")
}

fn has_whitespace(text: &str) -> bool {
    text.contains(char::is_whitespace)
}

fn starts_with_tilde(text: &str) -> bool {
    text.starts_with('~')
}

fn starts_with_caret(text: &str) -> bool {
    text.starts_with('^')
}

fn starts_with_greater_equal(text: &str) -> bool {
    text.starts_with(">=")
}

fn starts_with_less_equal(text: &str) -> bool {
    text.starts_with("<=")
}

fn starts_with_greater(text: &str) -> bool {
    text.starts_with('>')
}

fn starts_with_less(text: &str) -> bool {
    text.starts_with('<')
}

fn always(_: &str) -> bool {
    true
}

/// First rule that applies to already trimmed text
pub(crate) fn rule_for(text: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(text))
        .unwrap_or(&FALLBACK)
}

/// Drop a leading operator and the whitespace around it
fn strip_operator<'a>(text: &'a str, operator: &str) -> &'a str {
    let text = text.trim();
    text.strip_prefix(operator).unwrap_or(text).trim()
}

/// Concrete reference version for an operator; wildcards and empty operands are rejected
fn operand(op: &'static str, input: &str, body: &str) -> Result<PartialVersion, ParseError> {
    let body = body.trim();
    if is_wildcard(body) {
        return Err(ParseError::new(op, input, ErrorKind::InvalidVersion));
    }

    PartialVersion::parse(body).map_err(|err| ParseError::wrap(op, input, err))
}

impl Constraint {
    /// Parse a constraint string, selecting the variant from lexical cues
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        let rule = rule_for(text);
        trace!("Dispatching constraint '{}' to {}", text, rule.name);

        (rule.build)(text)
    }

    /// `*`, `x`, `X` or an empty string
    pub fn any(text: &str) -> Result<Self, ParseError> {
        if !is_wildcard(text.trim()) {
            return Err(ParseError::new("Constraint::any", text, ErrorKind::InvalidVersion));
        }
        Ok(Constraint::Any)
    }

    /// `=1.2.3`, `1.2.3`, `1.2` or `1.x`
    pub fn equal(text: &str) -> Result<Self, ParseError> {
        const OP: &str = "Constraint::equal";

        let body = strip_operator(text, "=");
        if body.is_empty() {
            return Err(ParseError::new(OP, text, ErrorKind::InvalidVersion));
        }

        let version = PartialVersion::parse(body).map_err(|err| ParseError::wrap(OP, text, err))?;
        if version.is_wildcard() {
            return Err(ParseError::new(OP, text, ErrorKind::InvalidVersion));
        }

        Ok(Constraint::Equal(version))
    }

    pub fn greater_than(text: &str) -> Result<Self, ParseError> {
        operand("Constraint::greater_than", text, strip_operator(text, ">")).map(Constraint::GreaterThan)
    }

    pub fn greater_equal(text: &str) -> Result<Self, ParseError> {
        operand("Constraint::greater_equal", text, strip_operator(text, ">="))
            .map(Constraint::GreaterEqual)
    }

    pub fn less_than(text: &str) -> Result<Self, ParseError> {
        operand("Constraint::less_than", text, strip_operator(text, "<")).map(Constraint::LessThan)
    }

    pub fn less_equal(text: &str) -> Result<Self, ParseError> {
        operand("Constraint::less_equal", text, strip_operator(text, "<=")).map(Constraint::LessEqual)
    }

    pub fn caret(text: &str) -> Result<Self, ParseError> {
        operand("Constraint::caret", text, strip_operator(text, "^")).map(Constraint::Caret)
    }

    pub fn tilde(text: &str) -> Result<Self, ParseError> {
        operand("Constraint::tilde", text, strip_operator(text, "~")).map(Constraint::Tilde)
    }

    /// `1.2.3 - 2.3.4`, both bounds inclusive and concrete
    pub fn hyphen_range(text: &str) -> Result<Self, ParseError> {
        const OP: &str = "Constraint::hyphen_range";

        let Some((lower, upper)) = text.split_once(" - ") else {
            return Err(ParseError::new(OP, text, ErrorKind::InvalidVersion));
        };

        Ok(Constraint::Hyphen {
            lower: operand(OP, text, lower)?,
            upper: operand(OP, text, upper)?,
        })
    }

    /// Whitespace separated members, each parsed as a constraint of its own
    pub fn and_group(text: &str) -> Result<Self, ParseError> {
        const OP: &str = "Constraint::and_group";

        let members = text
            .split_whitespace()
            .map(|token| Constraint::parse(token).map_err(|err| ParseError::wrap(OP, text, err)))
            .collect::<Result<Vec<_>, _>>()?;

        if members.is_empty() {
            return Err(ParseError::new(OP, text, ErrorKind::InvalidVersion));
        }

        Ok(Constraint::And(members))
    }

    /// `||` separated members; wildcard members are rejected
    pub fn or_group(text: &str) -> Result<Self, ParseError> {
        const OP: &str = "Constraint::or_group";

        if !has_or_separator(text) {
            return Err(ParseError::new(OP, text, ErrorKind::InvalidVersion));
        }

        // members hold no `||`, so each parses as a single rule or an AND group
        let members = text
            .split("||")
            .map(str::trim)
            .map(|member| {
                if is_wildcard(member) {
                    return Err(ParseError::new(OP, text, ErrorKind::InvalidVersion));
                }
                Constraint::parse(member).map_err(|err| ParseError::wrap(OP, text, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Constraint::Or(members))
    }
}
