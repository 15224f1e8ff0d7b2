//! Error types for variable registration and formula evaluation.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the truth-table core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A proposed variable name cannot be used.
    ///
    /// Registration is all-or-nothing, so one bad name rejects the whole batch.
    #[error("Bad variable name `{name}`: {reason}")]
    InvalidVariableName { name: String, reason: NameIssue },

    /// A formula does not reduce to exactly one truth value.
    #[error("Malformed formula `{formula}`: {reason}")]
    MalformedFormula { formula: String, reason: FormulaIssue },
}

impl Error {
    pub(crate) fn invalid_name(name: impl Into<String>, reason: NameIssue) -> Self {
        Error::InvalidVariableName {
            name: name.into(),
            reason,
        }
    }

    pub(crate) fn malformed(formula: impl Into<String>, reason: FormulaIssue) -> Self {
        Error::MalformedFormula {
            formula: formula.into(),
            reason,
        }
    }

    /// Attach the formula text to an error raised while reducing its tokens.
    pub(crate) fn with_formula(self, text: &str) -> Self {
        match self {
            Error::MalformedFormula { formula, reason } if formula.is_empty() => {
                Error::malformed(text, reason)
            }
            other => other,
        }
    }
}

/// Why a variable name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameIssue {
    #[error("contains the reserved letter `{0}` (use the uppercase letter instead)")]
    Reserved(char),
    #[error("`{0}` is a truth-value literal")]
    Literal(char),
    #[error("`{0}` is an operator symbol")]
    Operator(char),
    #[error("variables are single characters")]
    NotSingleChar,
    #[error("declared more than once")]
    Duplicate,
    #[error("too many variables (at most {0})")]
    TooMany(usize),
}

/// Why a formula could not be reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormulaIssue {
    #[error("empty formula")]
    Empty,
    #[error("unexpected character `{ch}` at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("no value for variable `{ch}` at position {position}")]
    Unassigned { ch: char, position: usize },
    #[error("missing operand at token {0}")]
    MissingOperand(usize),
    #[error("missing operator at token {0}")]
    MissingOperator(usize),
    #[error("unmatched `(` at token {0}")]
    UnclosedParen(usize),
    #[error("unmatched `)` at token {0}")]
    UnopenedParen(usize),
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}
