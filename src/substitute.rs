//! Turning formula text into literal tokens for one row.

use log::debug;

use crate::assignment::Assignment;
use crate::error::{Error, FormulaIssue, Result};
use crate::registry::VariableRegistry;
use crate::token::{normalize_operators, Token};

/// Substitute the values of `assignment` into `formula` and split it into tokens.
///
/// `>` and `=` are first rewritten to their internal codes, then each registered variable
/// becomes `T` or `F`. Whitespace is dropped. Any character that is still not a token
/// (an undeclared variable, say) makes the formula malformed.
///
/// # Errors
///
/// [`FormulaIssue::UnexpectedChar`] for a character that is neither a token nor a registered
/// variable, and [`FormulaIssue::Unassigned`] for a registered variable that `assignment` is
/// too short to cover.
pub fn substitute(formula: &str, assignment: &Assignment, registry: &VariableRegistry) -> Result<Vec<Token>> {
    let normalized = normalize_operators(formula);
    let mut tokens = Vec::with_capacity(normalized.len());

    for (position, c) in normalized.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        let token = match registry.index_of(c) {
            Some(index) => assignment.get(index).map(Token::Lit).ok_or_else(|| {
                Error::malformed(formula, FormulaIssue::Unassigned { ch: c, position })
            })?,
            None => Token::from_code(c).ok_or_else(|| {
                Error::malformed(formula, FormulaIssue::UnexpectedChar { ch: c, position })
            })?,
        };
        tokens.push(token);
    }

    debug!("substitute({:?}, {}) -> {:?}", formula, assignment, tokens);
    Ok(tokens)
}

/// Tokenize a formula that mentions no variables.
pub fn tokenize(formula: &str) -> Result<Vec<Token>> {
    substitute(formula, &Assignment::from(Vec::new()), &VariableRegistry::new())
}
