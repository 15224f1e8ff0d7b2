//! Reduction of a token sequence to a single truth value.
//!
//! Operators are applied in strict precedence order, tightest first:
//!
//! ```text
//! ~  >  ^  >  v  >  x  >  i  >  d
//! ```
//!
//! Every operator of one level is applied before any operator of the next, and chains of the
//! same operator reduce left to right, so `T ^ T ^ F` is `(T ^ T) ^ F`. A parenthesized group
//! is reduced on its own, through the whole cascade, before it takes part in the enclosing
//! level.
//!
//! The reducer walks a cursor over an immutable slice, one recursive step per precedence
//! level. Parenthesized groups and negations nest the walk; nesting is bounded by
//! [`MAX_DEPTH`].

use log::debug;

use crate::error::{Error, FormulaIssue, Result};
use crate::token::{BinOp, Token};

/// Deepest nesting of groups and negations a formula may use.
pub const MAX_DEPTH: usize = 128;

const LOOSEST: usize = BinOp::PRECEDENCE.len() - 1;

/// Reduce `tokens` to one truth value.
///
/// # Errors
///
/// [`Error::MalformedFormula`] on an empty sequence, an operator without its operands, two
/// operands without an operator between them, or unbalanced parentheses. The error carries
/// no formula text; callers that know it attach it.
///
/// A well-formed formula whose parentheses and negations nest more than [`MAX_DEPTH`] deep
/// is also rejected, with [`FormulaIssue::TooDeep`], rather than risking the stack.
pub fn reduce(tokens: &[Token]) -> Result<bool> {
    if tokens.is_empty() {
        return Err(malformed(FormulaIssue::Empty));
    }

    let mut reducer = Reducer::new(tokens);
    let value = reducer.binary(LOOSEST)?;

    match reducer.peek() {
        None => {
            debug!("reduce({:?}) -> {}", tokens, value);
            Ok(value)
        }
        Some(Token::Close) => Err(malformed(FormulaIssue::UnopenedParen(reducer.pos))),
        Some(_) => Err(malformed(FormulaIssue::MissingOperator(reducer.pos))),
    }
}

fn malformed(reason: FormulaIssue) -> Error {
    Error::malformed("", reason)
}

struct Reducer<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Reducer<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Reduce a run of operands joined by operators of precedence `level`.
    fn binary(&mut self, level: usize) -> Result<bool> {
        let mut lhs = self.operand(level)?;

        while let Some(Token::Op(op)) = self.peek() {
            // Tighter operators were consumed by `operand`, looser ones belong to a caller.
            if op.level() != level {
                break;
            }
            self.pos += 1;
            let rhs = self.operand(level)?;
            let value = op.apply(lhs, rhs);
            debug!("{} {} {} => {}", Token::Lit(lhs), op, Token::Lit(rhs), Token::Lit(value));
            lhs = value;
        }

        Ok(lhs)
    }

    fn operand(&mut self, level: usize) -> Result<bool> {
        match level.checked_sub(1) {
            Some(tighter) => self.binary(tighter),
            None => self.unary(),
        }
    }

    /// Reduce a literal, a negation, or a parenthesized group.
    fn unary(&mut self) -> Result<bool> {
        let start = self.pos;
        match self.bump() {
            Some(Token::Lit(value)) => Ok(value),
            Some(Token::Not) => {
                let value = self.nested(Self::unary)?;
                debug!("~{} => {}", Token::Lit(value), Token::Lit(!value));
                Ok(!value)
            }
            Some(Token::Open) => {
                let value = self.nested(|r| r.binary(LOOSEST))?;
                match self.peek() {
                    Some(Token::Close) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(_) => Err(malformed(FormulaIssue::MissingOperator(self.pos))),
                    None => Err(malformed(FormulaIssue::UnclosedParen(start))),
                }
            }
            Some(Token::Op(_)) | Some(Token::Close) | None => Err(malformed(FormulaIssue::MissingOperand(start))),
        }
    }

    fn nested<F>(&mut self, f: F) -> Result<bool>
    where
        F: FnOnce(&mut Self) -> Result<bool>,
    {
        if self.depth == MAX_DEPTH {
            return Err(malformed(FormulaIssue::TooDeep(MAX_DEPTH)));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
