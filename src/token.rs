//! Tokens of a formula after variable substitution.
//!
//! Every token has a one-character code. Literals are `T` and `F`, negation is `~`,
//! and each binary operator has a single internal code:
//!
//! | symbol typed | meaning       | code |
//! |--------------|---------------|------|
//! | `^`          | AND           | `^`  |
//! | `v`          | OR            | `v`  |
//! | `x`          | XOR           | `x`  |
//! | `>`          | IMPLIES       | `i`  |
//! | `=`          | BICONDITIONAL | `d`  |
//!
//! The letters `x`, `v`, `i` and `d` are therefore unavailable as variable names.

use std::fmt::{Debug, Display, Formatter};

/// Letters used as internal operator codes.
pub const RESERVED_LETTERS: [char; 4] = ['x', 'v', 'i', 'd'];

/// Binary connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinOp {
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl BinOp {
    /// Binary operators ordered from the tightest-binding to the loosest.
    ///
    /// Negation binds tighter than all of them.
    pub const PRECEDENCE: [BinOp; 5] = [BinOp::And, BinOp::Or, BinOp::Xor, BinOp::Implies, BinOp::Iff];

    /// Internal one-character code.
    pub const fn code(self) -> char {
        match self {
            BinOp::And => '^',
            BinOp::Or => 'v',
            BinOp::Xor => 'x',
            BinOp::Implies => 'i',
            BinOp::Iff => 'd',
        }
    }

    /// Symbol the user types for this operator.
    pub const fn symbol(self) -> char {
        match self {
            BinOp::Implies => '>',
            BinOp::Iff => '=',
            op => op.code(),
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '^' => Some(BinOp::And),
            'v' => Some(BinOp::Or),
            'x' => Some(BinOp::Xor),
            'i' => Some(BinOp::Implies),
            'd' => Some(BinOp::Iff),
            _ => None,
        }
    }

    /// Position in [`BinOp::PRECEDENCE`], 0 being the tightest.
    pub const fn level(self) -> usize {
        match self {
            BinOp::And => 0,
            BinOp::Or => 1,
            BinOp::Xor => 2,
            BinOp::Implies => 3,
            BinOp::Iff => 4,
        }
    }

    pub const fn apply(self, p: bool, q: bool) -> bool {
        match self {
            BinOp::And => p && q,
            BinOp::Or => p || q,
            BinOp::Xor => p != q,
            BinOp::Implies => !p || q,
            BinOp::Iff => p == q,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Map a typed operator symbol to its internal code. Other characters pass through.
pub const fn internal_code(c: char) -> char {
    match c {
        '>' => BinOp::Implies.code(),
        '=' => BinOp::Iff.code(),
        c => c,
    }
}

/// Rewrite `>` and `=` into their internal codes.
pub fn normalize_operators(formula: &str) -> String {
    formula.chars().map(internal_code).collect()
}

/// Check whether `c` is a symbol the formula grammar reserves for itself.
pub fn is_operator_symbol(c: char) -> bool {
    matches!(c, '~' | '(' | ')' | '>' | '=') || BinOp::from_code(c).is_some()
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Lit(bool),
    Not,
    Op(BinOp),
    Open,
    Close,
}

impl Token {
    pub const TRUE: Token = Token::Lit(true);
    pub const FALSE: Token = Token::Lit(false);

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'T' => Some(Token::TRUE),
            'F' => Some(Token::FALSE),
            '~' => Some(Token::Not),
            '(' => Some(Token::Open),
            ')' => Some(Token::Close),
            c => match BinOp::from_code(c) {
                Some(op) => Some(Token::Op(op)),
                None => None,
            },
        }
    }

    pub const fn code(self) -> char {
        match self {
            Token::Lit(true) => 'T',
            Token::Lit(false) => 'F',
            Token::Not => '~',
            Token::Op(op) => op.code(),
            Token::Open => '(',
            Token::Close => ')',
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_binop_truth_tables() {
        let rows = [(true, true), (true, false), (false, true), (false, false)];
        let expected = [
            (BinOp::And, [true, false, false, false]),
            (BinOp::Or, [true, true, true, false]),
            (BinOp::Xor, [false, true, true, false]),
            (BinOp::Implies, [true, false, true, true]),
            (BinOp::Iff, [true, false, false, true]),
        ];
        for (op, column) in expected {
            for ((p, q), want) in rows.iter().zip(column) {
                assert_eq!(op.apply(*p, *q), want, "{} {} {}", p, op, q);
            }
        }
    }

    #[test]
    fn test_precedence_levels() {
        for (i, op) in BinOp::PRECEDENCE.iter().enumerate() {
            assert_eq!(op.level(), i);
        }
    }

    #[test]
    fn test_codes() {
        for op in BinOp::PRECEDENCE {
            assert_eq!(BinOp::from_code(op.code()), Some(op));
            assert_eq!(internal_code(op.symbol()), op.code());
        }
        for c in "TF~()^vxid".chars() {
            assert_eq!(Token::from_code(c).map(Token::code), Some(c));
        }
        assert_eq!(Token::from_code('>'), None);
        assert_eq!(Token::from_code('p'), None);
    }

    #[test]
    fn test_normalize_operators() {
        assert_eq!(normalize_operators("p > q = ~r"), "p i q d ~r");
        assert_eq!(normalize_operators("p ^ q"), "p ^ q");
    }

    #[test]
    fn test_reserved_letters_are_operators() {
        for c in RESERVED_LETTERS {
            assert!(is_operator_symbol(c));
        }
        assert!(!is_operator_symbol('X'));
        assert!(!is_operator_symbol('p'));
    }
}
