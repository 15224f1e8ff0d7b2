//! # truth-table: truth tables for propositional logic
//!
//! **`truth-table`** evaluates propositional formulas over every assignment of their variables
//! and lays the results out as a text grid.
//!
//! ## Formulas
//!
//! Variables are single characters. Formulas combine them with:
//!
//! | symbol | meaning       |
//! |--------|---------------|
//! | `~`    | NOT           |
//! | `^`    | AND           |
//! | `v`    | OR            |
//! | `x`    | XOR           |
//! | `>`    | IMPLIES       |
//! | `=`    | BICONDITIONAL |
//!
//! listed from the tightest-binding to the loosest, plus parentheses. `T` and `F` are the
//! truth-value literals. Because `x`, `v`, `i` and `d` serve as operator codes, they cannot
//! be variables; their uppercase versions can.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::Session;
//!
//! let mut session = Session::new();
//! session.register_variables(["p"]).unwrap();
//! session.add_formula("~p v p").unwrap();
//!
//! let table = session.generate_table();
//! assert_eq!(
//!     table.to_text(),
//!     "\n------------\n p | ~p v p \n------------\n T |    T   \n F |    T   \n------------\n\n"
//! );
//! ```
//!
//! ## Core Components
//!
//! - **[`registry`]**: the session's variables and their indices.
//! - **[`assignment`]**: the rows of a table, in a fixed order.
//! - **[`substitute`]**: formula text to tokens, for one row.
//! - **[`reduce`]**: tokens to a truth value, by operator precedence.
//! - **[`table`]**: the grid of results, one cell per row and formula.
//! - **[`render`]**: the grid as text.
//! - **[`session`]**: the API tying it together.

pub mod assignment;
pub mod error;
pub mod reduce;
pub mod registry;
pub mod render;
pub mod session;
pub mod substitute;
pub mod table;
pub mod token;

pub use error::{Error, FormulaIssue, NameIssue, Result};
pub use session::Session;
pub use table::TruthTable;
