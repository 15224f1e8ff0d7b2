//! Truth-table generation.
//!
//! Every cell is computed independently: the formula text is substituted with the row's
//! assignment and the resulting tokens are reduced. A formula that fails to reduce marks its
//! cells as errors without affecting other columns.

use log::{debug, info, warn};

use crate::assignment::{Assignment, Assignments};
use crate::error::Result;
use crate::reduce::reduce;
use crate::registry::VariableRegistry;
use crate::substitute::substitute;

/// Value of one formula under one assignment.
pub type Cell = Result<bool>;

/// One row of the table: an assignment and the value of every formula under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    assignment: Assignment,
    cells: Vec<Cell>,
}

impl Row {
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// A `2^N × R` grid of results for `N` variables and `R` formulas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    formulas: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn formulas(&self) -> &[String] {
        &self.formulas
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row)?.cells.get(column)
    }

    /// Values of formula `column`, in row order.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.cells.get(column))
    }

    pub fn has_errors(&self) -> bool {
        self.rows.iter().any(|row| row.cells.iter().any(|c| c.is_err()))
    }
}

/// Evaluate one formula under one assignment.
pub fn evaluate(formula: &str, assignment: &Assignment, registry: &VariableRegistry) -> Result<bool> {
    let tokens = substitute(formula, assignment, registry)?;
    reduce(&tokens).map_err(|e| e.with_formula(formula))
}

/// Build the full table for `formulas` over the variables of `registry`.
pub fn generate<S: AsRef<str>>(registry: &VariableRegistry, formulas: &[S]) -> TruthTable {
    let rows = Assignments::new(registry.len());
    info!("generate: {} rows x {} formulas", rows.len(), formulas.len());

    let mut reported = vec![false; formulas.len()];
    let rows = rows
        .map(|assignment| {
            let cells = formulas
                .iter()
                .zip(reported.iter_mut())
                .map(|(formula, reported)| {
                    let cell = evaluate(formula.as_ref(), &assignment, registry);
                    debug!("[{}] {:?} = {:?}", assignment, formula.as_ref(), cell);
                    if let Err(e) = &cell {
                        if !*reported {
                            warn!("{}", e);
                            *reported = true;
                        }
                    }
                    cell
                })
                .collect();
            Row { assignment, cells }
        })
        .collect();

    TruthTable {
        variables: registry.names().to_vec(),
        formulas: formulas.iter().map(|f| f.as_ref().to_string()).collect(),
        rows,
    }
}
