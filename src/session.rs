use log::{debug, info};

use crate::error::{Error, FormulaIssue, Result};
use crate::registry::VariableRegistry;
use crate::table::{generate, TruthTable};

/// One variable set and the formulas entered for it.
///
/// A session is filled by [`register_variables`][Session::register_variables] and
/// [`add_formula`][Session::add_formula], turned into a table by
/// [`generate_table`][Session::generate_table], then [`reset`][Session::reset] for the next run.
///
/// # Examples
///
/// ```
/// use truth_table::Session;
///
/// let mut session = Session::new();
/// session.register_variables(["p", "q"]).unwrap();
/// session.add_formula("p ^ q").unwrap();
///
/// let table = session.generate_table();
/// let column: Vec<bool> = table.column(0).map(|c| *c.as_ref().unwrap()).collect();
/// assert_eq!(column, [true, false, false, false]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    registry: VariableRegistry,
    formulas: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the session's variables. See [`VariableRegistry::register`].
    pub fn register_variables<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.registry.register(names)
    }

    /// Append a formula; its position is its column in the table.
    pub fn add_formula(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::malformed(text, FormulaIssue::Empty));
        }
        debug!("add_formula({:?})", text);
        self.formulas.push(text);
        Ok(())
    }

    pub fn generate_table(&self) -> TruthTable {
        generate(&self.registry, self.formulas.as_slice())
    }

    pub fn reset(&mut self) {
        info!("reset session");
        self.registry.clear();
        self.formulas.clear();
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn formulas(&self) -> &[String] {
        &self.formulas
    }
}
