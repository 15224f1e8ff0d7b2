use std::collections::HashMap;

use log::{debug, info};

use crate::error::{Error, NameIssue, Result};
use crate::token::{is_operator_symbol, RESERVED_LETTERS};

/// Largest number of variables a table can enumerate (rows are indexed by `u64`).
pub const MAX_VARIABLES: usize = 63;

/// Ordered set of single-character variables.
///
/// A variable's index is its position in the registered batch and stays fixed until the
/// next successful [`register`][VariableRegistry::register].
#[derive(Debug, Default, Clone)]
pub struct VariableRegistry {
    names: Vec<char>,
    index: HashMap<char, usize>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of variables, replacing the current set.
    ///
    /// The batch is validated as a whole: on error nothing changes.
    ///
    /// Reserved letters are looked for across the whole batch before any other check, so a
    /// batch mentioning one always fails with [`NameIssue::Reserved`] for the first such name.
    pub fn register<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        for name in &names {
            let name = name.as_ref();
            if let Some(c) = name.chars().find(|c| RESERVED_LETTERS.contains(c)) {
                return Err(Error::invalid_name(name, NameIssue::Reserved(c)));
            }
        }

        let mut batch: Vec<char> = Vec::new();
        let mut index: HashMap<char, usize> = HashMap::new();

        for name in &names {
            let name = name.as_ref();
            let var = validate(name)?;
            if index.insert(var, batch.len()).is_some() {
                return Err(Error::invalid_name(name, NameIssue::Duplicate));
            }
            batch.push(var);
        }

        if batch.len() > MAX_VARIABLES {
            let name: String = batch.iter().collect();
            return Err(Error::invalid_name(name, NameIssue::TooMany(MAX_VARIABLES)));
        }

        info!("registered {} variables: {:?}", batch.len(), batch);
        self.names = batch;
        self.index = index;
        Ok(())
    }

    pub fn clear(&mut self) {
        debug!("clear()");
        self.names.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Variables in registration order.
    pub fn names(&self) -> &[char] {
        &self.names
    }

    pub fn index_of(&self, var: char) -> Option<usize> {
        self.index.get(&var).copied()
    }

    pub fn contains(&self, var: char) -> bool {
        self.index.contains_key(&var)
    }
}

fn validate(name: &str) -> Result<char> {
    let mut chars = name.chars();
    let var = match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => c,
        _ => return Err(Error::invalid_name(name, NameIssue::NotSingleChar)),
    };

    if var == 'T' || var == 'F' {
        return Err(Error::invalid_name(name, NameIssue::Literal(var)));
    }
    if is_operator_symbol(var) {
        return Err(Error::invalid_name(name, NameIssue::Operator(var)));
    }

    Ok(var)
}
