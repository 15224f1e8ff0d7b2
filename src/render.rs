//! Plain-text rendering of a [`TruthTable`].
//!
//! # Layout
//!
//! ```text
//!
//! -------------
//!  p q | p ^ q
//! -------------
//!  T T |   T
//!  T F |   F
//!  F T |   F
//!  F F |   F
//! -------------
//!
//! ```
//!
//! Each formula column is as wide as its header, `| formula `, and the value is centered in it.
//! The horizontal rules are as long as a row.

use std::io::{self, Write};

use crate::table::{Cell, TruthTable};

/// Symbols used when rendering a table.
///
/// # Examples
///
/// ```
/// use truth_table::render::RenderConfig;
///
/// let config = RenderConfig {
///     true_symbol: '1',
///     false_symbol: '0',
///     ..RenderConfig::default()
/// };
/// assert_eq!(config.error_symbol, '?');
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Symbol for true (default: `T`)
    pub true_symbol: char,
    /// Symbol for false (default: `F`)
    pub false_symbol: char,
    /// Symbol for cells whose formula could not be evaluated (default: `?`)
    pub error_symbol: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            true_symbol: 'T',
            false_symbol: 'F',
            error_symbol: '?',
        }
    }
}

impl RenderConfig {
    fn value(&self, b: bool) -> char {
        if b {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }

    fn cell(&self, cell: &Cell) -> char {
        match cell {
            Ok(b) => self.value(*b),
            Err(_) => self.error_symbol,
        }
    }
}

impl TruthTable {
    /// Write the table with the default symbols.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_with_config(out, &RenderConfig::default())
    }

    pub fn render_with_config<W: Write>(&self, out: &mut W, config: &RenderConfig) -> io::Result<()> {
        let widths: Vec<usize> = self.formulas().iter().map(|f| f.chars().count()).collect();
        let total = 2 * self.variables().len() + widths.iter().map(|w| w + 3).sum::<usize>();
        let rule = "-".repeat(total + 1);

        writeln!(out)?;
        writeln!(out, "{}", rule)?;

        write!(out, " ")?;
        for var in self.variables() {
            write!(out, "{} ", var)?;
        }
        for formula in self.formulas() {
            write!(out, "| {} ", formula)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", rule)?;

        for row in self.rows() {
            write!(out, " ")?;
            for &b in row.assignment().values() {
                write!(out, "{} ", config.value(b))?;
            }
            for (cell, &width) in row.cells().iter().zip(&widths) {
                let (left, right) = padding(width + 2);
                write!(out, "|{:left$}{}{:right$}", "", config.cell(cell), "")?;
            }
            writeln!(out)?;
        }

        writeln!(out, "{}", rule)?;
        writeln!(out)?;
        Ok(())
    }

    /// Render the table into a string with the default symbols.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a `Vec` never fails.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Spaces to the left and right of a one-character value centered in `width` columns.
fn padding(width: usize) -> (usize, usize) {
    let left = width / 2;
    let right = if width % 2 == 0 { width / 2 - 1 } else { width / 2 };
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::VariableRegistry;
    use crate::table::generate;

    use test_log::test;

    fn table(vars: &[&str], formulas: &[&str]) -> TruthTable {
        let mut registry = VariableRegistry::new();
        registry.register(vars).unwrap();
        generate(&registry, formulas)
    }

    #[test]
    fn test_padding() {
        assert_eq!(padding(7), (3, 3));
        assert_eq!(padding(4), (2, 1));
        assert_eq!(padding(3), (1, 1));
    }

    #[test]
    fn test_render_and() {
        let text = table(&["p", "q"], &["p ^ q"]).to_text();
        let expected = "\n\
            -------------\n \
            p q | p ^ q \n\
            -------------\n \
            T T |   T   \n \
            T F |   F   \n \
            F T |   F   \n \
            F F |   F   \n\
            -------------\n\
            \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_even_width_column() {
        let text = table(&["p"], &["~p", "p v ~p"]).to_text();
        let expected = "\n\
            -----------------\n \
            p | ~p | p v ~p \n\
            -----------------\n \
            T |  F |    T   \n \
            F |  T |    T   \n\
            -----------------\n\
            \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_row_width_matches_header() {
        let text = table(&["A", "B", "C"], &["A > (B = C)", "~C"]).to_text();
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        let rule = lines[0].len();
        for line in &lines {
            assert_eq!(line.len(), rule, "{:?}", line);
        }
    }

    #[test]
    fn test_render_errors_and_custom_symbols() {
        let config = RenderConfig {
            true_symbol: '1',
            false_symbol: '0',
            error_symbol: '!',
        };
        let mut buf = Vec::new();
        table(&["p"], &["p ^", "p"]).render_with_config(&mut buf, &config).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(" 1 |  !  | 1 \n"), "{}", text);
        assert!(text.contains(" 0 |  !  | 0 \n"), "{}", text);
    }
}
