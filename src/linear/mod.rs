//! One-dimensional symbologies. Each encoder validates its input, assembles a
//! run-length pattern from static tables and returns it expanded into a grid.

pub mod code11;
pub mod code39;
pub mod code93;
pub mod code128;
pub mod two_of_five;

use crate::grid::ModuleGrid;

/// Output of a single encoder call, written to the symbol only on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    pub grid: ModuleGrid,
    pub text: String,
}

impl Encoded {
    /// Single-row symbol from an assembled run-length pattern.
    pub fn linear(pattern: &str, text: String) -> Self {
        let mut grid = ModuleGrid::new();
        grid.expand(pattern);
        Self { grid, text }
    }
}

/// Test helper: split a single-row grid back into its run lengths.
#[cfg(test)]
pub(crate) fn runs(grid: &ModuleGrid) -> String {
    let Some(row) = grid.row(0) else {
        return String::new();
    };
    let mut out = String::new();
    let mut iter = row.iter().peekable();
    while let Some(&dark) = iter.next() {
        let mut len = 1;
        while iter.peek() == Some(&&dark) {
            iter.next();
            len += 1;
        }
        out.push_str(&len.to_string());
    }
    out
}
