use serde::Serialize;
use std::fmt::{self, Write};

/// Rows of dark/light modules making up an encoded symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleGrid {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl ModuleGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row expanded from a run-length pattern.
    ///
    /// Each digit is the width of a run; runs alternate dark/light starting
    /// with dark. Patterns come from static tables, so anything other than
    /// `1`-`9` is a bug in the caller.
    pub fn expand(&mut self, pattern: &str) {
        let mut row = Vec::with_capacity(pattern.len() * 2);
        let mut dark = true;
        for ch in pattern.chars() {
            debug_assert!(
                matches!(ch, '1'..='9'),
                "malformed run-length pattern {pattern:?}"
            );
            let run = ch.to_digit(10).unwrap_or(0) as usize;
            row.extend(std::iter::repeat_n(dark, run));
            dark = !dark;
        }
        self.push_row(row);
    }

    /// Append a row of explicit module states (matrix symbologies).
    pub fn push_row(&mut self, row: Vec<bool>) {
        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn row(&self, row: usize) -> Option<&[bool]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.width = 0;
    }

    /// Rows as `1`/`0` strings.
    pub fn to_bit_strings(&self) -> Vec<String> {
        (0..self.rows())
            .map(|r| {
                (0..self.width)
                    .map(|c| if self.is_set(r, c) { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }

    pub fn render(&self, style: RenderStyle) -> String {
        match style {
            RenderStyle::Blocks => self.render_ascii('█', ' '),
            RenderStyle::Ascii01 => self.render_ascii('1', '0'),
            RenderStyle::Plot => self.render_plot(),
        }
    }

    fn render_ascii(&self, mark: char, blank: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.rows());
        for r in 0..self.rows() {
            for c in 0..self.width {
                out.push(if self.is_set(r, c) { mark } else { blank });
            }
            out.push('\n');
        }
        out
    }

    /// Bracketed dump: one `[ 1 0 ... ]` line per row inside an outer `[ ]`.
    fn render_plot(&self) -> String {
        let mut out = String::from("[\n");
        for r in 0..self.rows() {
            out.push_str(" [ ");
            for c in 0..self.width {
                write!(&mut out, "{} ", u8::from(self.is_set(r, c))).ok();
            }
            out.push_str("]\n");
        }
        out.push_str("]\n");
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Full block for dark modules
    Blocks,
    /// Use '1'/'0' for dark/light
    Ascii01,
    /// Bracketed matrix dump
    Plot,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Blocks => write!(f, "blocks"),
            RenderStyle::Ascii01 => write!(f, "ascii-01"),
            RenderStyle::Plot => write!(f, "plot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expand_alternates_starting_dark() {
        let mut grid = ModuleGrid::new();
        grid.expand("1231");
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.to_bit_strings(), vec!["1001110".to_string()]);
    }

    #[test]
    fn width_is_sum_of_runs() {
        let mut grid = ModuleGrid::new();
        grid.expand("1111");
        grid.expand("311");
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.width(), 5);
        assert!(grid.is_set(1, 4));
        assert!(!grid.is_set(1, 3));
    }

    #[test]
    fn plot_dump_layout() {
        let mut grid = ModuleGrid::new();
        grid.expand("21");
        assert_eq!(grid.render(RenderStyle::Plot), "[\n [ 1 1 0 ]\n]\n");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut grid = ModuleGrid::new();
        grid.clear();
        grid.expand("11");
        grid.clear();
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
    }
}
