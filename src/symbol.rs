//! The symbol object: encode options in, module grid and text out.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, EncodeError, EncodeOutcome};
use crate::grid::{ModuleGrid, RenderStyle};
use crate::matrix::EccLevel;
use crate::pipeline;
use crate::symbology::Symbology;

/// Largest input accepted from a file or stdin; the biggest QR symbol holds
/// 7089 numeric digits.
pub const MAX_FILE_LEN: u64 = 7100;

/// How the input bytes are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Raw bytes, taken as Latin-1 by the linear encoders.
    #[default]
    Data = 0,
    /// UTF-8, reduced to Latin-1 before linear encoding.
    Unicode = 1,
    /// Bracketed GS1 element string.
    Gs1 = 2,
}

impl InputMode {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(InputMode::Data),
            1 => Some(InputMode::Unicode),
            2 => Some(InputMode::Gs1),
            _ => None,
        }
    }
}

impl From<InputMode> for i32 {
    fn from(mode: InputMode) -> i32 {
        mode as i32
    }
}

/// Decoration drawn around the symbol by a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    #[default]
    None,
    /// Horizontal bars above and below.
    Bind,
    /// Full box.
    Box,
}

/// Encode settings plus the result of the last successful encode.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Numeric symbology id. Legacy ids are accepted and replaced by the
    /// canonical id during encoding.
    pub symbology: i32,
    /// Raw input mode; unknown values are reset to data mode on encode.
    pub input_mode: i32,
    /// Append the optional check character where the symbology has one.
    pub check_digit: bool,
    pub ecc_level: EccLevel,
    pub show_text: bool,
    pub fg_colour: String,
    pub bg_colour: String,
    pub scale: f32,
    pub whitespace_width: u32,
    pub border_width: u32,
    pub framing: Framing,
    grid: ModuleGrid,
    text: String,
    error_message: String,
}

impl Default for Symbol {
    fn default() -> Self {
        Self {
            symbology: Symbology::Code128.id(),
            input_mode: InputMode::Data.into(),
            check_digit: false,
            ecc_level: EccLevel::default(),
            show_text: true,
            fg_colour: "000000".to_string(),
            bg_colour: "ffffff".to_string(),
            scale: 1.0,
            whitespace_width: 0,
            border_width: 0,
            framing: Framing::None,
            grid: ModuleGrid::new(),
            text: String::new(),
            error_message: String::new(),
        }
    }
}

impl Symbol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default symbol set up for `symbology`.
    pub fn with_symbology(symbology: Symbology) -> Self {
        Self {
            symbology: symbology.id(),
            ..Self::default()
        }
    }

    pub fn grid(&self) -> &ModuleGrid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.grid.is_set(row, col)
    }

    /// Human-readable text of the last successful encode.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Severity-tagged message from the last encode; empty after a clean one.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Canonical tag for the current id, if it names one directly.
    pub fn symbology_tag(&self) -> Option<Symbology> {
        Symbology::from_id(self.symbology)
    }

    /// Drop the grid, text and message. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.text.clear();
        self.error_message.clear();
    }

    /// Encode all of `data`.
    pub fn encode(&mut self, data: &[u8]) -> EncodeOutcome {
        self.encode_with_length(data, data.len())
    }

    /// Encode the first `length` bytes of `data`. A length of zero means "up to
    /// the first NUL"; lengths past the end of `data` are clamped.
    pub fn encode_with_length(&mut self, data: &[u8], length: usize) -> EncodeOutcome {
        let length = if length == 0 {
            data.iter().position(|&b| b == 0).unwrap_or(data.len())
        } else {
            length.min(data.len())
        };
        let outcome = if length == 0 {
            Err(EncodeError::InvalidData("No input data".to_string()))
        } else {
            self.run_pipeline(&data[..length])
        };
        self.record(&outcome);
        outcome
    }

    /// Read `path` (or stdin for `-`) and encode its contents.
    pub fn encode_file<P: AsRef<Path>>(&mut self, path: P) -> EncodeOutcome {
        match read_input(path.as_ref()) {
            Ok(buffer) => self.encode_with_length(&buffer, buffer.len()),
            Err(err) => {
                let outcome = Err(err);
                self.record(&outcome);
                outcome
            }
        }
    }

    fn run_pipeline(&mut self, data: &[u8]) -> EncodeOutcome {
        let (encoded, warning) = pipeline::run(self, data)?;
        self.grid = encoded.grid;
        self.text = encoded.text;
        Ok(warning)
    }

    fn record(&mut self, outcome: &EncodeOutcome) {
        self.error_message = match outcome {
            Ok(None) => String::new(),
            Ok(Some(warning)) => error::tag_message(warning.code(), warning.message()),
            Err(err) => error::tag_message(err.code(), &err.to_string()),
        };
    }

    pub fn render(&self, style: RenderStyle) -> String {
        self.grid.render(style)
    }

    pub fn report(&self) -> SymbolReport {
        SymbolReport {
            symbology: self.symbology,
            name: self.symbology_tag().map(|s| s.name().to_string()),
            rows: self.rows(),
            width: self.width(),
            text: self.text.clone(),
            modules: self.grid.to_bit_strings(),
            message: (!self.error_message.is_empty()).then(|| self.error_message.clone()),
        }
    }
}

/// Serialisable snapshot of an encoded symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolReport {
    pub symbology: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rows: usize,
    pub width: usize,
    pub text: String,
    pub modules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn read_input(path: &Path) -> Result<Vec<u8>, EncodeError> {
    if path.as_os_str() == "-" {
        return read_capped(io::stdin().lock(), MAX_FILE_LEN);
    }
    let unreadable = |err: io::Error| {
        tracing::debug!(path = %path.display(), %err, "cannot read input file");
        EncodeError::FileAccess("Unable to read input file".to_string())
    };
    let file = File::open(path).map_err(unreadable)?;
    let len = file.metadata().map_err(unreadable)?.len();
    if len > MAX_FILE_LEN {
        return Err(EncodeError::InvalidData("Input file too long".to_string()));
    }
    read_capped(file, len)
}

/// Read at most `cap` bytes, reserving the buffer up front.
fn read_capped<R: Read>(reader: R, cap: u64) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Vec::new();
    let wanted = usize::try_from(cap).unwrap_or(usize::MAX);
    buffer
        .try_reserve_exact(wanted)
        .map_err(|_| EncodeError::Memory("Internal memory error".to_string()))?;
    reader
        .take(cap)
        .read_to_end(&mut buffer)
        .map_err(|err| EncodeError::FileAccess(err.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let symbol = Symbol::new();
        assert_eq!(symbol.symbology, 20);
        assert_eq!(symbol.input_mode, 0);
        assert_eq!(symbol.fg_colour, "000000");
        assert_eq!(symbol.bg_colour, "ffffff");
        assert_eq!(symbol.scale, 1.0);
        assert!(symbol.grid().is_empty());
        assert_eq!(symbol.text(), "");
    }

    #[test]
    fn input_mode_from_raw() {
        assert_eq!(InputMode::from_raw(2), Some(InputMode::Gs1));
        assert_eq!(InputMode::from_raw(3), None);
        assert_eq!(InputMode::from_raw(-1), None);
    }

    #[test]
    fn zero_length_stops_at_nul() {
        let mut symbol = Symbol::with_symbology(Symbology::Code39);
        symbol.encode_with_length(b"AB\0CD", 0).unwrap();
        assert_eq!(symbol.text(), "*AB*");
    }

    #[test]
    fn empty_input_is_rejected_and_tagged() {
        let mut symbol = Symbol::new();
        assert_eq!(
            symbol.encode(b""),
            Err(EncodeError::InvalidData("No input data".into()))
        );
        assert_eq!(symbol.error_message(), "error: No input data");
        assert_eq!(
            symbol.encode_with_length(b"\0abc", 0),
            Err(EncodeError::InvalidData("No input data".into()))
        );
    }

    #[test]
    fn read_capped_stops_at_cap() {
        let data = vec![b'7'; 50];
        assert_eq!(read_capped(&data[..], 10).unwrap().len(), 10);
        assert_eq!(read_capped(&data[..], 100).unwrap().len(), 50);
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let mut symbol = Symbol::new();
        let outcome = symbol.encode_file("/nonexistent/barforge/input.txt");
        assert_eq!(
            outcome,
            Err(EncodeError::FileAccess("Unable to read input file".into()))
        );
        assert_eq!(outcome.unwrap_err().code(), 10);
        assert_eq!(symbol.error_message(), "error: Unable to read input file");
    }

    #[test]
    fn report_serialises_grid_rows() {
        let mut symbol = Symbol::with_symbology(Symbology::C25Inter);
        symbol.encode(b"12").unwrap();
        let report = symbol.report();
        assert_eq!(report.rows, 1);
        assert_eq!(report.modules[0].len(), report.width);
        assert_eq!(report.name.as_deref(), Some("Interleaved 2 of 5"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["text"], "12");
        assert!(json.get("message").is_none());
    }
}
