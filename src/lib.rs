//! Core library for table-driven barcode symbol encoding.
//!
//! A [`Symbol`] carries the encode options and, after a successful
//! [`Symbol::encode`], the module grid and human-readable text.

mod charset;
mod checksum;
mod config;
mod error;
mod grid;
mod gs1;
mod hibc;
mod linear;
mod matrix;
mod pipeline;
mod symbol;
mod symbology;

pub use config::{InputModeSpec, SymbolConfig, SymbologySpec};
pub use error::{
    ERROR_FILE_ACCESS, ERROR_INVALID_DATA, ERROR_INVALID_OPTION, ERROR_MEMORY, ERROR_TOO_LONG,
    EncodeError, EncodeOutcome, STATUS_OK, WARN_INVALID_OPTION, Warning, status_code, tag_message,
};
pub use grid::{ModuleGrid, RenderStyle};
pub use gs1::{Gs1Data, verify as verify_gs1};
pub use matrix::EccLevel;
pub use symbol::{Framing, InputMode, MAX_FILE_LEN, Symbol, SymbolReport};
pub use symbology::{Resolved, Symbology, resolve};

/// Encodes `data` with default options for `symbology`.
pub fn encode(symbology: Symbology, data: &[u8]) -> Result<Symbol, EncodeError> {
    let mut symbol = Symbol::with_symbology(symbology);
    symbol.encode(data)?;
    Ok(symbol)
}
