//! JSON symbol configuration.
//!
//! ```json
//! { "symbology": "code39", "check_digit": true, "fg_colour": "112233" }
//! ```
//!
//! Every field is optional; missing fields keep the symbol's current value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::matrix::EccLevel;
use crate::symbol::{InputMode, Symbol};
use crate::symbology::Symbology;

/// Symbology given either as a numeric id (legacy ids allowed) or a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymbologySpec {
    Id(i32),
    Name(String),
}

impl SymbologySpec {
    /// Numeric id to store on the symbol. Ids are passed through unresolved.
    pub fn to_id(&self) -> Result<i32, EncodeError> {
        match self {
            SymbologySpec::Id(id) => Ok(*id),
            SymbologySpec::Name(name) => name.parse::<Symbology>().map(Symbology::id),
        }
    }
}

/// Input mode as a raw number or a name (`data`, `unicode`, `gs1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputModeSpec {
    Raw(i32),
    Named(InputMode),
}

impl InputModeSpec {
    fn to_raw(self) -> i32 {
        match self {
            InputModeSpec::Raw(raw) => raw,
            InputModeSpec::Named(mode) => mode.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbology: Option<SymbologySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputModeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecc_level: Option<EccLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

fn is_hex_colour(colour: &str) -> bool {
    colour.len() == 6 && colour.bytes().all(|b| b.is_ascii_hexdigit())
}

impl SymbolConfig {
    pub fn from_json(json: &str) -> Result<Self, EncodeError> {
        serde_json::from_str(json)
            .map_err(|err| EncodeError::InvalidOption(format!("invalid configuration: {}", err)))
    }

    pub fn from_file(path: &Path) -> Result<Self, EncodeError> {
        let json = fs::read_to_string(path).map_err(|err| {
            EncodeError::FileAccess(format!("failed to read {}: {}", path.display(), err))
        })?;
        Self::from_json(&json)
    }

    /// Copy every configured field onto `symbol`, validating as it goes.
    /// Nothing is written when a field is rejected.
    pub fn apply(&self, symbol: &mut Symbol) -> Result<(), EncodeError> {
        let symbology = match &self.symbology {
            Some(spec) => Some(spec.to_id()?),
            None => None,
        };
        for (label, colour) in [
            ("foreground", &self.fg_colour),
            ("background", &self.bg_colour),
        ] {
            if let Some(colour) = colour {
                if !is_hex_colour(colour) {
                    return Err(EncodeError::InvalidOption(format!(
                        "Malformed {} colour '{}'",
                        label, colour
                    )));
                }
            }
        }
        if let Some(scale) = self.scale {
            if scale.is_nan() || scale <= 0.0 {
                return Err(EncodeError::InvalidOption(format!(
                    "Scale must be positive, got {}",
                    scale
                )));
            }
        }

        if let Some(id) = symbology {
            symbol.symbology = id;
        }
        if let Some(mode) = self.input_mode {
            symbol.input_mode = mode.to_raw();
        }
        if let Some(check_digit) = self.check_digit {
            symbol.check_digit = check_digit;
        }
        if let Some(ecc) = self.ecc_level {
            symbol.ecc_level = ecc;
        }
        if let Some(show_text) = self.show_text {
            symbol.show_text = show_text;
        }
        if let Some(colour) = &self.fg_colour {
            symbol.fg_colour = colour.to_ascii_lowercase();
        }
        if let Some(colour) = &self.bg_colour {
            symbol.bg_colour = colour.to_ascii_lowercase();
        }
        if let Some(scale) = self.scale {
            symbol.scale = scale;
        }
        Ok(())
    }
}
