//! Shared clap helper types for CLI commands.

use barforge::{EccLevel, InputMode, RenderStyle, SymbologySpec};
use clap::ValueEnum;

/// Input interpretation flags.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum InputModeArg {
    Data,
    Unicode,
    Gs1,
}

impl From<InputModeArg> for InputMode {
    fn from(value: InputModeArg) -> InputMode {
        match value {
            InputModeArg::Data => InputMode::Data,
            InputModeArg::Unicode => InputMode::Unicode,
            InputModeArg::Gs1 => InputMode::Gs1,
        }
    }
}

/// QR error-correction levels.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum EccArg {
    #[value(name = "L", alias = "l")]
    L,
    #[value(name = "M", alias = "m")]
    M,
    #[value(name = "Q", alias = "q")]
    Q,
    #[value(name = "H", alias = "h")]
    H,
}

impl From<EccArg> for EccLevel {
    fn from(value: EccArg) -> EccLevel {
        match value {
            EccArg::L => EccLevel::L,
            EccArg::M => EccLevel::M,
            EccArg::Q => EccLevel::Q,
            EccArg::H => EccLevel::H,
        }
    }
}

/// Output formats for an encoded symbol.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Blocks,
    #[value(name = "ascii-01")]
    Ascii01,
    Plot,
    Json,
}

impl FormatArg {
    /// Grid rendering style, or `None` for JSON output.
    pub fn render_style(self) -> Option<RenderStyle> {
        match self {
            FormatArg::Blocks => Some(RenderStyle::Blocks),
            FormatArg::Ascii01 => Some(RenderStyle::Ascii01),
            FormatArg::Plot => Some(RenderStyle::Plot),
            FormatArg::Json => None,
        }
    }
}

/// Symbology given as a number (`8`) or a name (`code39`).
pub fn parse_symbology(input: &str) -> Result<SymbologySpec, String> {
    if let Ok(id) = input.trim().parse::<i32>() {
        return Ok(SymbologySpec::Id(id));
    }
    let named = SymbologySpec::Name(input.to_string());
    named.to_id().map_err(|err| err.to_string())?;
    Ok(named)
}
