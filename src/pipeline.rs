//! The staged encode: resolve the id, settle the input mode, run the GS1
//! and character-set stages, then dispatch to one encoder.

use std::borrow::Cow;

use crate::charset;
use crate::error::{EncodeError, Warning};
use crate::gs1::{self, Gs1Data};
use crate::hibc;
use crate::linear::code39::{self, Code39Variant};
use crate::linear::code128::{self, Code128Mode};
use crate::linear::{Encoded, code11, code93, two_of_five};
use crate::matrix::{self, EccLevel};
use crate::symbol::{Framing, InputMode, Symbol};
use crate::symbology::{self, Resolved, Symbology};

/// ASCII group separator, the byte form of FNC1 for matrix symbologies.
const GS: u8 = 0x1D;

/// Options an encoder may read. Copied out of the symbol once the
/// configuration stages are done.
#[derive(Debug, Clone, Copy)]
struct Options {
    check_digit: bool,
    ecc: EccLevel,
}

pub(crate) fn run(
    symbol: &mut Symbol,
    data: &[u8],
) -> Result<(Encoded, Option<Warning>), EncodeError> {
    let Resolved { symbology, warning } = symbology::resolve(symbol.symbology)?;
    if let Some(warning) = &warning {
        tracing::warn!(
            requested = symbol.symbology,
            resolved = symbology.id(),
            %warning,
            "symbology replaced"
        );
    }
    symbol.symbology = symbology.id();

    let mode = match InputMode::from_raw(symbol.input_mode) {
        Some(mode) => mode,
        None => {
            tracing::warn!(
                input_mode = symbol.input_mode,
                "unknown input mode, using data mode"
            );
            symbol.input_mode = InputMode::Data.into();
            InputMode::Data
        }
    };

    let gs1 = match mode {
        InputMode::Gs1 => Some(gs1_stage(symbology, data)?),
        _ => None,
    };
    let source: Cow<'_, [u8]> = match &gs1 {
        Some(gs1) => Cow::Borrowed(gs1.reduced.as_slice()),
        None => Cow::Borrowed(data),
    };

    let source = if symbology.is_extended_charset() {
        source
    } else {
        apply_presets(symbol, symbology);
        match mode {
            InputMode::Unicode => Cow::Owned(charset::latin1_from_utf8(&source)?),
            _ => source,
        }
    };

    let options = Options {
        check_digit: symbol.check_digit,
        ecc: symbol.ecc_level,
    };
    tracing::debug!(symbology = symbology.key(), ?mode, len = source.len(), "dispatching");
    let mut encoded = dispatch(symbology, &source, gs1.as_ref(), options)?;

    if matches!(symbology, Symbology::Code128 | Symbology::Code128B) {
        encoded.text = charset::readable(&source);
    }
    Ok((encoded, warning))
}

fn gs1_stage(symbology: Symbology, data: &[u8]) -> Result<Gs1Data, EncodeError> {
    if data.contains(&0) {
        return Err(EncodeError::InvalidData(
            "NULL characters not permitted in GS1 mode".to_string(),
        ));
    }
    if !symbology.supports_gs1() {
        return Err(EncodeError::InvalidOption(
            "Selected symbology does not support GS1 mode".to_string(),
        ));
    }
    gs1::verify(data)
}

/// Fixed quiet zone and framing for symbologies whose standards mandate them.
fn apply_presets(symbol: &mut Symbol, symbology: Symbology) {
    match symbology {
        Symbology::Code16k => {
            symbol.whitespace_width = 16;
            symbol.border_width = 2;
            symbol.framing = Framing::Bind;
        }
        Symbology::Itf14 => {
            symbol.whitespace_width = 20;
            symbol.border_width = 8;
            symbol.framing = Framing::Box;
        }
        _ => {}
    }
}

fn dispatch(
    symbology: Symbology,
    source: &[u8],
    gs1: Option<&Gs1Data>,
    options: Options,
) -> Result<Encoded, EncodeError> {
    use Symbology::*;
    match symbology {
        Code11 => code11::code11(source),
        C25Matrix => two_of_five::matrix(source),
        C25Inter => two_of_five::interleaved(source),
        C25Iata => two_of_five::iata(source),
        C25Logic => two_of_five::data_logic(source),
        C25Ind => two_of_five::industrial(source),
        Itf14 => two_of_five::itf14(source),
        DpLeit => two_of_five::dp_leitcode(source),
        DpIdent => two_of_five::dp_identcode(source),
        Code39 => code39::code39(source, Code39Variant::Standard, options.check_digit),
        Logmars => code39::code39(source, Code39Variant::Logmars, options.check_digit),
        ExCode39 => code39::extended(source, options.check_digit),
        Code93 => code93::code93(source),
        Code128 => code128::code128(source, Code128Mode::Auto),
        Code128B => code128::code128(source, Code128Mode::SubsetB),
        Ean128 => match gs1 {
            Some(gs1) => code128::gs1_128(gs1),
            None => code128::gs1_128(&gs1::verify(source)?),
        },
        QrCode => match gs1 {
            Some(_) => {
                let separated: Vec<u8> = source
                    .iter()
                    .map(|&b| if b == b'[' { GS } else { b })
                    .collect();
                matrix::qr_code(&separated, options.ecc)
            }
            None => matrix::qr_code(source, options.ecc),
        },
        sym if sym.is_hibc() => hibc::hibc(sym, source, options.ecc),
        other => Err(EncodeError::InvalidOption(format!("{} not supported", other.name()))),
    }
}
