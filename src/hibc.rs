//! Health Industry Bar Code framing: `+` flag, data, mod-43 check, then
//! handed to the carrier symbology.

use crate::charset::{self, CODE39_SET};
use crate::checksum;
use crate::error::EncodeError;
use crate::linear::Encoded;
use crate::linear::code39::{self, Code39Variant};
use crate::linear::code128::{self, Code128Mode};
use crate::matrix::{self, EccLevel};
use crate::symbology::Symbology;

const MAX_LEN: usize = 36;
/// Alphabet value of the leading `+`, folded into the check sum.
const FLAG_VALUE: usize = 41;

/// Frame `data` as an HIBC primary data string: `+`, data, check character.
pub fn frame(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    if data.len() > MAX_LEN {
        return Err(EncodeError::TooLong("Data too long for HIBC LIC".to_string()));
    }
    let source = charset::to_upper(data);
    charset::validate(CODE39_SET, &source)?;

    let mut framed = Vec::with_capacity(source.len() + 2);
    framed.push(b'+');
    framed.extend_from_slice(&source);
    framed.push(checksum::mod43(&source, FLAG_VALUE));
    Ok(framed)
}

/// Encode `data` with HIBC framing in the carrier selected by `symbology`.
pub fn hibc(symbology: Symbology, data: &[u8], ecc: EccLevel) -> Result<Encoded, EncodeError> {
    let framed = frame(data)?;
    let delimited = || format!("*{}*", charset::readable(&framed));

    match symbology {
        Symbology::Hibc128 => {
            let mut encoded = code128::code128(&framed, Code128Mode::Auto)?;
            encoded.text = delimited();
            Ok(encoded)
        }
        Symbology::Hibc39 => {
            // the framing already carries its own check character
            let mut encoded = code39::code39(&framed, Code39Variant::Hibc, false)?;
            encoded.text = delimited();
            Ok(encoded)
        }
        Symbology::HibcQr => matrix::qr_code(&framed, ecc),
        other => Err(EncodeError::InvalidOption(format!("{} not supported", other.name()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::runs;
    use pretty_assertions::assert_eq;

    #[test]
    fn frame_appends_seeded_check() {
        // 41 + 10 + 1 + 2 + 3 = 57, 57 mod 43 = 14 -> 'E'
        assert_eq!(frame(b"A123").unwrap(), b"+A123E".to_vec());
        assert_eq!(frame(b"a123").unwrap(), b"+A123E".to_vec());
    }

    #[test]
    fn hibc39_is_delimited_and_widened() {
        let encoded = hibc(Symbology::Hibc39, b"A123", EccLevel::L).unwrap();
        assert_eq!(encoded.text, "*+A123E*");
        assert!(!runs(&encoded.grid).contains('2'));
    }

    #[test]
    fn hibc128_uses_code128() {
        let encoded = hibc(Symbology::Hibc128, b"A123", EccLevel::L).unwrap();
        let plain = code128::code128(b"+A123E", Code128Mode::Auto).unwrap();
        assert_eq!(encoded.grid, plain.grid);
        assert_eq!(encoded.text, "*+A123E*");
    }

    #[test]
    fn hibc_qr_keeps_text_empty() {
        let encoded = hibc(Symbology::HibcQr, b"A123", EccLevel::M).unwrap();
        assert!(encoded.text.is_empty());
        assert!(encoded.grid.rows() >= 21);
    }

    #[test]
    fn length_and_alphabet_are_checked() {
        assert_eq!(
            frame(&[b'1'; 37]),
            Err(EncodeError::TooLong("Data too long for HIBC LIC".into()))
        );
        assert!(frame(&[b'1'; 36]).is_ok());
        assert_eq!(
            frame(b"A#"),
            Err(EncodeError::InvalidCharacter { position: 1 })
        );
    }

    #[test]
    fn carriers_without_an_encoder_are_rejected() {
        assert_eq!(
            hibc(Symbology::HibcDm, b"A123", EccLevel::L),
            Err(EncodeError::InvalidOption("HIBC Data Matrix not supported".into()))
        );
    }
}
