//! Code 2 of 5 variants, Interleaved 2 of 5 and the symbologies built on it.

use crate::charset::{self, DIGITS};
use crate::checksum;
use crate::error::EncodeError;
use crate::linear::Encoded;

#[rustfmt::skip]
static MATRIX_TABLE: [&str; 10] = [
    "113311", "311131", "131131", "331111", "113131", "313111", "133111", "111331", "311311",
    "131311",
];

#[rustfmt::skip]
static INDUSTRIAL_TABLE: [&str; 10] = [
    "1111313111", "3111111131", "1131111131", "3131111111", "1111311131", "3111311111",
    "1131311111", "1111113131", "3111113111", "1131113111",
];

/// Five elements per digit; read once for the bars and once for the spaces.
#[rustfmt::skip]
static INTERLEAVED_TABLE: [&str; 10] = [
    "11331", "31113", "13113", "33111", "11313", "31311", "13311", "11133", "31131", "13131",
];

const INTERLEAVED_MAX_LEN: usize = 89;

/// Shared shape of the non-interleaved variants: one table, fixed start and stop.
fn discrete(
    data: &[u8],
    max_len: usize,
    table: &[&'static str],
    start: &str,
    stop: &str,
) -> Result<Encoded, EncodeError> {
    if data.len() > max_len {
        return Err(EncodeError::too_long());
    }
    charset::validate(DIGITS, data)?;
    let mut dest = String::with_capacity(start.len() + stop.len() + data.len() * 10);
    dest.push_str(start);
    charset::lookup_all(DIGITS, table, data, &mut dest)?;
    dest.push_str(stop);
    Ok(Encoded::linear(&dest, charset::readable(data)))
}

pub fn matrix(data: &[u8]) -> Result<Encoded, EncodeError> {
    discrete(data, 80, &MATRIX_TABLE, "411111", "41111")
}

pub fn industrial(data: &[u8]) -> Result<Encoded, EncodeError> {
    discrete(data, 45, &INDUSTRIAL_TABLE, "313111", "31113")
}

pub fn iata(data: &[u8]) -> Result<Encoded, EncodeError> {
    discrete(data, 45, &INDUSTRIAL_TABLE, "1111", "311")
}

pub fn data_logic(data: &[u8]) -> Result<Encoded, EncodeError> {
    discrete(data, 80, &MATRIX_TABLE, "1111", "311")
}

/// Interleaved 2 of 5. Odd-length input gets a leading zero, which also shows
/// in the human-readable text.
pub fn interleaved(data: &[u8]) -> Result<Encoded, EncodeError> {
    if data.len() > INTERLEAVED_MAX_LEN {
        return Err(EncodeError::too_long());
    }
    charset::validate(DIGITS, data)?;

    let mut digits = Vec::with_capacity(data.len() + 1);
    if data.len() % 2 == 1 {
        digits.push(b'0');
    }
    digits.extend_from_slice(data);

    let mut dest = String::with_capacity(digits.len() * 5 + 7);
    dest.push_str("1111");
    for (pair_idx, pair) in digits.chunks_exact(2).enumerate() {
        let lookup = |offset: usize| {
            let position = pair_idx * 2 + offset;
            charset::lookup(DIGITS, &INTERLEAVED_TABLE, pair[offset])
                .ok_or(EncodeError::InvalidCharacter { position })
        };
        let bars = lookup(0)?;
        let spaces = lookup(1)?;
        for (bar, space) in bars.chars().zip(spaces.chars()) {
            dest.push(bar);
            dest.push(space);
        }
    }
    dest.push_str("311");

    Ok(Encoded::linear(&dest, charset::readable(&digits)))
}

/// Left-pad `data` with zeroes to `width` digits and append `check(padded)`.
fn padded_with_check(
    data: &[u8],
    width: usize,
    check: fn(&[u8]) -> u8,
) -> Result<Vec<u8>, EncodeError> {
    if data.len() > width {
        return Err(EncodeError::too_long());
    }
    charset::validate(DIGITS, data)?;
    let mut digits = vec![b'0'; width - data.len()];
    digits.extend_from_slice(data);
    digits.push(check(&digits));
    Ok(digits)
}

/// ITF-14: 13 data digits plus a mod-10 check digit, drawn as Interleaved 2 of 5.
pub fn itf14(data: &[u8]) -> Result<Encoded, EncodeError> {
    let digits = padded_with_check(data, 13, checksum::itf14_digit)?;
    interleaved(&digits)
}

/// Deutsche Post Leitcode: 13 digits plus check.
pub fn dp_leitcode(data: &[u8]) -> Result<Encoded, EncodeError> {
    let digits = padded_with_check(data, 13, checksum::deutsche_post_digit)?;
    interleaved(&digits)
}

/// Deutsche Post Identcode: 11 digits plus check.
pub fn dp_identcode(data: &[u8]) -> Result<Encoded, EncodeError> {
    let digits = padded_with_check(data, 11, checksum::deutsche_post_digit)?;
    interleaved(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::runs;
    use pretty_assertions::assert_eq;

    #[test]
    fn interleaved_pairs_bars_with_spaces() {
        let encoded = interleaved(b"12").unwrap();
        // '1' = 31113 (bars), '2' = 13113 (spaces)
        assert_eq!(
            runs(&encoded.grid),
            "1111".to_string() + "3113111133" + "311"
        );
        assert_eq!(encoded.text, "12");
    }

    #[test]
    fn odd_input_is_zero_padded() {
        let odd = interleaved(b"123").unwrap();
        let even = interleaved(b"0123").unwrap();
        assert_eq!(odd, even);
        assert_eq!(odd.text, "0123");
    }

    #[test]
    fn interleaved_length_cap() {
        assert_eq!(interleaved(&[b'1'; 90]), Err(EncodeError::too_long()));
        assert!(interleaved(&[b'1'; 89]).is_ok());
    }

    #[test]
    fn interleaved_rejects_dash() {
        assert_eq!(
            interleaved(b"12-4"),
            Err(EncodeError::InvalidCharacter { position: 2 })
        );
    }

    #[test]
    fn itf14_pads_and_appends_check() {
        let encoded = itf14(b"1540014128876").unwrap();
        assert_eq!(encoded.text, "15400141288763");
        assert_eq!(itf14(b"12").unwrap().text, "00000000000123");
        assert_eq!(itf14(&[b'1'; 14]), Err(EncodeError::too_long()));
    }

    #[test]
    fn deutsche_post_lengths() {
        assert_eq!(dp_leitcode(b"1").unwrap().text.len(), 14);
        assert_eq!(dp_identcode(b"1").unwrap().text.len(), 12);
        assert_eq!(dp_identcode(&[b'1'; 12]), Err(EncodeError::too_long()));
    }

    #[test]
    fn discrete_variants_frame_each_digit() {
        let m = matrix(b"0").unwrap();
        assert_eq!(runs(&m.grid), "411111113311".to_string() + "41111");
        let i = industrial(b"5").unwrap();
        assert_eq!(i.grid.width(), 10 + 14 + 9);
        assert_eq!(iata(&[b'1'; 46]), Err(EncodeError::too_long()));
        assert_eq!(data_logic(b"42").unwrap().text, "42");
    }
}
