//! Code 39 (ISO/IEC 16388), its full-ASCII extension, and the LOGMARS and
//! HIBC renditions that share its tables.

use crate::charset::{self, CODE39_SET};
use crate::checksum;
use crate::error::EncodeError;
use crate::linear::Encoded;

const START: &str = "1211212111";
const STOP: &str = "121121211";
const MAX_LEN: usize = 74;
const LOGMARS_MAX_LEN: usize = 59;

/// Bar/space widths for each character of [`CODE39_SET`], with the trailing
/// inter-character gap included. Table A1 of ISO/IEC 16388.
#[rustfmt::skip]
pub(crate) static TABLE: [&str; 43] = [
    "1112212111", "2112111121", "1122111121", "2122111111", "1112211121", "2112211111",
    "1122211111", "1112112121", "2112112111", "1122112111", "2111121121", "1121121121",
    "2121121111", "1111221121", "2111221111", "1121221111", "1111122121", "2111122111",
    "1121122111", "1111222111", "2111111221", "1121111221", "2121111211", "1111211221",
    "2111211211", "1121211211", "1111112221", "2111112211", "1121112211", "1111212211",
    "2211111121", "1221111121", "2221111111", "1211211121", "2211211111", "1221211111",
    "1211112121", "2211112111", "1221112111", "1212121111", "1212111211", "1211121211",
    "1112121211",
];

/// Full-ASCII mapping (Table A2): each 7-bit byte becomes one or two Code 39 characters.
#[rustfmt::skip]
static FULL_ASCII: [&str; 128] = [
    "%U", "$A", "$B", "$C", "$D", "$E", "$F", "$G", "$H", "$I", "$J", "$K", "$L", "$M", "$N",
    "$O", "$P", "$Q", "$R", "$S", "$T", "$U", "$V", "$W", "$X", "$Y", "$Z", "%A", "%B", "%C",
    "%D", "%E", " ", "/A", "/B", "/C", "/D", "/E", "/F", "/G", "/H", "/I", "/J", "/K", "/L",
    "-", ".", "/O", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "/Z", "%F", "%G", "%H",
    "%I", "%J", "%V", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "%K", "%L", "%M", "%N", "%O", "%W",
    "+A", "+B", "+C", "+D", "+E", "+F", "+G", "+H", "+I", "+J", "+K", "+L", "+M", "+N", "+O",
    "+P", "+Q", "+R", "+S", "+T", "+U", "+V", "+W", "+X", "+Y", "+Z", "%P", "%Q", "%R", "%S",
    "%T",
];

/// Which caller is driving the Code 39 core; controls limits, check digit,
/// bar widening and the human-readable delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code39Variant {
    Standard,
    Extended,
    Logmars,
    Hibc,
}

/// Encode `data` as Code 39.
///
/// LOGMARS always carries the mod-43 check character; the other variants carry
/// it only when `check_digit` is set.
pub fn code39(
    data: &[u8],
    variant: Code39Variant,
    check_digit: bool,
) -> Result<Encoded, EncodeError> {
    let limit = match variant {
        Code39Variant::Logmars => LOGMARS_MAX_LEN,
        _ => MAX_LEN,
    };
    if data.len() > limit {
        return Err(EncodeError::too_long());
    }
    let source = charset::to_upper(data);
    charset::validate(CODE39_SET, &source)?;

    let mut dest = String::with_capacity((source.len() + 3) * 10);
    dest.push_str(START);
    charset::lookup_all(CODE39_SET, &TABLE, &source, &mut dest)?;

    let mut check_text = String::new();
    if variant == Code39Variant::Logmars || check_digit {
        let check = checksum::mod43(&source, 0);
        charset::lookup_all(CODE39_SET, &TABLE, &[check], &mut dest)?;
        // a bare space would read as a gap in the text
        check_text.push(char::from(if check == b' ' { b'_' } else { check }));
    }
    dest.push_str(STOP);

    if matches!(variant, Code39Variant::Logmars | Code39Variant::Hibc) {
        // wider wide bars
        dest = dest.replace('2', "3");
    }

    let body = charset::readable(&source);
    let text = match variant {
        Code39Variant::Standard => format!("*{}{}*", body, check_text),
        _ => format!("{}{}", body, check_text),
    };
    Ok(Encoded::linear(&dest, text))
}

/// Full-ASCII Code 39: every byte 0-127 is rewritten through the shift table first.
pub fn extended(data: &[u8], check_digit: bool) -> Result<Encoded, EncodeError> {
    if data.len() > MAX_LEN {
        return Err(EncodeError::too_long());
    }
    let mut buffer = Vec::with_capacity(data.len() * 2);
    for (position, &b) in data.iter().enumerate() {
        let mapped = FULL_ASCII
            .get(usize::from(b))
            .ok_or(EncodeError::InvalidCharacter { position })?;
        buffer.extend_from_slice(mapped.as_bytes());
    }
    let mut encoded = code39(&buffer, Code39Variant::Extended, check_digit)?;
    encoded.text = charset::readable(data);
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::runs;
    use pretty_assertions::assert_eq;

    fn decode(pattern: &str) -> String {
        let body = &pattern[START.len()..pattern.len() - STOP.len()];
        body.as_bytes()
            .chunks(10)
            .map(|chunk| {
                let chunk = std::str::from_utf8(chunk).unwrap();
                let idx = TABLE.iter().position(|p| *p == chunk).unwrap();
                char::from(CODE39_SET[idx])
            })
            .collect()
    }

    #[test]
    fn pattern_decodes_back_to_source() {
        for input in ["CODE39", "A-1 $/+%.", "0123456789", "Z"] {
            let encoded = code39(input.as_bytes(), Code39Variant::Standard, false).unwrap();
            let pattern = runs(&encoded.grid);
            // the stop pattern ends in a bar, so expansion loses no runs
            assert_eq!(decode(&pattern), input);
        }
    }

    #[test]
    fn check_digit_for_123_is_6() {
        let encoded = code39(b"123", Code39Variant::Standard, true).unwrap();
        assert_eq!(encoded.text, "*1236*");
        assert_eq!(decode(&runs(&encoded.grid)), "1236");
    }

    #[test]
    fn lowercase_is_folded() {
        let encoded = code39(b"abc", Code39Variant::Standard, false).unwrap();
        assert_eq!(encoded.text, "*ABC*");
    }

    #[test]
    fn space_check_is_displayed_as_underscore() {
        // 'W' = 32, '6' = 6 -> 38 = space
        let encoded = code39(b"W6", Code39Variant::Standard, true).unwrap();
        assert_eq!(encoded.text, "*W6_*");
        assert_eq!(decode(&runs(&encoded.grid)), "W6 ");
    }

    #[test]
    fn length_limits() {
        let long = vec![b'A'; 75];
        assert_eq!(
            code39(&long, Code39Variant::Standard, false),
            Err(EncodeError::too_long())
        );
        assert!(code39(&long[..74], Code39Variant::Standard, false).is_ok());
        assert_eq!(
            code39(&long[..60], Code39Variant::Logmars, false),
            Err(EncodeError::too_long())
        );
    }

    #[test]
    fn invalid_character_position() {
        assert_eq!(
            code39(b"AB#C", Code39Variant::Standard, false),
            Err(EncodeError::InvalidCharacter { position: 2 })
        );
    }

    #[test]
    fn logmars_widens_every_wide_element_and_checks() {
        let encoded = code39(b"LOGMARS-1", Code39Variant::Logmars, false).unwrap();
        let pattern = runs(&encoded.grid);
        assert!(!pattern.contains('2'));
        assert!(pattern.contains('3'));
        assert_eq!(encoded.text.len(), "LOGMARS-1".len() + 1);
    }

    #[test]
    fn extended_maps_lowercase_through_shift_pairs() {
        let encoded = extended(b"a", false).unwrap();
        assert_eq!(encoded.text, "a");
        assert_eq!(decode(&runs(&encoded.grid)), "+A");
    }

    #[test]
    fn extended_rejects_eight_bit_input() {
        assert_eq!(
            extended(&[b'A', 0xE9], false),
            Err(EncodeError::InvalidCharacter { position: 1 })
        );
    }

    #[test]
    fn extended_length_checked_after_expansion() {
        let input = vec![b'a'; 40];
        assert_eq!(extended(&input, false), Err(EncodeError::too_long()));
    }
}
