//! Symbol alphabets, the validator that guards every table lookup, and the
//! lookup itself.

use crate::error::EncodeError;

/// Digits only: the 2 of 5 family and ITF derivatives.
pub const DIGITS: &[u8] = b"0123456789";
/// Code 11.
pub const DIGITS_DASH: &[u8] = b"0123456789-";
/// Code 39, LOGMARS and HIBC. Order matters: the index is the mod-43 value.
pub const CODE39_SET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";
/// Code 93: the Code 39 set followed by the four shift characters ($) (%) (/) (+).
pub const CODE93_SET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%abcd";

/// Position of `ch` in `alphabet`.
pub fn position(alphabet: &[u8], ch: u8) -> Option<usize> {
    alphabet.iter().position(|&c| c == ch)
}

/// Check every byte of `input` against `alphabet`, failing on the first byte
/// that is not a member.
pub fn validate(alphabet: &[u8], input: &[u8]) -> Result<(), EncodeError> {
    match input.iter().position(|&b| !alphabet.contains(&b)) {
        Some(position) => Err(EncodeError::InvalidCharacter { position }),
        None => Ok(()),
    }
}

/// Pattern for `ch`, taken from the table entry at the character's alphabet position.
///
/// Callers validate first; a `None` here means the alphabet and table disagree.
pub fn lookup(alphabet: &[u8], table: &[&'static str], ch: u8) -> Option<&'static str> {
    position(alphabet, ch).and_then(|idx| table.get(idx).copied())
}

/// Append the pattern for every byte of `input` to `dest`.
pub fn lookup_all(
    alphabet: &[u8],
    table: &[&'static str],
    input: &[u8],
    dest: &mut String,
) -> Result<(), EncodeError> {
    for (idx, &ch) in input.iter().enumerate() {
        let pattern =
            lookup(alphabet, table, ch).ok_or(EncodeError::InvalidCharacter { position: idx })?;
        dest.push_str(pattern);
    }
    Ok(())
}

pub fn to_upper(input: &[u8]) -> Vec<u8> {
    input.to_ascii_uppercase()
}

/// Convert UTF-8 input to single-byte Latin-1.
pub fn latin1_from_utf8(input: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let invalid = || {
        EncodeError::InvalidData(
            "Invalid character in input string (only Latin-1 characters supported)".to_string(),
        )
    };
    let text = std::str::from_utf8(input).map_err(|_| invalid())?;
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| invalid()))
        .collect()
}

/// Human-readable form of Latin-1 bytes; NUL is shown as a space.
pub fn readable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b == 0 { ' ' } else { char::from(b) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_reports_first_offender() {
        assert_eq!(validate(DIGITS, b"0123"), Ok(()));
        assert_eq!(
            validate(DIGITS, b"12a4b"),
            Err(EncodeError::InvalidCharacter { position: 2 })
        );
        assert_eq!(validate(CODE39_SET, b""), Ok(()));
    }

    #[test]
    fn lookup_indexes_by_alphabet_position() {
        let table = ["a", "b", "c"];
        assert_eq!(lookup(b"xyz", &table, b'y'), Some("b"));
        assert_eq!(lookup(b"xyz", &table, b'q'), None);
    }

    #[test]
    fn latin1_accepts_two_byte_sequences() {
        assert_eq!(latin1_from_utf8("Aé".as_bytes()), Ok(vec![b'A', 0xE9]));
        assert_eq!(latin1_from_utf8("\u{a0}".as_bytes()), Ok(vec![0xA0]));
    }

    #[test]
    fn latin1_rejects_wider_characters() {
        assert!(matches!(
            latin1_from_utf8("€".as_bytes()),
            Err(EncodeError::InvalidData(_))
        ));
        assert!(latin1_from_utf8(&[0xC3]).is_err());
    }

    #[test]
    fn readable_shows_nul_as_space() {
        assert_eq!(readable(b"A\0B"), "A B");
    }
}
