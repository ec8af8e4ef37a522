use crate::charset::{self, DIGITS_DASH};
use crate::checksum;
use crate::error::EncodeError;
use crate::linear::Encoded;

const START: &str = "112211";
const STOP: &str = "11221";
const MAX_LEN: usize = 121;

#[rustfmt::skip]
static TABLE: [&str; 11] = [
    "111121", "211121", "121121", "221111", "112121", "212111", "122111", "111221", "211211",
    "211111", "112111",
];

/// Code 11 with its two modulo-11 check characters.
pub fn code11(data: &[u8]) -> Result<Encoded, EncodeError> {
    if data.len() > MAX_LEN {
        return Err(EncodeError::too_long());
    }
    charset::validate(DIGITS_DASH, data)?;

    let mut dest = String::with_capacity((data.len() + 4) * 6);
    dest.push_str(START);
    charset::lookup_all(DIGITS_DASH, &TABLE, data, &mut dest)?;

    let values: Vec<usize> = data
        .iter()
        .filter_map(|&b| charset::position(DIGITS_DASH, b))
        .collect();
    let (c, k) = checksum::code11_values(&values);
    let check = [DIGITS_DASH[c], DIGITS_DASH[k]];
    charset::lookup_all(DIGITS_DASH, &TABLE, &check, &mut dest)?;
    dest.push_str(STOP);

    let mut text = charset::readable(data);
    text.push_str(&charset::readable(&check));
    Ok(Encoded::linear(&dest, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn appends_both_check_characters() {
        let encoded = code11(b"123-45").unwrap();
        assert_eq!(encoded.text, "123-4552");
    }

    #[test]
    fn width_counts_every_element() {
        let encoded = code11(b"0").unwrap();
        // start 8 + '0' 7 + two checks + stop 7
        let c_and_k: usize = ["111121", "111121"]
            .iter()
            .map(|p| p.bytes().map(|b| usize::from(b - b'0')).sum::<usize>())
            .sum();
        assert_eq!(encoded.text, "000");
        assert_eq!(encoded.grid.width(), 8 + 7 + c_and_k + 7);
    }

    #[test]
    fn rejects_letters_and_long_input() {
        assert_eq!(
            code11(b"12A"),
            Err(EncodeError::InvalidCharacter { position: 2 })
        );
        assert_eq!(code11(&[b'1'; 122]), Err(EncodeError::too_long()));
    }
}
