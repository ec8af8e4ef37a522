use crate::charset::{self, CODE93_SET};
use crate::checksum;
use crate::error::EncodeError;
use crate::linear::Encoded;

const START: &str = "111141";
const STOP: &str = "1111411";
const MAX_LEN: usize = 107;

#[rustfmt::skip]
static TABLE: [&str; 47] = [
    "131112", "111213", "111312", "111411", "121113", "121212", "121311", "111114", "131211",
    "141111", "211113", "211212", "211311", "221112", "221211", "231111", "112113", "112212",
    "112311", "122112", "132111", "111123", "111222", "111321", "121122", "131121", "212112",
    "212211", "211122", "211221", "221121", "222111", "112122", "112221", "122121", "123111",
    "121131", "311112", "311211", "321111", "112131", "113121", "211131", "121221", "312111",
    "311121", "122211",
];

/// Full-ASCII mapping. `a`-`d` stand for the ($) (%) (/) (+) shift characters.
#[rustfmt::skip]
static FULL_ASCII: [&str; 128] = [
    "bU", "aA", "aB", "aC", "aD", "aE", "aF", "aG", "aH", "aI", "aJ", "aK", "aL", "aM", "aN",
    "aO", "aP", "aQ", "aR", "aS", "aT", "aU", "aV", "aW", "aX", "aY", "aZ", "bA", "bB", "bC",
    "bD", "bE", " ", "cA", "cB", "cC", "cD", "cE", "cF", "cG", "cH", "cI", "cJ", "cK", "cL",
    "cM", "cN", "cO", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "cZ", "bF", "bG", "bH",
    "bI", "bJ", "bV", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "bK", "bL", "bM", "bN", "bO", "bW",
    "dA", "dB", "dC", "dD", "dE", "dF", "dG", "dH", "dI", "dJ", "dK", "dL", "dM", "dN", "dO",
    "dP", "dQ", "dR", "dS", "dT", "dU", "dV", "dW", "dX", "dY", "dZ", "bP", "bQ", "bR", "bS",
    "bT",
];

/// Encode 7-bit ASCII as Code 93 with both C and K check characters.
pub fn code93(data: &[u8]) -> Result<Encoded, EncodeError> {
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
    if buffer.len() > MAX_LEN {
        return Err(EncodeError::too_long());
    }

    let mut values = Vec::with_capacity(buffer.len() + 2);
    for (position, &b) in buffer.iter().enumerate() {
        let value =
            charset::position(CODE93_SET, b).ok_or(EncodeError::InvalidCharacter { position })?;
        values.push(value);
    }
    let (c, k) = checksum::code93_values(&values);
    values.push(c);
    values.push(k);

    let mut dest = String::with_capacity((values.len() + 2) * 6 + 1);
    dest.push_str(START);
    for &v in &values {
        dest.push_str(TABLE[v]);
    }
    dest.push_str(STOP);

    let mut text = charset::readable(data);
    text.push(char::from(checksum::code93_char(c)));
    text.push(char::from(checksum::code93_char(k)));
    Ok(Encoded::linear(&dest, text))
}
