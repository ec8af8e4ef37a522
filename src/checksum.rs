//! Check character algorithms. Every accumulator here is local to one call.

use crate::charset::{CODE39_SET, CODE93_SET};

/// Modulo-43 check character over `data` (Code 39, LOGMARS, HIBC).
///
/// `seed` is added before reduction; HIBC seeds with 41, the value of its `+` flag.
pub fn mod43(data: &[u8], seed: usize) -> u8 {
    let sum = data
        .iter()
        .filter_map(|&b| CODE39_SET.iter().position(|&c| c == b))
        .fold(seed, |acc, value| acc + value);
    mod43_char(sum % 43)
}

/// Map 0-42 to its Code 39 character: digits, letters, then `- . space $ / + %`.
pub fn mod43_char(value: usize) -> u8 {
    CODE39_SET[value % 43]
}

/// Standard mod-10 check digit from an already weighted sum.
pub fn mod10_digit(weighted_sum: u32) -> u8 {
    b'0' + ((10 - (weighted_sum % 10)) % 10) as u8
}

/// GS1 style weighting: 3 on even positions counted from the left, 1 on odd ones.
pub fn itf14_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let v = u32::from(d - b'0');
            if i % 2 == 0 { v * 3 } else { v }
        })
        .sum();
    mod10_digit(sum)
}

/// Deutsche Post Leitcode/Identcode: weight 4 on even positions, 9 on odd ones.
pub fn deutsche_post_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let v = u32::from(d - b'0');
            if i % 2 == 1 { v * 9 } else { v * 4 }
        })
        .sum();
    mod10_digit(sum)
}

/// Weighted sum from the rightmost value with weights 1..=`max_weight` repeating.
fn cycled_sum(values: &[usize], max_weight: usize) -> usize {
    values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &v)| v * (i % max_weight + 1))
        .sum()
}

/// Code 11 C and K check values (0-10; 10 is drawn as `-`).
pub fn code11_values(values: &[usize]) -> (usize, usize) {
    let c = cycled_sum(values, 10) % 11;
    let mut with_c = values.to_vec();
    with_c.push(c);
    let k = cycled_sum(&with_c, 9) % 11;
    (c, k)
}

/// Code 93 C and K check values (0-46).
pub fn code93_values(values: &[usize]) -> (usize, usize) {
    let c = cycled_sum(values, 20) % 47;
    let mut with_c = values.to_vec();
    with_c.push(c);
    let k = cycled_sum(&with_c, 15) % 47;
    (c, k)
}

pub fn code93_char(value: usize) -> u8 {
    CODE93_SET[value % 47]
}

/// Code 128 check value: start value plus each symbol value times its position, mod 103.
pub fn code128_value(values: &[usize]) -> usize {
    let Some((&start, rest)) = values.split_first() else {
        return 0;
    };
    let sum = rest
        .iter()
        .enumerate()
        .fold(start, |acc, (i, &v)| acc + v * (i + 1));
    sum % 103
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mod43_of_digits_is_their_sum() {
        assert_eq!(mod43(b"123", 0), b'6');
    }

    #[test]
    fn mod43_maps_high_values_to_punctuation() {
        assert_eq!(mod43_char(10), b'A');
        assert_eq!(mod43_char(35), b'Z');
        assert_eq!(mod43_char(36), b'-');
        assert_eq!(mod43_char(38), b' ');
        assert_eq!(mod43_char(42), b'%');
    }

    #[test]
    fn hibc_seed_accounts_for_plus_flag() {
        // '+' sits at position 41 of the alphabet.
        assert_eq!(mod43(b"A123", 41), mod43(b"+A123", 0));
        assert_eq!(mod43(b"A123", 41), b'E');
    }

    #[test]
    fn itf14_check_digit() {
        assert_eq!(itf14_digit(b"1540014128876"), b'3');
        assert_eq!(itf14_digit(b"0000000000000"), b'0');
    }

    #[test]
    fn code11_check_values() {
        // "123-45": C = 5, K = 2
        let values = [1, 2, 3, 10, 4, 5];
        assert_eq!(code11_values(&values), (5, 2));
    }

    #[test]
    fn code128_check_uses_position_weights() {
        // Start B (104), 'A' (33), 'B' (34): 104 + 33 + 68 = 205 -> 205 % 103 = 102
        assert_eq!(code128_value(&[104, 33, 34]), 102);
    }
}
