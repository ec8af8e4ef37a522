//! Code 128 with automatic A/B/C set selection, the set-B-only variant, and
//! GS1-128.

use crate::checksum;
use crate::error::EncodeError;
use crate::gs1::Gs1Data;
use crate::linear::Encoded;

const MAX_LEN: usize = 160;
/// Most symbol characters between start and check, counting shifts and FNC codes.
const MAX_SYMBOL_CHARS: usize = 80;

const FNC1: usize = 102;
const START_A: usize = 103;
const START_B: usize = 104;
const START_C: usize = 105;
const STOP: usize = 106;
const SWITCH_C: usize = 99;
const SWITCH_B: usize = 100;
const SWITCH_A: usize = 101;

/// Separator byte the GS1 preprocessor leaves between variable-length elements.
const GS1_SEPARATOR: u8 = b'[';

#[rustfmt::skip]
static TABLE: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232", "2331112",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code128Mode {
    /// Pick sets A, B and C as the data requires.
    Auto,
    /// Stay in set B throughout.
    SubsetB,
    /// Leading FNC1, `[` separators become FNC1.
    Gs1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    fn start(self) -> usize {
        match self {
            CodeSet::A => START_A,
            CodeSet::B => START_B,
            CodeSet::C => START_C,
        }
    }

    fn switch_to(self) -> usize {
        match self {
            CodeSet::A => SWITCH_A,
            CodeSet::B => SWITCH_B,
            CodeSet::C => SWITCH_C,
        }
    }

    /// FNC4 shares its value with the code for the other alphabetic set.
    fn fnc4(self) -> usize {
        match self {
            CodeSet::A => SWITCH_A,
            _ => SWITCH_B,
        }
    }

    /// Whether the low seven bits of a byte can be drawn in this set.
    fn carries(self, base: u8) -> bool {
        match self {
            CodeSet::A => base < 96,
            CodeSet::B => base >= 32,
            CodeSet::C => false,
        }
    }

    fn value(self, base: u8) -> usize {
        let base = usize::from(base);
        match self {
            CodeSet::A if base < 32 => base + 64,
            _ => base - 32,
        }
    }
}

fn digit_run(data: &[u8], from: usize) -> usize {
    data[from..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// Set A if a control character turns up before any lowercase, else set B.
fn choose_alpha(data: &[u8], from: usize, gs1: bool) -> CodeSet {
    for &b in &data[from..] {
        if gs1 && b == GS1_SEPARATOR {
            continue;
        }
        let base = b & 0x7F;
        if base < 32 {
            return CodeSet::A;
        }
        if base >= 96 {
            return CodeSet::B;
        }
    }
    CodeSet::B
}

/// Symbol values from start character to last data character (check and stop excluded).
fn symbol_values(data: &[u8], mode: Code128Mode) -> Result<Vec<usize>, EncodeError> {
    let gs1 = mode == Code128Mode::Gs1;
    let subset_b = mode == Code128Mode::SubsetB;
    let leading_run = digit_run(data, 0);

    let mut set = if subset_b {
        CodeSet::B
    } else if leading_run > 0
        && leading_run % 2 == 0
        && (leading_run >= 4 || leading_run == data.len())
    {
        CodeSet::C
    } else {
        choose_alpha(data, 0, gs1)
    };

    let mut values = Vec::with_capacity(data.len() + 4);
    values.push(set.start());
    if gs1 {
        values.push(FNC1);
    }

    let mut i = 0;
    while i < data.len() {
        let ch = data[i];
        if gs1 && ch == GS1_SEPARATOR {
            values.push(FNC1);
            i += 1;
            continue;
        }
        let run = digit_run(data, i);
        if !subset_b && set != CodeSet::C && run >= 4 && run % 2 == 0 {
            values.push(CodeSet::C.switch_to());
            set = CodeSet::C;
            continue;
        }
        if set == CodeSet::C {
            if run >= 2 {
                values.push(usize::from((ch - b'0') * 10 + (data[i + 1] - b'0')));
                i += 2;
                continue;
            }
            let next = choose_alpha(data, i, gs1);
            values.push(next.switch_to());
            set = next;
            continue;
        }

        let base = ch & 0x7F;
        if !set.carries(base) {
            if subset_b {
                return Err(EncodeError::InvalidCharacter { position: i });
            }
            let next = if set == CodeSet::A {
                CodeSet::B
            } else {
                CodeSet::A
            };
            values.push(next.switch_to());
            set = next;
        }
        if ch >= 128 {
            values.push(set.fnc4());
        }
        values.push(set.value(base));
        i += 1;
    }
    Ok(values)
}

fn assemble(values: &[usize]) -> String {
    let mut dest = String::with_capacity((values.len() + 2) * 6 + 1);
    for &v in values {
        dest.push_str(TABLE[v]);
    }
    dest.push_str(TABLE[checksum::code128_value(values)]);
    dest.push_str(TABLE[STOP]);
    dest
}

/// Encode arbitrary Latin-1 bytes. The text is the raw input; NUL handling is
/// left to the caller.
pub fn code128(data: &[u8], mode: Code128Mode) -> Result<Encoded, EncodeError> {
    if data.len() > MAX_LEN {
        return Err(EncodeError::too_long());
    }
    let values = symbol_values(data, mode)?;
    if values.len() - 1 > MAX_SYMBOL_CHARS {
        return Err(EncodeError::too_long());
    }
    let text = data.iter().map(|&b| char::from(b)).collect();
    Ok(Encoded::linear(&assemble(&values), text))
}

/// GS1-128 from a verified element string; the text shows AIs in parentheses.
pub fn gs1_128(gs1: &Gs1Data) -> Result<Encoded, EncodeError> {
    let mut encoded = code128(&gs1.reduced, Code128Mode::Gs1)?;
    encoded.text = gs1.display.clone();
    Ok(encoded)
}
