//! GS1 element-string verification.
//!
//! Input uses the bracketed form `[01]09501101530003[10]ABC`. Verification
//! produces the reduced form the GS1-capable encoders consume (AIs and data
//! run together, `[` marking an FNC1 separator) and the parenthesised form
//! shown under the symbol.

use crate::error::EncodeError;

const MAX_AI_LEN: usize = 4;
const MIN_AI_LEN: usize = 2;
const MAX_DATA_LEN: usize = 90;

/// A verified GS1 element string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gs1Data {
    /// AIs and data with `[` between elements that need an FNC1 separator.
    pub reduced: Vec<u8>,
    /// Human-readable form with AIs in parentheses.
    pub display: String,
}

/// Total element length (AI + data) for AIs whose first two digits fix it.
fn predefined_length(prefix: u32) -> Option<usize> {
    match prefix {
        0 => Some(20),
        1..=3 => Some(16),
        4 => Some(18),
        11..=19 => Some(8),
        20 => Some(4),
        31..=36 => Some(10),
        41 => Some(16),
        _ => None,
    }
}

/// Whether an element can be followed directly by the next AI without FNC1.
/// Prefix 23 is kept for compatibility with older symbols.
fn needs_no_separator(prefix: u32) -> bool {
    predefined_length(prefix).is_some() || prefix == 23
}

fn invalid(message: &str) -> EncodeError {
    EncodeError::InvalidData(message.to_string())
}

struct Element<'a> {
    ai: &'a [u8],
    data: &'a [u8],
}

fn split_elements(source: &[u8]) -> Result<Vec<Element<'_>>, EncodeError> {
    if source.first() != Some(&b'[') {
        return Err(invalid("Data does not start with an AI"));
    }
    for &b in source {
        if b >= 128 {
            return Err(invalid("Extended ASCII characters are not supported by GS1"));
        }
        if b < 32 {
            return Err(invalid("Control characters are not supported by GS1"));
        }
    }

    let mut elements = Vec::new();
    let mut rest = source;
    while let Some(after_open) = rest.strip_prefix(b"[") {
        let close = after_open
            .iter()
            .position(|&b| b == b']')
            .ok_or_else(|| invalid("Malformed AI in input data (brackets don't match)"))?;
        let ai = &after_open[..close];
        if ai.contains(&b'[') {
            return Err(invalid("Malformed AI in input data (brackets don't match)"));
        }
        let tail = &after_open[close + 1..];
        let data_end = tail.iter().position(|&b| b == b'[').unwrap_or(tail.len());
        let data = &tail[..data_end];
        if data.contains(&b']') {
            return Err(invalid("Malformed AI in input data (brackets don't match)"));
        }
        elements.push(Element { ai, data });
        rest = &tail[data_end..];
    }
    Ok(elements)
}

/// Verify a bracketed GS1 element string and reduce it for encoding.
pub fn verify(source: &[u8]) -> Result<Gs1Data, EncodeError> {
    let elements = split_elements(source)?;

    let mut reduced = Vec::with_capacity(source.len());
    let mut display = String::with_capacity(source.len());
    let mut separator_pending = false;

    for element in &elements {
        if element.ai.len() > MAX_AI_LEN {
            return Err(invalid("Invalid AI in input data (AI too long)"));
        }
        if element.ai.len() < MIN_AI_LEN {
            return Err(invalid("Invalid AI in input data (AI too short)"));
        }
        if !element.ai.iter().all(u8::is_ascii_digit) {
            return Err(invalid("Invalid AI in input data (non-numeric characters in AI)"));
        }
        if element.data.is_empty() {
            return Err(invalid("Empty data field in input data"));
        }
        if element.data.len() > MAX_DATA_LEN {
            return Err(invalid("Data field too long in input data"));
        }

        let prefix = u32::from(element.ai[0] - b'0') * 10 + u32::from(element.ai[1] - b'0');
        if let Some(expected) = predefined_length(prefix) {
            if element.ai.len() + element.data.len() != expected {
                let ai = String::from_utf8_lossy(element.ai);
                return Err(EncodeError::InvalidData(format!(
                    "Invalid data length for AI ({})",
                    ai
                )));
            }
        }

        if separator_pending {
            reduced.push(b'[');
        }
        reduced.extend_from_slice(element.ai);
        reduced.extend_from_slice(element.data);
        separator_pending = !needs_no_separator(prefix);

        display.push('(');
        display.push_str(&String::from_utf8_lossy(element.ai));
        display.push(')');
        display.push_str(&String::from_utf8_lossy(element.data));
    }

    tracing::debug!(elements = elements.len(), "verified GS1 element string");
    Ok(Gs1Data { reduced, display })
}
