//! Matrix symbologies. Only the dispatch call lives here; module placement
//! is delegated to the `qrcode` crate.

use qrcode::QrCode;
use qrcode::types::{Color, EcLevel, QrError};
use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::linear::Encoded;

/// QR error-correction level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EccLevel {
    #[default]
    L,
    M,
    Q,
    H,
}

impl From<EccLevel> for EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::L => EcLevel::L,
            EccLevel::M => EcLevel::M,
            EccLevel::Q => EcLevel::Q,
            EccLevel::H => EcLevel::H,
        }
    }
}

const DATA_TOO_LONG: &str = "Input too long for selected error correction level";

fn map_qr_error(err: QrError) -> EncodeError {
    match err {
        QrError::DataTooLong => EncodeError::TooLong(DATA_TOO_LONG.to_string()),
        other => EncodeError::InvalidData(format!("QR encoding failed: {}", other)),
    }
}

/// Encode bytes as a QR Code symbol. The human-readable text is left empty.
pub fn qr_code(data: &[u8], ecc: EccLevel) -> Result<Encoded, EncodeError> {
    let code = QrCode::with_error_correction_level(data, ecc.into()).map_err(map_qr_error)?;
    let width = code.width();
    let colors = code.to_colors();
    tracing::debug!(width, ?ecc, "built QR matrix");

    let mut encoded = Encoded::default();
    for row in colors.chunks(width) {
        let dark = row.iter().map(|&c| c == Color::Dark).collect();
        encoded.grid.push_row(dark);
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn square_grid_with_finder_corner() {
        let encoded = qr_code(b"HELLO", EccLevel::L).unwrap();
        assert_eq!(encoded.grid.rows(), 21);
        assert_eq!(encoded.grid.width(), 21);
        // finder pattern corners are dark
        assert!(encoded.grid.is_set(0, 0));
        assert!(encoded.grid.is_set(0, 20));
        assert!(encoded.grid.is_set(20, 0));
        assert!(encoded.text.is_empty());
    }

    #[test]
    fn higher_ecc_needs_more_room() {
        let data = [b'A'; 30];
        let low = qr_code(&data, EccLevel::L).unwrap();
        let high = qr_code(&data, EccLevel::H).unwrap();
        assert!(high.grid.width() > low.grid.width());
    }

    #[test]
    fn oversized_input_is_too_long() {
        let data = vec![0xAA; 8000];
        assert!(matches!(qr_code(&data, EccLevel::L), Err(EncodeError::TooLong(_))));
    }
}
