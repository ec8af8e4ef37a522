//! Canonical symbology tags, capability queries and the legacy numeric-ID
//! normalisation table.

use std::fmt;
use std::str::FromStr;

use crate::error::{EncodeError, Warning};

macro_rules! symbologies {
    ($($variant:ident = $id:literal, $key:literal, $name:literal;)*) => {
        /// Canonical symbology tag. The discriminant is the public numeric id.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Symbology {
            $($variant = $id,)*
        }

        impl Symbology {
            pub const ALL: &'static [Symbology] = &[$(Symbology::$variant,)*];

            /// Tag for an exact canonical id; legacy aliases are not resolved here.
            pub fn from_id(id: i32) -> Option<Self> {
                match id {
                    $($id => Some(Symbology::$variant),)*
                    _ => None,
                }
            }

            /// Short lowercase key used in configuration files and on the command line.
            pub fn key(self) -> &'static str {
                match self {
                    $(Symbology::$variant => $key,)*
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Symbology::$variant => $name,)*
                }
            }
        }
    };
}

symbologies! {
    Code11 = 1, "code11", "Code 11";
    C25Matrix = 2, "c25matrix", "Code 2 of 5 Matrix";
    C25Inter = 3, "c25inter", "Interleaved 2 of 5";
    C25Iata = 4, "c25iata", "Code 2 of 5 IATA";
    C25Logic = 6, "c25logic", "Code 2 of 5 Data Logic";
    C25Ind = 7, "c25ind", "Code 2 of 5 Industrial";
    Code39 = 8, "code39", "Code 39";
    ExCode39 = 9, "excode39", "Extended Code 39";
    Eanx = 13, "eanx", "EAN";
    Ean128 = 16, "ean128", "GS1-128";
    Codabar = 18, "codabar", "Codabar";
    Code128 = 20, "code128", "Code 128";
    DpLeit = 21, "dpleit", "Deutsche Post Leitcode";
    DpIdent = 22, "dpident", "Deutsche Post Identcode";
    Code16k = 23, "code16k", "Code 16K";
    Code49 = 24, "code49", "Code 49";
    Code93 = 25, "code93", "Code 93";
    Flat = 28, "flat", "Flattermarken";
    Rss14 = 29, "rss14", "GS1 DataBar";
    RssLtd = 30, "rssltd", "GS1 DataBar Limited";
    RssExp = 31, "rssexp", "GS1 DataBar Expanded";
    Telepen = 32, "telepen", "Telepen";
    Upca = 34, "upca", "UPC-A";
    Upce = 37, "upce", "UPC-E";
    Postnet = 40, "postnet", "POSTNET";
    MsiPlessey = 47, "msiplessey", "MSI Plessey";
    Fim = 49, "fim", "FIM";
    Logmars = 50, "logmars", "LOGMARS";
    Pharma = 51, "pharma", "Pharmacode";
    Pzn = 52, "pzn", "PZN";
    PharmaTwo = 53, "pharmatwo", "Pharmacode Two-Track";
    Pdf417 = 55, "pdf417", "PDF417";
    Pdf417Trunc = 56, "pdf417trunc", "PDF417 Truncated";
    Maxicode = 57, "maxicode", "MaxiCode";
    QrCode = 58, "qrcode", "QR Code";
    Code128B = 60, "code128b", "Code 128 (Subset B)";
    AusPost = 63, "auspost", "Australia Post Standard Customer";
    AusReply = 66, "ausreply", "Australia Post Reply Paid";
    AusRoute = 67, "ausroute", "Australia Post Routing";
    AusRedirect = 68, "ausredirect", "Australia Post Redirection";
    Isbnx = 69, "isbnx", "ISBN";
    Rm4scc = 70, "rm4scc", "Royal Mail 4-State";
    DataMatrix = 71, "datamatrix", "Data Matrix";
    Ean14 = 72, "ean14", "EAN-14";
    CodablockF = 74, "codablockf", "Codablock-F";
    Nve18 = 75, "nve18", "NVE-18";
    JapanPost = 76, "japanpost", "Japanese Postal Code";
    KoreaPost = 77, "koreapost", "Korea Post";
    Rss14Stack = 79, "rss14stack", "GS1 DataBar Stacked";
    Rss14StackOmni = 80, "rss14stackomni", "GS1 DataBar Stacked Omnidirectional";
    RssExpStack = 81, "rssexpstack", "GS1 DataBar Expanded Stacked";
    Planet = 82, "planet", "PLANET";
    MicroPdf417 = 84, "micropdf417", "MicroPDF417";
    OneCode = 85, "onecode", "USPS Intelligent Mail";
    Plessey = 86, "plessey", "Plessey";
    TelepenNum = 87, "telepennum", "Telepen Numeric";
    Itf14 = 89, "itf14", "ITF-14";
    Kix = 90, "kix", "Dutch Post KIX";
    Aztec = 92, "aztec", "Aztec Code";
    Daft = 93, "daft", "DAFT";
    MicroQr = 97, "microqr", "Micro QR Code";
    Hibc128 = 98, "hibc128", "HIBC Code 128";
    Hibc39 = 99, "hibc39", "HIBC Code 39";
    HibcDm = 102, "hibcdm", "HIBC Data Matrix";
    HibcQr = 104, "hibcqr", "HIBC QR Code";
    HibcPdf = 106, "hibcpdf", "HIBC PDF417";
    HibcMicPdf = 108, "hibcmicpdf", "HIBC MicroPDF417";
    HibcBlockF = 110, "hibcblockf", "HIBC Codablock-F";
    HibcAztec = 112, "hibcaztec", "HIBC Aztec Code";
    AzRune = 128, "azrune", "Aztec Runes";
    Code32 = 129, "code32", "Code 32";
    EanxCc = 130, "eanxcc", "Composite EAN";
    Ean128Cc = 131, "ean128cc", "Composite GS1-128";
    Rss14Cc = 132, "rss14cc", "Composite GS1 DataBar";
    RssLtdCc = 133, "rssltdcc", "Composite GS1 DataBar Limited";
    RssExpCc = 134, "rssexpcc", "Composite GS1 DataBar Expanded";
    UpcaCc = 135, "upcacc", "Composite UPC-A";
    UpceCc = 136, "upcecc", "Composite UPC-E";
    Rss14StackCc = 137, "rss14stackcc", "Composite GS1 DataBar Stacked";
    Rss14OmniCc = 138, "rss14omnicc", "Composite GS1 DataBar Stacked Omnidirectional";
    RssExpStackCc = 139, "rssexpstackcc", "Composite GS1 DataBar Expanded Stacked";
    Channel = 140, "channel", "Channel Code";
    CodeOne = 141, "codeone", "Code One";
    GridMatrix = 142, "gridmatrix", "Grid Matrix";
}

impl Symbology {
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Whether the tag names a supported symbology. Codablock-F tags exist only
    /// so the resolver can reject them.
    pub fn is_valid(self) -> bool {
        !matches!(self, Symbology::CodablockF | Symbology::HibcBlockF)
    }

    /// Whether GS1 element-string input is legal for this symbology.
    pub fn supports_gs1(self) -> bool {
        use Symbology::*;
        matches!(
            self,
            Ean128
                | RssExp
                | RssExpStack
                | EanxCc
                | Ean128Cc
                | Rss14Cc
                | RssLtdCc
                | RssExpCc
                | UpcaCc
                | UpceCc
                | Rss14StackCc
                | Rss14OmniCc
                | RssExpStackCc
                | Code16k
                | Aztec
                | DataMatrix
                | CodeOne
                | Code49
                | QrCode
        )
    }

    /// Matrix symbologies that take their input without Latin-1 reduction.
    pub fn is_extended_charset(self) -> bool {
        matches!(
            self,
            Symbology::QrCode | Symbology::MicroQr | Symbology::GridMatrix
        )
    }

    pub fn is_hibc(self) -> bool {
        use Symbology::*;
        matches!(
            self,
            Hibc128 | Hibc39 | HibcDm | HibcQr | HibcPdf | HibcMicPdf | HibcAztec | HibcBlockF
        )
    }

    /// Whether this crate carries an encoder for the tag.
    pub fn is_encodable(self) -> bool {
        use Symbology::*;
        matches!(
            self,
            Code11
                | C25Matrix
                | C25Inter
                | C25Iata
                | C25Logic
                | C25Ind
                | Code39
                | ExCode39
                | Ean128
                | Code128
                | DpLeit
                | DpIdent
                | Code93
                | Logmars
                | QrCode
                | Code128B
                | Itf14
                | Hibc128
                | Hibc39
                | HibcQr
        )
    }
}

impl From<Symbology> for i32 {
    fn from(value: Symbology) -> i32 {
        value.id()
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = EncodeError;

    /// Accepts the key (`code39`), ignoring case, dashes, underscores and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Symbology::ALL
            .iter()
            .copied()
            .find(|sym| sym.key() == wanted)
            .ok_or_else(|| EncodeError::InvalidOption(format!("unknown symbology '{}'", s)))
    }
}

/// Result of normalising a caller-supplied numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub symbology: Symbology,
    pub warning: Option<Warning>,
}

impl Resolved {
    fn exact(symbology: Symbology) -> Self {
        Self {
            symbology,
            warning: None,
        }
    }

    fn warned(symbology: Symbology, message: &str) -> Self {
        Self {
            symbology,
            warning: Some(Warning::invalid_option(message)),
        }
    }
}

const OUT_OF_RANGE: &str = "Symbology out of range, using Code 128";
const PARCEL_CODE_REPLACED: &str = "General Parcel Code not supported, using Code 128";

/// Map a numeric id, including legacy aliases, to a canonical tag.
///
/// Ids 1-127 follow an older engine numbering; 128 and up are library
/// specific. Silent remaps return no warning; replaced ids carry one;
/// known but unimplemented symbologies are an `InvalidOption` error.
pub fn resolve(id: i32) -> Result<Resolved, EncodeError> {
    use Symbology::*;
    let unsupported = |msg: &str| -> Result<Resolved, EncodeError> {
        Err(EncodeError::InvalidOption(msg.to_string()))
    };
    let resolved = match id {
        i32::MIN..=0 => Resolved::warned(Code128, OUT_OF_RANGE),
        5 => Resolved::exact(C25Matrix),
        10..=12 | 14 | 15 => Resolved::exact(Eanx),
        17 | 26 | 35 | 36 => Resolved::exact(Upca),
        19 => Resolved::warned(Codabar, "Codabar 18 not supported, using Codabar"),
        27 => return unsupported("UPCD1 not supported"),
        33 | 88 => Resolved::exact(Ean128),
        38 | 39 => Resolved::exact(Upce),
        41..=45 => Resolved::exact(Postnet),
        46 => Resolved::exact(Plessey),
        48 => Resolved::exact(Nve18),
        54 => Resolved::warned(Code128, PARCEL_CODE_REPLACED),
        59 | 61 => Resolved::exact(Code128),
        62 => Resolved::exact(Code93),
        64 | 65 => Resolved::exact(AusPost),
        73 => return unsupported("Codablock E not supported"),
        78 => Resolved::exact(Rss14),
        83 => Resolved::exact(Planet),
        91 | 94..=96 | 113..=127 => Resolved::warned(Code128, OUT_OF_RANGE),
        100 => Resolved::exact(Hibc128),
        101 => Resolved::exact(Hibc39),
        103 => Resolved::exact(HibcDm),
        105 => Resolved::exact(HibcQr),
        107 => Resolved::exact(HibcPdf),
        109 => Resolved::exact(HibcMicPdf),
        111 => Resolved::exact(HibcBlockF),
        143..=i32::MAX => Resolved::warned(Code128, OUT_OF_RANGE),
        other => match Symbology::from_id(other) {
            Some(sym) => Resolved::exact(sym),
            None => Resolved::warned(Code128, OUT_OF_RANGE),
        },
    };
    if matches!(resolved.symbology, CodablockF | HibcBlockF) {
        return unsupported("Codablock F not supported");
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_id_in_range_resolves_to_a_valid_tag_or_errors() {
        for id in -5..200 {
            match resolve(id) {
                Ok(resolved) => assert!(resolved.symbology.is_valid(), "id {id}"),
                Err(err) => assert_eq!(err.code(), 8, "id {id}"),
            }
        }
    }

    #[test]
    fn canonical_ids_pass_through() {
        for &sym in Symbology::ALL.iter().filter(|s| s.is_valid()) {
            assert_eq!(resolve(sym.id()), Ok(Resolved::exact(sym)));
        }
    }

    #[test]
    fn silent_legacy_remaps() {
        assert_eq!(resolve(5).unwrap().symbology, Symbology::C25Matrix);
        assert_eq!(resolve(62).unwrap().symbology, Symbology::Code93);
        assert_eq!(resolve(101).unwrap().symbology, Symbology::Hibc39);
        assert_eq!(resolve(88).unwrap().warning, None);
    }

    #[test]
    fn replaced_ids_warn() {
        let r = resolve(0).unwrap();
        assert_eq!(r.symbology, Symbology::Code128);
        assert_eq!(
            r.warning.map(|w| w.message().to_string()),
            Some(OUT_OF_RANGE.to_string())
        );
        assert!(resolve(19).unwrap().warning.is_some());
        assert!(resolve(120).unwrap().warning.is_some());
        assert!(resolve(500).unwrap().warning.is_some());
    }

    #[test]
    fn unimplemented_legacy_ids_are_hard_errors() {
        assert_eq!(
            resolve(27),
            Err(EncodeError::InvalidOption("UPCD1 not supported".into()))
        );
        assert_eq!(
            resolve(73),
            Err(EncodeError::InvalidOption("Codablock E not supported".into()))
        );
        for id in [74, 110, 111] {
            assert_eq!(
                resolve(id),
                Err(EncodeError::InvalidOption("Codablock F not supported".into()))
            );
        }
    }

    #[test]
    fn names_parse_loosely() {
        assert_eq!("Code39".parse::<Symbology>(), Ok(Symbology::Code39));
        assert_eq!("hibc-39".parse::<Symbology>(), Ok(Symbology::Hibc39));
        assert!("nope".parse::<Symbology>().is_err());
    }

    #[test]
    fn gs1_capability() {
        assert!(Symbology::Ean128.supports_gs1());
        assert!(Symbology::QrCode.supports_gs1());
        assert!(!Symbology::Code39.supports_gs1());
    }
}
