//! Lookup tables for the radial text format.
//!
//! Reflectivity codes are written as single letters. Upper-case `A`..=`Y`
//! carry the non-negative codes 0..=24 and lower-case `a`..=`x` carry the
//! negative codes -1..=-24. `Z`, `y` and `z` are not part of the alphabet.

/// Code table indexed by ASCII byte. `None` marks bytes that are not letters
/// of the encoding alphabet.
const CODE_TABLE: [Option<i8>; 128] = build_code_table();

const fn build_code_table() -> [Option<i8>; 128] {
    let mut table = [None; 128];

    let mut i = 0;
    while i < 25 {
        table[b'A' as usize + i] = Some(i as i8);
        i += 1;
    }

    let mut i = 0;
    while i < 24 {
        table[b'a' as usize + i] = Some(-(i as i8) - 1);
        i += 1;
    }

    table
}

/// Decode one alphabet letter to its reflectivity code.
pub fn code_for(byte: u8) -> Option<i8> {
    CODE_TABLE.get(byte as usize).copied().flatten()
}

/// Encode a reflectivity code as its alphabet letter.
///
/// Returns `None` for codes outside -24..=24.
pub fn letter_for(code: i8) -> Option<char> {
    match code {
        0..=24 => Some((b'A' + code as u8) as char),
        -24..=-1 => Some((b'a' + (-code - 1) as u8) as char),
        _ => None,
    }
}

/// Header keys that may appear in a sweep file.
pub const HEADER_KEYS: [&str; 26] = [
    "COUNTRY",
    "NAME",
    "STNID",
    "DATE",
    "TIME",
    "TIMESTAMP",
    "VERS",
    "RNGRES",
    "ANGRES",
    "VIDRES",
    "STARTRNG",
    "ENDRNG",
    "PRODUCT",
    "IMGFMT",
    "ELEV",
    "DBZLVL",
    "CLEARAIR",
    "DBZCALDLVL",
    "DIGCALDLVL",
    "BEAMWIDTH",
    "PULSELENGTH",
    "STCRANGE",
    "TXFREQUENCY",
    "TXPEAKPWR",
    "ANTGAIN",
    "NOISETHRESH",
];

/// Header keys whose values change how the sweep is gridded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKey {
    Timestamp,
    RangeResolution,
    StartRange,
    Elevation,
    /// A known key carried through as an attribute only
    Informational,
}

/// Classify a header key, or `None` if it is not recognised.
pub fn classify_key(key: &str) -> Option<HeaderKey> {
    match key {
        "TIMESTAMP" => Some(HeaderKey::Timestamp),
        "RNGRES" => Some(HeaderKey::RangeResolution),
        "STARTRNG" => Some(HeaderKey::StartRange),
        "ELEV" => Some(HeaderKey::Elevation),
        k if HEADER_KEYS.contains(&k) => Some(HeaderKey::Informational),
        _ => None,
    }
}
