//! Test data generators for creating synthetic sweep files.
//!
//! These generators write the same text format the radial decoder reads,
//! so tests can build predictable sweeps without checked-in data files.

use radial_parser::tables::letter_for;

/// Encode a data line from explicit `(code, repeats)` runs.
///
/// A run with `repeats == 1` is written as a bare letter, otherwise as the
/// letter followed by `repeats - 1`. Runs with zero repeats are skipped.
///
/// # Panics
///
/// Panics on codes outside `-24..=24`; generators only produce valid codes.
///
/// # Example
///
/// ```
/// use test_utils::encode_runs;
///
/// assert_eq!(encode_runs(61.0, &[(0, 4), (1, 3)]), "%61A3B2");
/// assert_eq!(encode_runs(5.5, &[(2, 1)]), "%5.5C");
/// ```
pub fn encode_runs(azimuth: f64, runs: &[(i8, usize)]) -> String {
    let mut line = format!("%{}", azimuth);
    for &(code, repeats) in runs {
        if repeats == 0 {
            continue;
        }
        line.push(letter_for(code).expect("code outside the letter alphabet"));
        if repeats > 1 {
            line.push_str(&(repeats - 1).to_string());
        }
    }
    line
}

/// Encode a data line from one code per decoded pair.
///
/// Consecutive equal codes are merged into a single run. The decoder will
/// produce `2 * pair_codes.len()` samples for the line.
pub fn encode_radial(azimuth: f64, pair_codes: &[i8]) -> String {
    let mut runs: Vec<(i8, usize)> = Vec::new();
    for &code in pair_codes {
        match runs.last_mut() {
            Some((last, count)) if *last == code => *count += 1,
            _ => runs.push((code, 1)),
        }
    }
    encode_runs(azimuth, &runs)
}

/// Expected decoder output for [`encode_radial`]: every code twice.
pub fn expand_pairs(pair_codes: &[i8]) -> Vec<i8> {
    pair_codes.iter().flat_map(|&c| [c, c]).collect()
}

/// Creates a deterministic reflectivity pattern for one radial.
///
/// Codes stay in `0..=15`, with a band of stronger echoes whose position
/// depends on the azimuth index.
pub fn create_reflectivity_pattern(azimuth_index: usize, pairs: usize, seed: u32) -> Vec<i8> {
    let band_center = (azimuth_index * 7) % pairs.max(1);
    (0..pairs)
        .map(|gate| {
            let dist = gate.abs_diff(band_center);
            if dist < 4 {
                (12 - dist as i8 * 2).max(0)
            } else {
                (simple_hash(azimuth_index as u32, gate as u32, seed) % 3) as i8
            }
        })
        .collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Header lines for a synthetic sweep.
///
/// `None` leaves a key out, so the decoder's default applies.
pub fn create_header_lines(
    timestamp: Option<&str>,
    range_resolution_m: Option<f64>,
    start_range_m: Option<f64>,
    elevation_deg: Option<f64>,
) -> Vec<String> {
    let mut lines = vec![
        "COUNTRY: 036".to_string(),
        "NAME: Testville".to_string(),
        "STNID: 99".to_string(),
        "PRODUCT: VOLUMETRIC [1]".to_string(),
    ];
    if let Some(ts) = timestamp {
        lines.push(format!("TIMESTAMP: {}", ts));
    }
    if let Some(res) = range_resolution_m {
        lines.push(format!("RNGRES: {}", res));
    }
    if let Some(start) = start_range_m {
        lines.push(format!("STARTRNG: {}", start));
    }
    if let Some(elev) = elevation_deg {
        lines.push(format!("ELEV: {}", elev));
    }
    lines
}

/// Creates a complete sweep: header lines followed by one radial per
/// azimuth, each with `pairs` decoded pairs.
pub fn create_sweep_lines(azimuths: &[f64], pairs: usize, seed: u32) -> Vec<String> {
    let mut lines = create_header_lines(
        Some("20240115120000"),
        Some(250.0),
        Some(4000.0),
        Some(0.5),
    );
    for (i, &az) in azimuths.iter().enumerate() {
        lines.push(encode_radial(az, &create_reflectivity_pattern(i, pairs, seed)));
    }
    lines
}

/// Creates a sweep covering `0..360` degrees at `step_deg` spacing.
pub fn create_full_circle_sweep(step_deg: f64, pairs: usize, seed: u32) -> Vec<String> {
    let count = (360.0 / step_deg).round() as usize;
    let azimuths: Vec<f64> = (0..count).map(|i| i as f64 * step_deg).collect();
    create_sweep_lines(&azimuths, pairs, seed)
}
