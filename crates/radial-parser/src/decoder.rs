//! Line-oriented sweep decoder.
//!
//! A sweep file is a sequence of text lines. Lines starting with `%` are
//! radials: `%` + azimuth + run-length tokens. Every other non-empty line is
//! a `KEY: value` header line.
//!
//! A token is one alphabet letter (see [`crate::tables`]) optionally followed
//! by a decimal count. The letter's code is repeated `count + 1` times, so a
//! bare letter is written once, and every repeat stores the code as two
//! bytes.

use std::io::BufRead;

use radar_common::{RadarError, RadarResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::buffer::{BoundedBuffer, WriteOutcome};
use crate::config::DecoderConfig;
use crate::diagnostics::{DecodeEvent, DiagnosticSink, TracingDiagnostics};
use crate::header::{split_header_line, SweepHeader};
use crate::tables;

/// One decoded radial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialRecord {
    /// Azimuth in degrees, 0 = north, clockwise
    pub azimuth: f64,
    /// Reflectivity codes, one per gate
    pub samples: Vec<i8>,
    /// True if the line held more samples than the buffer capacity
    pub truncated: bool,
}

impl RadialRecord {
    pub fn gates(&self) -> usize {
        self.samples.len()
    }
}

/// Everything decoded from one sweep file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodedSweep {
    pub header: SweepHeader,
    /// Radials in file order
    pub radials: Vec<RadialRecord>,
}

impl DecodedSweep {
    pub fn is_empty(&self) -> bool {
        self.radials.is_empty()
    }

    pub fn len(&self) -> usize {
        self.radials.len()
    }

    /// Longest radial, in gates.
    pub fn max_gates(&self) -> usize {
        self.radials.iter().map(RadialRecord::gates).max().unwrap_or(0)
    }
}

/// Where and why decoding of a data line stopped before its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination {
    /// 1-based column of the offending character in the full line
    pub column: usize,
    pub character: char,
}

/// Result of decoding a single data line.
#[derive(Debug)]
pub struct DecodedLine {
    pub record: RadialRecord,
    /// Set when the azimuth did not parse and the previous one was kept
    pub azimuth_error: Option<RadarError>,
    /// `(written, requested)` repeats of the run that overflowed the buffer
    pub truncation: Option<(usize, usize)>,
    pub termination: Option<Termination>,
}

/// Decode one `%`-prefixed data line.
///
/// `previous_azimuth` is used when the azimuth field is malformed.
/// `capacity` bounds the number of sample bytes kept.
pub fn decode_data_line(line: &str, previous_azimuth: f64, capacity: usize) -> DecodedLine {
    let (prefix_len, body) = match line.strip_prefix('%') {
        Some(rest) => (1, rest),
        None => (0, line),
    };
    let bytes = body.as_bytes();

    let az_end = bytes
        .iter()
        .position(|b| !(b.is_ascii_digit() || *b == b'.'))
        .unwrap_or(bytes.len());
    let az_text = &body[..az_end];

    let (azimuth, azimuth_error) = match az_text.parse::<f64>() {
        Ok(az) => (az, None),
        Err(e) => (
            previous_azimuth,
            Some(RadarError::parse(format!("azimuth '{}': {}", az_text, e))),
        ),
    };

    let mut buffer = BoundedBuffer::with_capacity(capacity);
    let mut truncation = None;
    let mut termination = None;
    let mut pos = az_end;

    while pos < bytes.len() {
        let Some(code) = tables::code_for(bytes[pos]) else {
            let character = body[pos..].chars().next().unwrap_or('\u{fffd}');
            termination = Some(Termination {
                column: prefix_len + pos + 1,
                character,
            });
            break;
        };
        pos += 1;

        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let repeats = parse_count(&bytes[digits_start..pos]).saturating_add(1);

        if let WriteOutcome::Truncated { written, requested } = buffer.push_pairs(code, repeats) {
            truncation = Some((written, requested));
            break;
        }
    }

    DecodedLine {
        record: RadialRecord {
            azimuth,
            samples: buffer.into_vec(),
            truncated: truncation.is_some(),
        },
        azimuth_error,
        truncation,
        termination,
    }
}

fn parse_count(digits: &[u8]) -> usize {
    digits.iter().fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add((d - b'0') as usize)
    })
}

/// Stateful decoder for a whole sweep file.
///
/// Feed lines with [`push_line`](Self::push_line) (or use
/// [`decode_reader`](Self::decode_reader)) and collect the result with
/// [`finish`](Self::finish). Malformed lines are reported to the diagnostics
/// sink and never abort decoding.
pub struct RadialDecoder<S: DiagnosticSink = TracingDiagnostics> {
    config: DecoderConfig,
    header: SweepHeader,
    radials: Vec<RadialRecord>,
    last_azimuth: f64,
    line_number: usize,
    sink: S,
}

impl RadialDecoder<TracingDiagnostics> {
    /// Create a decoder that reports diagnostics through `tracing`.
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_diagnostics(config, TracingDiagnostics)
    }
}

impl Default for RadialDecoder<TracingDiagnostics> {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl<S: DiagnosticSink> RadialDecoder<S> {
    pub fn with_diagnostics(config: DecoderConfig, sink: S) -> Self {
        let header = SweepHeader::from_config(&config);
        Self {
            config,
            header,
            radials: Vec::new(),
            last_azimuth: 0.0,
            line_number: 0,
            sink,
        }
    }

    /// Header as accumulated so far.
    pub fn header(&self) -> &SweepHeader {
        &self.header
    }

    /// Number of radials decoded so far.
    pub fn radial_count(&self) -> usize {
        self.radials.len()
    }

    /// Decode one line of input.
    pub fn push_line(&mut self, line: &str) {
        self.line_number += 1;
        let line = line.trim();

        if line.is_empty() {
            return;
        }

        if line.starts_with('%') {
            self.push_data_line(line);
        } else {
            self.push_header_line(line);
        }
    }

    fn push_data_line(&mut self, line: &str) {
        let decoded = decode_data_line(line, self.last_azimuth, self.config.max_radial_bytes);

        if let Some(err) = decoded.azimuth_error {
            debug!(line = self.line_number, error = %err, "Azimuth parse failed");
            let text = line
                .trim_start_matches('%')
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            self.sink.report(DecodeEvent::MalformedAzimuth {
                line: self.line_number,
                text,
                kept: self.last_azimuth,
            });
        }

        if let Some((written, requested)) = decoded.truncation {
            self.sink.report(DecodeEvent::RadialTruncated {
                line: self.line_number,
                azimuth: decoded.record.azimuth,
                written,
                requested,
            });
        }

        if let Some(term) = decoded.termination {
            self.sink.report(DecodeEvent::LineTerminated {
                line: self.line_number,
                column: term.column,
                character: term.character,
            });
        }

        self.last_azimuth = decoded.record.azimuth;
        self.radials.push(decoded.record);
    }

    fn push_header_line(&mut self, line: &str) {
        let Some((key, value)) = split_header_line(line) else {
            self.sink.report(DecodeEvent::UnknownHeader {
                line: self.line_number,
                key: line.to_string(),
            });
            return;
        };

        match self.header.apply(key, value) {
            Ok(true) => {}
            Ok(false) => self.sink.report(DecodeEvent::UnknownHeader {
                line: self.line_number,
                key: key.to_string(),
            }),
            Err(err) => self.sink.report(DecodeEvent::MalformedHeaderValue {
                line: self.line_number,
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }

    /// Decode every line of an iterator.
    pub fn decode_lines<'a, I>(mut self, lines: I) -> DecodedSweep
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.push_line(line);
        }
        self.finish()
    }

    /// Decode every line of a reader until end of input.
    pub fn decode_reader<R: BufRead>(mut self, reader: R) -> RadarResult<DecodedSweep> {
        for line in reader.lines() {
            self.push_line(&line?);
        }
        Ok(self.finish())
    }

    /// Finalise the header and hand over the decoded radials.
    pub fn finish(self) -> DecodedSweep {
        let sweep = DecodedSweep {
            header: self.header,
            radials: self.radials,
        };

        info!(
            lines = self.line_number,
            radials = sweep.len(),
            max_gates = sweep.max_gates(),
            elevation = sweep.header.elevation_deg,
            timestamp = ?sweep.header.timestamp,
            "Decoded sweep"
        );

        sweep
    }
}
