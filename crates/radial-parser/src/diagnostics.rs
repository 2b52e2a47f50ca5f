//! Diagnostics emitted while decoding a sweep.
//!
//! The decoder never aborts on a malformed line. Instead it reports what it
//! skipped or recovered from to a [`DiagnosticSink`] supplied by the caller.

use tracing::{debug, warn};

/// Something the decoder recovered from.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeEvent {
    /// A header line whose key is not part of the format.
    UnknownHeader { line: usize, key: String },

    /// A recognised header key whose value did not parse. The header field
    /// keeps its previous value.
    MalformedHeaderValue {
        line: usize,
        key: String,
        message: String,
    },

    /// A data line whose azimuth did not parse. The radial is recorded at
    /// the previous azimuth.
    MalformedAzimuth {
        line: usize,
        text: String,
        kept: f64,
    },

    /// A run did not fit in the radial buffer and was clipped.
    RadialTruncated {
        line: usize,
        azimuth: f64,
        written: usize,
        requested: usize,
    },

    /// Decoding of a data line stopped at a character outside the alphabet.
    LineTerminated {
        line: usize,
        column: usize,
        character: char,
    },
}

/// Receiver for decode diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, event: DecodeEvent);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn report(&mut self, event: DecodeEvent) {
        (**self).report(event)
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, event: DecodeEvent) {
        match event {
            DecodeEvent::UnknownHeader { line, key } => {
                debug!(line = line, key = %key, "Ignoring unrecognised header key");
            }
            DecodeEvent::MalformedHeaderValue { line, key, message } => {
                warn!(line = line, key = %key, error = %message, "Malformed header value");
            }
            DecodeEvent::MalformedAzimuth { line, text, kept } => {
                warn!(line = line, text = %text, kept = kept, "Malformed azimuth, keeping previous");
            }
            DecodeEvent::RadialTruncated {
                line,
                azimuth,
                written,
                requested,
            } => {
                warn!(
                    line = line,
                    azimuth = azimuth,
                    written = written,
                    requested = requested,
                    "Radial exceeded buffer capacity"
                );
            }
            DecodeEvent::LineTerminated {
                line,
                column,
                character,
            } => {
                debug!(line = line, column = column, character = ?character, "Data line terminated early");
            }
        }
    }
}

/// Stores every event, for tests and for callers that want a report.
#[derive(Debug, Default, Clone)]
pub struct CollectingDiagnostics {
    pub events: Vec<DecodeEvent>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn count_where(&self, predicate: impl Fn(&DecodeEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    pub fn truncations(&self) -> usize {
        self.count_where(|e| matches!(e, DecodeEvent::RadialTruncated { .. }))
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn report(&mut self, event: DecodeEvent) {
        self.events.push(event);
    }
}
