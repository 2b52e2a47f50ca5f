//! Decoder for run-length encoded radar radial text files.
//!
//! Turns the lines of a polar sweep file into a [`SweepHeader`] and an
//! arrival-ordered list of [`RadialRecord`]s. Gridding the radials is the
//! job of the `polar-grid` crate.

pub mod buffer;
pub mod config;
pub mod decoder;
pub mod diagnostics;
pub mod header;
pub mod tables;

pub use buffer::{BoundedBuffer, WriteOutcome};
pub use config::DecoderConfig;
pub use decoder::{decode_data_line, DecodedLine, DecodedSweep, RadialDecoder, RadialRecord};
pub use diagnostics::{CollectingDiagnostics, DecodeEvent, DiagnosticSink, TracingDiagnostics};
pub use header::SweepHeader;
