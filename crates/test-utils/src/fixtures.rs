//! Common test fixtures for radar sweep tests.
//!
//! This module provides pre-defined test data that represents common
//! scenarios in radar sweep processing.

/// Radar site locations for testing, as (latitude, longitude, altitude_m).
pub mod sites {
    /// Melbourne (Laverton)
    pub const MELBOURNE: (f64, f64, f64) = (-37.855, 144.755, 45.0);

    /// Sydney (Terrey Hills)
    pub const SYDNEY: (f64, f64, f64) = (-33.701, 151.210, 195.0);
}

/// Center latitudes swept by coordinate round-trip tests.
pub mod latitudes {
    pub const ROUND_TRIP: [f64; 9] = [-80.0, -60.0, -40.0, -20.0, 0.0, 20.0, 40.0, 60.0, 80.0];

    /// Site altitudes swept by 3D round-trip tests (meters).
    pub const ALTITUDES: [f64; 2] = [0.0, 1000.0];
}

/// Literal sweep file lines.
pub mod lines {
    /// Azimuth 61, four repeats of `A` then three of `B`: 14 samples.
    pub const RUN_LENGTH_EXAMPLE: &str = "%061A3B2";

    /// A data line whose azimuth is malformed.
    pub const BAD_AZIMUTH: &str = "%1.2.3C";

    /// A complete, small header.
    pub const HEADER: [&str; 8] = [
        "COUNTRY: 036",
        "NAME: Testville",
        "STNID: 99",
        "TIMESTAMP: 20240115120000",
        "RNGRES: 500",
        "STARTRNG: 2000",
        "ELEV: 1.5",
        "VIDRES: 16",
    ];

    /// Lines the decoder must skip without failing.
    pub const NOISE: [&str; 4] = ["", "   ", "END RADAR IMAGE", "WHATEVER: 12"];
}

/// Common time values for testing.
pub mod time {
    /// A fixed sweep time in header format (2024-01-15T12:00:00Z)
    pub const SWEEP_TIMESTAMP: &str = "20240115120000";
}
