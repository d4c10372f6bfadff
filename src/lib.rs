//! Core types and table-geometry engine for logging live poker hands.
//!
//! Everything in here is synchronous and side-effect free: transforms take
//! their input and hand back a new value, and pot totals are always
//! re-derived from the action log rather than read from a stored snapshot.

pub mod gameplay;
pub mod session;
pub mod table;

/// Chip amounts in the abstract "points" unit the user logs in.
pub type Points = f64;
/// Amounts expressed in big-blind units for display.
pub type BigBlinds = f64;
/// Physical seat index around the table.
pub type Seat = usize;

/// Random instance generation for tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Largest seat count with canonical position names.
pub const MAX_SEATS: usize = 10;
/// Roster size assumed when no occupants are named.
pub const DEFAULT_SEATS: usize = 9;

/// Initialize terminal logging for the CLI binaries.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
