//! Sifts candidate peptides by their precursor mass, then scores their theoretical fragments against an observed
//! spectrum

mod errors;
mod match_scorer;
mod observed_spectrum;
mod ppm_window;
mod precursor;

// External Crate Imports
use derive_more::{Constructor, Display};
use polychem::{Charge, Mass, Mz};
use rust_decimal::Decimal;

pub use errors::{Result, SifterError};
pub use ppm_window::PpmWindow;
pub use precursor::DEFAULT_PRECURSOR;

// Public API ==========================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Constructor)]
#[display("{mz} {intensity}")]
pub struct Peak {
    pub mz: Mz,
    pub intensity: Decimal,
}

/// Every (m/z, intensity) peak read from a spectrum, in the order they were listed, along with any precursor
/// information the spectrum carried
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ObservedSpectrum {
    peaks: Vec<Peak>,
    pepmass: Option<Mz>,
    charge: Option<Charge>,
}

/// The intact peptide ion that was isolated for fragmentation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Constructor)]
#[display("{mz} ({charge}+)")]
pub struct Precursor {
    mz: Mz,
    charge: Charge,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct PrecursorFilter {
    target: Mass,
    tolerance: Decimal,
    widening: Decimal,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchScorer {
    ppm: Decimal,
    window_scale: Decimal,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct MatchScore {
    score: Decimal,
    matched_mz: Decimal,
    matched_intensity: Decimal,
    hits: usize,
    hit_fraction: Decimal,
}
