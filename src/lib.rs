//! Finds the sub-peptides of a protein that best explain an observed fragmentation spectrum

mod fasta;
pub mod plot;
pub mod report;
mod search;

// External Crate Imports
use polychem::MassCalculator;
use sifter::{MatchScore, MatchScorer, PrecursorFilter};
use smithereens::{Peptide, TheoreticalSpectrum};

pub use search::select_precursor;

// Public API ==========================================================================================================

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Protein {
    header: Option<String>,
    sequence: String,
}

/// Enumerates, filters, fragments, and scores candidate peptides against a single observed spectrum
#[derive(Copy, Clone, Debug)]
pub struct Search<'t> {
    calculator: MassCalculator<'t>,
    filter: PrecursorFilter,
    scorer: MatchScorer,
}

#[derive(Clone, Debug)]
pub struct Candidate<'p> {
    peptide: Peptide<'p>,
    theoretical: TheoreticalSpectrum<'p>,
    score: MatchScore,
}
