// External Crate Imports
use polychem::{Charge, MassCalculator, Mz};
use rayon::prelude::*;
use sifter::{MatchScore, MatchScorer, ObservedSpectrum, Precursor, PrecursorFilter, Result};
use smithereens::{Fragmenter, Peptide, SubPeptides, TheoreticalSpectrum};
use tracing::{debug, info};

// Local Crate Imports
use crate::{Candidate, Protein, Search};

// Public API ==========================================================================================================

impl<'t> Search<'t> {
    #[must_use]
    pub const fn new(calculator: MassCalculator<'t>, filter: PrecursorFilter, scorer: MatchScorer) -> Self {
        Self {
            calculator,
            filter,
            scorer,
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &PrecursorFilter {
        &self.filter
    }

    /// Every sub-peptide of every protein whose mass falls within the precursor window, in enumeration order
    pub fn candidates<'p>(&self, proteins: &'p [Protein]) -> Result<Vec<Peptide<'p>>> {
        let peptides = proteins
            .iter()
            .flat_map(|protein| SubPeptides::new(protein.sequence()));
        let candidates = self.filter.filter(peptides, &self.calculator)?;
        info!(candidates = candidates.len(), "filtered peptides by precursor mass");

        Ok(candidates)
    }

    /// Fragments and scores every candidate against the observed spectrum, which is normalized first
    ///
    /// Candidates are scored in parallel, but are returned in the same order as [`Search::candidates`].
    pub fn run<'p>(&self, proteins: &'p [Protein], spectrum: &ObservedSpectrum) -> Result<Vec<Candidate<'p>>> {
        let observed = spectrum.normalized()?;
        let fragmenter = Fragmenter::new(self.calculator);

        self.candidates(proteins)?
            .into_par_iter()
            .map(|peptide| -> Result<_> {
                let theoretical = fragmenter.fragment(peptide.sequence())?;
                let score = self.scorer.score(&theoretical.sorted_mzs(), observed.peaks())?;
                debug!(%peptide, ions = theoretical.len(), hits = score.hits(), "scored candidate");

                Ok(Candidate::new(peptide, theoretical, score))
            })
            .collect()
    }
}

impl<'p> Candidate<'p> {
    #[must_use]
    pub const fn new(peptide: Peptide<'p>, theoretical: TheoreticalSpectrum<'p>, score: MatchScore) -> Self {
        Self {
            peptide,
            theoretical,
            score,
        }
    }

    #[must_use]
    pub const fn peptide(&self) -> Peptide<'p> {
        self.peptide
    }

    #[must_use]
    pub const fn theoretical(&self) -> &TheoreticalSpectrum<'p> {
        &self.theoretical
    }

    #[must_use]
    pub const fn score(&self) -> &MatchScore {
        &self.score
    }
}

/// Picks the precursor m/z and charge from the first of: explicit values, the spectrum's headers, or the defaults
#[must_use]
pub fn select_precursor(mz: Option<Mz>, charge: Option<Charge>, spectrum: &ObservedSpectrum) -> Precursor {
    let default = Precursor::default();
    let mz = mz.or(spectrum.pepmass()).unwrap_or(default.mz());
    let charge = charge.or(spectrum.charge()).unwrap_or(default.charge());

    Precursor::new(mz, charge)
}

// Module Tests ========================================================================================================
