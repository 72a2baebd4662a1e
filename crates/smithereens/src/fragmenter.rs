// Standard Library Imports
use std::cmp;

// External Crate Imports
use polychem::{Charge, MassCalculator, Result};

// Local Crate Imports
use crate::{Fragmenter, Ion, MAX_FRAGMENT_CHARGE, Terminus, TheoreticalSpectrum};

// Public API ==========================================================================================================

impl<'t> Fragmenter<'t> {
    #[must_use]
    pub const fn new(calculator: MassCalculator<'t>) -> Self {
        Self { calculator }
    }

    #[must_use]
    pub const fn calculator(&self) -> &MassCalculator<'t> {
        &self.calculator
    }

    /// Generates the a, b, c, x, y, and z ions of every single backbone cleavage of `peptide`
    ///
    /// Each fragment is charged from `1+` up to its own length in residues, capped at [`MAX_FRAGMENT_CHARGE`]. A
    /// peptide with fewer than two residues has no backbone to cleave and yields an empty spectrum.
    pub fn fragment<'s>(&self, peptide: &'s str) -> Result<TheoreticalSpectrum<'s>> {
        let mut spectrum = TheoreticalSpectrum::new(peptide);
        // Fail on unknown residues even when there is nothing to cleave
        self.calculator.residue_sum(peptide)?;

        for (cleavage, _) in peptide.char_indices().skip(1) {
            let (n_fragment, c_fragment) = peptide.split_at(cleavage);
            self.add_ions(&mut spectrum, Terminus::N, n_fragment)?;
            self.add_ions(&mut spectrum, Terminus::C, c_fragment)?;
        }

        Ok(spectrum)
    }
}

// Private Helper Methods ==============================================================================================

impl Fragmenter<'_> {
    fn add_ions<'s>(
        &self,
        spectrum: &mut TheoreticalSpectrum<'s>,
        terminus: Terminus,
        fragment: &'s str,
    ) -> Result<()> {
        let residues = self.calculator.residue_sum(fragment)?;
        let length = u32::try_from(fragment.chars().count()).unwrap_or(u32::MAX);
        let constants = self.calculator.constants();

        for charge in Charge::up_to(cmp::min(length, MAX_FRAGMENT_CHARGE)) {
            for series in terminus.series() {
                let mz = series.mz(residues, charge, constants);
                spectrum.insert(mz, Ion::new(series, charge, fragment));
            }
        }

        Ok(())
    }
}

// Module Tests ========================================================================================================
