// Standard Library Imports
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

// External Crate Imports
use itertools::Itertools;
use polychem::Mz;
use tracing::trace;

// Local Crate Imports
use crate::{Ion, TheoreticalSpectrum};

// Public API ==========================================================================================================

impl<'s> TheoreticalSpectrum<'s> {
    #[must_use]
    pub const fn new(peptide: &'s str) -> Self {
        Self {
            peptide,
            ions: BTreeMap::new(),
        }
    }

    /// Records `ion` at `mz`, replacing (and returning) any ion that already sat at exactly that m/z
    pub fn insert(&mut self, mz: Mz, ion: Ion<'s>) -> Option<Ion<'s>> {
        let replaced = self.ions.insert(mz, ion);
        if let Some(replaced) = replaced {
            trace!(peptide = self.peptide, %mz, %replaced, %ion, "fragment m/z collision");
        }
        replaced
    }

    #[must_use]
    pub const fn peptide(&self) -> &'s str {
        self.peptide
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ions.is_empty()
    }

    #[must_use]
    pub fn get(&self, mz: Mz) -> Option<&Ion<'s>> {
        self.ions.get(&mz)
    }

    /// Every distinct fragment m/z, in ascending order
    pub fn mzs(&self) -> impl ExactSizeIterator<Item = Mz> + DoubleEndedIterator + '_ {
        self.ions.keys().copied()
    }

    #[must_use]
    pub fn sorted_mzs(&self) -> Vec<Mz> {
        self.mzs().collect()
    }

    /// Every fragment ion, in ascending order of m/z
    pub fn ions(&self) -> impl ExactSizeIterator<Item = (Mz, &Ion<'s>)> + DoubleEndedIterator + '_ {
        self.ions.iter().map(|(&mz, ion)| (mz, ion))
    }
}

// NOTE: The peptide on its own line, followed by every ion m/z in ascending order, one per line, with any
// trailing zeros trimmed
impl Display for TheoreticalSpectrum<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.peptide)?;
        if !self.is_empty() {
            let mzs = self.mzs().map(|mz| mz.value().normalize()).join("\n");
            writeln!(f, "{mzs}")?;
        }
        Ok(())
    }
}

// Module Tests ========================================================================================================
