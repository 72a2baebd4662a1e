// Standard Library Imports
use std::ops::RangeInclusive;

// External Crate Imports
use polychem::{Charge, ChemicalConstants, Mass, MassCalculator, Mz};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

// Local Crate Imports
use crate::{Precursor, PrecursorFilter, Result, SifterError};

// Constants ===========================================================================================================

/// The precursor assumed when neither the command line nor the spectrum supply one
pub const DEFAULT_PRECURSOR: Precursor = Precursor {
    mz: Mz::new(dec!(777.25439453)),
    // SAFETY: Seven is not zero
    charge: match Charge::new(7) {
        Some(charge) => charge,
        None => unreachable!(),
    },
};

const DEFAULT_TOLERANCE: Decimal = dec!(0.00005);
// NOTE: The precursor may have been observed at any charge state up to 7+, so the relative tolerance is widened by 7
const DEFAULT_WIDENING: Decimal = dec!(7);

// Public API ==========================================================================================================

impl Precursor {
    #[must_use]
    pub const fn mz(&self) -> Mz {
        self.mz
    }

    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }

    /// The mass of the uncharged peptide: the m/z scaled by the charge, minus the mass of each charging proton
    pub fn neutral_mass(&self, constants: &ChemicalConstants) -> Result<Mass> {
        let charge = Decimal::from(self.charge);
        let mass = self.mz.value().checked_mul(charge);
        let protons = constants.proton.value().checked_mul(charge);
        mass.zip(protons)
            .and_then(|(mass, protons)| mass.checked_sub(protons))
            .map(Mass::new)
            .ok_or_else(|| SifterError::overflow("precursor mass"))
    }
}

impl Default for Precursor {
    fn default() -> Self {
        DEFAULT_PRECURSOR
    }
}

impl PrecursorFilter {
    #[must_use]
    pub const fn new(target: Mass) -> Self {
        Self {
            target,
            tolerance: DEFAULT_TOLERANCE,
            widening: DEFAULT_WIDENING,
        }
    }

    pub fn from_precursor(precursor: &Precursor, constants: &ChemicalConstants) -> Result<Self> {
        precursor.neutral_mass(constants).map(Self::new)
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn with_widening(mut self, widening: Decimal) -> Self {
        self.widening = widening;
        self
    }

    #[must_use]
    pub const fn target(&self) -> Mass {
        self.target
    }

    /// The closed interval `target ± target × tolerance × widening`
    pub fn window(&self) -> Result<RangeInclusive<Mass>> {
        let target = self.target.value();
        let (start, end) = target
            .checked_mul(self.tolerance)
            .and_then(|delta| delta.checked_mul(self.widening))
            .and_then(|delta| Some((target.checked_sub(delta)?, target.checked_add(delta)?)))
            .ok_or_else(|| SifterError::overflow("precursor mass window"))?;

        Ok(Mass::new(start)..=Mass::new(end))
    }

    pub fn accepts(&self, mass: Mass) -> Result<bool> {
        Ok(self.window()?.contains(&mass))
    }

    /// Keeps only the candidates whose total mass falls within the precursor window, preserving their order
    pub fn filter<P: AsRef<str>>(
        &self,
        candidates: impl IntoIterator<Item = P>,
        calculator: &MassCalculator,
    ) -> Result<Vec<P>> {
        let window = self.window()?;
        debug!(mass = %self.target, lower = %window.start(), upper = %window.end(), "filtering candidates");

        let mut accepted = Vec::new();
        for candidate in candidates {
            let mass = calculator.total_mass(candidate.as_ref())?;
            if window.contains(&mass) {
                accepted.push(candidate);
            }
        }

        Ok(accepted)
    }
}

// Module Tests ========================================================================================================
