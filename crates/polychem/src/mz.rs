// Standard Library Imports
use std::ops::Mul;

// External Crate Imports
use rust_decimal::Decimal;

// Local Crate Imports
use crate::{Charge, Mass, Mz};

// Public API ==========================================================================================================

impl Mz {
    #[must_use]
    pub const fn new(mz: Decimal) -> Self {
        Self(mz)
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Mul<Decimal> for Mz {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Charge> for Mz {
    type Output = Mass;

    fn mul(self, rhs: Charge) -> Self::Output {
        Mass(self.0 * Decimal::from(rhs))
    }
}

// Module Tests ========================================================================================================
