// Standard Library Imports
use std::ops::{Div, Mul};

// External Crate Imports
use rust_decimal::Decimal;

// Local Crate Imports
use crate::{Charge, Mass, Mz};

// Public API ==========================================================================================================

impl Mass {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[must_use]
    pub const fn new(mass: Decimal) -> Self {
        Self(mass)
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Mul<Decimal> for Mass {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Charge> for Mass {
    type Output = Self;

    fn mul(self, rhs: Charge) -> Self::Output {
        self * Decimal::from(rhs)
    }
}

impl Div<Charge> for Mass {
    type Output = Mz;

    fn div(self, rhs: Charge) -> Self::Output {
        // NOTE: `Charge` is never zero, so this division can't panic
        Mz(self.0 / Decimal::from(rhs))
    }
}

// Module Tests ========================================================================================================
