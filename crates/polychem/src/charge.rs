// Standard Library Imports
use std::{num::NonZeroU32, str::FromStr};

// External Crate Imports
use rust_decimal::Decimal;

// Local Crate Imports
use crate::{Charge, PolychemError};

// Public API ==========================================================================================================

impl Charge {
    #[must_use]
    pub const fn new(charge: u32) -> Option<Self> {
        match NonZeroU32::new(charge) {
            Some(charge) => Some(Self(charge)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Every charge state from `1+` up to and including `max`
    pub fn up_to(max: u32) -> impl DoubleEndedIterator<Item = Self> {
        (1..=max).filter_map(Self::new)
    }
}

impl From<Charge> for Decimal {
    fn from(charge: Charge) -> Self {
        Self::from(charge.get())
    }
}

impl FromStr for Charge {
    type Err = PolychemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // NOTE: MGF files write charges like `2+`, so a single trailing `+` is tolerated
        let digits = s.trim().strip_suffix('+').unwrap_or(s.trim());
        digits
            .parse()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| PolychemError::invalid_charge(s))
    }
}

// Module Tests ========================================================================================================
