// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// External Crate Imports
use polychem::Charge;

// Local Crate Imports
use crate::{Ion, IonSeries};

// Public API ==========================================================================================================

impl<'s> Ion<'s> {
    #[must_use]
    pub const fn new(series: IonSeries, charge: Charge, fragment: &'s str) -> Self {
        Self {
            series,
            charge,
            fragment,
        }
    }

    #[must_use]
    pub const fn series(&self) -> IonSeries {
        self.series
    }

    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }

    /// The residues retained by this ion
    #[must_use]
    pub const fn fragment(&self) -> &'s str {
        self.fragment
    }
}

impl Display for Ion<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let residues = self.fragment.chars().count();
        let charge = "+".repeat(self.charge.get() as usize);
        write!(f, "{}{residues}{charge}", self.series)
    }
}

// Module Tests ========================================================================================================
