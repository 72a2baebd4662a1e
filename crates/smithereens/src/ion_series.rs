// External Crate Imports
use polychem::{Charge, ChemicalConstants, Mass, Mz};
use rust_decimal::Decimal;

// Local Crate Imports
use crate::{IonSeries, Terminus};

// Public API ==========================================================================================================

impl Terminus {
    /// The ion series that retain this terminus
    #[must_use]
    pub const fn series(self) -> [IonSeries; 3] {
        match self {
            Self::N => [IonSeries::A, IonSeries::B, IonSeries::C],
            Self::C => [IonSeries::X, IonSeries::Y, IonSeries::Z],
        }
    }
}

impl IonSeries {
    #[must_use]
    pub const fn terminus(self) -> Terminus {
        match self {
            Self::A | Self::B | Self::C => Terminus::N,
            Self::X | Self::Y | Self::Z => Terminus::C,
        }
    }

    /// The m/z of this ion, given the summed residue masses of its fragment (without any terminal groups)
    #[must_use]
    pub fn mz(self, residues: Mass, charge: Charge, constants: &ChemicalConstants) -> Mz {
        let &ChemicalConstants {
            proton,
            carbonyl,
            hydroxyl,
            amine,
            ..
        } = constants;
        let protons = proton * charge;
        let spare_protons = proton * Decimal::from(charge.get() - 1);

        let mass = match self {
            Self::A => residues - carbonyl + proton * Decimal::TWO + protons,
            Self::B => residues + protons,
            Self::C => residues + amine + protons,
            Self::X => residues + carbonyl + hydroxyl + spare_protons,
            Self::Y => residues + hydroxyl + proton + protons,
            Self::Z => residues - amine + hydroxyl + proton + spare_protons,
        };

        mass / charge
    }
}

// Module Tests ========================================================================================================
