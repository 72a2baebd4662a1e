// External Crate Imports
use rust_decimal_macros::dec;

// Local Crate Imports
use crate::{ChemicalConstants, Mass};

// Constants ===========================================================================================================

// NOTE: Average masses, to stay consistent with the average residue masses of the default residue table
const WATER: Mass = Mass(dec!(18.01528));
const PROTON: Mass = Mass(dec!(1.007276466));
const CARBONYL: Mass = Mass(dec!(28.0101));
const HYDROXYL: Mass = Mass(dec!(17.008));
const AMINE: Mass = Mass(dec!(16.02258));

// Public API ==========================================================================================================

impl Default for ChemicalConstants {
    fn default() -> Self {
        Self {
            water: WATER,
            proton: PROTON,
            carbonyl: CARBONYL,
            hydroxyl: HYDROXYL,
            amine: AMINE,
        }
    }
}
