//! Exact-decimal mass accounting for linear chains of single-letter residues

mod charge;
mod constants;
pub mod errors;
mod mass;
mod mass_calculator;
mod mz;
pub mod parsers;
pub mod residue_table;
#[cfg(test)]
mod testing_tools;

use std::num::NonZeroU32;

// External Crate Imports
use ahash::HashMap;
use derive_more::{Add, Display, From, FromStr, Into, Sub, Sum};
use rust_decimal::Decimal;

pub use errors::{PolychemError, Result};

// NOTE: Every quantity that is compared against a tolerance downstream is a `Decimal` newtype, so binary floating point
// never appears in mass accounting

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display, From, Into, FromStr, Add, Sub, Sum,
)]
pub struct Mass(Decimal);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display, From, Into, FromStr)]
pub struct Mz(Decimal);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub struct Charge(NonZeroU32);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ChemicalConstants {
    pub water: Mass,
    pub proton: Mass,
    pub carbonyl: Mass,
    pub hydroxyl: Mass,
    pub amine: Mass,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ResidueMassTable(HashMap<char, Mass>);

#[derive(Copy, Clone, Debug)]
pub struct MassCalculator<'t> {
    table: &'t ResidueMassTable,
    constants: ChemicalConstants,
}
