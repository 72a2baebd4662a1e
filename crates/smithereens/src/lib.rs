//! Breaks sequences into every candidate sub-peptide, and peptides into their theoretical fragment ions

mod fragmenter;
mod ion;
mod ion_series;
mod peptides;
mod theoretical_spectrum;

// Standard Library Imports
use std::collections::BTreeMap;

// External Crate Imports
use derive_more::Display;
use polychem::{Charge, MassCalculator, Mz};

/// Fragments are never assigned a charge greater than this, however long they are
pub const MAX_FRAGMENT_CHARGE: u32 = 6;

// Public API ==========================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display("{sequence}")]
pub struct Peptide<'s> {
    sequence: &'s str,
    offset: usize,
}

/// Every strict sub-peptide of a sequence, shortest first, then from left to right
#[derive(Clone, Debug)]
pub struct SubPeptides<'s> {
    sequence: &'s str,
    boundaries: Vec<usize>,
    length: usize,
    start: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Terminus {
    N,
    C,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum IonSeries {
    #[display("a")]
    A,
    #[display("b")]
    B,
    #[display("c")]
    C,
    #[display("x")]
    X,
    #[display("y")]
    Y,
    #[display("z")]
    Z,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ion<'s> {
    series: IonSeries,
    charge: Charge,
    fragment: &'s str,
}

// NOTE: Fragments of different lengths and charges can land on exactly the same m/z value (`b1+` and `b2++` of a
// homopolymer, for example). Those collisions are expected: the ion produced last is kept, and the m/z value itself is
// all that scoring ever looks at
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TheoreticalSpectrum<'s> {
    peptide: &'s str,
    ions: BTreeMap<Mz, Ion<'s>>,
}

#[derive(Copy, Clone, Debug)]
pub struct Fragmenter<'t> {
    calculator: MassCalculator<'t>,
}
