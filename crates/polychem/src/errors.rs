use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = Box<PolychemError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum PolychemError {
    #[diagnostic(help("double-check the sequence for typos, or add a new entry to the residue mass table"))]
    #[error("the residue {residue:?} in {peptide:?} could not be found in the supplied residue mass table")]
    UnknownResidue { residue: char, peptide: String },

    #[diagnostic(help("charge states must be positive whole numbers, optionally followed by a '+' (like 2+)"))]
    #[error("{charge:?} is not a valid charge state")]
    InvalidCharge { charge: String },
}

impl PolychemError {
    pub(crate) fn unknown_residue(residue: char, peptide: &str) -> Self {
        let peptide = peptide.to_owned();

        Self::UnknownResidue { residue, peptide }
    }

    pub(crate) fn invalid_charge(charge: &str) -> Self {
        let charge = charge.to_owned();

        Self::InvalidCharge { charge }
    }
}
