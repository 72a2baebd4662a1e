// Standard Library Imports
use std::str::FromStr;

// External Crate Imports
use ahash::{HashMap, HashMapExt};
use miette::{Diagnostic, LabeledSpan, NamedSource, Result, SourceSpan};
use rust_decimal::Decimal;
use thiserror::Error;

// Local Crate Imports
use crate::{
    Mass, ResidueMassTable,
    parsers::{record, standalone_residue_code},
};

// Constants ===========================================================================================================

pub const DEFAULT_TABLE: &str = include_str!("../data/residue_masses.tsv");

const CODE_FIELD: usize = 0;
const AVERAGE_MASS_FIELD: usize = 4;
const MIN_FIELDS: usize = AVERAGE_MASS_FIELD + 1;
const COMMENT_MARKER: char = '#';

// Public API ==========================================================================================================

impl ResidueMassTable {
    pub fn new(file_name: impl AsRef<str>, text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref();
        Self::parse(text).map_err(|kind| {
            ResidueTableError {
                src: NamedSource::new(file_name, text.to_owned()),
                kind,
            }
            .into()
        })
    }

    /// Looks up the average mass of a residue (codes are case-insensitive)
    #[must_use]
    pub fn get(&self, residue: char) -> Option<Mass> {
        self.0.get(&residue.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Residue codes and their masses, in alphabetical order
    #[must_use]
    pub fn residues(&self) -> Vec<(char, Mass)> {
        let mut residues: Vec<_> = self.0.iter().map(|(&code, &mass)| (code, mass)).collect();
        residues.sort_unstable();
        residues
    }
}

impl Default for ResidueMassTable {
    fn default() -> Self {
        // SAFETY: The embedded table is checked by `default_table_is_valid` below
        Self::new("residue_masses.tsv", DEFAULT_TABLE).unwrap()
    }
}

impl FromIterator<(char, Mass)> for ResidueMassTable {
    fn from_iter<T: IntoIterator<Item = (char, Mass)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(code, mass)| (code.to_ascii_uppercase(), mass))
                .collect(),
        )
    }
}

// Private Helper Methods ==============================================================================================

impl ResidueMassTable {
    fn parse(text: &str) -> Result<Self, ResidueTableErrorKind> {
        let mut residues = HashMap::new();
        let records = text.lines().filter(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with(COMMENT_MARKER)
        });

        for line in records {
            // NOTE: `record` accepts any input (every line has at least one field), so this never fails
            let fields = record(line).map_or_else(|_| vec![line], |(_, fields)| fields);
            if fields.len() < MIN_FIELDS {
                return Err(ResidueTableErrorKind::TooFewFields(
                    span_of(text, line),
                    fields.len(),
                ));
            }

            let code_field = fields[CODE_FIELD];
            let code = standalone_residue_code(code_field.trim()).ok_or_else(|| {
                ResidueTableErrorKind::InvalidCode(span_of(text, code_field), code_field.to_owned())
            })?;

            let mass_field = fields[AVERAGE_MASS_FIELD];
            let mass = Decimal::from_str(mass_field.trim()).map_err(|_| {
                ResidueTableErrorKind::InvalidMass(span_of(text, mass_field), mass_field.to_owned())
            })?;
            if mass <= Decimal::ZERO {
                return Err(ResidueTableErrorKind::NonPositiveMass(
                    span_of(text, mass_field),
                    code,
                    mass,
                ));
            }

            // NOTE: Later records silently replace earlier ones with the same code
            residues.insert(code.to_ascii_uppercase(), Mass(mass));
        }

        if residues.is_empty() {
            return Err(ResidueTableErrorKind::Empty);
        }

        Ok(Self(residues))
    }
}

// NOTE: `substr` must be a slice of `full_input`
fn span_of(full_input: &str, substr: &str) -> SourceSpan {
    let start = substr.as_ptr() as usize - full_input.as_ptr() as usize;
    (start, substr.len()).into()
}

// Validation Error Types and Trait Implementations  ===================================================================

#[derive(Debug, Error)]
#[error("failed to load residue mass table")]
struct ResidueTableError {
    src: NamedSource<String>,
    #[source]
    kind: ResidueTableErrorKind,
}

// NOTE: This is manually implemented because the label needs to be extracted from `self.kind`
impl Diagnostic for ResidueTableError {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (span, label) = self.kind.label()?;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(label.to_owned()),
            span,
        ))))
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        Some(&self.kind)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
enum ResidueTableErrorKind {
    #[error("expected at least 5 tab-separated fields, but found {1}")]
    #[diagnostic(help(
        "each record should contain a residue code, abbreviation, name, monoisotopic mass, and average mass"
    ))]
    TooFewFields(SourceSpan, usize),

    #[error("the residue code {1:?} is not a single ASCII letter")]
    #[diagnostic(help("residues are identified by single-letter codes, like G for glycine"))]
    InvalidCode(SourceSpan, String),

    #[error("the average mass {1:?} is not a valid decimal number")]
    InvalidMass(SourceSpan, String),

    #[error("the average mass of residue {1:?} must be positive, but was {2}")]
    NonPositiveMass(SourceSpan, char, Decimal),

    #[error("the residue mass table did not contain any records")]
    #[diagnostic(help("blank lines and lines starting with '#' are ignored"))]
    Empty,
}

impl ResidueTableErrorKind {
    fn label(&self) -> Option<(SourceSpan, &'static str)> {
        Some(match *self {
            Self::TooFewFields(span, _) => (span, "too few fields"),
            Self::InvalidCode(span, _) => (span, "invalid residue code"),
            Self::InvalidMass(span, _) => (span, "invalid mass"),
            Self::NonPositiveMass(span, ..) => (span, "non-positive mass"),
            Self::Empty => return None,
        })
    }
}

// Module Tests ========================================================================================================
