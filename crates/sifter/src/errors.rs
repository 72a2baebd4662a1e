use miette::Diagnostic;
use polychem::PolychemError;
use thiserror::Error;

pub type Result<T, E = SifterError> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum SifterError {
    #[diagnostic(help(
        "each peak should be on its own line, as an m/z value and an intensity separated by whitespace"
    ))]
    #[error("no (m/z, intensity) peaks could be found in the supplied spectrum")]
    MalformedSpectrum,

    #[diagnostic(help("at least one peak in the spectrum must have a positive intensity"))]
    #[error("the intensities of all {peaks} observed peaks sum to zero, so they can't be normalized")]
    ZeroIntensity { peaks: usize },

    #[diagnostic(help("the total intensity must stay below 79228162514264337593543950335"))]
    #[error("the intensities of the {peaks} observed peaks are too large to sum")]
    IntensityOverflow { peaks: usize },

    #[diagnostic(help("peak values must lie between 0 and 79228162514264337593543950335"))]
    #[error("the peak value {value:?} can't be represented as a decimal number")]
    InvalidPeak { value: String },

    #[diagnostic(help("check the spectrum and tolerances for implausibly large values"))]
    #[error("the {quantity} is too large to be represented as a decimal number")]
    Overflow { quantity: &'static str },

    #[error("candidates can't be scored against an empty set of observed peaks")]
    EmptyPeakSet,

    #[diagnostic(help("PEPMASS should be a decimal m/z value, optionally followed by an intensity"))]
    #[error("the precursor m/z {pepmass:?} is not a valid decimal number")]
    InvalidPepmass { pepmass: String },

    #[diagnostic(transparent)]
    #[error(transparent)]
    Polychem(#[from] Box<PolychemError>),
}

impl SifterError {
    pub(crate) fn invalid_pepmass(pepmass: &str) -> Self {
        let pepmass = pepmass.to_owned();

        Self::InvalidPepmass { pepmass }
    }

    pub(crate) fn invalid_peak(value: &str) -> Self {
        let value = value.to_owned();

        Self::InvalidPeak { value }
    }

    pub(crate) const fn overflow(quantity: &'static str) -> Self {
        Self::Overflow { quantity }
    }
}
