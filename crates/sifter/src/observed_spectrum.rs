// Standard Library Imports
use std::{str::FromStr, sync::LazyLock};

// External Crate Imports
use polychem::{Charge, Mz};
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

// Local Crate Imports
use crate::{ObservedSpectrum, Peak, Precursor, Result, SifterError};

// Constants ===========================================================================================================

// NOTE: Any line starting with two whitespace-separated, unsigned decimals is a peak. Either side of the decimal
// point may be left bare (`.5` or `100.`). Whatever follows the two numbers on that line (an ion annotation, for
// example) is ignored, as are lines that don't match at all
static PEAK: LazyLock<Regex> = LazyLock::new(|| {
    const NUMBER: &str = r"([0-9]*\.?[0-9]+|[0-9]+\.)";
    // SAFETY: This pattern is a compile-time constant and is checked by the tests below
    Regex::new(&format!(r"(?m)^[ \t]*{NUMBER}[ \t]+{NUMBER}")).unwrap()
});

static PEPMASS: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This pattern is a compile-time constant and is checked by the tests below
    Regex::new(r"(?m)^[ \t]*PEPMASS[ \t]*=[ \t]*(\S+)").unwrap()
});

static CHARGE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This pattern is a compile-time constant and is checked by the tests below
    Regex::new(r"(?m)^[ \t]*CHARGE[ \t]*=[ \t]*(\S+)").unwrap()
});

// Public API ==========================================================================================================

impl ObservedSpectrum {
    pub fn new(peaks: impl IntoIterator<Item = Peak>) -> Result<Self> {
        let peaks: Vec<_> = peaks.into_iter().collect();
        if peaks.is_empty() {
            return Err(SifterError::MalformedSpectrum);
        }

        Ok(Self {
            peaks,
            pepmass: None,
            charge: None,
        })
    }

    /// Extracts every peak from free text, along with the precursor from any `PEPMASS=` and `CHARGE=` headers
    pub fn parse(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref();
        let peaks: Vec<_> = PEAK
            .captures_iter(text)
            .map(|captures| {
                let mz = parse_peak_value(&captures[1])?;
                let intensity = parse_peak_value(&captures[2])?;
                Ok(Peak::new(Mz::new(mz), intensity))
            })
            .collect::<Result<_>>()?;

        let mut spectrum = Self::new(peaks)?;
        spectrum.pepmass = header(&PEPMASS, text)
            .map(|pepmass| {
                Decimal::from_str(pepmass)
                    .map(Mz::new)
                    .map_err(|_| SifterError::invalid_pepmass(pepmass))
            })
            .transpose()?;
        spectrum.charge = header(&CHARGE, text)
            .map(|charge| Charge::from_str(charge).map_err(Box::new))
            .transpose()?;

        debug!(
            peaks = spectrum.len(),
            pepmass = ?spectrum.pepmass.map(|mz| mz.to_string()),
            charge = ?spectrum.charge.map(Charge::get),
            "parsed observed spectrum"
        );
        Ok(spectrum)
    }

    #[must_use]
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// The precursor m/z, if the spectrum had a `PEPMASS=` header
    #[must_use]
    pub const fn pepmass(&self) -> Option<Mz> {
        self.pepmass
    }

    /// The precursor charge, if the spectrum had a `CHARGE=` header
    #[must_use]
    pub const fn charge(&self) -> Option<Charge> {
        self.charge
    }

    #[must_use]
    pub fn precursor(&self) -> Option<Precursor> {
        Some(Precursor::new(self.pepmass?, self.charge?))
    }

    pub fn total_intensity(&self) -> Result<Decimal> {
        self.peaks
            .iter()
            .try_fold(Decimal::ZERO, |total, peak| total.checked_add(peak.intensity))
            .ok_or(SifterError::IntensityOverflow { peaks: self.len() })
    }

    /// Rescales every intensity so that they all sum to one
    pub fn normalized(&self) -> Result<Self> {
        let total = self.total_intensity()?;
        if total.is_zero() {
            return Err(SifterError::ZeroIntensity { peaks: self.len() });
        }

        let peaks = self
            .peaks
            .iter()
            .map(|&Peak { mz, intensity }| Peak::new(mz, intensity / total))
            .collect();
        Ok(Self { peaks, ..*self })
    }
}

// Private Helper Functions ============================================================================================

// NOTE: The pattern only captures digits and decimal points, but there can be too many digits to fit in a `Decimal`
fn parse_peak_value(value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|_| SifterError::invalid_peak(value))
}

fn header<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use polychem::PolychemError;
    use rust_decimal_macros::dec;

    use super::*;

    const MGF: &str = indoc! {"
        BEGIN IONS
        TITLE=A tiny spectrum
        PEPMASS=147.153256466 1234.5
        CHARGE=1+
        58.0592 100
        90.1014 50.0
        500.0\t10
        END IONS
    "};

    fn peak(mz: Decimal, intensity: Decimal) -> Peak {
        Peak::new(Mz::new(mz), intensity)
    }

    #[test]
    fn parse_mgf() {
        let spectrum = ObservedSpectrum::parse(MGF).unwrap();
        assert_eq!(
            spectrum.peaks(),
            [
                peak(dec!(58.0592), dec!(100)),
                peak(dec!(90.1014), dec!(50.0)),
                peak(dec!(500.0), dec!(10)),
            ]
        );
        assert_eq!(spectrum.pepmass(), Some(Mz::new(dec!(147.153256466))));
        assert_eq!(spectrum.charge(), Charge::new(1));
        assert_eq!(
            spectrum.precursor(),
            Some(Precursor::new(
                Mz::new(dec!(147.153256466)),
                Charge::new(1).unwrap()
            ))
        );
    }

    #[test]
    fn parse_bare_peak_lists() {
        let spectrum = ObservedSpectrum::parse("100.0 1.0").unwrap();
        assert_eq!(spectrum.peaks(), [peak(dec!(100.0), dec!(1.0))]);
        assert_eq!(spectrum.precursor(), None);

        let text = indoc! {"
            Some header text, 12 apples
              212.5   3  b2+
            not a peak 1.0 2.0
            1e5 2
            0.5 7
        "};
        let spectrum = ObservedSpectrum::parse(text).unwrap();
        assert_eq!(
            spectrum.peaks(),
            [peak(dec!(212.5), dec!(3)), peak(dec!(0.5), dec!(7))]
        );
    }

    #[test]
    fn parse_partial_precursors() {
        let spectrum = ObservedSpectrum::parse("PEPMASS=500.5\n100 1\n").unwrap();
        assert_eq!(spectrum.pepmass(), Some(Mz::new(dec!(500.5))));
        assert_eq!(spectrum.charge(), None);
        assert_eq!(spectrum.precursor(), None);

        let spectrum = ObservedSpectrum::parse("CHARGE=3+\n100 1\n").unwrap();
        assert_eq!(spectrum.pepmass(), None);
        assert_eq!(spectrum.charge(), Charge::new(3));
        assert_eq!(spectrum.precursor(), None);
    }

    #[test]
    fn parse_bare_decimal_points() {
        let spectrum = ObservedSpectrum::parse("100.0 1.0\n.5 2\n100. 3\n7 .25\n8 9.\n").unwrap();
        assert_eq!(
            spectrum.peaks(),
            [
                peak(dec!(100.0), dec!(1.0)),
                peak(dec!(0.5), dec!(2)),
                peak(dec!(100), dec!(3)),
                peak(dec!(7), dec!(0.25)),
                peak(dec!(8), dec!(9)),
            ]
        );
        assert_eq!(
            ObservedSpectrum::parse(". 1\n"),
            Err(SifterError::MalformedSpectrum)
        );
    }

    #[test]
    fn parse_unrepresentable_peaks() {
        let text = "100 1\n123456789012345678901234567890 2\n";
        assert_eq!(
            ObservedSpectrum::parse(text),
            Err(SifterError::InvalidPeak {
                value: "123456789012345678901234567890".to_owned()
            })
        );
        let text = "100 99999999999999999999999999999999\n";
        assert_eq!(
            ObservedSpectrum::parse(text),
            Err(SifterError::InvalidPeak {
                value: "99999999999999999999999999999999".to_owned()
            })
        );
    }

    #[test]
    fn parse_malformed_spectra() {
        assert_eq!(
            ObservedSpectrum::parse(""),
            Err(SifterError::MalformedSpectrum)
        );
        assert_eq!(
            ObservedSpectrum::parse("PEPMASS=500\nCHARGE=2+\nno peaks here\n"),
            Err(SifterError::MalformedSpectrum)
        );
        assert_eq!(
            ObservedSpectrum::parse("PEPMASS=heavy\n100 1\n"),
            Err(SifterError::InvalidPepmass {
                pepmass: "heavy".to_owned()
            })
        );
        assert_eq!(
            ObservedSpectrum::parse("CHARGE=0\n100 1\n"),
            Err(SifterError::Polychem(Box::new(
                PolychemError::InvalidCharge {
                    charge: "0".to_owned()
                }
            )))
        );
        assert_eq!(
            ObservedSpectrum::new(Vec::new()),
            Err(SifterError::MalformedSpectrum)
        );
    }

    #[test]
    fn normalize_intensities() {
        let spectrum = ObservedSpectrum::parse(MGF).unwrap();
        assert_eq!(spectrum.total_intensity(), Ok(dec!(160)));

        let normalized = spectrum.normalized().unwrap();
        let intensities: Vec<_> = normalized.peaks().iter().map(|p| p.intensity).collect();
        assert_eq!(intensities, vec![dec!(0.625), dec!(0.3125), dec!(0.0625)]);
        assert_eq!(normalized.total_intensity(), Ok(Decimal::ONE));
        assert_eq!(normalized.precursor(), spectrum.precursor());

        let mzs = |s: &ObservedSpectrum| -> Vec<_> { s.peaks().iter().map(|p| p.mz).collect() };
        assert_eq!(mzs(&normalized), mzs(&spectrum));
    }

    #[test]
    fn normalized_intensities_sum_to_one() {
        let spectrum = ObservedSpectrum::parse("1 1\n2 1\n3 1\n").unwrap();
        let total = spectrum.normalized().unwrap().total_intensity().unwrap();
        assert!((total - Decimal::ONE).abs() < dec!(0.000000000000000000001));
    }

    #[test]
    fn normalize_zero_intensities() {
        let spectrum = ObservedSpectrum::parse("100 0\n200 0.000\n").unwrap();
        assert_eq!(
            spectrum.normalized(),
            Err(SifterError::ZeroIntensity { peaks: 2 })
        );
    }

    #[test]
    fn normalize_oversized_intensities() {
        let text = "100 50000000000000000000000000000\n200 50000000000000000000000000000\n";
        let spectrum = ObservedSpectrum::parse(text).unwrap();
        assert_eq!(
            spectrum.total_intensity(),
            Err(SifterError::IntensityOverflow { peaks: 2 })
        );
        assert_eq!(
            spectrum.normalized(),
            Err(SifterError::IntensityOverflow { peaks: 2 })
        );

        let spectrum = ObservedSpectrum::parse("100 50000000000000000000000000000\n200 0\n").unwrap();
        let intensities: Vec<_> = spectrum
            .normalized()
            .unwrap()
            .peaks()
            .iter()
            .map(|p| p.intensity)
            .collect();
        assert_eq!(intensities, vec![Decimal::ONE, Decimal::ZERO]);
    }
}
