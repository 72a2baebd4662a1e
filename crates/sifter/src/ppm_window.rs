// Standard Library Imports
use std::ops::RangeInclusive;

// External Crate Imports
use polychem::{Mass, Mz};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ONE_MILLION: Decimal = dec!(1_000_000);

// Public API ==========================================================================================================

/// A closed window of values lying within some parts-per-million of a centre
pub trait PpmWindow: Sized + Copy {
    /// Returns `None` if either end of the window falls outside of the range of a `Decimal`
    fn ppm_window(self, ppm: Decimal) -> Option<RangeInclusive<Self>>;
}

impl PpmWindow for Decimal {
    fn ppm_window(self, ppm: Decimal) -> Option<RangeInclusive<Self>> {
        let delta = self.checked_mul(ppm)?.checked_div(ONE_MILLION)?;
        Some(self.checked_sub(delta)?..=self.checked_add(delta)?)
    }
}

impl PpmWindow for Mz {
    fn ppm_window(self, ppm: Decimal) -> Option<RangeInclusive<Self>> {
        let (start, end) = self.value().ppm_window(ppm)?.into_inner();
        Some(Self::new(start)..=Self::new(end))
    }
}

impl PpmWindow for Mass {
    fn ppm_window(self, ppm: Decimal) -> Option<RangeInclusive<Self>> {
        let (start, end) = self.value().ppm_window(ppm)?.into_inner();
        Some(Self::new(start)..=Self::new(end))
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn decimal_ppm_windows() {
        assert_eq!(dec!(100).ppm_window(dec!(100)), Some(dec!(99.99)..=dec!(100.01)));
        assert_eq!(dec!(500).ppm_window(dec!(10)), Some(dec!(499.995)..=dec!(500.005)));
        assert_eq!(dec!(42).ppm_window(Decimal::ZERO), Some(dec!(42)..=dec!(42)));
    }

    #[test]
    fn windows_are_symmetric() {
        for centre in [dec!(58.0592), dec!(777.25439453), dec!(5433.72982908)] {
            let (start, end) = centre.ppm_window(dec!(350)).unwrap().into_inner();
            assert_eq!(centre - start, end - centre);
            assert!(start < centre && centre < end);
        }
    }

    #[test]
    fn mz_and_mass_windows() {
        let window = Mz::new(dec!(1000)).ppm_window(dec!(50)).unwrap();
        assert!(window.contains(&Mz::new(dec!(999.95))));
        assert!(window.contains(&Mz::new(dec!(1000.05))));
        assert!(!window.contains(&Mz::new(dec!(1000.0500001))));

        let window = Mass::new(dec!(2000)).ppm_window(dec!(5));
        assert_eq!(window, Some(Mass::new(dec!(1999.99))..=Mass::new(dec!(2000.01))));
    }

    #[test]
    fn windows_beyond_decimal_range() {
        assert_eq!(Decimal::MAX.ppm_window(dec!(50)), None);
        assert_eq!(Mz::new(Decimal::MAX).ppm_window(Decimal::TWO), None);
        assert_eq!(dec!(1_000_000_000_000_000_000_000_000).ppm_window(Decimal::MAX), None);
        assert!(Decimal::MAX.ppm_window(Decimal::ZERO).is_some());
    }
}
