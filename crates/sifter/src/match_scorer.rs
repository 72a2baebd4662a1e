// External Crate Imports
use polychem::Mz;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Local Crate Imports
use crate::{MatchScore, MatchScorer, Peak, PpmWindow, Result, SifterError};

// Constants ===========================================================================================================

const DEFAULT_PPM: Decimal = dec!(50);
const DEFAULT_WINDOW_SCALE: Decimal = dec!(2);

// Public API ==========================================================================================================

impl MatchScorer {
    #[must_use]
    pub const fn new(ppm: Decimal, window_scale: Decimal) -> Self {
        Self { ppm, window_scale }
    }

    #[must_use]
    pub const fn ppm(&self) -> Decimal {
        self.ppm
    }

    #[must_use]
    pub const fn window_scale(&self) -> Decimal {
        self.window_scale
    }

    /// Matches every observed peak against a candidate's theoretical m/z values, which must be in ascending order
    ///
    /// A peak is hit by the first (lowest) theoretical value inside its window of `± ppm × window_scale`, and each
    /// peak is hit at most once. Intensities should already be normalized.
    pub fn score(&self, theoretical: &[Mz], observed: &[Peak]) -> Result<MatchScore> {
        debug_assert!(theoretical.is_sorted());
        if observed.is_empty() {
            return Err(SifterError::EmptyPeakSet);
        }

        let ppm = self
            .ppm
            .checked_mul(self.window_scale)
            .ok_or_else(|| SifterError::overflow("fragment matching tolerance"))?;
        let mut score = MatchScore::default();
        for &Peak { mz, intensity } in observed {
            let window = mz
                .ppm_window(ppm)
                .ok_or_else(|| SifterError::overflow("fragment matching window"))?;
            let first = theoretical.partition_point(|candidate| candidate < window.start());
            if theoretical
                .get(first)
                .is_some_and(|candidate| window.contains(candidate))
            {
                score.add_hit(mz.value(), intensity)?;
            }
        }
        score.hit_fraction = Decimal::from(score.hits) / Decimal::from(observed.len());

        Ok(score)
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(DEFAULT_PPM, DEFAULT_WINDOW_SCALE)
    }
}

impl MatchScore {
    /// The sum of every matched peak's m/z multiplied by its intensity
    #[must_use]
    pub const fn score(&self) -> Decimal {
        self.score
    }

    #[must_use]
    pub const fn matched_mz(&self) -> Decimal {
        self.matched_mz
    }

    #[must_use]
    pub const fn matched_intensity(&self) -> Decimal {
        self.matched_intensity
    }

    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// The fraction of observed peaks that were matched
    #[must_use]
    pub const fn hit_fraction(&self) -> Decimal {
        self.hit_fraction
    }
}

// Private Helper Methods ==============================================================================================

impl MatchScore {
    fn add_hit(&mut self, mz: Decimal, intensity: Decimal) -> Result<()> {
        let overflow = || SifterError::overflow("match score");
        self.score = mz
            .checked_mul(intensity)
            .and_then(|product| self.score.checked_add(product))
            .ok_or_else(overflow)?;
        self.matched_mz = self.matched_mz.checked_add(mz).ok_or_else(overflow)?;
        self.matched_intensity = self
            .matched_intensity
            .checked_add(intensity)
            .ok_or_else(overflow)?;
        self.hits += 1;

        Ok(())
    }
}

// Module Tests ========================================================================================================
