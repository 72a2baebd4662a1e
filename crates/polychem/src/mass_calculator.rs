// Local Crate Imports
use crate::{ChemicalConstants, Mass, MassCalculator, PolychemError, ResidueMassTable, Result};

// Public API ==========================================================================================================

impl<'t> MassCalculator<'t> {
    #[must_use]
    pub const fn new(table: &'t ResidueMassTable, constants: ChemicalConstants) -> Self {
        Self { table, constants }
    }

    #[must_use]
    pub const fn table(&self) -> &'t ResidueMassTable {
        self.table
    }

    #[must_use]
    pub const fn constants(&self) -> &ChemicalConstants {
        &self.constants
    }

    /// The sum of every residue mass, plus one water for the free termini
    pub fn total_mass(&self, peptide: &str) -> Result<Mass> {
        Ok(self.residue_sum(peptide)? + self.constants.water)
    }

    /// The sum of every residue mass, without any terminal groups
    pub fn residue_sum(&self, peptide: &str) -> Result<Mass> {
        peptide
            .chars()
            .map(|residue| {
                self.table
                    .get(residue)
                    .ok_or_else(|| Box::new(PolychemError::unknown_residue(residue, peptide)))
            })
            .sum()
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use rust_decimal_macros::dec;

    use super::*;

    static TABLE: LazyLock<ResidueMassTable> = LazyLock::new(ResidueMassTable::default);

    static TOY_TABLE: LazyLock<ResidueMassTable> = LazyLock::new(|| {
        [('A', 1), ('C', 2), ('D', 3), ('E', 4)]
            .into_iter()
            .map(|(code, mass)| (code, Mass::new(mass.into())))
            .collect()
    });

    fn toy_calculator() -> MassCalculator<'static> {
        let constants = ChemicalConstants {
            water: Mass::ZERO,
            ..ChemicalConstants::default()
        };
        MassCalculator::new(&TOY_TABLE, constants)
    }

    #[test]
    fn toy_total_masses() {
        let calculator = toy_calculator();
        assert_eq!(calculator.total_mass("ACD"), Ok(Mass::new(dec!(6))));
        assert_eq!(calculator.total_mass("DE"), Ok(Mass::new(dec!(7))));
        assert_eq!(calculator.total_mass("E"), Ok(Mass::new(dec!(4))));
        assert_eq!(calculator.total_mass(""), Ok(Mass::ZERO));
    }

    #[test]
    fn total_mass_adds_exactly_one_water() {
        let calculator = MassCalculator::new(&TABLE, ChemicalConstants::default());
        for peptide in ["G", "GA", "PEPTIDE", "WYWYWYWYWYWYWYWYWYWY", "MKWVTFISLLLLFSSAYS"] {
            let total = calculator.total_mass(peptide).unwrap();
            let residues = calculator.residue_sum(peptide).unwrap();
            assert_eq!(total, residues + calculator.constants().water);
            assert_eq!(total - residues, Mass::new(dec!(18.01528)));
        }
    }

    #[test]
    fn average_masses() {
        let calculator = MassCalculator::new(&TABLE, ChemicalConstants::default());
        assert_eq!(calculator.residue_sum("GA"), Ok(Mass::new(dec!(128.1307))));
        assert_eq!(calculator.total_mass("GA"), Ok(Mass::new(dec!(146.14598))));
        assert_eq!(calculator.total_mass("ga"), calculator.total_mass("GA"));
        assert_eq!(
            calculator.total_mass("PEPTIDE"),
            Ok(Mass::new(dec!(799.83278)))
        );
    }

    #[test]
    fn unknown_residues() {
        let calculator = MassCalculator::new(&TABLE, ChemicalConstants::default());
        let error = calculator.total_mass("PEPXTIDE").unwrap_err();
        assert_eq!(
            *error,
            PolychemError::UnknownResidue {
                residue: 'X',
                peptide: "PEPXTIDE".to_owned()
            }
        );
        assert_eq!(
            error.to_string(),
            r#"the residue 'X' in "PEPXTIDE" could not be found in the supplied residue mass table"#
        );
        assert!(calculator.residue_sum("AC\n").is_err());
    }
}
