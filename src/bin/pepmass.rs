use std::{fmt::Write, sync::LazyLock};

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use polychem::{ChemicalConstants, MassCalculator, ResidueMassTable, Result};
use rustyline::DefaultEditor;
use smithereens::{Fragmenter, SubPeptides};

static TABLE: LazyLock<ResidueMassTable> = LazyLock::new(ResidueMassTable::default);

fn main() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    while let Ok(peptide) = rl.readline("Peptide: ") {
        rl.add_history_entry(&peptide)?;
        match peptide_info(peptide.trim()) {
            Ok(info) => print!("{info}"),
            Err(diagnostic) => render_error(*diagnostic),
        }
    }
    Ok(())
}

fn peptide_info(peptide: &str) -> Result<String> {
    let calculator = MassCalculator::new(&TABLE, ChemicalConstants::default());
    let total_mass = calculator.total_mass(peptide)?;
    let residue_sum = calculator.residue_sum(peptide)?;
    let ions = Fragmenter::new(calculator).fragment(peptide)?;

    let mut buf = String::new();
    writeln!(buf, "Total Mass: {}", total_mass.value().normalize()).unwrap();
    writeln!(buf, "Residue Sum: {}", residue_sum.value().normalize()).unwrap();
    writeln!(buf, "Sub-peptides: {}", SubPeptides::new(peptide).count()).unwrap();
    writeln!(buf, "Theoretical Ions: {}", ions.len()).unwrap();
    writeln!(buf).unwrap();

    Ok(buf)
}

fn render_error(diagnostic: impl Into<Box<dyn Diagnostic + 'static>>) {
    let mut buf = String::new();
    let report = GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic.into().as_ref());
    if report.is_ok() {
        println!("{buf}");
    }
}
