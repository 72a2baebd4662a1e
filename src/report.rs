// Standard Library Imports
use std::{io::Write, str::FromStr};

// External Crate Imports
use miette::Diagnostic;
use polychem::{Mass, Mz};
use smithereens::TheoreticalSpectrum;
use thiserror::Error;

// Local Crate Imports
use crate::Candidate;

// Public API ==========================================================================================================

/// One candidate read back from a report: the peptide and its theoretical m/z values, in the order they were written
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ReportEntry {
    pub peptide: String,
    pub mzs: Vec<Mz>,
}

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum ReportError {
    #[diagnostic(help("every line after a peptide should hold a single decimal m/z value"))]
    #[error("line {line} of the report contains {value:?}, which is not a valid m/z value")]
    InvalidMz { line: usize, value: String },
}

/// Writes each peptide, then its theoretical m/z values (ascending, one per line), then a blank line
pub fn write_report<'a, 's: 'a>(
    mut writer: impl Write,
    spectra: impl IntoIterator<Item = &'a TheoreticalSpectrum<'s>>,
) -> std::io::Result<()> {
    for spectrum in spectra {
        writeln!(writer, "{spectrum}")?;
    }
    writer.flush()
}

pub fn read_report(text: &str) -> Result<Vec<ReportEntry>, ReportError> {
    let mut entries = Vec::new();
    let mut entry: Option<ReportEntry> = None;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            entries.extend(entry.take());
        } else if let Some(ReportEntry { mzs, .. }) = &mut entry {
            let mz = Mz::from_str(line).map_err(|_| ReportError::InvalidMz {
                line: index + 1,
                value: line.to_owned(),
            })?;
            mzs.push(mz);
        } else {
            entry = Some(ReportEntry {
                peptide: line.to_owned(),
                mzs: Vec::new(),
            });
        }
    }
    entries.extend(entry);

    Ok(entries)
}

pub fn write_parent_mass(mut writer: impl Write, mass: Mass) -> std::io::Result<()> {
    writeln!(writer, "Parent mass: {}\n", mass.value().normalize())
}

/// Writes each candidate, then its score, matched m/z, matched intensity, and hit fraction, then a blank line
pub fn write_scores<'a, 'p: 'a>(
    mut writer: impl Write,
    candidates: impl IntoIterator<Item = &'a Candidate<'p>>,
) -> std::io::Result<()> {
    for candidate in candidates {
        let score = candidate.score();
        writeln!(writer, "{}", candidate.peptide())?;
        writeln!(writer, "{}", score.score().normalize())?;
        writeln!(writer, "{}", score.matched_mz().normalize())?;
        writeln!(writer, "{}", score.matched_intensity().normalize())?;
        writeln!(writer, "{}", score.hit_fraction().normalize())?;
        writeln!(writer)?;
    }
    writer.flush()
}

// Module Tests ========================================================================================================
