// Standard Library Imports
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

// External Crate Imports
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use pepfinder::{Protein, Search, plot, report, select_precursor};
use polychem::{Charge, ChemicalConstants, MassCalculator, Mz, ResidueMassTable};
use rust_decimal::Decimal;
use sifter::{MatchScorer, ObservedSpectrum, PrecursorFilter};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Scores every sub-peptide of a set of proteins against an observed fragmentation spectrum
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// A FASTA file of protein sequences
    proteins: PathBuf,
    /// A spectrum file with one "<m/z> <intensity>" peak per line (MGF PEPMASS and CHARGE headers are also read)
    spectrum: PathBuf,
    /// A tab-separated residue mass table, with codes in the first column and average masses in the fifth
    #[arg(short, long)]
    residue_table: Option<PathBuf>,
    /// The precursor m/z (overrides the spectrum's PEPMASS)
    #[arg(long)]
    precursor_mz: Option<Decimal>,
    /// The precursor charge (overrides the spectrum's CHARGE)
    #[arg(long)]
    precursor_charge: Option<Charge>,
    /// The relative precursor mass tolerance
    #[arg(long, default_value = "0.00005")]
    tolerance: Decimal,
    /// The factor the precursor mass tolerance is widened by
    #[arg(long, default_value = "7")]
    widening: Decimal,
    /// The fragment matching tolerance, in parts per million
    #[arg(long, default_value = "50")]
    ppm: Decimal,
    /// The factor the fragment matching tolerance is widened by
    #[arg(long, default_value = "2")]
    window_scale: Decimal,
    /// Write the theoretical spectrum of every candidate to this file
    #[arg(short = 'o', long)]
    report: Option<PathBuf>,
    /// The number of threads to score candidates with (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,
    /// Draw the observed spectrum as an SVG bar chart to this file once scoring is finished
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::layer().compact().with_writer(io::stderr).with_filter(
                EnvFilter::builder()
                    .with_default_directive(tracing::Level::INFO.into())
                    .from_env_lossy(),
            ),
        )
        .init();

    let args = Args::parse();
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .into_diagnostic()?;
    }

    let table = match &args.residue_table {
        Some(path) => ResidueMassTable::new(path.display().to_string(), read_file(path, "residue masses")?)?,
        None => ResidueMassTable::default(),
    };
    let constants = ChemicalConstants::default();
    let calculator = MassCalculator::new(&table, constants);

    let proteins = Protein::parse_fasta(&read_file(&args.proteins, "proteins")?);
    let spectrum = ObservedSpectrum::parse(read_file(&args.spectrum, "spectrum")?)
        .wrap_err_with(|| format!("failed to parse the spectrum in {}", args.spectrum.display()))?;
    info!(proteins = proteins.len(), peaks = spectrum.len(), "read inputs");

    let precursor = select_precursor(args.precursor_mz.map(Mz::new), args.precursor_charge, &spectrum);
    let filter = PrecursorFilter::from_precursor(&precursor, &constants)?
        .with_tolerance(args.tolerance)
        .with_widening(args.widening);
    let scorer = MatchScorer::new(args.ppm, args.window_scale);
    info!(%precursor, "searching");

    let mut stdout = BufWriter::new(io::stdout().lock());
    report::write_parent_mass(&mut stdout, filter.target()).into_diagnostic()?;

    let search = Search::new(calculator, filter, scorer);
    let candidates = search.run(&proteins, &spectrum)?;
    report::write_scores(&mut stdout, &candidates).into_diagnostic()?;

    if let Some(path) = &args.report {
        let file = File::create(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to create the report {}", path.display()))?;
        report::write_report(
            BufWriter::new(file),
            candidates.iter().map(|candidate| candidate.theoretical()),
        )
        .into_diagnostic()?;
        info!(candidates = candidates.len(), report = %path.display(), "wrote report");
    }

    stdout.flush().into_diagnostic()?;

    if let Some(path) = &args.plot {
        let title = args.spectrum.display().to_string();
        plot::draw_spectrum(path, &title, spectrum.peaks())?;
        info!(plot = %path.display(), "drew observed spectrum");
    }
    Ok(())
}

fn read_file(path: &Path, contents: &str) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {contents} from {}", path.display()))
}
