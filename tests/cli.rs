use std::{error::Error, fs, process::Command};

use assert_cmd::prelude::*;
use predicates::prelude::*;

const PROTEINS: &str = "tests/data/wgaw.fasta";
const SPECTRUM: &str = "tests/data/ga.mgf";

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn score_glycine_alanine() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, SPECTRUM]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Parent mass: 146.14598\n\n"))
        .stdout(predicate::str::contains(
            "GA\n64.4436875\n148.1606\n0.9375\n0.666",
        ))
        .stdout(predicate::str::contains("WG\n").not());

    Ok(())
}

#[test]
fn precursor_flags_override_headers() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, SPECTRUM])
        .args(["--precursor-mz", "777.25439453", "--precursor-charge", "7+"]);
    cmd.assert()
        .success()
        .stdout("Parent mass: 5433.729826448\n\n");

    Ok(())
}

#[test]
fn custom_residue_tables() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, SPECTRUM])
        .args(["--residue-table", "tests/data/toy_masses.tsv", "-j", "2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GA\n64.4436875\n"));

    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, SPECTRUM])
        .args(["--residue-table", "tests/data/broken_masses.tsv"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("residue mass table"))
        .stderr(predicate::str::contains("tab-separated"));

    Ok(())
}

#[test]
fn write_theoretical_spectra() -> TestResult {
    let report = std::env::temp_dir().join(format!("pepfinder-report-{}.txt", std::process::id()));

    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, SPECTRUM]).arg("--report").arg(&report);
    cmd.assert().success();

    let written = fs::read_to_string(&report)?;
    fs::remove_file(&report)?;
    assert_eq!(
        written,
        "GA\n32.063629398\n58.059176466\n73.071496466\n74.081756466\n90.101352932\n116.0969\n\n"
    );

    Ok(())
}

#[test]
fn plot_spectrum() -> TestResult {
    let plot = std::env::temp_dir().join(format!("pepfinder-plot-{}.svg", std::process::id()));

    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, SPECTRUM]).arg("--plot").arg(&plot);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GA\n64.4436875\n"));

    let svg = fs::read_to_string(&plot)?;
    fs::remove_file(&plot)?;
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("ga.mgf"));

    Ok(())
}

#[test]
fn missing_files() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args(["not_real.fasta", SPECTRUM]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read proteins"));

    Ok(())
}

#[test]
fn unknown_residues() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args(["tests/data/unknown_residue.fasta", SPECTRUM]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'J'"));

    Ok(())
}

#[test]
fn malformed_spectra() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, "tests/data/empty.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse the spectrum"));

    Ok(())
}

#[test]
fn oversized_intensities() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, "tests/data/oversized.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("too large"));

    Ok(())
}

#[test]
fn bare_decimal_points() -> TestResult {
    let mut cmd = Command::cargo_bin("pepfinder")?;
    cmd.args([PROTEINS, "tests/data/bare_points.txt"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Parent mass: 5433.729826448\n\n"));

    Ok(())
}
