use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fermat_core::{to_canonical_json_bytes, ErrorInfo, FermatError, Triple};
use serde::Serialize;

use crate::profile::{error_profile, ProfilePoint};
use crate::survey::SurveyOutcome;

fn io_error(code: &str, path: &Path, err: impl ToString) -> FermatError {
    FermatError::Io(
        ErrorInfo::new(code, "failed to write survey artefact")
            .with_context("path", path.display())
            .with_hint(err.to_string()),
    )
}

fn wrap_csv(code: &str, err: csv::Error) -> FermatError {
    FermatError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), FermatError> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|err| wrap_csv("csv-write-row", err))?;
    }
    writer
        .flush()
        .map_err(|err| wrap_csv("csv-flush", err.into()))?;
    Ok(())
}

/// Writes triples as CSV with a header row.
pub fn write_triples_csv<W: Write>(writer: W, triples: &[Triple]) -> Result<(), FermatError> {
    write_csv(writer, triples)
}

/// Writes an error profile as CSV with a header row.
pub fn write_profile_csv<W: Write>(writer: W, points: &[ProfilePoint]) -> Result<(), FermatError> {
    write_csv(writer, points)
}

/// Writes generic serializable rows as CSV with a header row.
pub fn write_rows_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), FermatError> {
    write_csv(writer, rows)
}

/// Persists `survey_report.json` and per-exponent `n_<k>/triples.csv` and
/// `n_<k>/profile.csv` under `out`. Returns the written paths.
pub fn persist_survey(out: &Path, outcome: &SurveyOutcome) -> Result<Vec<PathBuf>, FermatError> {
    fs::create_dir_all(out).map_err(|err| io_error("survey-out-dir", out, err))?;
    let mut written = Vec::new();

    let report_path = out.join("survey_report.json");
    let bytes = to_canonical_json_bytes(&outcome.report)?;
    fs::write(&report_path, bytes).map_err(|err| io_error("survey-report-write", &report_path, err))?;
    written.push(report_path);

    let profile_limit = outcome.report.plan.top_k.unwrap_or(usize::MAX);
    for set in &outcome.sets {
        let dir = out.join(format!("n_{}", set.exponent()));
        fs::create_dir_all(&dir).map_err(|err| io_error("survey-exponent-dir", &dir, err))?;

        let triples_path = dir.join("triples.csv");
        let file = fs::File::create(&triples_path)
            .map_err(|err| io_error("triples-create", &triples_path, err))?;
        write_triples_csv(file, set.as_slice())?;
        written.push(triples_path);

        let profile_path = dir.join("profile.csv");
        let file = fs::File::create(&profile_path)
            .map_err(|err| io_error("profile-create", &profile_path, err))?;
        write_profile_csv(file, &error_profile(set, profile_limit))?;
        written.push(profile_path);
    }
    log::debug!("persisted {} survey artefacts under {}", written.len(), out.display());
    Ok(written)
}
