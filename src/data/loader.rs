use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Column mapping – which CSV headers carry the four semantic fields
// ---------------------------------------------------------------------------

/// Maps the four semantic fields to concrete CSV header names.
///
/// Header names are configuration, not contract: a differently-labelled
/// export of the same data loads fine with a custom mapping (JSON file).
/// The default matches the SpaceX launch-records dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub site: String,
    pub outcome: String,
    pub payload: String,
    pub booster: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        ColumnMapping {
            site: "Launch Site".to_string(),
            outcome: "class".to_string(),
            payload: "Payload Mass (kg)".to_string(),
            booster: "Booster Version Category".to_string(),
        }
    }
}

impl ColumnMapping {
    /// Read a mapping from a JSON file:
    /// `{ "site": "...", "outcome": "...", "payload": "...", "booster": "..." }`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading column mapping {}", path.display()))?;
        serde_json::from_str(&text).context("parsing column mapping JSON")
    }
}

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Why a dataset failed to load. Fatal at startup; shown in the status
/// bar when loading interactively.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
    #[error("CSV is missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}, column '{column}': '{value}' is not {expected}")]
    BadValue {
        row: usize,
        column: String,
        value: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file. Dispatch by extension.
///
/// Only `.csv` sources exist for this data; the dispatch keeps the
/// error message honest when someone points the app at something else.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path, &ColumnMapping::default())
            .with_context(|| format!("loading {}", path.display())),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Load a CSV of launch records using the given column mapping.
///
/// Required columns: site label, 0/1 outcome flag, numeric payload mass,
/// booster category. Anything else in the file is ignored.
pub fn load_csv(path: &Path, mapping: &ColumnMapping) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let col = |name: &str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let site_idx = col(&mapping.site)?;
    let outcome_idx = col(&mapping.outcome)?;
    let payload_idx = col(&mapping.payload)?;
    let booster_idx = col(&mapping.booster)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let outcome_raw = cell(outcome_idx);
        let flag = parse_flag(outcome_raw).ok_or_else(|| LoadError::BadValue {
            row: row_no,
            column: mapping.outcome.clone(),
            value: outcome_raw.to_string(),
            expected: "a 0/1 outcome flag",
        })?;

        let payload_raw = cell(payload_idx);
        let payload_kg: f64 = payload_raw.parse().map_err(|_| LoadError::BadValue {
            row: row_no,
            column: mapping.payload.clone(),
            value: payload_raw.to_string(),
            expected: "a payload mass in kg",
        })?;

        records.push(LaunchRecord {
            site: cell(site_idx).to_string(),
            outcome: Outcome::from_flag(flag),
            payload_kg,
            booster: cell(booster_idx).to_string(),
        });
    }

    Ok(LaunchDataset::from_records(records))
}

/// Coerce an outcome cell: plain integers ("0"/"1") or float exports
/// of them ("0.0"/"1.0"), the only shapes pandas writes for this flag.
fn parse_flag(s: &str) -> Option<i64> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.fract() == 0.0 {
            return Some(f as i64);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut f = std::fs::File::create(dir.path().join("launches.csv")).expect("create");
        f.write_all(contents.as_bytes()).expect("write");
        dir
    }

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,500.0,v1.0
2,KSC LC-39A,1,4000.0,FT
3,CCAFS LC-40,1,9000.0,B4
";

    #[test]
    fn loads_records_with_default_mapping() {
        let dir = write_csv(SAMPLE);
        let ds = load_csv(&dir.path().join("launches.csv"), &ColumnMapping::default())
            .expect("load");
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.min_payload(), 500.0);
        assert_eq!(ds.max_payload(), 9000.0);

        let first = ds.record(0);
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster, "v1.0");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_csv(Path::new("/nonexistent/launches.csv"), &ColumnMapping::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let dir = write_csv("Launch Site,class,Payload Mass (kg)\nCCAFS LC-40,1,100.0\n");
        let err = load_csv(&dir.path().join("launches.csv"), &ColumnMapping::default())
            .unwrap_err();
        match err {
            LoadError::MissingColumn(name) => {
                assert_eq!(name, "Booster Version Category");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn bad_payload_cell_is_a_bad_value_error() {
        let dir = write_csv(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1,heavy,FT\n",
        );
        let err = load_csv(&dir.path().join("launches.csv"), &ColumnMapping::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::BadValue { row: 0, .. }));
    }

    #[test]
    fn float_exported_outcome_flags_coerce() {
        let dir = write_csv(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1.0,100.0,FT\n",
        );
        let ds = load_csv(&dir.path().join("launches.csv"), &ColumnMapping::default())
            .expect("load");
        assert_eq!(ds.record(0).outcome, Outcome::Success);
    }

    #[test]
    fn custom_mapping_reads_relabelled_headers() {
        let dir = write_csv("pad,ok,mass,booster\nVAFB SLC-4E,1,750.5,FT\n");
        let mapping = ColumnMapping {
            site: "pad".to_string(),
            outcome: "ok".to_string(),
            payload: "mass".to_string(),
            booster: "booster".to_string(),
        };
        let ds = load_csv(&dir.path().join("launches.csv"), &mapping).expect("load");
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.record(0).site, "VAFB SLC-4E");
        assert_eq!(ds.record(0).payload_kg, 750.5);
    }

    #[test]
    fn mapping_round_trips_through_json() {
        let mapping = ColumnMapping::default();
        let json = serde_json::to_string(&mapping).expect("serialize");
        let back: ColumnMapping = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.site, mapping.site);
        assert_eq!(back.payload, mapping.payload);
    }
}
