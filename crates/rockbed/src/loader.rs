//! Simulation lookup table loading
//!
//! The table is a CSV file with one header row. Headers are matched by name
//! after collapsing internal whitespace, so a header written as
//! `"Predicted savings (%)\n(lower)"` and one written on a single line both
//! resolve. Rows that cannot identify a configuration are dropped here so the
//! engine only ever sees complete records.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use rockbed_core::{Dataset, Dimension, Record};

const KWH_LOWER: &str = "Predicted annual energy savings (kWh/yr) (lower)";
const KWH_UPPER: &str = "Predicted annual energy savings (kWh/yr) (upper)";
const BTU_LOWER: &str = "Predicted annual energy savings (Btu/yr) (lower)";
const BTU_UPPER: &str = "Predicted annual energy savings (Btu/yr) (upper)";
const PERCENT_LOWER: &str = "Predicted savings (%) (lower)";
const PERCENT_UPPER: &str = "Predicted savings (%) (upper)";

#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Csv(String),
    MissingColumn(&'static str),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {msg}"),
            LoadError::Csv(msg) => write!(f, "CSV error: {msg}"),
            LoadError::MissingColumn(name) => write!(f, "missing column {name:?}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e.to_string())
    }
}

fn normalize_header(header: &str) -> String {
    header
        .replace('"', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Column positions resolved from the header row
struct Columns {
    dimensions: [usize; Dimension::COUNT],
    numeric: [Option<usize>; 6],
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |name: &str| names.iter().position(|h| h == name);

        let mut dimensions = [0; Dimension::COUNT];
        for dim in Dimension::ALL {
            dimensions[dim.index()] =
                find(dim.header()).ok_or(LoadError::MissingColumn(dim.header()))?;
        }

        let numeric = [
            KWH_LOWER,
            KWH_UPPER,
            BTU_LOWER,
            BTU_UPPER,
            PERCENT_LOWER,
            PERCENT_UPPER,
        ]
        .map(|name| {
            let position = find(name);
            if position.is_none() {
                tracing::warn!(column = name, "numeric column missing, values read as zero");
            }
            position
        });

        Ok(Self {
            dimensions,
            numeric,
        })
    }

    /// Build a record from a row, or `None` if the row must be dropped
    fn record(&self, row: &StringRecord, width: usize) -> Option<Record> {
        if row.len() < width {
            return None;
        }

        let cell = |position: usize| row.get(position).unwrap_or("").replace('"', "");

        let mut record = Record::default();
        for dim in Dimension::ALL {
            *record.value_mut(dim) = cell(self.dimensions[dim.index()]).trim().to_string();
        }
        if !record.has_all_dimensions() {
            return None;
        }

        let [kwh_lower, kwh_upper, btu_lower, btu_upper, pct_lower, pct_upper] = self
            .numeric
            .map(|position| position.map(cell).unwrap_or_default());

        Some(
            record
                .with_energy_kwh(&kwh_lower, &kwh_upper)
                .with_energy_btu(&btu_lower, &btu_upper)
                .with_savings_percent(&pct_lower, &pct_upper),
        )
    }
}

/// Parse the lookup table from CSV text
///
/// Blank lines and lines starting with `#` are skipped. Rows shorter than the
/// header, or with any dimension empty, are dropped without failing the load.
pub fn parse_csv(text: &str) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        match columns.record(&row, headers.len()) {
            Some(record) => records.push(record),
            None => {
                dropped += 1;
                let line = row.position().map(csv::Position::line);
                tracing::debug!(?line, "dropping incomplete row");
            }
        }
    }

    tracing::info!(records = records.len(), dropped, "lookup table parsed");
    Ok(Dataset::new(records))
}

/// Read and parse the lookup table at `path`
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let text = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("Failed to read {}: {e}", path.display())))?;
    parse_csv(&text)
}
